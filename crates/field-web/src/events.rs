use crate::dom;
use crate::input;
use field_core::{PointerTracker, ScrollTracker};
use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub scroll: Rc<RefCell<ScrollTracker>>,
    pub pointer: Rc<RefCell<PointerTracker>>,
}

/// Register every window-level listener the overlay needs.
///
/// Handlers only write tracker state; the frame loop reads it. Dropping the
/// returned listeners unregisters them.
pub fn wire_input_handlers(w: &InputWiring) -> Vec<EventListener> {
    let listeners = vec![
        wire_scroll(w),
        wire_mousemove(w),
        wire_touchmove(w),
        wire_click(w),
        wire_touchstart(w),
        wire_resize(w),
    ];
    for l in &listeners {
        log::debug!("[host] listening for {}", l.event_type());
    }
    listeners
}

/// Refresh scroll progress from the live page.
pub fn refresh_scroll(window: &web::Window, scroll: &RefCell<ScrollTracker>) {
    let m = dom::page_metrics(window);
    scroll
        .borrow_mut()
        .update(m.scroll_y, m.document_height, m.viewport_height);
}

fn wire_scroll(w: &InputWiring) -> EventListener {
    let window = w.window.clone();
    let scroll = w.scroll.clone();
    EventListener::new_with_options(
        &w.window,
        "scroll",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        },
        move |_ev| refresh_scroll(&window, &scroll),
    )
}

fn wire_mousemove(w: &InputWiring) -> EventListener {
    let window = w.window.clone();
    let pointer = w.pointer.clone();
    EventListener::new(&w.window, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (cx, cy) = input::mouse_client(ev);
        let m = dom::page_metrics(&window);
        pointer
            .borrow_mut()
            .on_move(cx, cy, m.viewport_width, m.viewport_height);
    })
}

fn wire_touchmove(w: &InputWiring) -> EventListener {
    let window = w.window.clone();
    let pointer = w.pointer.clone();
    EventListener::new(&w.window, "touchmove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let touches = input::touch_points(ev);
        let m = dom::page_metrics(&window);
        pointer
            .borrow_mut()
            .on_touch_move(&touches, m.viewport_width, m.viewport_height);
    })
}

fn wire_click(w: &InputWiring) -> EventListener {
    let window = w.window.clone();
    let pointer = w.pointer.clone();
    EventListener::new(&w.window, "click", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (cx, cy) = input::mouse_client(ev);
        let m = dom::page_metrics(&window);
        let mut p = pointer.borrow_mut();
        p.on_click(cx, cy, m.viewport_width, m.viewport_height, js_sys::Date::now());
        if let Some(click) = p.last_click() {
            log::debug!(
                "[click] ({:.2},{:.2}) at {}",
                click.position.x,
                click.position.y,
                click.timestamp_ms
            );
        }
    })
}

fn wire_touchstart(w: &InputWiring) -> EventListener {
    let window = w.window.clone();
    let pointer = w.pointer.clone();
    EventListener::new(&w.window, "touchstart", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let touches = input::touch_points(ev);
        let m = dom::page_metrics(&window);
        pointer.borrow_mut().on_touch_start(
            &touches,
            m.viewport_width,
            m.viewport_height,
            js_sys::Date::now(),
        );
    })
}

// Document height can change with the viewport, so scroll is refreshed too.
fn wire_resize(w: &InputWiring) -> EventListener {
    let window = w.window.clone();
    let canvas = w.canvas.clone();
    let scroll = w.scroll.clone();
    EventListener::new(&w.window, "resize", move |_ev| {
        dom::sync_canvas_backing_size(&canvas);
        refresh_scroll(&window, &scroll);
    })
}
