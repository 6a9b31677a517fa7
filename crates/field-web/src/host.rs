use crate::dom;
use crate::events::{self, InputWiring};
use crate::frame::{self, FrameContext, FrameLoop};
use crate::render::GpuState;
use field_core::{FieldOptions, ParticleField, PointerTracker, ScrollTracker};
use gloo_events::EventListener;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The mounted background: overlay canvas, input listeners and frame loop.
///
/// Dropping the host (or calling [`SceneHost::unmount`]) stops the loop,
/// removes every listener and detaches the canvas.
pub struct SceneHost {
    canvas: web::HtmlCanvasElement,
    frame_loop: FrameLoop,
    listeners: Vec<EventListener>,
}

impl SceneHost {
    pub async fn mount() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let options = FieldOptions::default();
        let field = ParticleField::new(options.clone(), &mut rand::thread_rng())?;

        let canvas = dom::create_overlay_canvas(&document)?;
        dom::sync_canvas_backing_size(&canvas);

        let scroll = Rc::new(RefCell::new(ScrollTracker::new()));
        let pointer = Rc::new(RefCell::new(PointerTracker::new()));
        events::refresh_scroll(&window, &scroll);

        let listeners = events::wire_input_handlers(&InputWiring {
            window: window.clone(),
            canvas: canvas.clone(),
            scroll: scroll.clone(),
            pointer: pointer.clone(),
        });

        // Without WebGPU the field still animates; only drawing is skipped.
        let gpu = match GpuState::new(&canvas, options.particle_count).await {
            Ok(g) => Some(g),
            Err(e) => {
                log::error!("WebGPU init error: {:?}", e);
                None
            }
        };

        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            field,
            scroll,
            pointer,
            canvas: canvas.clone(),
            gpu,
            started: Instant::now(),
            last_phase: None,
        }));
        let frame_loop = frame::start_loop(frame_ctx);
        log::info!(
            "[host] mounted {} particles on #{}",
            options.particle_count,
            dom::CANVAS_ID
        );

        Ok(Self {
            canvas,
            frame_loop,
            listeners,
        })
    }

    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for SceneHost {
    fn drop(&mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
        self.canvas.remove();
        log::info!("[host] unmounted");
    }
}
