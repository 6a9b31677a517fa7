#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod dom;
mod events;
mod frame;
mod host;
mod input;
mod mount_slot;
mod render;

use host::SceneHost;
use mount_slot::{MountSlot, Teardown};

thread_local! {
    // At most one live or mounting overlay per page.
    static HOST: RefCell<MountSlot<SceneHost>> = const { RefCell::new(MountSlot::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web starting");
    mount();
    Ok(())
}

/// Mount the background overlay if it is not already mounted.
#[wasm_bindgen]
pub fn mount() {
    let Some(ticket) = HOST.with(|h| h.borrow_mut().begin()) else {
        log::warn!("[host] already mounted; ignoring mount()");
        return;
    };
    spawn_local(async move {
        match SceneHost::mount().await {
            Ok(host) => {
                // Dropped outside the borrow if unmount() ran meanwhile
                let stale = HOST.with(|h| h.borrow_mut().finish(ticket, host));
                if let Some(host) = stale {
                    log::info!("[host] unmount() arrived during mount; discarding");
                    drop(host);
                }
            }
            Err(e) => {
                HOST.with(|h| h.borrow_mut().abort(ticket));
                log::error!("init error: {:?}", e);
            }
        }
    });
}

/// Tear the overlay down: stop the frame loop, drop listeners, remove canvas.
///
/// Called while a mount is still in flight, the mount is discarded as soon
/// as it completes.
#[wasm_bindgen]
pub fn unmount() {
    match HOST.with(|h| h.borrow_mut().take()) {
        Teardown::Live(host) => host.unmount(),
        Teardown::Cancelled => log::info!("[host] cancelling in-flight mount"),
        Teardown::Idle => log::warn!("[host] unmount() with nothing mounted"),
    }
}
