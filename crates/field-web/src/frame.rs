use crate::render::GpuState;
use field_core::{
    spin_matrix, Camera, FrameSnapshot, ParticleField, Phase, PointerTracker, SceneUniforms,
    ScrollTracker,
};
use gloo_render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct FrameContext {
    pub field: ParticleField,
    pub scroll: Rc<RefCell<ScrollTracker>>,
    pub pointer: Rc<RefCell<PointerTracker>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<GpuState>,
    pub started: Instant,
    pub last_phase: Option<Phase>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let time = self.started.elapsed().as_secs_f64();
        let width = self.canvas.width();
        let height = self.canvas.height();
        let camera = Camera::for_surface(width, height);

        // One read of the trackers per frame
        let snapshot = FrameSnapshot::capture(
            self.scroll.borrow().progress(),
            self.pointer.borrow().position(),
            camera.world_extent(),
            time,
        );

        let phase = self.field.phase(&snapshot);
        if self.last_phase != Some(phase) {
            log::info!(
                "[frame] phase {:?} -> {:?} at progress {:.3}",
                self.last_phase,
                phase,
                snapshot.progress
            );
            self.last_phase = Some(phase);
        }

        self.field.step(&snapshot);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(width, height);
            let uniforms = SceneUniforms::with_defaults(&camera, spin_matrix(snapshot.time));
            match g.render(&self.field, &uniforms) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Handle to a running requestAnimationFrame loop.
///
/// The slot holds the one pending frame. Each frame schedules the next one
/// into the same slot; emptying it cancels the pending callback and drops the
/// frame context.
pub struct FrameLoop {
    pending: FrameSlot,
}

impl FrameLoop {
    pub fn stop(&self) {
        self.pending.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let pending: FrameSlot = Rc::new(RefCell::new(None));
    schedule(frame_ctx, pending.clone());
    FrameLoop { pending }
}

fn schedule(frame_ctx: Rc<RefCell<FrameContext>>, slot: FrameSlot) {
    let next_slot = slot.clone();
    let handle = request_animation_frame(move |_timestamp| {
        frame_ctx.borrow_mut().frame();
        schedule(frame_ctx, next_slot);
    });
    *slot.borrow_mut() = Some(handle);
}
