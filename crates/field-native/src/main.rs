use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use winit::{
    dpi::PhysicalSize,
    event::*,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use field_core::{
    spin_matrix, Camera, FieldOptions, FrameSnapshot, ParticleField, Phase, PointRenderer,
    PointerTracker, PrimaryTouch, SceneUniforms, ScrollTracker,
};

// The preview fakes a page this many viewports tall so the wheel can walk
// through all three formations.
const VIRTUAL_PAGE_SCREENS: f64 = 3.0;
const WHEEL_LINE_PX: f64 = 40.0;

struct GpuState {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    points: PointRenderer,
}

impl GpuState {
    async fn new(window: Arc<Window>, capacity: usize) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window.clone())?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let points = PointRenderer::new(&device, format, capacity);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            points,
        })
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn render(
        &mut self,
        field: &ParticleField,
        uniforms: &SceneUniforms,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.points.draw(
            &self.device,
            &self.queue,
            &view,
            field.positions(),
            field.colors(),
            uniforms,
        );
        frame.present();
        Ok(())
    }
}

/// Field plus the trackers a browser page would feed.
struct Preview {
    field: ParticleField,
    scroll: ScrollTracker,
    pointer: PointerTracker,
    touch: PrimaryTouch,
    scroll_offset: f64,
    started: Instant,
    last_phase: Option<Phase>,
}

impl Preview {
    fn new(field: ParticleField) -> Self {
        Self {
            field,
            scroll: ScrollTracker::new(),
            pointer: PointerTracker::new(),
            touch: PrimaryTouch::new(),
            scroll_offset: 0.0,
            started: Instant::now(),
            last_phase: None,
        }
    }

    fn on_wheel(&mut self, delta: MouseScrollDelta, viewport: PhysicalSize<u32>) {
        let dy = match delta {
            MouseScrollDelta::LineDelta(_, y) => y as f64 * WHEEL_LINE_PX,
            MouseScrollDelta::PixelDelta(p) => p.y,
        };
        let viewport_h = viewport.height as f64;
        let document_h = viewport_h * VIRTUAL_PAGE_SCREENS;
        // Positive wheel delta scrolls toward the top of the page
        let max_offset = (document_h - viewport_h).max(0.0);
        self.scroll_offset = (self.scroll_offset - dy).clamp(0.0, max_offset);
        self.scroll.update(self.scroll_offset, document_h, viewport_h);
    }

    // winit reports each finger separately; only the first one down counts.
    fn on_touch(&mut self, touch: Touch, viewport_w: f64, viewport_h: f64) {
        let contact = [(touch.location.x, touch.location.y)];
        match touch.phase {
            TouchPhase::Started => {
                if self.touch.start(touch.id) {
                    self.pointer
                        .on_touch_start(&contact, viewport_w, viewport_h, now_ms());
                }
            }
            TouchPhase::Moved => {
                if self.touch.is_primary(touch.id) {
                    self.pointer.on_touch_move(&contact, viewport_w, viewport_h);
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => self.touch.end(touch.id),
        }
    }

    fn frame(&mut self, gpu: &mut GpuState) -> Result<(), wgpu::SurfaceError> {
        let size = gpu.window.inner_size();
        let camera = Camera::for_surface(size.width, size.height);
        let snapshot = FrameSnapshot::capture(
            self.scroll.progress(),
            self.pointer.position(),
            camera.world_extent(),
            self.started.elapsed().as_secs_f64(),
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
        let uniforms = SceneUniforms::with_defaults(&camera, spin_matrix(snapshot.time));
        gpu.render(&self.field, &uniforms)
    }
}

fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let options = FieldOptions::default();
    let field = ParticleField::new(options.clone(), &mut rand::thread_rng())?;

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Particle field (native preview)")
            .build(&event_loop)?,
    );

    let mut gpu = pollster::block_on(GpuState::new(window.clone(), options.particle_count))?;
    let mut preview = Preview::new(field);
    let mut cursor = (0.0_f64, 0.0_f64);
    log::info!(
        "[host] preview running with {} particles; scroll with the mouse wheel",
        options.particle_count
    );

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => {
            let size = gpu.window.inner_size();
            let (w, h) = (size.width as f64, size.height as f64);
            match event {
                WindowEvent::Resized(size) => gpu.resize(size),
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::MouseWheel { delta, .. } => preview.on_wheel(delta, size),
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = (position.x, position.y);
                    preview.pointer.on_move(position.x, position.y, w, h);
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => preview.pointer.on_click(cursor.0, cursor.1, w, h, now_ms()),
                WindowEvent::Touch(touch) => preview.on_touch(touch, w, h),
                _ => {}
            }
        }
        Event::AboutToWait => match preview.frame(&mut gpu) {
            Ok(_) => gpu.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = gpu.window.inner_size();
                gpu.resize(size)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
            Err(e) => log::warn!("render error: {:?}", e),
        },
        _ => {}
    })?;
    Ok(())
}
