use std::{num::NonZeroUsize, sync::Arc, time::Instant};

use dpi::LogicalSize;
use sketch_2d::{Affine2d, BoxSize, Color, CustomPainter, VelloPaintContext, DEFAULT_BACKGROUND};
use sketch_core::{foundation::PaintContext, try_init_tracing};
use typed_builder::TypedBuilder;
use vello::{
    util::{RenderContext, RenderSurface},
    AaSupport, RenderParams, Renderer, RendererOptions, Scene,
};
use wgpu::PresentMode;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
};

pub use winit::window::{Window, WindowAttributes};

use crate::{FrameStatSample, FrameStats, LaunchError};

pub enum WindowState<'a> {
    Uninitialized(WindowAttributes),
    Rendering {
        window: Arc<Window>,
        surface: RenderSurface<'a>,
    },
    Suspended {
        window: Arc<Window>,
    },
}

struct MainState<'a, P: CustomPainter> {
    window: WindowState<'a>,

    render_cx: RenderContext,
    renderer: Option<Renderer>,
    scene: Scene,
    painter: P,
    background: Color,

    frame_stats: FrameStats,
    print_stats: bool,

    exit_error: Option<LaunchError>,
}

/// Opens one window and hands every redraw to `painter`.
///
/// The window itself is only created once the event loop reports it has resumed, so that
/// creation and every paint happen on the event loop thread.
#[derive(TypedBuilder)]
pub struct AppLauncher<P: CustomPainter> {
    painter: P,
    window: WindowAttributes,
    #[builder(default = DEFAULT_BACKGROUND)]
    background: Color,
    #[builder(default)]
    print_stats: bool,
}

impl<P: CustomPainter> AppLauncher<P> {
    /// Runs the event loop until the window is closed.
    pub fn run(self) -> Result<(), LaunchError> {
        // wgpu and winit log through `log`, our own crates through `tracing`.
        let _ = pretty_env_logger::try_init();
        // If a subscriber has already been set, we get an error which we swallow.
        let _ = try_init_tracing();

        let event_loop = EventLoop::new()?;
        let mut main_state = MainState {
            window: WindowState::Uninitialized(self.window),
            render_cx: RenderContext::new(),
            renderer: None,
            scene: Scene::new(),
            painter: self.painter,
            background: self.background,
            frame_stats: FrameStats::new(),
            print_stats: self.print_stats,
            exit_error: None,
        };

        event_loop.run_app(&mut main_state)?;
        match main_state.exit_error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl<P: CustomPainter> ApplicationHandler for MainState<'_, P> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(error) = self.resume_window(event_loop) {
            self.fail(event_loop, error);
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        match std::mem::replace(
            &mut self.window,
            WindowState::Uninitialized(WindowAttributes::default()),
        ) {
            WindowState::Rendering { window, surface } => {
                drop(surface);
                self.window = WindowState::Suspended { window };
            }
            state => {
                // We have received a redundant suspended event. That's allowed by winit
                self.window = state;
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let WindowState::Rendering { window, .. } = &self.window else {
            tracing::warn!(
                ?event,
                "Got window event whilst suspended or before window created"
            );
            return;
        };

        use WindowEvent::*;
        match event {
            CloseRequested => {
                tracing::debug!("Close requested, exiting");
                event_loop.exit()
            }
            RedrawRequested => {
                if let Err(error) = self.render() {
                    self.fail(event_loop, error.into());
                }
            }
            Resized(_) | ScaleFactorChanged { .. } => window.request_redraw(),
            _ => (),
        }
    }
}

impl<'a, P: CustomPainter> MainState<'a, P> {
    fn resume_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), LaunchError> {
        match std::mem::replace(
            &mut self.window,
            WindowState::Uninitialized(WindowAttributes::default()),
        ) {
            WindowState::Uninitialized(attributes) => {
                let visible = attributes.visible;
                let attributes = attributes.with_visible(false);

                let window = event_loop.create_window(attributes)?;

                let scale_factor = window.scale_factor();
                let size: LogicalSize<f64> = window.inner_size().to_logical(scale_factor);
                tracing::info!(
                    title = %window.title(),
                    width = size.width,
                    height = size.height,
                    scale_factor,
                    "Window created"
                );

                window.set_visible(visible);
                self.start_rendering(Arc::new(window))
            }
            WindowState::Suspended { window } => self.start_rendering(window),
            state => {
                // We have received a redundant resumed event. That's allowed by winit
                self.window = state;
                Ok(())
            }
        }
    }

    fn start_rendering(&mut self, window: Arc<Window>) -> Result<(), LaunchError> {
        let size = window.inner_size();
        let surface = futures::executor::block_on(self.render_cx.create_surface(
            window.clone(),
            size.width,
            size.height,
            PresentMode::AutoVsync,
        ))?;
        if self.renderer.is_none() {
            let device = &self.render_cx.devices[surface.dev_id].device;
            let renderer_options = RendererOptions {
                surface_format: Some(surface.format),
                use_cpu: false,
                antialiasing_support: AaSupport {
                    area: true,
                    msaa8: false,
                    msaa16: false,
                },
                num_init_threads: NonZeroUsize::new(1),
            };
            self.renderer = Some(Renderer::new(device, renderer_options)?);
        }
        window.request_redraw();
        self.window = WindowState::Rendering { window, surface };
        Ok(())
    }

    fn render(&mut self) -> Result<(), vello::Error> {
        let WindowState::Rendering { window, surface } = &mut self.window else {
            tracing::warn!("Tried to render whilst suspended or before window created");
            return Ok(());
        };
        let Some(renderer) = &mut self.renderer else {
            tracing::warn!("Tried to render before the renderer was created");
            return Ok(());
        };
        let scale = window.scale_factor();
        let size = window.inner_size();
        let width = size.width;
        let height = size.height;
        if width == 0 || height == 0 {
            // Minimized. There is nothing to present.
            return Ok(());
        }

        let raster_start_time = Instant::now();

        if surface.config.width != width || surface.config.height != height {
            self.render_cx.resize_surface(surface, width, height);
        }

        let logical: LogicalSize<f32> = size.to_logical(scale);
        let logical_size = BoxSize::new(logical.width, logical.height);
        self.scene.reset();
        let mut paint_ctx = VelloPaintContext::new(&mut self.scene, logical_size);
        paint_ctx.with_transform(Affine2d::scale(scale), |paint_ctx| {
            self.painter.perform_paint(&logical_size, paint_ctx)
        });

        let Ok(surface_texture) = surface.surface.get_current_texture() else {
            tracing::warn!("failed to acquire next swapchain texture");
            return Ok(());
        };
        let dev_id = surface.dev_id;
        let device = &self.render_cx.devices[dev_id].device;
        let queue = &self.render_cx.devices[dev_id].queue;
        let render_params = RenderParams {
            base_color: self.background,
            width,
            height,
            antialiasing_method: vello::AaConfig::Area,
        };
        renderer.render_to_surface(device, queue, &self.scene, &surface_texture, &render_params)?;

        let raster_time = Instant::now().duration_since(raster_start_time).as_micros() as u64;
        surface_texture.present();
        device.poll(wgpu::Maintain::Wait);

        self.frame_stats.add_sample(FrameStatSample {
            timestamp: Instant::now(),
            raster_time,
        });
        if self.print_stats {
            let FrameStats {
                frame_count,
                raster_time_sum,
                raster_time_low,
                frame_time_ms_low,
                ..
            } = self.frame_stats;
            println!(
                "Frame {:5} painted with: raster{:>5.1}/{:>5.1}/{:>5.1} ms. Avg FPS:{:>5.1}/{:>5.1}",
                frame_count,
                raster_time as f32 / 1000.0,
                raster_time_sum as f32 / frame_count as f32 / 1000.0,
                raster_time_low as f32 / 1000.0,
                1000.0 / self.frame_stats.get_frame_time_ms_avg().unwrap_or(-1.0),
                1000.0 / frame_time_ms_low
            )
        }
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: LaunchError) {
        tracing::error!(%error, "Shutting down");
        self.exit_error.get_or_insert(error);
        event_loop.exit();
    }
}
