use crate::{
    application::Application,
    camera::aspect_ratio,
    camera_controller::CameraController,
    config::Config,
    error::Result,
    gl_wrappers,
    points::{self, PointCloud},
    renderer::PointCloudRenderer,
};
use glfw::{Action, Context as _, Key, WindowEvent};

pub struct Runtime {
    config: Config,
}

impl Runtime {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(self) -> Result<()> {
        let mut points = points::load_points(&self.config.points_path)?;
        log_cloud(&self.config, &points);

        let mut app = Application::new(&self.config.window)?;
        let mut renderer = PointCloudRenderer::new(
            &self.config,
            aspect_ratio(app.window.get_framebuffer_size()),
        )?;
        let mut camera = self.config.camera.camera();
        let controller = CameraController::new(self.config.camera.speed);
        let mut events = WindowEvents::default();

        while !app.window.should_close() {
            Self::update_events(&mut app, &mut events);

            if events.close_requested {
                app.window.set_should_close(true);
            }
            if let Some(size) = events.framebuffer_size {
                gl_wrappers::set_viewport(size);
                renderer.set_aspect(aspect_ratio(size));
                log::debug!("Framebuffer resized to {}x{}", size.0, size.1);
            }
            if events.reload_requested {
                self.reload(&mut points);
            }

            if controller.update(&mut camera, &*app.window) {
                log::trace!("Camera at {:?}", camera.position.as_slice());
            }

            renderer.draw(&camera, &points);
            app.window.swap_buffers();
        }

        log::info!("Window closed");
        Ok(())
    }

    fn reload(&self, points: &mut PointCloud) {
        match points::load_points(&self.config.points_path) {
            Ok(reloaded) => {
                *points = reloaded;
                log_cloud(&self.config, points);
            }
            Err(e) => log::error!("Reload failed, keeping {} points: {e}", points.len()),
        }
    }

    fn update_events(app: &mut Application, events: &mut WindowEvents) {
        app.window.glfw.poll_events();
        events.clear_events();
        for (_, event) in glfw::flush_messages(&app.receiver) {
            events.push(event);
        }
    }
}

fn log_cloud(config: &Config, points: &PointCloud) {
    if points.is_empty() {
        log::warn!("{} contains no points", config.points_path.display());
        return;
    }
    if let Some((min, max)) = points.bounds() {
        log::info!(
            "Loaded {} points from {}, bounds {:?} .. {:?}",
            points.len(),
            config.points_path.display(),
            min.as_slice(),
            max.as_slice()
        );
    }
}

/// What happened since the last poll, reduced to what the loop reacts to.
#[derive(Default, Debug, PartialEq)]
pub struct WindowEvents {
    close_requested: bool,
    reload_requested: bool,
    framebuffer_size: Option<(i32, i32)>,
}

impl WindowEvents {
    pub fn push(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
                self.close_requested = true;
            }
            WindowEvent::Key(Key::R, _, Action::Press, _) => {
                self.reload_requested = true;
            }
            WindowEvent::FramebufferSize(w, h) => {
                if w == 0 || h == 0 {
                    return;
                }
                self.framebuffer_size = Some((w, h));
            }
            _ => {}
        }
    }

    pub fn clear_events(&mut self) {
        *self = Self::default();
    }
}
