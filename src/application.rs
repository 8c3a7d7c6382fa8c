use crate::{config::WindowConfig, error::Result, gl_wrappers, initializers};
use glfw::{GlfwReceiver, PWindow, WindowEvent};

pub struct Application {
    pub receiver: GlfwReceiver<(f64, WindowEvent)>,
    pub window: PWindow,
}

impl Application {
    pub fn new(config: &WindowConfig) -> Result<Self> {
        let mut glfw = initializers::init_glfw()?;
        let (window, receiver) = initializers::create_from_config(config, &mut glfw)?;
        initializers::init_rendering();

        let size = window.get_framebuffer_size();
        gl_wrappers::set_viewport(size);
        log::info!(
            "Created {}x{} window, OpenGL {}",
            size.0,
            size.1,
            gl_wrappers::version()
        );

        Ok(Self { receiver, window })
    }
}
