use crate::{
    config::WindowConfig,
    error::{Error, Result},
};
use glfw::{
    fail_on_errors, Context as _, Glfw, GlfwReceiver, OpenGlProfileHint, PWindow, SwapInterval,
    WindowEvent, WindowHint, WindowMode,
};

const CONTEXT_VERSION: WindowHint = WindowHint::ContextVersion(3, 3);
const OPENGL_PROFILE: WindowHint = WindowHint::OpenGlProfile(OpenGlProfileHint::Core);

pub fn init_glfw() -> Result<Glfw> {
    let mut glfw = glfw::init(fail_on_errors!()).map_err(|e| Error::GlfwInit(format!("{e:?}")))?;
    glfw.window_hint(OPENGL_PROFILE);
    glfw.window_hint(CONTEXT_VERSION);

    Ok(glfw)
}

pub fn create_from_config(
    config: &WindowConfig,
    glfw: &mut Glfw,
) -> Result<(PWindow, GlfwReceiver<(f64, WindowEvent)>)> {
    let (mut window, receiver) = glfw
        .create_window(
            config.width,
            config.height,
            &config.title,
            WindowMode::Windowed,
        )
        .ok_or(Error::WindowCreation)?;

    window.set_key_polling(true);
    window.set_framebuffer_size_polling(true);
    window.make_current();

    init_gl()?;

    if config.vsync {
        glfw.set_swap_interval(SwapInterval::Sync(1));
    } else {
        glfw.set_swap_interval(SwapInterval::None);
    }

    Ok((window, receiver))
}

fn init_gl() -> Result<()> {
    gl_loader::init_gl();
    gl::load_with(|symbol| gl_loader::get_proc_address(symbol) as *const _);
    check_loaded()
}

/// Every entry point the renderer calls, checked before the first call.
fn check_loaded() -> Result<()> {
    let required = [
        ("glViewport", gl::Viewport::is_loaded()),
        ("glPolygonMode", gl::PolygonMode::is_loaded()),
        ("glEnable", gl::Enable::is_loaded()),
        ("glClear", gl::Clear::is_loaded()),
        ("glCreateShader", gl::CreateShader::is_loaded()),
        ("glCreateProgram", gl::CreateProgram::is_loaded()),
        ("glGenVertexArrays", gl::GenVertexArrays::is_loaded()),
        ("glGenBuffers", gl::GenBuffers::is_loaded()),
        ("glUniformMatrix4fv", gl::UniformMatrix4fv::is_loaded()),
        ("glDrawArrays", gl::DrawArrays::is_loaded()),
    ];
    match required.iter().find(|(_, loaded)| !*loaded) {
        Some((name, _)) => Err(Error::GlLoad(*name)),
        None => Ok(()),
    }
}

pub fn init_rendering() {
    unsafe {
        gl::PolygonMode(gl::FRONT_AND_BACK, gl::FILL);
        gl::Enable(gl::DEPTH_TEST);
    }
}
