use crate::error::{Error, Result};
use std::{fs, path::Path};

pub const PROJECTION_UNIFORM: &str = "projection";
pub const VIEW_UNIFORM: &str = "view";
pub const MODEL_UNIFORM: &str = "model";
pub const COLOR_UNIFORM: &str = "inputColor";

pub(crate) const VERTEX_SHADER_SRC: &str = "#version 330 core
layout (location = 0) in vec3 aPos;

uniform mat4 model;
uniform mat4 view;
uniform mat4 projection;

void main()
{
    gl_Position = projection * view * model * vec4(aPos, 1.0);
}";

pub(crate) const MONO_COLOR_FRAG_SHDR_SRC: &str = "#version 330 core
out vec4 FragColor;
uniform vec4 inputColor;

void main()
{
    FragColor = inputColor;
}";

/// Reads `path` when given, otherwise hands back the built-in source.
pub fn load_or_builtin(path: Option<&Path>, builtin: &'static str) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| Error::io(path, e)),
        None => Ok(builtin.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_shaders_declare_every_uniform() {
        for name in [PROJECTION_UNIFORM, VIEW_UNIFORM, MODEL_UNIFORM] {
            assert!(VERTEX_SHADER_SRC.contains(&format!("uniform mat4 {name};")));
        }
        assert!(MONO_COLOR_FRAG_SHDR_SRC.contains(&format!("uniform vec4 {COLOR_UNIFORM};")));
    }

    #[test]
    fn missing_path_falls_back_to_builtin() {
        let src = load_or_builtin(None, VERTEX_SHADER_SRC).unwrap();
        assert_eq!(src, VERTEX_SHADER_SRC);
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let err = load_or_builtin(Some(Path::new("no/such/shader.glsl")), VERTEX_SHADER_SRC)
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
