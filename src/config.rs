use crate::{
    camera::{Camera, Projection},
    camera_controller::DEFAULT_SPEED,
    data3d::CUBE_HALF_EXTENT,
    error::{Error, Result},
};
use nalgebra_glm::{Vec3, Vec4};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_POINTS_PATH: &str = "data.txt";

/// Relative paths read from a config file are resolved against the file's
/// directory. Paths given on the command line stay relative to the working
/// directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub points_path: PathBuf,
    pub vertex_shader_path: Option<PathBuf>,
    pub fragment_shader_path: Option<PathBuf>,
    pub camera: CameraConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: Default::default(),
            points_path: PathBuf::from(DEFAULT_POINTS_PATH),
            vertex_shader_path: None,
            fragment_shader_path: None,
            camera: Default::default(),
            render: Default::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1200,
            title: "CrossPlot".to_string(),
            vsync: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub speed: f32,
    pub position: [f32; 3],
    pub front: [f32; 3],
    pub up: [f32; 3],
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        let camera = Camera::default();
        let projection = Projection::default();
        Self {
            speed: DEFAULT_SPEED,
            position: to_array(&camera.position),
            front: to_array(&camera.front),
            up: to_array(&camera.up),
            fov_degrees: projection.fov_degrees,
            near: projection.near,
            far: projection.far,
        }
    }
}

fn to_array(v: &Vec3) -> [f32; 3] {
    [v.x, v.y, v.z]
}

impl CameraConfig {
    pub fn camera(&self) -> Camera {
        Camera::new(self.position.into(), self.front.into(), self.up.into())
    }

    pub fn projection(&self) -> Projection {
        Projection {
            fov_degrees: self.fov_degrees,
            near: self.near,
            far: self.far,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub clear_color: [f32; 4],
    pub cube_color: [f32; 4],
    pub cube_half_extent: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.5, 0.0, 0.8, 1.0],
            cube_color: [0.0, 0.75, 0.0, 1.0],
            cube_half_extent: CUBE_HALF_EXTENT,
        }
    }
}

impl RenderConfig {
    pub fn clear_color(&self) -> Vec4 {
        self.clear_color.into()
    }

    pub fn cube_color(&self) -> Vec4 {
        self.cube_color.into()
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut config = Self::from_json(&json)?;
        if let Some(dir) = path.parent() {
            config.resolve_relative_to(dir);
        }
        Ok(config)
    }

    pub fn resolve_relative_to(&mut self, dir: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = dir.join(&*path);
            }
        };
        resolve(&mut self.points_path);
        if let Some(path) = self.vertex_shader_path.as_mut() {
            resolve(path);
        }
        if let Some(path) = self.fragment_shader_path.as_mut() {
            resolve(path);
        }
    }

    pub fn validate(&self) -> Result<()> {
        fn invalid(message: &str) -> Result<()> {
            Err(Error::InvalidConfig(message.to_string()))
        }

        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window size must be non-zero");
        }
        let camera = &self.camera;
        if !(camera.speed > 0.0) {
            return invalid("camera speed must be positive");
        }
        if !(camera.near > 0.0 && camera.near < camera.far) {
            return invalid("camera planes must satisfy 0 < near < far");
        }
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return invalid("field of view must be between 0 and 180 degrees");
        }
        let front: Vec3 = camera.front.into();
        let up: Vec3 = camera.up.into();
        if glm::cross(&front, &up).norm() <= f32::EPSILON {
            return invalid("camera front and up must not be parallel");
        }
        if !(self.render.cube_half_extent > 0.0) {
            return invalid("cube half extent must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.window.title, "CrossPlot");
        assert_eq!((config.window.width, config.window.height), (1600, 1200));
        assert_eq!(config.camera.speed, 0.05);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = Config::from_json(
            r#"{ "points_path": "cloud.txt", "camera": { "speed": 0.2 } }"#,
        )
        .unwrap();
        assert_eq!(config.points_path, PathBuf::from("cloud.txt"));
        assert_eq!(config.camera.speed, 0.2);
        assert_eq!(config.camera.far, 100.0);
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.vertex_shader_path, None);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = Config::from_json("{ \"window\": 3 }").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn camera_config_builds_camera() {
        let camera = CameraConfig::default().camera();
        assert_eq!(camera.position, glm::vec3(0.0, 0.0, 3.0));
        assert_eq!(camera.front, glm::vec3(0.0, 0.0, -1.0));
        assert_eq!(camera.up, glm::vec3(0.0, 1.0, 0.0));
        assert_eq!(CameraConfig::default().projection(), Projection::default());
    }

    #[test]
    fn file_paths_resolve_against_config_dir() {
        let dir = std::env::temp_dir();
        let absolute = dir.join("abs").join("v.glsl");
        let mut config = Config {
            points_path: PathBuf::from("cloud.txt"),
            vertex_shader_path: Some(absolute.clone()),
            fragment_shader_path: Some(PathBuf::from("shaders/f.glsl")),
            ..Config::default()
        };
        config.resolve_relative_to(&dir.join("plots"));
        assert_eq!(config.points_path, dir.join("plots").join("cloud.txt"));
        assert_eq!(config.vertex_shader_path, Some(absolute));
        assert_eq!(
            config.fragment_shader_path,
            Some(dir.join("plots").join("shaders/f.glsl"))
        );
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = Config::default();
        config.camera.near = 200.0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = Config::default();
        config.window.height = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.camera.fov_degrees = 180.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.camera.up = [0.0, 0.0, 1.0];
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.render.cube_half_extent = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn colors_convert_in_rgba_order() {
        let render = RenderConfig::default();
        assert_eq!(render.cube_color(), glm::vec4(0.0, 0.75, 0.0, 1.0));
        assert_eq!(render.clear_color(), glm::vec4(0.5, 0.0, 0.8, 1.0));
    }
}
