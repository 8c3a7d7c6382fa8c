use crate::{config::Config, error::Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cross_plot", about = "Renders a point cloud as small cubes")]
pub struct Cli {
    /// Point file: whitespace separated x y z values
    pub points: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub vertex_shader: Option<PathBuf>,

    #[arg(long)]
    pub fragment_shader: Option<PathBuf>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Defaults, then the config file, then command line flags.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                Config::from_file(path)?
            }
            None => Config::default(),
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply(&self, config: &mut Config) {
        if let Some(points) = &self.points {
            config.points_path = points.clone();
        }
        if let Some(vertex_shader) = &self.vertex_shader {
            config.vertex_shader_path = Some(vertex_shader.clone());
        }
        if let Some(fragment_shader) = &self.fragment_shader {
            config.fragment_shader_path = Some(fragment_shader.clone());
        }
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::{ffi::OsString, fs};

    #[test]
    fn no_arguments_gives_defaults() {
        let cli = Cli::try_parse_from(["cross_plot"]).unwrap();
        assert_eq!(cli.load_config().unwrap(), Config::default());
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "cross_plot",
            "cloud.txt",
            "--vertex-shader",
            "v.glsl",
            "--width",
            "640",
            "-v",
        ])
        .unwrap();
        let config = cli.load_config().unwrap();
        assert_eq!(config.points_path, PathBuf::from("cloud.txt"));
        assert_eq!(config.vertex_shader_path, Some(PathBuf::from("v.glsl")));
        assert_eq!(config.fragment_shader_path, None);
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 1200);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn flags_override_config_file() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("cross_plot_cli_{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{ "points_path": "from_file.txt", "window": { "width": 320 } }"#,
        )
        .unwrap();
        let args: [OsString; 7] = [
            "cross_plot".into(),
            "--config".into(),
            path.clone().into_os_string(),
            "--height".into(),
            "240".into(),
            "--vertex-shader".into(),
            "v.glsl".into(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let config = cli.load_config();
        fs::remove_file(&path).unwrap();
        let config = config.unwrap();
        assert_eq!(config.points_path, dir.join("from_file.txt"));
        assert_eq!(config.vertex_shader_path, Some(PathBuf::from("v.glsl")));
        assert_eq!((config.window.width, config.window.height), (320, 240));
    }

    #[test]
    fn zero_width_fails_validation() {
        let cli = Cli::try_parse_from(["cross_plot", "--width", "0"]).unwrap();
        assert!(matches!(cli.load_config(), Err(Error::InvalidConfig(_))));
    }
}
