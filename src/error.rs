use std::{io, path::PathBuf};
use thiserror::Error;

use crate::points::PointsError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("couldn't read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("bad point file {path:?}: {source}")]
    Points {
        path: PathBuf,
        #[source]
        source: PointsError,
    },
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("failed to initialise GLFW: {0}")]
    GlfwInit(String),
    #[error("failed to create window")]
    WindowCreation,
    #[error("{stage} shader compile error: {log}")]
    ShaderCompile { stage: &'static str, log: String },
    #[error("program link error: {0}")]
    ProgramLink(String),
    #[error("couldn't allocate {0}")]
    GlAllocation(&'static str),
    #[error("OpenGL function {0} could not be loaded")]
    GlLoad(&'static str),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
