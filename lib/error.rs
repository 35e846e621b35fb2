use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A shape was built from parameters that describe no valid surface.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// A light (or an area light patch) was built from invalid parameters.
    #[error("invalid light: {0}")]
    InvalidLight(String),

    #[error("invalid camera: {0}")]
    InvalidCamera(String),

    /// The scene description could not be read.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
