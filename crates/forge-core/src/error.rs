use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("Mesh error: {0}")]
    Mesh(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, ForgeError>;
