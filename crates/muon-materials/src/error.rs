use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaterialError {
    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("Invalid material '{name}': {reason}")]
    InvalidMaterial { name: String, reason: String },

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MaterialResult<T> = Result<T, MaterialError>;
