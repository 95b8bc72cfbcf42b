use thiserror::Error;

use crate::models::{ItemId, MediaKind};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No loaded {kind} with id {id}")]
    NotFound { kind: MediaKind, id: ItemId },

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}
