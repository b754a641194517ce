// src/errors.rs
use crate::forms::FormError;
use astra::Response;
use thiserror::Error;

/// Errors raised while handling a request.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Payload Too Large: form bodies are limited to {limit} bytes")]
    PayloadTooLarge { limit: u64 },

    #[error("Form Error: {0}")]
    Form(#[from] FormError),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::PayloadTooLarge { .. } => 413,
            ServerError::Form(FormError::DialogClosed) => 409,
            ServerError::Form(_) => 400,
            ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
