use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error as ThisError;

use crate::response::Envelope;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Store(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid session token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Store(_) | Error::Database(_) | Error::Http(_) | Error::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Unauthorized | Error::Token(_) => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        error!("API Error: {}", self);
        HttpResponse::build(self.status_code()).json(Envelope::<()>::failed(self.to_string()))
    }
}
