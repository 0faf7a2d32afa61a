use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    // auth
    #[error("no credential presented")]
    Unauthorized,
    #[error("invalid token")]
    InvalidToken,
    #[error("forbidden")]
    Forbidden,

    // request / store
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("already exists")]
    AlreadyExists,

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::Forbidden => "FORBIDDEN",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn from_db(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::AlreadyExists,
            _ => AppError::Db(err),
        }
    }

    /// Plain-text body sent to the client. Server-side detail stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Unauthorized | Self::Forbidden => "Access Denied".to_string(),
            Self::InvalidToken => "Invalid Token".to_string(),
            Self::BadRequest(msg) => msg.clone(),
            Self::AlreadyExists => "Already exists".to_string(),
            Self::Db(_) | Self::Internal(_) => "Server error".to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            // an invalid token and a missing role look the same to the caller
            Self::InvalidToken | Self::Forbidden => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            error!(kind = self.kind(), "request failed: {self}");
        }
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.public_message())
    }
}
