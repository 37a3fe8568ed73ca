use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // rejected before any store access
    #[error("identifier is empty after sanitization")]
    InvalidInput,
    #[error("validation error: {0}")]
    Validation(String),

    // expected, non-fatal business outcomes; each one carries enough for the
    // caller to render a specific message
    #[error("\"{0}\" is already checked in")]
    AlreadyCheckedIn(String),
    #[error("registration number \"{0}\" is already registered")]
    DuplicateIdentifier(String),
    #[error("email \"{0}\" is already registered")]
    DuplicateEmail(String),
    #[error("the registration limit has been reached")]
    CapacityExceeded,
    #[error("registrations are currently closed")]
    RegistrationsClosed,

    #[error("no registered member matches this identifier")]
    NotFound,
    #[error("unauthorized")]
    Unauthorized,

    // infra things, propagated unchanged, never retried here
    #[error(transparent)]
    Db(DbErr),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(err),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::AlreadyCheckedIn(_) => "ALREADY_CHECKED_IN",
            Self::DuplicateIdentifier(_) => "DUPLICATE_IDENTIFIER",
            Self::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            Self::CapacityExceeded => "CAPACITY_EXCEEDED",
            Self::RegistrationsClosed => "REGISTRATIONS_CLOSED",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Db(_) => "DB_ERROR",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::RegistrationsClosed => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::AlreadyCheckedIn(_)
            | Self::DuplicateIdentifier(_)
            | Self::DuplicateEmail(_)
            | Self::CapacityExceeded => StatusCode::CONFLICT,
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        })
    }
}
