use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

/// Failure raised by the data-access layer. The raw `sqlx` error is kept as
/// the source but always carries the action that was being attempted.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to {action}: {source}")]
    Storage {
        action: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    pub fn storage(action: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| {
            tracing::error!(error = %source, action, "Storage operation failed");
            StoreError::Storage { action, source }
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Something went wrong!")]
    Unexpected(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Unexpected(cause) = self {
            tracing::error!(cause = %cause, "Unhandled request failure");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
