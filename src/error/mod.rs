use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("{}", .0.body_text())]
    ExtractRequestBody(#[from] JsonRejection),
    #[error("{}", .0.body_text())]
    ExtractRequestQuery(#[from] QueryRejection),

    #[error("Could not checkout a connection from connection pool")]
    CheckoutConnectionPool,
    #[error(transparent)]
    Database(#[from] diesel::result::Error),

    #[error(transparent)]
    Internal(#[from] color_eyre::Report),
}

#[derive(Debug, Serialize)]
struct Body {
    error: String,
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_)
            | Error::ExtractRequestBody(_)
            | Error::ExtractRequestQuery(_) => StatusCode::BAD_REQUEST,
            Error::CheckoutConnectionPool | Error::Database(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!(error = ?self);
        } else {
            tracing::debug!(error = %self);
        }
        (status_code, Json(Body { error: self.to_string() })).into_response()
    }
}

impl From<uuid::Error> for Error {
    fn from(value: uuid::Error) -> Self {
        Self::Internal(value.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Internal(value.into())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::Internal(value.into())
    }
}
