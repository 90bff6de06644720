use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::templates::{not_found_page, server_error_page};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(ref msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, Html(not_found_page().into_string())).into_response()
            }
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            Self::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(server_error_page().into_string()),
                )
                    .into_response()
            }
            Self::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(server_error_page().into_string()),
                )
                    .into_response()
            }
            Self::Other(ref e) => {
                tracing::error!("Unexpected error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(server_error_page().into_string()),
                )
                    .into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Closed set of write-failure causes, so the log can distinguish what the
/// one generic user-facing message collapses together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteErrorKind {
    Constraint,
    Connection,
    NotFound,
    Other,
}

impl WriteErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constraint => "constraint",
            Self::Connection => "connection",
            Self::NotFound => "not_found",
            Self::Other => "other",
        }
    }
}

pub fn classify_db_err(err: &DbErr) -> WriteErrorKind {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) | Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            WriteErrorKind::Constraint
        }
        _ => match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => WriteErrorKind::Connection,
            DbErr::RecordNotFound(_) => WriteErrorKind::NotFound,
            _ => WriteErrorKind::Other,
        },
    }
}
