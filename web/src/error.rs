/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::Error as AnyhowError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use core::orders::TransitionError;
use core::types::BaseResponse;
use sea_orm::{DbErr, SqlErr};
use std::fmt;

#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    /// A foreign key in the request does not resolve.
    InvalidReference(String),
    /// The requested transition target already holds. Reported with a
    /// success body, the caller's intent is satisfied.
    AlreadyInState(String),
    InternalServerError(String),
    Database(DbErr),
    Internal(AnyhowError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            WebError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            WebError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            WebError::InvalidReference(msg) => write!(f, "Invalid reference: {}", msg),
            WebError::AlreadyInState(msg) => write!(f, "Already in state: {}", msg),
            WebError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::Internal(err) => write!(f, "Internal error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::Internal(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                WebError::Conflict("Resource already exists".to_string())
            }
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                WebError::InvalidReference("Request references missing data".to_string())
            }
            _ => WebError::Database(err),
        }
    }
}

impl From<TransitionError> for WebError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::Order(err) => WebError::Conflict(err.to_string()),
            TransitionError::Db(err) => WebError::from(err),
        }
    }
}

impl From<AnyhowError> for WebError {
    fn from(err: AnyhowError) -> Self {
        WebError::Internal(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            WebError::BadRequest(msg) => (StatusCode::BAD_REQUEST, true, msg),
            WebError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, true, msg),
            WebError::Forbidden(msg) => (StatusCode::FORBIDDEN, true, msg),
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, true, msg),
            WebError::Conflict(msg) => (StatusCode::CONFLICT, true, msg),
            WebError::InvalidReference(msg) => (StatusCode::BAD_REQUEST, true, msg),
            WebError::AlreadyInState(msg) => (StatusCode::ACCEPTED, false, msg),
            WebError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, true, msg),
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    true,
                    "Database error".to_string(),
                )
            }
            WebError::Internal(err) => {
                tracing::error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    true,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(BaseResponse { error, message });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

// Helper functions for common error scenarios
impl WebError {
    pub fn already_exists(resource: &str) -> Self {
        WebError::Conflict(format!("{} already exists", resource))
    }

    pub fn not_found(resource: &str) -> Self {
        WebError::NotFound(format!("{} not found", resource))
    }

    pub fn invalid_credentials() -> Self {
        WebError::Unauthorized("Invalid credentials".to_string())
    }

    pub fn inactive_user() -> Self {
        WebError::Unauthorized("User inactive".to_string())
    }

    pub fn permission_denied() -> Self {
        WebError::Forbidden("Insufficient permissions".to_string())
    }

    pub fn protected_user() -> Self {
        WebError::Forbidden("This user is protected and cannot be modified".to_string())
    }

    pub fn failed_to_generate_token() -> Self {
        WebError::InternalServerError("Failed to generate token".to_string())
    }

    pub fn invalid_username(reason: String) -> Self {
        WebError::BadRequest(format!("Invalid username: {}", reason))
    }

    pub fn invalid_password(reason: String) -> Self {
        WebError::BadRequest(format!("Invalid password: {}", reason))
    }
}
