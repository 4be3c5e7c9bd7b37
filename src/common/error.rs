// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::common::response::ApiResponse;

pub const CAPACITY_EXCEEDED: &str = "Building's area is not enough for the rooms";
pub const REQUIRED_INFO_MISSING: &str = "Required information is missing";
pub const QUANTITY_AND_RANGE: &str = "You should input either quantity or start and end numbers";
pub const INVALID_PAGE: &str = "Page and size should not be less than 1";

/// Error kinds carried through every service pipeline. Mapped to a status code
/// exactly once, in `IntoResponse`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] ValidationErrors),

    #[error("Building's area is not enough for the rooms")]
    Capacity,

    #[error("Wrong input range numbers")]
    WrongInputRange,

    #[error("{0}")]
    UniqueKey(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// `"Room with id: 7 not found!"`
    pub fn not_found(resource: &str, id: i32) -> Self {
        AppError::NotFound(format!("{resource} with id: {id} not found!"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::InvalidPayload(_)
            | AppError::Capacity
            | AppError::WrongInputRange
            | AppError::UniqueKey(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client. Unclassified failures never expose their detail.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidPayload(errors) => {
                let mut fields = Vec::new();
                collect_field_errors(errors, "", &mut fields);
                fields.sort();
                format!("Invalid payload: {}", fields.join("; "))
            }
            AppError::Database(_) | AppError::Internal(_) => "Something went wrong!".to_string(),
            other => other.to_string(),
        }
    }
}

// Flattens nested payload errors into `path.to.field: message` entries.
fn collect_field_errors(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                out.push(format!("{path}: {}", messages.join(", ")));
            }
            ValidationErrorsKind::Struct(inner) => collect_field_errors(inner, &path, out),
            ValidationErrorsKind::List(entries) => {
                for (index, inner) in entries {
                    collect_field_errors(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = ?self, "unclassified failure");
        } else {
            tracing::warn!(status = status.as_u16(), "{}", self);
        }

        let body = ApiResponse::<()>::failure(self.public_message());
        (status, Json(body)).into_response()
    }
}
