// src/common/response.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SAVED: &str = "Successfully saved!!";
pub const UPDATED: &str = "Successfully updated!!";
pub const DELETED: &str = "Successfully deleted!!";

/// Uniform body for write operations and for every error.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Documented shape of an envelope without payload (errors and deletes).
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageOnly {
    pub success: bool,
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub data: Option<()>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_serializes_null_data() {
        let body = serde_json::to_value(ApiResponse::<()>::failure("nope")).unwrap();
        assert_eq!(body, json!({ "success": false, "message": "nope", "data": null }));
    }

    #[test]
    fn ok_wraps_payload() {
        let body = serde_json::to_value(ApiResponse::ok(SAVED, 42)).unwrap();
        assert_eq!(body, json!({ "success": true, "message": SAVED, "data": 42 }));
    }
}
