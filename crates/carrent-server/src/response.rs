//! The `{success, message?, ...payload}` envelope every endpoint answers
//! with, and the error type that renders failures into it.
//!
//! Both outcomes use HTTP 200; clients branch on `success`.

use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use carrent_core::error::CarRentError;
use serde::Serialize;
use tracing::{error, warn};

/// Payload of a reply that carries nothing besides its message.
#[derive(Debug, Serialize)]
pub struct Empty {}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T = Empty> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            success: true,
            message: None,
            payload,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self::ok(Empty {}).with_message(message)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

pub type ApiResult<T = Empty> = Result<ApiResponse<T>, ApiError>;

/// Boundary error: any failure of a request, rendered as
/// `{success: false, message}`.
#[derive(Debug)]
pub struct ApiError(pub CarRentError);

/// Reply to any request whose caller could not be identified.
pub const NOT_AUTHORIZED: &str = "not authorized";

impl ApiError {
    pub fn message(&self) -> String {
        match &self.0 {
            CarRentError::AuthenticationFailed { .. } => NOT_AUTHORIZED.to_string(),
            other => other.to_string(),
        }
    }
}

impl<E: Into<CarRentError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = &self.0;
        if err.is_unexpected() {
            error!(
                error.cause_chain = ?err,
                error.message = %err,
                "Unexpected error happened"
            );
        } else {
            warn!(error.message = %err, "Request rejected");
        }

        ApiResponse {
            success: false,
            message: Some(self.message()),
            payload: Empty {},
        }
        .into_response()
    }
}

/// Malformed request bodies surface as validation failures so they keep
/// the envelope instead of axum's plain-text rejections.
pub fn invalid_json(rejection: JsonRejection) -> ApiError {
    ApiError(CarRentError::Validation {
        message: rejection.body_text(),
    })
}

pub fn invalid_multipart(rejection: MultipartRejection) -> ApiError {
    ApiError(CarRentError::Validation {
        message: rejection.body_text(),
    })
}

pub fn multipart_error(err: MultipartError) -> ApiError {
    ApiError(CarRentError::Validation {
        message: err.body_text(),
    })
}
