use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::modules::sink::SinkError;
use crate::modules::store::StoreError;
use crate::shared::templates::TemplateError;
use crate::shared::types::ApiResponse;
use crate::shared::validation::{FormField, FormErrors, SubmitError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid form: {} field(s)", .0.len())]
    InvalidForm(BTreeMap<String, String>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl From<SinkError> for AppError {
    fn from(err: SinkError) -> Self {
        match err {
            SinkError::Conflict(msg) => AppError::Conflict(msg),
            other => AppError::ExternalServiceError(other.to_string()),
        }
    }
}

impl<F: FormField> From<FormErrors<F>> for AppError {
    fn from(errors: FormErrors<F>) -> Self {
        AppError::InvalidForm(errors.to_field_map())
    }
}

impl<F: FormField> From<SubmitError<F>> for AppError {
    fn from(err: SubmitError<F>) -> Self {
        match err {
            SubmitError::Invalid(errors) => errors.into(),
            SubmitError::Sink(e) => e.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Store(StoreError::Conflict(msg)) => (StatusCode::CONFLICT, msg, None),
            AppError::Store(StoreError::Unavailable(ref msg)) => {
                tracing::error!("Store unavailable: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Store unavailable".to_string(),
                    None,
                )
            }
            AppError::Template(ref e) => {
                tracing::error!("Template error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to render map markup".to_string(),
                    None,
                )
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            AppError::Validation(ref msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone(),
                Some(vec![msg.clone()]),
            ),
            AppError::InvalidForm(fields) => {
                tracing::debug!(fields = ?fields.keys().collect::<Vec<_>>(), "Form rejected");
                let body = Json(ApiResponse::<()>::form_error(
                    "Please correct the highlighted fields".to_string(),
                    fields,
                ));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::Conflict(ref msg) => (StatusCode::CONFLICT, msg.clone(), None),
            AppError::ExternalServiceError(ref msg) => {
                tracing::error!("External service error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg.clone(), None)
            }
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::ReportField;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                AppError::from(SinkError::Conflict("dup".into())),
                StatusCode::CONFLICT,
            ),
            (
                AppError::from(SinkError::Unavailable("down".into())),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::from(SinkError::Rejected("no".into())),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::from(StoreError::Conflict("dup".into())),
                StatusCode::CONFLICT,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_form_errors_keep_field_names() {
        let mut errors = FormErrors::new();
        errors.insert(ReportField::Images, "Image is required");
        let error = AppError::from(SubmitError::Invalid(errors));

        match error {
            AppError::InvalidForm(ref fields) => {
                assert_eq!(fields.get("images").map(String::as_str), Some("Image is required"));
            }
            ref other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
