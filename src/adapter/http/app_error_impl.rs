use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::application::app_error::AppError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorMessage {
    pub msg: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorMessage>,
}

impl ErrorResponse {
    fn new(messages: Vec<String>) -> Self {
        Self {
            errors: messages.into_iter().map(|msg| ErrorMessage { msg }).collect(),
        }
    }
}

// All field failures are reported together, not just the first one.
fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = field.to_string();
            field_errors.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, messages) = match &self {
            AppError::Validation(errors) => (StatusCode::BAD_REQUEST, validation_messages(errors)),
            AppError::JsonRejection(rejection) => (StatusCode::BAD_REQUEST, vec![rejection.body_text()]),
            AppError::InvalidId(_)
            | AppError::DuplicateUser
            | AppError::InvalidCredentials
            | AppError::AlreadyLiked
            | AppError::NotLiked => (StatusCode::BAD_REQUEST, vec![self.to_string()]),
            AppError::Unauthenticated | AppError::InvalidToken | AppError::Forbidden => {
                (StatusCode::UNAUTHORIZED, vec![self.to_string()])
            }
            AppError::NotFound(_) | AppError::UpstreamUnavailable => (StatusCode::NOT_FOUND, vec![self.to_string()]),
            AppError::PasswordHashError
            | AppError::TokenError
            | AppError::DatabaseError(_)
            | AppError::SerializationError(_) => {
                error!("Internal error: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, vec!["Server Error".to_string()])
            }
        };

        (status, Json(ErrorResponse::new(messages))).into_response()
    }
}
