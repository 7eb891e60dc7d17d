use axum::extract::rejection::JsonRejection;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] validator::ValidationErrors),
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    #[error("{0}")]
    InvalidId(String),
    #[error("User already exists")]
    DuplicateUser,
    #[error("Invalid Credentials")]
    InvalidCredentials,
    #[error("No token found! Not authorized")]
    Unauthenticated,
    #[error("Not a valid token")]
    InvalidToken,
    #[error("Not authorized")]
    Forbidden,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Post already liked")]
    AlreadyLiked,
    #[error("Post has not yet been liked")]
    NotLiked,
    #[error("No Github profile found")]
    UpstreamUnavailable,
    #[error("Failed to hash password")]
    PasswordHashError,
    #[error("Failed to sign token")]
    TokenError,
    #[error(transparent)]
    DatabaseError(#[from] sqlx::Error),
    #[error(transparent)]
    SerializationError(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
