use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_email::Email;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[schema(value_type = String)]
    pub email: Email,
    #[validate(length(min = 6, message = "Password needs to be at least 6 characters long"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GetUserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}
