use chrono::{DateTime, Utc};

#[derive(Debug)]
pub struct CreateUserDTO {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Never carries the password hash.
#[derive(Debug, Clone)]
pub struct UserDTO {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}
