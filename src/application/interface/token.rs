use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

/// Issues and verifies the signed identity credential carried in the
/// `x-auth-token` header. Tokens encode only the user id.
pub trait TokenService: Send + Sync {
    fn issue(&self, user_id: &Id<User>) -> AppResult<String>;
    fn verify(&self, token: &str) -> AppResult<Id<User>>;
}
