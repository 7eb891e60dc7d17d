use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::user::User;
use async_trait::async_trait;

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>>;
    async fn list_all(&self) -> AppResult<Vec<Profile>>;
}

#[async_trait]
pub trait ProfileWriter: Send + Sync {
    /// Persists the whole aggregate, creating the row or replacing its
    /// fields and sub-documents, keyed by the owning user id.
    async fn save(&self, profile: Profile) -> AppResult<()>;
    async fn delete_by_user_id(&self, user_id: &Id<User>) -> AppResult<()>;
}
