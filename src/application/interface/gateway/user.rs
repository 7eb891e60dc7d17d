use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;
use async_trait::async_trait;

#[async_trait]
pub trait UserReader: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<User>>;
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;
}

#[async_trait]
pub trait UserWriter: Send + Sync {
    async fn insert(&self, user: User) -> AppResult<Id<User>>;
    async fn delete(&self, user_id: &Id<User>) -> AppResult<()>;
}
