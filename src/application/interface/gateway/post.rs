use crate::application::app_error::AppResult;
use crate::domain::entities::id::Id;
use crate::domain::entities::post::Post;
use async_trait::async_trait;

#[async_trait]
pub trait PostReader: Send + Sync {
    async fn find_by_id(&self, post_id: &Id<Post>) -> AppResult<Option<Post>>;
    /// Newest first.
    async fn list_all(&self) -> AppResult<Vec<Post>>;
}

#[async_trait]
pub trait PostWriter: Send + Sync {
    async fn insert(&self, post: Post) -> AppResult<Id<Post>>;
    async fn update(&self, post: Post) -> AppResult<()>;
    async fn delete(&self, post_id: &Id<Post>) -> AppResult<()>;
}
