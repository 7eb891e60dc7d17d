use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::application::dto::github::GithubRepoDTO;

#[async_trait]
pub trait GithubGateway: Send + Sync {
    async fn list_repos(&self, username: &str) -> AppResult<Vec<GithubRepoDTO>>;
}
