use std::sync::Arc;

use crate::application::app_error::AppResult;
use crate::application::dto::github::GithubRepoDTO;
use crate::application::interface::github::GithubGateway;

#[derive(Clone)]
pub struct GetGithubReposInteractor {
    github: Arc<dyn GithubGateway>,
}

impl GetGithubReposInteractor {
    pub fn new(github: Arc<dyn GithubGateway>) -> Self {
        Self { github }
    }

    pub async fn execute(&self, username: &str) -> AppResult<Vec<GithubRepoDTO>> {
        self.github.list_repos(username).await
    }
}
