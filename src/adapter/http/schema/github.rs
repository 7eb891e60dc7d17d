use serde::Serialize;
use utoipa::ToSchema;

use crate::application::dto::github::GithubRepoDTO;

#[derive(Debug, Serialize, ToSchema)]
pub struct GithubRepoResponse {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: i64,
    pub watchers_count: i64,
    pub forks_count: i64,
}

impl From<GithubRepoDTO> for GithubRepoResponse {
    fn from(repo: GithubRepoDTO) -> Self {
        Self {
            name: repo.name,
            html_url: repo.html_url,
            description: repo.description,
            stargazers_count: repo.stargazers_count,
            watchers_count: repo.watchers_count,
            forks_count: repo.forks_count,
        }
    }
}
