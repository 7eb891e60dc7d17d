use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepoDTO {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: i64,
    pub watchers_count: i64,
    pub forks_count: i64,
}
