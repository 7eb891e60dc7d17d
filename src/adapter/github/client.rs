use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::github::GithubRepoDTO;
use crate::application::interface::github::GithubGateway;
use crate::infra::config::GithubConfig;

const BASE_URL: &str = "https://api.github.com";

/// Fetches a user's most recent public repositories for the profile page.
/// Any upstream failure is reported as a missing Github profile.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    client_id: String,
    client_secret: String,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Self {
        Self {
            client: Client::new(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        }
    }

    fn repos_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/repos?per_page=5&sort=created:asc&client_id={}&client_secret={}",
            BASE_URL, username, self.client_id, self.client_secret
        )
    }
}

#[async_trait]
impl GithubGateway for GithubClient {
    async fn list_repos(&self, username: &str) -> AppResult<Vec<GithubRepoDTO>> {
        let response = self
            .client
            .get(self.repos_url(username))
            .header(reqwest::header::USER_AGENT, "devhub-backend")
            .send()
            .await
            .map_err(|e| {
                warn!("Github request failed: {}", e);
                AppError::UpstreamUnavailable
            })?;

        if !response.status().is_success() {
            warn!("Github returned {} for user {}", response.status(), username);
            return Err(AppError::UpstreamUnavailable);
        }

        response.json::<Vec<GithubRepoDTO>>().await.map_err(|e| {
            warn!("Failed to decode Github response: {}", e);
            AppError::UpstreamUnavailable
        })
    }
}
