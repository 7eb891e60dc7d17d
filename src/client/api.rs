use chrono::{DateTime, NaiveDate, Utc};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Credential handed to every authenticated call by the caller. Nothing
/// in the client reads it from ambient state.
#[derive(Debug, Clone)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}")]
    Server { status: u16, errors: Vec<String> },
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    msg: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenPayload {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceView {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EducationView {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialView {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileView {
    pub id: String,
    pub user: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub social: SocialView,
    pub experience: Vec<ExperienceView>,
    pub education: Vec<EducationView>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LikeView {
    pub user: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentView {
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostView {
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub likes: Vec<LikeView>,
    pub comments: Vec<CommentView>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepoView {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: i64,
    pub watchers_count: i64,
    pub forks_count: i64,
}

#[derive(Debug, Default, Serialize)]
pub struct ProfileForm {
    pub status: String,
    pub skills: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExperienceForm {
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EducationForm {
    pub school: String,
    pub degree: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fieldofstudy: Option<String>,
    pub from: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, builder: RequestBuilder, token: &AuthToken) -> RequestBuilder {
        builder.header(AUTH_TOKEN_HEADER, token.as_str())
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let errors = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.errors.into_iter().map(|e| e.msg).collect())
            .unwrap_or_default();
        Err(ApiError::Server {
            status: status.as_u16(),
            errors,
        })
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<TokenPayload, ApiError> {
        let body = serde_json::json!({ "name": name, "email": email, "password": password });
        let response = self.http.post(self.url("/api/users")).json(&body).send().await?;
        Self::parse(response).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPayload, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response = self.http.post(self.url("/api/auth")).json(&body).send().await?;
        Self::parse(response).await
    }

    pub async fn current_user(&self, token: &AuthToken) -> Result<UserView, ApiError> {
        let response = self.authed(self.http.get(self.url("/api/auth")), token).send().await?;
        Self::parse(response).await
    }

    pub async fn my_profile(&self, token: &AuthToken) -> Result<ProfileView, ApiError> {
        let response = self
            .authed(self.http.get(self.url("/api/profile/me")), token)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn all_profiles(&self) -> Result<Vec<ProfileView>, ApiError> {
        let response = self.http.get(self.url("/api/profile")).send().await?;
        Self::parse(response).await
    }

    pub async fn profile_by_user(&self, user_id: &str) -> Result<ProfileView, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/api/profile/user/{}", user_id)))
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn upsert_profile(&self, token: &AuthToken, form: &ProfileForm) -> Result<ProfileView, ApiError> {
        let response = self
            .authed(self.http.post(self.url("/api/profile")), token)
            .json(form)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn delete_account(&self, token: &AuthToken) -> Result<(), ApiError> {
        let response = self
            .authed(self.http.delete(self.url("/api/profile")), token)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(ApiError::Server {
            status: status.as_u16(),
            errors: Vec::new(),
        })
    }

    pub async fn add_experience(&self, token: &AuthToken, form: &ExperienceForm) -> Result<ProfileView, ApiError> {
        let response = self
            .authed(self.http.post(self.url("/api/profile/experience")), token)
            .json(form)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn remove_experience(&self, token: &AuthToken, entry_id: &str) -> Result<ProfileView, ApiError> {
        let response = self
            .authed(
                self.http.delete(self.url(&format!("/api/profile/experience/{}", entry_id))),
                token,
            )
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn add_education(&self, token: &AuthToken, form: &EducationForm) -> Result<ProfileView, ApiError> {
        let response = self
            .authed(self.http.post(self.url("/api/profile/education")), token)
            .json(form)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn remove_education(&self, token: &AuthToken, entry_id: &str) -> Result<ProfileView, ApiError> {
        let response = self
            .authed(
                self.http.delete(self.url(&format!("/api/profile/education/{}", entry_id))),
                token,
            )
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn github_repos(&self, username: &str) -> Result<Vec<GithubRepoView>, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/api/profile/github/{}", username)))
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn posts(&self, token: &AuthToken) -> Result<Vec<PostView>, ApiError> {
        let response = self.authed(self.http.get(self.url("/api/posts")), token).send().await?;
        Self::parse(response).await
    }

    pub async fn post(&self, token: &AuthToken, post_id: &str) -> Result<PostView, ApiError> {
        let response = self
            .authed(self.http.get(self.url(&format!("/api/posts/{}", post_id))), token)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn create_post(&self, token: &AuthToken, text: &str) -> Result<PostView, ApiError> {
        let body = serde_json::json!({ "text": text });
        let response = self
            .authed(self.http.post(self.url("/api/posts")), token)
            .json(&body)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn delete_post(&self, token: &AuthToken, post_id: &str) -> Result<(), ApiError> {
        let response = self
            .authed(self.http.delete(self.url(&format!("/api/posts/{}", post_id))), token)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(ApiError::Server {
            status: status.as_u16(),
            errors: Vec::new(),
        })
    }

    pub async fn like_post(&self, token: &AuthToken, post_id: &str) -> Result<Vec<LikeView>, ApiError> {
        let response = self
            .authed(self.http.put(self.url(&format!("/api/posts/like/{}", post_id))), token)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn unlike_post(&self, token: &AuthToken, post_id: &str) -> Result<Vec<LikeView>, ApiError> {
        let response = self
            .authed(self.http.put(self.url(&format!("/api/posts/unlike/{}", post_id))), token)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn add_comment(&self, token: &AuthToken, post_id: &str, text: &str) -> Result<PostView, ApiError> {
        let body = serde_json::json!({ "text": text });
        let response = self
            .authed(self.http.post(self.url(&format!("/api/posts/comment/{}", post_id))), token)
            .json(&body)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn delete_comment(
        &self,
        token: &AuthToken,
        post_id: &str,
        comment_id: &str,
    ) -> Result<PostView, ApiError> {
        let response = self
            .authed(
                self.http
                    .delete(self.url(&format!("/api/posts/comment/{}/{}", post_id, comment_id))),
                token,
            )
            .send()
            .await?;
        Self::parse(response).await
    }
}
