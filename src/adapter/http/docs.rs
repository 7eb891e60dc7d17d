use axum::{response::Html, Json};
use utoipa::{
    openapi::{
        security::{ApiKey, ApiKeyValue, SecurityScheme},
        OpenApi as OpenApiDoc,
    },
    Modify, OpenApi,
};

use crate::adapter::http::middleware::auth::AUTH_TOKEN_HEADER;
use crate::adapter::http::{
    app_error_impl::{ErrorMessage, ErrorResponse},
    routes::{auth, post, profile, user},
    schema::{
        auth::{LoginRequest, TokenResponse},
        github::GithubRepoResponse,
        post::{AddCommentRequest, CommentResponse, CreatePostRequest, DeletedResponse, LikeResponse, PostResponse},
        profile::{
            AddEducationRequest, AddExperienceRequest, EducationResponse, ExperienceResponse, MessageResponse,
            ProfileResponse, SocialResponse, UpsertProfileRequest,
        },
        user::{GetUserResponse, RegisterRequest},
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut OpenApiDoc) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "tokenAuth",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(AUTH_TOKEN_HEADER))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    paths(
        user::register,
        auth::login,
        auth::get_me,
        profile::get_own_profile,
        profile::get_all_profiles,
        profile::get_profile_by_user,
        profile::upsert_profile,
        profile::delete_account,
        profile::add_experience,
        profile::remove_experience,
        profile::add_education,
        profile::remove_education,
        profile::github_repos,
        post::create_post,
        post::list_posts,
        post::get_post,
        post::delete_post,
        post::like_post,
        post::unlike_post,
        post::add_comment,
        post::delete_comment
    ),
    components(
        schemas(
            ErrorMessage,
            ErrorResponse,
            RegisterRequest,
            GetUserResponse,
            LoginRequest,
            TokenResponse,
            UpsertProfileRequest,
            AddExperienceRequest,
            AddEducationRequest,
            ProfileResponse,
            SocialResponse,
            ExperienceResponse,
            EducationResponse,
            MessageResponse,
            GithubRepoResponse,
            CreatePostRequest,
            AddCommentRequest,
            PostResponse,
            CommentResponse,
            LikeResponse,
            DeletedResponse
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<OpenApiDoc> {
    Json(ApiDoc::openapi())
}

pub async fn docs_ui() -> Html<&'static str> {
    Html(
        r#"
            <!doctype html>
            <html>
              <head>
                <title>API docs</title>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
                <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
              </head>
              <body style="height: 100%; margin: 0;">
                <elements-api
                  apiDescriptionUrl="openapi.json"
                  basePath="/"
                  router="hash"
                />
              </body>
            </html>
        "#,
    )
}
