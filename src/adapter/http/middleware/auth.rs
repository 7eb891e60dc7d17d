use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::adapter::http::middleware::extractor::AuthUser;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::token::TokenService;
use crate::infra::state::AppState;

pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Rejects any request without a valid token and binds the resolved
/// identity into the request extensions. No business logic lives here.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let token = request
        .headers()
        .get(AUTH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::Unauthenticated)?;
    let user_id = state.tokens.verify(token)?;
    request.extensions_mut().insert(AuthUser {
        user_id: user_id.to_string(),
    });
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::{middleware, Router};
    use http_body_util::BodyExt;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use crate::adapter::crypto::argon2::ArgonPasswordHasher;
    use crate::adapter::github::client::GithubClient;
    use crate::adapter::http::middleware::auth::{auth_middleware, AUTH_TOKEN_HEADER};
    use crate::adapter::http::middleware::extractor::AuthUser;
    use crate::adapter::token::jwt::JwtTokenService;
    use crate::application::interface::token::TokenService;
    use crate::domain::entities::id::Id;
    use crate::domain::entities::user::User;
    use crate::infra::config::{
        AppConfig, ApplicationConfig, AuthConfig, DatabaseConfig, GithubConfig, LoggerConfig,
    };
    use crate::infra::state::AppState;

    const SECRET: &str = "test-secret";

    fn test_config() -> AppConfig {
        AppConfig {
            db: DatabaseConfig {
                url: "postgres://localhost:5432/devhub-test".to_string(),
                max_connections: 1,
            },
            logger: LoggerConfig {
                log_path: "./logs".to_string(),
            },
            application: ApplicationConfig {
                allow_origins: vec!["*".to_string()],
                address: "127.0.0.1:0".to_string(),
            },
            auth: AuthConfig {
                jwt_secret: SECRET.to_string(),
            },
            github: GithubConfig {
                client_id: String::new(),
                client_secret: String::new(),
            },
        }
    }

    // A lazy pool never touches the database: the gate rejects before any
    // handler could reach it.
    fn test_state() -> AppState {
        let config = test_config();
        let pool = PgPoolOptions::new().connect_lazy(&config.db.url).unwrap();
        AppState {
            pool,
            hasher: Arc::new(ArgonPasswordHasher::default()),
            tokens: Arc::new(JwtTokenService::new(SECRET)),
            github: Arc::new(GithubClient::new(&config.github)),
            config: Arc::new(config),
        }
    }

    async fn probe(auth_user: AuthUser) -> String {
        auth_user.user_id
    }

    fn probe_app(state: AppState) -> Router {
        Router::new()
            .route("/probe", get(probe))
            .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let app = probe_app(test_state());
        let request = Request::builder().uri("/probe").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthorized() {
        let app = probe_app(test_state());
        let request = Request::builder()
            .uri("/probe")
            .header(AUTH_TOKEN_HEADER, "not.a.token")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_token_binds_identity() {
        let state = test_state();
        let user_id: Id<User> = Id::generate();
        let token = state.tokens.issue(&user_id).unwrap();
        let app = probe_app(state);

        let request = Request::builder()
            .uri("/probe")
            .header(AUTH_TOKEN_HEADER, token)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], user_id.to_string().as_bytes());
    }
}
