use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::auth::{LoginRequest, TokenResponse};
use crate::adapter::http::schema::user::GetUserResponse;
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::auth::LoginDTO;
use crate::application::dto::id::IdDTO;
use crate::application::interactors::auth::LoginInteractor;
use crate::application::interactors::users::GetMeInteractor;

#[utoipa::path(
    post,
    path = "/api/auth",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    interactor: LoginInteractor,
    ValidJson(payload): ValidJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = LoginDTO {
        email: payload.email.to_string(),
        password: payload.password,
    };
    let result = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(TokenResponse { token: result.token })))
}

#[utoipa::path(
    get,
    path = "/api/auth",
    tag = "Auth",
    security(("tokenAuth" = [])),
    responses(
        (status = 200, description = "Current user, without the password hash", body = GetUserResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    )
)]
pub async fn get_me(auth_user: AuthUser, interactor: GetMeInteractor) -> AppResult<impl IntoResponse> {
    let user = interactor.execute(IdDTO { id: auth_user.user_id }).await?;
    let response = GetUserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        avatar: user.avatar,
        created_at: user.created_at,
    };
    Ok((StatusCode::OK, Json(response)))
}
