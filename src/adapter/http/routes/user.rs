use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::schema::auth::TokenResponse;
use crate::adapter::http::schema::user::RegisterRequest;
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::user::CreateUserDTO;
use crate::application::interactors::users::RegisterUserInteractor;

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body(
        content = RegisterRequest,
        example = json!(
            {
                "name": "John Doe",
                "email": "john@example.com",
                "password": "secret1"
            }
        )
    ),
    responses(
        (status = 200, description = "User registered", body = TokenResponse),
        (status = 400, description = "Validation failure or duplicate email", body = ErrorResponse)
    )
)]
pub async fn register(
    interactor: RegisterUserInteractor,
    ValidJson(payload): ValidJson<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreateUserDTO {
        name: payload.name,
        email: payload.email.to_string(),
        password: payload.password,
    };
    let result = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(TokenResponse { token: result.token })))
}
