use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::github::GithubRepoResponse;
use crate::adapter::http::schema::profile::{
    AddEducationRequest, AddExperienceRequest, MessageResponse, ProfileResponse, UpsertProfileRequest,
};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::{AddEducationDTO, AddExperienceDTO, RemoveEntryDTO, UpsertProfileDTO};
use crate::application::interactors::github::GetGithubReposInteractor;
use crate::application::interactors::profile::{
    AddEducationInteractor, AddExperienceInteractor, DeleteAccountInteractor, GetAllProfilesInteractor,
    GetOwnProfileInteractor, GetProfileByUserInteractor, RemoveEducationInteractor, RemoveExperienceInteractor,
    UpsertProfileInteractor,
};

#[utoipa::path(
    get,
    path = "/api/profile/me",
    tag = "Profile",
    security(("tokenAuth" = [])),
    responses(
        (status = 200, description = "The caller's profile", body = ProfileResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No profile for this user", body = ErrorResponse)
    )
)]
pub async fn get_own_profile(
    auth_user: AuthUser,
    interactor: GetOwnProfileInteractor,
) -> AppResult<impl IntoResponse> {
    let profile = interactor.execute(IdDTO { id: auth_user.user_id }).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "Profile",
    responses(
        (status = 200, description = "All profiles", body = [ProfileResponse])
    )
)]
pub async fn get_all_profiles(interactor: GetAllProfilesInteractor) -> AppResult<impl IntoResponse> {
    let profiles = interactor.execute().await?;
    let response: Vec<ProfileResponse> = profiles.into_iter().map(ProfileResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/profile/user/{user_id}",
    tag = "Profile",
    params(("user_id" = String, Path, description = "Owning user id")),
    responses(
        (status = 200, description = "Profile for the given user", body = ProfileResponse),
        (status = 404, description = "No profile for this user", body = ErrorResponse)
    )
)]
pub async fn get_profile_by_user(
    Path(user_id): Path<String>,
    interactor: GetProfileByUserInteractor,
) -> AppResult<impl IntoResponse> {
    let profile = interactor.execute(IdDTO { id: user_id }).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    post,
    path = "/api/profile",
    tag = "Profile",
    security(("tokenAuth" = [])),
    request_body(
        content = UpsertProfileRequest,
        example = json!(
            {
                "status": "Developer",
                "skills": "go, rust"
            }
        )
    ),
    responses(
        (status = 200, description = "Created or updated profile", body = ProfileResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    )
)]
pub async fn upsert_profile(
    auth_user: AuthUser,
    interactor: UpsertProfileInteractor,
    ValidJson(payload): ValidJson<UpsertProfileRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpsertProfileDTO {
        user_id: auth_user.user_id,
        status: payload.status,
        skills: payload.skills,
        company: payload.company,
        website: payload.website,
        location: payload.location,
        bio: payload.bio,
        github_username: payload.githubusername,
        youtube: payload.youtube,
        twitter: payload.twitter,
        instagram: payload.instagram,
        linkedin: payload.linkedin,
        facebook: payload.facebook,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    delete,
    path = "/api/profile",
    tag = "Profile",
    security(("tokenAuth" = [])),
    responses(
        (status = 200, description = "Profile and user removed", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    )
)]
pub async fn delete_account(
    auth_user: AuthUser,
    interactor: DeleteAccountInteractor,
) -> AppResult<impl IntoResponse> {
    interactor.execute(IdDTO { id: auth_user.user_id }).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            msg: "User deleted".to_string(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/profile/experience",
    tag = "Profile",
    security(("tokenAuth" = [])),
    request_body = AddExperienceRequest,
    responses(
        (status = 200, description = "Updated profile", body = ProfileResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 404, description = "No profile for this user", body = ErrorResponse)
    )
)]
pub async fn add_experience(
    auth_user: AuthUser,
    interactor: AddExperienceInteractor,
    ValidJson(payload): ValidJson<AddExperienceRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = AddExperienceDTO {
        user_id: auth_user.user_id,
        title: payload.title,
        company: payload.company,
        location: payload.location,
        from: payload.from,
        to: payload.to,
        current: payload.current,
        description: payload.description,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    delete,
    path = "/api/profile/experience/{entry_id}",
    tag = "Profile",
    security(("tokenAuth" = [])),
    params(("entry_id" = String, Path, description = "Experience entry id")),
    responses(
        (status = 200, description = "Updated profile; unknown ids leave it unchanged", body = ProfileResponse),
        (status = 404, description = "No profile for this user", body = ErrorResponse)
    )
)]
pub async fn remove_experience(
    auth_user: AuthUser,
    interactor: RemoveExperienceInteractor,
    Path(entry_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = RemoveEntryDTO {
        user_id: auth_user.user_id,
        entry_id,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    post,
    path = "/api/profile/education",
    tag = "Profile",
    security(("tokenAuth" = [])),
    request_body = AddEducationRequest,
    responses(
        (status = 200, description = "Updated profile", body = ProfileResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 404, description = "No profile for this user", body = ErrorResponse)
    )
)]
pub async fn add_education(
    auth_user: AuthUser,
    interactor: AddEducationInteractor,
    ValidJson(payload): ValidJson<AddEducationRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = AddEducationDTO {
        user_id: auth_user.user_id,
        school: payload.school,
        degree: payload.degree,
        field_of_study: payload.fieldofstudy,
        from: payload.from,
        to: payload.to,
        current: payload.current,
        description: payload.description,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    delete,
    path = "/api/profile/education/{entry_id}",
    tag = "Profile",
    security(("tokenAuth" = [])),
    params(("entry_id" = String, Path, description = "Education entry id")),
    responses(
        (status = 200, description = "Updated profile; unknown ids leave it unchanged", body = ProfileResponse),
        (status = 404, description = "No profile for this user", body = ErrorResponse)
    )
)]
pub async fn remove_education(
    auth_user: AuthUser,
    interactor: RemoveEducationInteractor,
    Path(entry_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = RemoveEntryDTO {
        user_id: auth_user.user_id,
        entry_id,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(ProfileResponse::from(profile))))
}

#[utoipa::path(
    get,
    path = "/api/profile/github/{username}",
    tag = "Profile",
    params(("username" = String, Path, description = "Github username")),
    responses(
        (status = 200, description = "Latest public repositories", body = [GithubRepoResponse]),
        (status = 404, description = "No Github profile found", body = ErrorResponse)
    )
)]
pub async fn github_repos(
    Path(username): Path<String>,
    interactor: GetGithubReposInteractor,
) -> AppResult<impl IntoResponse> {
    let repos = interactor.execute(&username).await?;
    let response: Vec<GithubRepoResponse> = repos.into_iter().map(GithubRepoResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}
