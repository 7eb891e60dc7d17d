use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::post::{
    AddCommentRequest, CreatePostRequest, DeletedResponse, LikeResponse, PostResponse,
};
use crate::adapter::http::validation::ValidJson;
use crate::application::app_error::AppResult;
use crate::application::dto::id::IdDTO;
use crate::application::dto::post::{AddCommentDTO, CreatePostDTO, DeleteCommentDTO, PostActionDTO};
use crate::application::interactors::post::{
    AddCommentInteractor, CreatePostInteractor, DeleteCommentInteractor, DeletePostInteractor, GetPostInteractor,
    LikePostInteractor, ListPostsInteractor, UnlikePostInteractor,
};

#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "Posts",
    security(("tokenAuth" = [])),
    request_body(
        content = CreatePostRequest,
        example = json!({ "text": "hello" })
    ),
    responses(
        (status = 200, description = "Created post with the author snapshot", body = PostResponse),
        (status = 400, description = "Empty text", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    )
)]
pub async fn create_post(
    auth_user: AuthUser,
    interactor: CreatePostInteractor,
    ValidJson(payload): ValidJson<CreatePostRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreatePostDTO {
        user_id: auth_user.user_id,
        text: payload.text,
    };
    let post = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(PostResponse::from(post))))
}

#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "Posts",
    security(("tokenAuth" = [])),
    responses(
        (status = 200, description = "All posts, newest first", body = [PostResponse]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    )
)]
pub async fn list_posts(_auth_user: AuthUser, interactor: ListPostsInteractor) -> AppResult<impl IntoResponse> {
    let posts = interactor.execute().await?;
    let response: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = "Posts",
    security(("tokenAuth" = [])),
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = PostResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
pub async fn get_post(
    _auth_user: AuthUser,
    interactor: GetPostInteractor,
    Path(post_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let post = interactor.execute(IdDTO { id: post_id }).await?;
    Ok((StatusCode::OK, Json(PostResponse::from(post))))
}

#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    tag = "Posts",
    security(("tokenAuth" = [])),
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post removed", body = DeletedResponse),
        (status = 401, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
pub async fn delete_post(
    auth_user: AuthUser,
    interactor: DeletePostInteractor,
    Path(post_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = PostActionDTO {
        user_id: auth_user.user_id,
        post_id,
    };
    interactor.execute(dto).await?;
    Ok((
        StatusCode::OK,
        Json(DeletedResponse {
            msg: "Post removed".to_string(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/posts/like/{post_id}",
    tag = "Posts",
    security(("tokenAuth" = [])),
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Like list, newest first", body = [LikeResponse]),
        (status = 400, description = "Already liked", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
pub async fn like_post(
    auth_user: AuthUser,
    interactor: LikePostInteractor,
    Path(post_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = PostActionDTO {
        user_id: auth_user.user_id,
        post_id,
    };
    let likes = interactor.execute(dto).await?;
    let response: Vec<LikeResponse> = likes.iter().map(LikeResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/posts/unlike/{post_id}",
    tag = "Posts",
    security(("tokenAuth" = [])),
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Like list after removal", body = [LikeResponse]),
        (status = 400, description = "Post has not yet been liked", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
pub async fn unlike_post(
    auth_user: AuthUser,
    interactor: UnlikePostInteractor,
    Path(post_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = PostActionDTO {
        user_id: auth_user.user_id,
        post_id,
    };
    let likes = interactor.execute(dto).await?;
    let response: Vec<LikeResponse> = likes.iter().map(LikeResponse::from).collect();
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/posts/comment/{post_id}",
    tag = "Posts",
    security(("tokenAuth" = [])),
    params(("post_id" = String, Path, description = "Post id")),
    request_body = AddCommentRequest,
    responses(
        (status = 200, description = "Post with the new comment first", body = PostResponse),
        (status = 400, description = "Empty text", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    )
)]
pub async fn add_comment(
    auth_user: AuthUser,
    interactor: AddCommentInteractor,
    Path(post_id): Path<String>,
    ValidJson(payload): ValidJson<AddCommentRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = AddCommentDTO {
        user_id: auth_user.user_id,
        post_id,
        text: payload.text,
    };
    let post = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(PostResponse::from(post))))
}

#[utoipa::path(
    delete,
    path = "/api/posts/comment/{post_id}/{comment_id}",
    tag = "Posts",
    security(("tokenAuth" = [])),
    params(
        ("post_id" = String, Path, description = "Post id"),
        ("comment_id" = String, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Post without the comment", body = PostResponse),
        (status = 401, description = "Caller is not the comment author", body = ErrorResponse),
        (status = 404, description = "Post or comment not found", body = ErrorResponse)
    )
)]
pub async fn delete_comment(
    auth_user: AuthUser,
    interactor: DeleteCommentInteractor,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let dto = DeleteCommentDTO {
        user_id: auth_user.user_id,
        post_id,
        comment_id,
    };
    let post = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(PostResponse::from(post))))
}
