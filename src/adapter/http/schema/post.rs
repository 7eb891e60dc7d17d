use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::post::{Comment, Like, Post};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LikeResponse {
    pub user: String,
}

impl From<&Like> for LikeResponse {
    fn from(like: &Like) -> Self {
        Self {
            user: like.user.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            user: comment.user.to_string(),
            text: comment.text.clone(),
            name: comment.name.clone(),
            avatar: comment.avatar.clone(),
            date: comment.date,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    pub id: String,
    pub user: String,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub likes: Vec<LikeResponse>,
    pub comments: Vec<CommentResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            user: post.user.to_string(),
            text: post.text,
            name: post.name,
            avatar: post.avatar,
            likes: post.likes.iter().map(LikeResponse::from).collect(),
            comments: post.comments.iter().map(CommentResponse::from).collect(),
            created_at: post.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub msg: String,
}
