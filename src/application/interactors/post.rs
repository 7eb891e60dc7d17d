use std::sync::Arc;

use tracing::info;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::post::{AddCommentDTO, CreatePostDTO, DeleteCommentDTO, PostActionDTO};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::post::{PostReader, PostWriter};
use crate::application::interface::gateway::user::UserReader;
use crate::domain::entities::id::Id;
use crate::domain::entities::post::{Comment, Like, Post};
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct CreatePostInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl CreatePostInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: CreatePostDTO) -> AppResult<Post> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let author = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::NotFound("User"))?;
        let post = Post::new(&author, dto.text);
        self.post_writer.insert(post.clone()).await?;
        self.db_session.commit().await?;
        info!("User {} created post {}", author.id.value, post.id.value);
        Ok(post)
    }
}

#[derive(Clone)]
pub struct ListPostsInteractor {
    post_reader: Arc<dyn PostReader>,
}

impl ListPostsInteractor {
    pub fn new(post_reader: Arc<dyn PostReader>) -> Self {
        Self { post_reader }
    }

    pub async fn execute(&self) -> AppResult<Vec<Post>> {
        self.post_reader.list_all().await
    }
}

#[derive(Clone)]
pub struct GetPostInteractor {
    post_reader: Arc<dyn PostReader>,
}

impl GetPostInteractor {
    pub fn new(post_reader: Arc<dyn PostReader>) -> Self {
        Self { post_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<Post> {
        let post_id: Id<Post> = dto.id.try_into()?;
        self.post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::NotFound("Post"))
    }
}

#[derive(Clone)]
pub struct DeletePostInteractor {
    db_session: Arc<dyn DBSession>,
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl DeletePostInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        post_reader: Arc<dyn PostReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: PostActionDTO) -> AppResult<()> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let post_id: Id<Post> = dto.post_id.try_into()?;
        let post = self
            .post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::NotFound("Post"))?;
        if post.user.value != user_id.value {
            return Err(AppError::Forbidden);
        }
        self.post_writer.delete(&post_id).await?;
        self.db_session.commit().await?;
        info!("User {} deleted post {}", user_id.value, post_id.value);
        Ok(())
    }
}

#[derive(Clone)]
pub struct LikePostInteractor {
    db_session: Arc<dyn DBSession>,
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl LikePostInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        post_reader: Arc<dyn PostReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: PostActionDTO) -> AppResult<Vec<Like>> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let post_id: Id<Post> = dto.post_id.try_into()?;
        let mut post = self
            .post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::NotFound("Post"))?;
        if post.is_liked_by(&user_id) {
            return Err(AppError::AlreadyLiked);
        }
        post.add_like(user_id);
        let likes = post.likes.clone();
        self.post_writer.update(post).await?;
        self.db_session.commit().await?;
        Ok(likes)
    }
}

#[derive(Clone)]
pub struct UnlikePostInteractor {
    db_session: Arc<dyn DBSession>,
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl UnlikePostInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        post_reader: Arc<dyn PostReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: PostActionDTO) -> AppResult<Vec<Like>> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let post_id: Id<Post> = dto.post_id.try_into()?;
        let mut post = self
            .post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::NotFound("Post"))?;
        if !post.is_liked_by(&user_id) {
            return Err(AppError::NotLiked);
        }
        post.remove_like(&user_id);
        let likes = post.likes.clone();
        self.post_writer.update(post).await?;
        self.db_session.commit().await?;
        Ok(likes)
    }
}

#[derive(Clone)]
pub struct AddCommentInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl AddCommentInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        post_reader: Arc<dyn PostReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: AddCommentDTO) -> AppResult<Post> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let post_id: Id<Post> = dto.post_id.try_into()?;
        let author = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::NotFound("User"))?;
        let mut post = self
            .post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::NotFound("Post"))?;
        post.add_comment(&author, dto.text);
        self.post_writer.update(post.clone()).await?;
        self.db_session.commit().await?;
        Ok(post)
    }
}

#[derive(Clone)]
pub struct DeleteCommentInteractor {
    db_session: Arc<dyn DBSession>,
    post_reader: Arc<dyn PostReader>,
    post_writer: Arc<dyn PostWriter>,
}

impl DeleteCommentInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        post_reader: Arc<dyn PostReader>,
        post_writer: Arc<dyn PostWriter>,
    ) -> Self {
        Self {
            db_session,
            post_reader,
            post_writer,
        }
    }

    pub async fn execute(&self, dto: DeleteCommentDTO) -> AppResult<Post> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let post_id: Id<Post> = dto.post_id.try_into()?;
        let comment_id: Id<Comment> = dto.comment_id.try_into()?;
        let mut post = self
            .post_reader
            .find_by_id(&post_id)
            .await?
            .ok_or(AppError::NotFound("Post"))?;
        let comment = post.find_comment(&comment_id).ok_or(AppError::NotFound("Comment"))?;
        if comment.user.value != user_id.value {
            return Err(AppError::Forbidden);
        }
        post.remove_comment(&comment_id);
        self.post_writer.update(post.clone()).await?;
        self.db_session.commit().await?;
        Ok(post)
    }
}
