use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::info;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::auth::TokenDTO;
use crate::application::dto::id::IdDTO;
use crate::application::dto::user::{CreateUserDTO, UserDTO};
use crate::application::interface::crypto::CredentialsHasher;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::application::interface::token::TokenService;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

/// Deterministic avatar for an email address, Gravatar-style.
pub fn gravatar_url(email: &str) -> String {
    let hash = Sha256::digest(email.trim().to_lowercase().as_bytes());
    format!("https://www.gravatar.com/avatar/{}?s=200&r=pg&d=mm", hex::encode(hash))
}

#[derive(Clone)]
pub struct RegisterUserInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    user_writer: Arc<dyn UserWriter>,
    hasher: Arc<dyn CredentialsHasher>,
    tokens: Arc<dyn TokenService>,
}

impl RegisterUserInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        user_writer: Arc<dyn UserWriter>,
        hasher: Arc<dyn CredentialsHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            user_writer,
            hasher,
            tokens,
        }
    }

    pub async fn execute(&self, dto: CreateUserDTO) -> AppResult<TokenDTO> {
        if self.user_reader.exists_by_email(&dto.email).await? {
            return Err(AppError::DuplicateUser);
        }
        let avatar = gravatar_url(&dto.email);
        let hashed = self.hasher.hash_password(&dto.password).await?;
        let user = User::new(dto.name, dto.email, hashed, avatar);
        let user_id = self.user_writer.insert(user).await?;
        self.db_session.commit().await?;
        info!("User {} registered", user_id.value);
        let token = self.tokens.issue(&user_id)?;
        Ok(TokenDTO { token })
    }
}

#[derive(Clone)]
pub struct GetMeInteractor {
    user_reader: Arc<dyn UserReader>,
}

impl GetMeInteractor {
    pub fn new(user_reader: Arc<dyn UserReader>) -> Self {
        Self { user_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<UserDTO> {
        let user_id: Id<User> = dto.id.try_into()?;
        let user = self
            .user_reader
            .find_by_id(&user_id)
            .await?
            .ok_or(AppError::NotFound("User"))?;
        Ok(UserDTO {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            created_at: user.created_at,
        })
    }
}
