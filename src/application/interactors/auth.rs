use std::sync::Arc;

use tracing::{info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::auth::{LoginDTO, TokenDTO};
use crate::application::interface::crypto::CredentialsHasher;
use crate::application::interface::gateway::user::UserReader;
use crate::application::interface::token::TokenService;

#[derive(Clone)]
pub struct LoginInteractor {
    user_reader: Arc<dyn UserReader>,
    hasher: Arc<dyn CredentialsHasher>,
    tokens: Arc<dyn TokenService>,
}

impl LoginInteractor {
    pub fn new(
        user_reader: Arc<dyn UserReader>,
        hasher: Arc<dyn CredentialsHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            user_reader,
            hasher,
            tokens,
        }
    }

    /// Unknown email and wrong password yield the same error so the
    /// response never reveals which one it was.
    pub async fn execute(&self, dto: LoginDTO) -> AppResult<TokenDTO> {
        let user = self.user_reader.find_by_email(&dto.email).await?.ok_or_else(|| {
            warn!("Login attempt with non-existent email");
            AppError::InvalidCredentials
        })?;
        let is_valid = self.hasher.verify_password(&dto.password, &user.password).await?;
        if !is_valid {
            warn!("Invalid password for user {}", user.id.value);
            return Err(AppError::InvalidCredentials);
        }
        let token = self.tokens.issue(&user.id)?;
        info!("User {} logged in", user.id.value);
        Ok(TokenDTO { token })
    }
}
