use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::{Pool, Postgres};

use crate::adapter::db::gateway::post::PostGateway;
use crate::adapter::db::gateway::profile::ProfileGateway;
use crate::adapter::db::gateway::user::UserGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interactors::auth::LoginInteractor;
use crate::application::interactors::github::GetGithubReposInteractor;
use crate::application::interactors::post::{
    AddCommentInteractor, CreatePostInteractor, DeleteCommentInteractor, DeletePostInteractor, GetPostInteractor,
    LikePostInteractor, ListPostsInteractor, UnlikePostInteractor,
};
use crate::application::interactors::profile::{
    AddEducationInteractor, AddExperienceInteractor, DeleteAccountInteractor, GetAllProfilesInteractor,
    GetOwnProfileInteractor, GetProfileByUserInteractor, RemoveEducationInteractor, RemoveExperienceInteractor,
    UpsertProfileInteractor,
};
use crate::application::interactors::users::{GetMeInteractor, RegisterUserInteractor};
use crate::application::interface::crypto::CredentialsHasher;
use crate::application::interface::github::GithubGateway;
use crate::application::interface::token::TokenService;
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Postgres>,
    pub hasher: Arc<dyn CredentialsHasher>,
    pub tokens: Arc<dyn TokenService>,
    pub github: Arc<dyn GithubGateway>,
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

#[async_trait]
pub trait FromAppState: Sized {
    async fn from_app_state(state: &AppState) -> AppResult<Self>;
}

macro_rules! impl_from_request_parts {
    ($interactor:ty) => {
        impl<S> FromRequestParts<S> for $interactor
        where
            S: Send + Sync,
            AppState: FromRef<S>,
        {
            type Rejection = AppError;

            async fn from_request_parts(_parts: &mut Parts, state: &S) -> AppResult<Self> {
                let app_state = AppState::from_ref(state);
                <$interactor>::from_app_state(&app_state).await
            }
        }
    };
}

// RegisterUserInteractor
#[async_trait]
impl FromAppState for RegisterUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());

        Ok(RegisterUserInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway.clone()),
            Arc::new(user_gateway),
            state.hasher.clone(),
            state.tokens.clone(),
        ))
    }
}
impl_from_request_parts!(RegisterUserInteractor);

// LoginInteractor
#[async_trait]
impl FromAppState for LoginInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session);

        Ok(LoginInteractor::new(
            Arc::new(user_gateway),
            state.hasher.clone(),
            state.tokens.clone(),
        ))
    }
}
impl_from_request_parts!(LoginInteractor);

// GetMeInteractor
#[async_trait]
impl FromAppState for GetMeInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = Arc::new(UserGateway::new(session));

        Ok(GetMeInteractor::new(user_gateway))
    }
}
impl_from_request_parts!(GetMeInteractor);

// GetOwnProfileInteractor
#[async_trait]
impl FromAppState for GetOwnProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session);

        Ok(GetOwnProfileInteractor::new(Arc::new(profile_gateway)))
    }
}
impl_from_request_parts!(GetOwnProfileInteractor);

// GetAllProfilesInteractor
#[async_trait]
impl FromAppState for GetAllProfilesInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session);

        Ok(GetAllProfilesInteractor::new(Arc::new(profile_gateway)))
    }
}
impl_from_request_parts!(GetAllProfilesInteractor);

// GetProfileByUserInteractor
#[async_trait]
impl FromAppState for GetProfileByUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session);

        Ok(GetProfileByUserInteractor::new(Arc::new(profile_gateway)))
    }
}
impl_from_request_parts!(GetProfileByUserInteractor);

// UpsertProfileInteractor
#[async_trait]
impl FromAppState for UpsertProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(UpsertProfileInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}
impl_from_request_parts!(UpsertProfileInteractor);

// DeleteAccountInteractor
#[async_trait]
impl FromAppState for DeleteAccountInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());
        let user_gateway = UserGateway::new(session.clone());

        Ok(DeleteAccountInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway),
            Arc::new(user_gateway),
        ))
    }
}
impl_from_request_parts!(DeleteAccountInteractor);

// AddExperienceInteractor
#[async_trait]
impl FromAppState for AddExperienceInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(AddExperienceInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}
impl_from_request_parts!(AddExperienceInteractor);

// RemoveExperienceInteractor
#[async_trait]
impl FromAppState for RemoveExperienceInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(RemoveExperienceInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}
impl_from_request_parts!(RemoveExperienceInteractor);

// AddEducationInteractor
#[async_trait]
impl FromAppState for AddEducationInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(AddEducationInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}
impl_from_request_parts!(AddEducationInteractor);

// RemoveEducationInteractor
#[async_trait]
impl FromAppState for RemoveEducationInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(RemoveEducationInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}
impl_from_request_parts!(RemoveEducationInteractor);

// CreatePostInteractor
#[async_trait]
impl FromAppState for CreatePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(CreatePostInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway),
            Arc::new(post_gateway),
        ))
    }
}
impl_from_request_parts!(CreatePostInteractor);

// ListPostsInteractor
#[async_trait]
impl FromAppState for ListPostsInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session);

        Ok(ListPostsInteractor::new(Arc::new(post_gateway)))
    }
}
impl_from_request_parts!(ListPostsInteractor);

// GetPostInteractor
#[async_trait]
impl FromAppState for GetPostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session);

        Ok(GetPostInteractor::new(Arc::new(post_gateway)))
    }
}
impl_from_request_parts!(GetPostInteractor);

// DeletePostInteractor
#[async_trait]
impl FromAppState for DeletePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(DeletePostInteractor::new(
            Arc::new(session),
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}
impl_from_request_parts!(DeletePostInteractor);

// LikePostInteractor
#[async_trait]
impl FromAppState for LikePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(LikePostInteractor::new(
            Arc::new(session),
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}
impl_from_request_parts!(LikePostInteractor);

// UnlikePostInteractor
#[async_trait]
impl FromAppState for UnlikePostInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(UnlikePostInteractor::new(
            Arc::new(session),
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}
impl_from_request_parts!(UnlikePostInteractor);

// AddCommentInteractor
#[async_trait]
impl FromAppState for AddCommentInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(AddCommentInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway),
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}
impl_from_request_parts!(AddCommentInteractor);

// DeleteCommentInteractor
#[async_trait]
impl FromAppState for DeleteCommentInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let post_gateway = PostGateway::new(session.clone());

        Ok(DeleteCommentInteractor::new(
            Arc::new(session),
            Arc::new(post_gateway.clone()),
            Arc::new(post_gateway),
        ))
    }
}
impl_from_request_parts!(DeleteCommentInteractor);

// GetGithubReposInteractor
#[async_trait]
impl FromAppState for GetGithubReposInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        Ok(GetGithubReposInteractor::new(state.github.clone()))
    }
}
impl_from_request_parts!(GetGithubReposInteractor);
