use crate::client::api::{LikeView, PostView, ProfileView, UserView};
use crate::client::storage::TokenStorage;

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub token: Option<String>,
    /// None until the first auth action resolves.
    pub is_authenticated: Option<bool>,
    pub loading: bool,
    pub user: Option<UserView>,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub profile: Option<ProfileView>,
    pub profiles: Vec<ProfileView>,
    pub loading: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PostsState {
    pub posts: Vec<PostView>,
    pub post: Option<PostView>,
    pub loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Danger,
    Success,
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub id: u64,
    pub kind: AlertKind,
    pub msg: String,
}

#[derive(Debug, Clone, Default)]
pub struct ClientState {
    pub auth: AuthState,
    pub profile: ProfileState,
    pub posts: PostsState,
    pub alerts: Vec<Alert>,
}

/// The closed set of state transitions. Async API calls end in exactly
/// one of these; nothing mutates the tree directly.
#[derive(Debug, Clone)]
pub enum Action {
    RegisterSuccess { token: String },
    RegisterFail,
    LoginSuccess { token: String },
    LoginFail,
    UserLoaded { user: UserView },
    AuthError,
    Logout,
    ProfileLoaded { profile: ProfileView },
    ProfilesLoaded { profiles: Vec<ProfileView> },
    ProfileError,
    ClearProfile,
    PostsLoaded { posts: Vec<PostView> },
    PostLoaded { post: PostView },
    PostCreated { post: PostView },
    PostDeleted { post_id: String },
    LikesUpdated { post_id: String, likes: Vec<LikeView> },
    PostError,
    SetAlert { id: u64, kind: AlertKind, msg: String },
    RemoveAlert { id: u64 },
}

pub fn reduce_auth(state: AuthState, action: &Action) -> AuthState {
    match action {
        Action::UserLoaded { user } => AuthState {
            is_authenticated: Some(true),
            loading: false,
            user: Some(user.clone()),
            ..state
        },
        Action::RegisterSuccess { token } | Action::LoginSuccess { token } => AuthState {
            token: Some(token.clone()),
            is_authenticated: Some(true),
            loading: false,
            ..state
        },
        Action::RegisterFail | Action::LoginFail | Action::AuthError | Action::Logout => AuthState {
            token: None,
            is_authenticated: Some(false),
            loading: false,
            user: None,
        },
        _ => state,
    }
}

pub fn reduce_profile(state: ProfileState, action: &Action) -> ProfileState {
    match action {
        Action::ProfileLoaded { profile } => ProfileState {
            profile: Some(profile.clone()),
            loading: false,
            ..state
        },
        Action::ProfilesLoaded { profiles } => ProfileState {
            profiles: profiles.clone(),
            loading: false,
            ..state
        },
        Action::ProfileError | Action::ClearProfile | Action::Logout => ProfileState {
            profile: None,
            profiles: Vec::new(),
            loading: false,
        },
        _ => state,
    }
}

pub fn reduce_posts(state: PostsState, action: &Action) -> PostsState {
    match action {
        Action::PostsLoaded { posts } => PostsState {
            posts: posts.clone(),
            loading: false,
            ..state
        },
        Action::PostLoaded { post } => PostsState {
            post: Some(post.clone()),
            loading: false,
            ..state
        },
        Action::PostCreated { post } => {
            let mut posts = Vec::with_capacity(state.posts.len() + 1);
            posts.push(post.clone());
            posts.extend(state.posts);
            PostsState {
                posts,
                loading: false,
                post: state.post,
            }
        }
        Action::PostDeleted { post_id } => PostsState {
            posts: state.posts.into_iter().filter(|p| &p.id != post_id).collect(),
            loading: false,
            post: state.post,
        },
        Action::LikesUpdated { post_id, likes } => PostsState {
            posts: state
                .posts
                .into_iter()
                .map(|mut p| {
                    if &p.id == post_id {
                        p.likes = likes.clone();
                    }
                    p
                })
                .collect(),
            loading: false,
            post: state.post,
        },
        Action::PostError | Action::Logout => PostsState::default(),
        _ => state,
    }
}

pub fn reduce_alerts(state: Vec<Alert>, action: &Action) -> Vec<Alert> {
    match action {
        Action::SetAlert { id, kind, msg } => {
            let mut alerts = state;
            alerts.push(Alert {
                id: *id,
                kind: *kind,
                msg: msg.clone(),
            });
            alerts
        }
        Action::RemoveAlert { id } => state.into_iter().filter(|alert| alert.id != *id).collect(),
        _ => state,
    }
}

/// Owns the state tree and routes every action through the slice
/// reducers. The single side rule: successful register/login persists the
/// token through the storage adapter, any auth failure or logout clears
/// it. The token is written nowhere else.
pub struct Store {
    state: ClientState,
    storage: Box<dyn TokenStorage>,
}

impl Store {
    pub fn new(storage: Box<dyn TokenStorage>) -> Self {
        let state = ClientState {
            auth: AuthState {
                token: storage.load(),
                ..AuthState::default()
            },
            ..ClientState::default()
        };
        Self { state, storage }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        match &action {
            Action::RegisterSuccess { token } | Action::LoginSuccess { token } => self.storage.save(token),
            Action::RegisterFail | Action::LoginFail | Action::AuthError | Action::Logout => self.storage.clear(),
            _ => {}
        }

        let state = std::mem::take(&mut self.state);
        self.state = ClientState {
            auth: reduce_auth(state.auth, &action),
            profile: reduce_profile(state.profile, &action),
            posts: reduce_posts(state.posts, &action),
            alerts: reduce_alerts(state.alerts, &action),
        };
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::api::{PostView, UserView};
    use crate::client::storage::{MemoryTokenStorage, TokenStorage};

    fn user_view() -> UserView {
        UserView {
            id: "u1".to_string(),
            name: "John".to_string(),
            email: "john@example.com".to_string(),
            avatar: "https://www.gravatar.com/avatar/x".to_string(),
        }
    }

    fn post_view(id: &str) -> PostView {
        PostView {
            id: id.to_string(),
            user: "u1".to_string(),
            text: "hello".to_string(),
            name: "John".to_string(),
            avatar: "a".to_string(),
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: chrono::Utc::now(),
        }
    }

    struct SharedStorage(Arc<MemoryTokenStorage>);

    impl TokenStorage for SharedStorage {
        fn save(&self, token: &str) {
            self.0.save(token)
        }
        fn load(&self) -> Option<String> {
            self.0.load()
        }
        fn clear(&self) {
            self.0.clear()
        }
    }

    #[test]
    fn test_login_success_sets_and_persists_token() {
        let storage = Arc::new(MemoryTokenStorage::default());
        let mut store = Store::new(Box::new(SharedStorage(storage.clone())));

        store.dispatch(Action::LoginSuccess {
            token: "signed".to_string(),
        });

        assert_eq!(store.state().auth.token.as_deref(), Some("signed"));
        assert_eq!(store.state().auth.is_authenticated, Some(true));
        assert_eq!(storage.load().as_deref(), Some("signed"));
    }

    #[test]
    fn test_auth_error_clears_token_everywhere() {
        let storage = Arc::new(MemoryTokenStorage::default());
        storage.save("stale");
        let mut store = Store::new(Box::new(SharedStorage(storage.clone())));
        assert_eq!(store.state().auth.token.as_deref(), Some("stale"));

        store.dispatch(Action::AuthError);

        assert_eq!(store.state().auth.token, None);
        assert_eq!(store.state().auth.is_authenticated, Some(false));
        assert_eq!(storage.load(), None);
    }

    #[test]
    fn test_logout_resets_profile_and_posts() {
        let mut store = Store::new(Box::new(MemoryTokenStorage::default()));
        store.dispatch(Action::LoginSuccess {
            token: "signed".to_string(),
        });
        store.dispatch(Action::UserLoaded { user: user_view() });
        store.dispatch(Action::PostsLoaded {
            posts: vec![post_view("p1")],
        });

        store.dispatch(Action::Logout);

        assert!(store.state().auth.user.is_none());
        assert!(store.state().profile.profile.is_none());
        assert!(store.state().posts.posts.is_empty());
    }

    #[test]
    fn test_user_loaded_marks_authenticated() {
        let mut store = Store::new(Box::new(MemoryTokenStorage::default()));
        assert_eq!(store.state().auth.is_authenticated, None);

        store.dispatch(Action::UserLoaded { user: user_view() });

        assert_eq!(store.state().auth.is_authenticated, Some(true));
        assert_eq!(store.state().auth.user.as_ref().unwrap().name, "John");
    }

    #[test]
    fn test_post_created_prepends() {
        let mut store = Store::new(Box::new(MemoryTokenStorage::default()));
        store.dispatch(Action::PostsLoaded {
            posts: vec![post_view("old")],
        });

        store.dispatch(Action::PostCreated { post: post_view("new") });

        let ids: Vec<&str> = store.state().posts.posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[test]
    fn test_post_deleted_removes_only_that_post() {
        let mut store = Store::new(Box::new(MemoryTokenStorage::default()));
        store.dispatch(Action::PostsLoaded {
            posts: vec![post_view("p1"), post_view("p2")],
        });

        store.dispatch(Action::PostDeleted {
            post_id: "p1".to_string(),
        });

        let ids: Vec<&str> = store.state().posts.posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p2"]);
    }

    #[test]
    fn test_likes_updated_targets_one_post() {
        let mut store = Store::new(Box::new(MemoryTokenStorage::default()));
        store.dispatch(Action::PostsLoaded {
            posts: vec![post_view("p1"), post_view("p2")],
        });

        store.dispatch(Action::LikesUpdated {
            post_id: "p2".to_string(),
            likes: vec![crate::client::api::LikeView {
                user: "u9".to_string(),
            }],
        });

        let posts = &store.state().posts.posts;
        assert!(posts[0].likes.is_empty());
        assert_eq!(posts[1].likes.len(), 1);
    }

    #[test]
    fn test_alert_lifecycle() {
        let mut store = Store::new(Box::new(MemoryTokenStorage::default()));
        store.dispatch(Action::SetAlert {
            id: 1,
            kind: AlertKind::Danger,
            msg: "Invalid Credentials".to_string(),
        });
        store.dispatch(Action::SetAlert {
            id: 2,
            kind: AlertKind::Success,
            msg: "Profile updated".to_string(),
        });
        assert_eq!(store.state().alerts.len(), 2);

        store.dispatch(Action::RemoveAlert { id: 1 });

        assert_eq!(store.state().alerts.len(), 1);
        assert_eq!(store.state().alerts[0].id, 2);
    }

    // Reducers are pure: the same input always produces the same output.
    #[test]
    fn test_reduce_auth_is_deterministic() {
        let action = Action::LoginSuccess {
            token: "signed".to_string(),
        };
        let a = reduce_auth(AuthState::default(), &action);
        let b = reduce_auth(AuthState::default(), &action);
        assert_eq!(a.token, b.token);
        assert_eq!(a.is_authenticated, b.is_authenticated);
    }

    #[test]
    fn test_store_restores_token_from_storage() {
        let storage = MemoryTokenStorage::default();
        storage.save("persisted");
        let store = Store::new(Box::new(storage));
        assert_eq!(store.state().auth.token.as_deref(), Some("persisted"));
        // restored token alone does not mean authenticated
        assert_eq!(store.state().auth.is_authenticated, None);
    }
}
