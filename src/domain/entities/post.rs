use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub user: Id<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Id<Comment>,
    pub user: Id<User>,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

/// Post aggregate. The author's name and avatar are snapshotted at
/// creation and never follow later user edits. Likes and comments are
/// newest-first.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: Id<Post>,
    pub user: Id<User>,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(author: &User, text: String) -> Self {
        Self {
            id: Id::generate(),
            user: author.id.clone(),
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn is_liked_by(&self, user_id: &Id<User>) -> bool {
        self.likes.iter().any(|like| like.user.value == user_id.value)
    }

    pub fn add_like(&mut self, user_id: Id<User>) {
        self.likes.insert(0, Like { user: user_id });
    }

    pub fn remove_like(&mut self, user_id: &Id<User>) {
        self.likes.retain(|like| like.user.value != user_id.value);
    }

    pub fn add_comment(&mut self, author: &User, text: String) -> Id<Comment> {
        let comment = Comment {
            id: Id::generate(),
            user: author.id.clone(),
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            date: Utc::now(),
        };
        let id = comment.id.clone();
        self.comments.insert(0, comment);
        id
    }

    pub fn find_comment(&self, comment_id: &Id<Comment>) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id.value == comment_id.value)
    }

    pub fn remove_comment(&mut self, comment_id: &Id<Comment>) {
        self.comments.retain(|c| c.id.value != comment_id.value);
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::entities::id::Id;
    use crate::domain::entities::post::Post;
    use crate::domain::entities::user::User;

    fn author() -> User {
        User::new(
            "John".to_string(),
            "john@example.com".to_string(),
            "hash".to_string(),
            "https://example.com/avatar".to_string(),
        )
    }

    #[test]
    fn test_new_post_snapshots_author() {
        let user = author();
        let post = Post::new(&user, "hello".to_string());
        assert_eq!(post.user.value, user.id.value);
        assert_eq!(post.name, "John");
        assert_eq!(post.avatar, "https://example.com/avatar");
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());
    }

    #[test]
    fn test_likes_are_newest_first() {
        let user = author();
        let mut post = Post::new(&user, "hello".to_string());
        let first: Id<User> = Id::generate();
        let second: Id<User> = Id::generate();
        post.add_like(first.clone());
        post.add_like(second.clone());
        assert_eq!(post.likes[0].user.value, second.value);
        assert_eq!(post.likes[1].user.value, first.value);
    }

    #[test]
    fn test_is_liked_by() {
        let user = author();
        let mut post = Post::new(&user, "hello".to_string());
        let liker: Id<User> = Id::generate();
        assert!(!post.is_liked_by(&liker));
        post.add_like(liker.clone());
        assert!(post.is_liked_by(&liker));
        post.remove_like(&liker);
        assert!(!post.is_liked_by(&liker));
    }

    #[test]
    fn test_comments_are_newest_first() {
        let user = author();
        let mut post = Post::new(&user, "hello".to_string());
        post.add_comment(&user, "first".to_string());
        post.add_comment(&user, "second".to_string());
        assert_eq!(post.comments[0].text, "second");
        assert_eq!(post.comments[1].text, "first");
    }

    #[test]
    fn test_remove_comment() {
        let user = author();
        let mut post = Post::new(&user, "hello".to_string());
        let comment_id = post.add_comment(&user, "bye".to_string());
        assert!(post.find_comment(&comment_id).is_some());
        post.remove_comment(&comment_id);
        assert!(post.find_comment(&comment_id).is_none());
    }
}
