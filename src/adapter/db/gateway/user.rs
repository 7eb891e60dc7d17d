use async_trait::async_trait;
use futures::FutureExt;
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct UserGateway {
    session: SqlxSession,
}

impl UserGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_user(result: Option<PgRow>) -> AppResult<Option<User>> {
        match result {
            Some(row) => Ok(Some(User {
                id: Id::new(row.try_get("id")?),
                name: row.try_get("name")?,
                email: row.try_get("email")?,
                password: row.try_get("password")?,
                avatar: row.try_get("avatar")?,
                created_at: row.try_get("created_at")?,
            })),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserWriter for UserGateway {
    async fn insert(&self, user: User) -> AppResult<Id<User>> {
        self.session
            .with_tx(|tx| {
                let user = user.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO users
                                (id, name, email, password, avatar, created_at)
                            VALUES
                                ($1, $2, $3, $4, $5, $6)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(user.id.value)
                    .bind(&user.name)
                    .bind(&user.email)
                    .bind(&user.password)
                    .bind(&user.avatar)
                    .bind(user.created_at)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let id: Uuid = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn delete(&self, user_id: &Id<User>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    sqlx::query("DELETE FROM users WHERE id = $1")
                        .bind(user_id)
                        .execute(tx.as_mut())
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl UserReader for UserGateway {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.session
            .with_tx(|tx| {
                let email = email.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, name, email, password, avatar, created_at
                            FROM
                                users
                            WHERE email = $1
                        "#,
                    )
                    .bind(&email)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    Self::map_user(result)
                }
                .boxed()
            })
            .await
    }

    async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<User>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, name, email, password, avatar, created_at
                            FROM
                                users
                            WHERE id = $1
                        "#,
                    )
                    .bind(user_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    Self::map_user(result)
                }
                .boxed()
            })
            .await
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        self.session
            .with_tx(|tx| {
                let email = email.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT EXISTS(
                                SELECT
                                    id
                                FROM
                                    users
                                WHERE email = $1
                            ) AS is_user
                        "#,
                    )
                    .bind(&email)
                    .fetch_one(tx.as_mut())
                    .await?;
                    let is_user: bool = result.try_get("is_user")?;
                    Ok(is_user)
                }
                .boxed()
            })
            .await
    }
}
