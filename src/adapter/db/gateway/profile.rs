use async_trait::async_trait;
use futures::FutureExt;
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Profile, SocialLinks};
use crate::domain::entities::user::User;

/// Profiles persist as one row per user; skills and the experience and
/// education sub-collections live in JSONB columns and are read and
/// written whole with the aggregate.
#[derive(Clone)]
pub struct ProfileGateway {
    session: SqlxSession,
}

impl ProfileGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_profile(row: &PgRow) -> AppResult<Profile> {
        Ok(Profile {
            id: Id::new(row.try_get("id")?),
            user_id: Id::new(row.try_get("user_id")?),
            company: row.try_get("company")?,
            website: row.try_get("website")?,
            location: row.try_get("location")?,
            status: row.try_get("status")?,
            skills: serde_json::from_value(row.try_get("skills")?)?,
            bio: row.try_get("bio")?,
            github_username: row.try_get("github_username")?,
            social: SocialLinks {
                youtube: row.try_get("youtube")?,
                twitter: row.try_get("twitter")?,
                instagram: row.try_get("instagram")?,
                linkedin: row.try_get("linkedin")?,
                facebook: row.try_get("facebook")?,
            },
            experience: serde_json::from_value(row.try_get("experience")?)?,
            education: serde_json::from_value(row.try_get("education")?)?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl ProfileReader for ProfileGateway {
    async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, user_id, company, website, location, status, skills, bio,
                                github_username, youtube, twitter, instagram, linkedin, facebook,
                                experience, education, updated_at
                            FROM
                                profiles
                            WHERE user_id = $1
                        "#,
                    )
                    .bind(user_id)
                    .fetch_optional(tx.as_mut())
                    .await?;

                    result.as_ref().map(Self::map_profile).transpose()
                }
                .boxed()
            })
            .await
    }

    async fn list_all(&self) -> AppResult<Vec<Profile>> {
        self.session
            .with_tx(|tx| {
                async move {
                    let rows = sqlx::query(
                        r#"
                            SELECT
                                id, user_id, company, website, location, status, skills, bio,
                                github_username, youtube, twitter, instagram, linkedin, facebook,
                                experience, education, updated_at
                            FROM
                                profiles
                        "#,
                    )
                    .fetch_all(tx.as_mut())
                    .await?;

                    rows.iter().map(Self::map_profile).collect()
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl ProfileWriter for ProfileGateway {
    async fn save(&self, profile: Profile) -> AppResult<()> {
        let skills = serde_json::to_value(&profile.skills)?;
        let experience = serde_json::to_value(&profile.experience)?;
        let education = serde_json::to_value(&profile.education)?;
        self.session
            .with_tx(|tx| {
                let profile = profile.clone();
                async move {
                    sqlx::query(
                        r#"
                            INSERT INTO profiles
                                (id, user_id, company, website, location, status, skills, bio,
                                 github_username, youtube, twitter, instagram, linkedin, facebook,
                                 experience, education, updated_at)
                            VALUES
                                ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
                            ON CONFLICT (user_id) DO UPDATE SET
                                company = EXCLUDED.company,
                                website = EXCLUDED.website,
                                location = EXCLUDED.location,
                                status = EXCLUDED.status,
                                skills = EXCLUDED.skills,
                                bio = EXCLUDED.bio,
                                github_username = EXCLUDED.github_username,
                                youtube = EXCLUDED.youtube,
                                twitter = EXCLUDED.twitter,
                                instagram = EXCLUDED.instagram,
                                linkedin = EXCLUDED.linkedin,
                                facebook = EXCLUDED.facebook,
                                experience = EXCLUDED.experience,
                                education = EXCLUDED.education,
                                updated_at = EXCLUDED.updated_at
                        "#,
                    )
                    .bind(profile.id.value)
                    .bind(profile.user_id.value)
                    .bind(&profile.company)
                    .bind(&profile.website)
                    .bind(&profile.location)
                    .bind(&profile.status)
                    .bind(skills)
                    .bind(&profile.bio)
                    .bind(&profile.github_username)
                    .bind(&profile.social.youtube)
                    .bind(&profile.social.twitter)
                    .bind(&profile.social.instagram)
                    .bind(&profile.social.linkedin)
                    .bind(&profile.social.facebook)
                    .bind(experience)
                    .bind(education)
                    .bind(profile.updated_at)
                    .execute(tx.as_mut())
                    .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete_by_user_id(&self, user_id: &Id<User>) -> AppResult<()> {
        self.session
            .with_tx(|tx| {
                let user_id = user_id.value;
                async move {
                    sqlx::query("DELETE FROM profiles WHERE user_id = $1")
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
