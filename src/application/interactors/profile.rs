use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::profile::{AddEducationDTO, AddExperienceDTO, RemoveEntryDTO, UpsertProfileDTO};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::application::interface::gateway::user::UserWriter;
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{Education, Experience, Profile};
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct GetOwnProfileInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetOwnProfileInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<Profile> {
        let user_id: Id<User> = dto.id.try_into()?;
        self.profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::NotFound("Profile"))
    }
}

#[derive(Clone)]
pub struct GetAllProfilesInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetAllProfilesInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self) -> AppResult<Vec<Profile>> {
        self.profile_reader.list_all().await
    }
}

#[derive(Clone)]
pub struct GetProfileByUserInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetProfileByUserInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: IdDTO) -> AppResult<Profile> {
        let user_id: Id<User> = dto.id.try_into()?;
        self.profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::NotFound("Profile"))
    }
}

#[derive(Clone)]
pub struct UpsertProfileInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl UpsertProfileInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    /// Create-if-absent, else field replacement. Optional fields omitted
    /// from the request keep their stored value on update.
    pub async fn execute(&self, dto: UpsertProfileDTO) -> AppResult<Profile> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let skills = Profile::parse_skills(&dto.skills);

        let mut profile = match self.profile_reader.find_by_user_id(&user_id).await? {
            Some(mut existing) => {
                existing.status = dto.status;
                existing.skills = skills;
                existing
            }
            None => Profile::new(user_id, dto.status, skills),
        };

        if dto.company.is_some() {
            profile.company = dto.company;
        }
        if dto.website.is_some() {
            profile.website = dto.website;
        }
        if dto.location.is_some() {
            profile.location = dto.location;
        }
        if dto.bio.is_some() {
            profile.bio = dto.bio;
        }
        if dto.github_username.is_some() {
            profile.github_username = dto.github_username;
        }
        if dto.youtube.is_some() {
            profile.social.youtube = dto.youtube;
        }
        if dto.twitter.is_some() {
            profile.social.twitter = dto.twitter;
        }
        if dto.instagram.is_some() {
            profile.social.instagram = dto.instagram;
        }
        if dto.linkedin.is_some() {
            profile.social.linkedin = dto.linkedin;
        }
        if dto.facebook.is_some() {
            profile.social.facebook = dto.facebook;
        }
        profile.updated_at = Utc::now();

        self.profile_writer.save(profile.clone()).await?;
        self.db_session.commit().await?;
        Ok(profile)
    }
}

#[derive(Clone)]
pub struct DeleteAccountInteractor {
    db_session: Arc<dyn DBSession>,
    profile_writer: Arc<dyn ProfileWriter>,
    user_writer: Arc<dyn UserWriter>,
}

impl DeleteAccountInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_writer: Arc<dyn ProfileWriter>,
        user_writer: Arc<dyn UserWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_writer,
            user_writer,
        }
    }

    /// Profile first, then the user. Posts are left in place and keep
    /// rendering from their author snapshot.
    pub async fn execute(&self, dto: IdDTO) -> AppResult<()> {
        let user_id: Id<User> = dto.id.try_into()?;
        self.profile_writer.delete_by_user_id(&user_id).await?;
        self.user_writer.delete(&user_id).await?;
        self.db_session.commit().await?;
        info!("User {} deleted account", user_id.value);
        Ok(())
    }
}

#[derive(Clone)]
pub struct AddExperienceInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl AddExperienceInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: AddExperienceDTO) -> AppResult<Profile> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::NotFound("Profile"))?;
        profile.add_experience(Experience {
            id: Id::generate(),
            title: dto.title,
            company: dto.company,
            location: dto.location,
            from: dto.from,
            to: dto.to,
            current: dto.current,
            description: dto.description,
        });
        profile.updated_at = Utc::now();
        self.profile_writer.save(profile.clone()).await?;
        self.db_session.commit().await?;
        Ok(profile)
    }
}

#[derive(Clone)]
pub struct RemoveExperienceInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl RemoveExperienceInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    /// An unknown entry id leaves the profile unchanged.
    pub async fn execute(&self, dto: RemoveEntryDTO) -> AppResult<Profile> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let entry_id: Id<Experience> = dto.entry_id.try_into()?;
        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::NotFound("Profile"))?;
        profile.remove_experience(&entry_id);
        profile.updated_at = Utc::now();
        self.profile_writer.save(profile.clone()).await?;
        self.db_session.commit().await?;
        Ok(profile)
    }
}

#[derive(Clone)]
pub struct AddEducationInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl AddEducationInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: AddEducationDTO) -> AppResult<Profile> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::NotFound("Profile"))?;
        profile.add_education(Education {
            id: Id::generate(),
            school: dto.school,
            degree: dto.degree,
            field_of_study: dto.field_of_study,
            from: dto.from,
            to: dto.to,
            current: dto.current,
            description: dto.description,
        });
        profile.updated_at = Utc::now();
        self.profile_writer.save(profile.clone()).await?;
        self.db_session.commit().await?;
        Ok(profile)
    }
}

#[derive(Clone)]
pub struct RemoveEducationInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl RemoveEducationInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: RemoveEntryDTO) -> AppResult<Profile> {
        let user_id: Id<User> = dto.user_id.try_into()?;
        let entry_id: Id<Education> = dto.entry_id.try_into()?;
        let mut profile = self
            .profile_reader
            .find_by_user_id(&user_id)
            .await?
            .ok_or(AppError::NotFound("Profile"))?;
        profile.remove_education(&entry_id);
        profile.updated_at = Utc::now();
        self.profile_writer.save(profile.clone()).await?;
        self.db_session.commit().await?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use mockall::mock;
    use rstest::{fixture, rstest};

    use crate::application::app_error::{AppError, AppResult};
    use crate::application::dto::id::IdDTO;
    use crate::application::dto::profile::{AddExperienceDTO, RemoveEntryDTO, UpsertProfileDTO};
    use crate::application::interactors::profile::{
        AddExperienceInteractor, DeleteAccountInteractor, GetOwnProfileInteractor, RemoveExperienceInteractor,
        UpsertProfileInteractor,
    };
    use crate::application::interface::db::DBSession;
    use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
    use crate::application::interface::gateway::user::UserWriter;
    use crate::domain::entities::id::Id;
    use crate::domain::entities::profile::{Experience, Profile};
    use crate::domain::entities::user::User;

    mock! {
        pub DBSessionMock {}

        #[async_trait]
        impl DBSession for DBSessionMock {
            async fn commit(&self) -> AppResult<()>;
            async fn rollback(&self) -> AppResult<()>;
        }
    }

    mock! {
        pub ProfileReaderMock {}

        #[async_trait]
        impl ProfileReader for ProfileReaderMock {
            async fn find_by_user_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>>;
            async fn list_all(&self) -> AppResult<Vec<Profile>>;
        }
    }

    mock! {
        pub ProfileWriterMock {}

        #[async_trait]
        impl ProfileWriter for ProfileWriterMock {
            async fn save(&self, profile: Profile) -> AppResult<()>;
            async fn delete_by_user_id(&self, user_id: &Id<User>) -> AppResult<()>;
        }
    }

    mock! {
        pub UserWriterMock {}

        #[async_trait]
        impl UserWriter for UserWriterMock {
            async fn insert(&self, user: User) -> AppResult<Id<User>>;
            async fn delete(&self, user_id: &Id<User>) -> AppResult<()>;
        }
    }

    fn committing_session() -> MockDBSessionMock {
        let mut db_session = MockDBSessionMock::new();
        db_session.expect_commit().returning(|| Ok(()));
        db_session
    }

    #[fixture]
    fn upsert_dto() -> UpsertProfileDTO {
        UpsertProfileDTO {
            user_id: Id::<User>::generate().to_string(),
            status: "Developer".to_string(),
            skills: "go, rust".to_string(),
            company: None,
            website: None,
            location: None,
            bio: None,
            github_username: None,
            youtube: None,
            twitter: None,
            instagram: None,
            linkedin: None,
            facebook: None,
        }
    }

    fn existing_profile(user_id: &str) -> Profile {
        let mut profile = Profile::new(
            user_id.to_string().try_into().unwrap(),
            "Student".to_string(),
            vec!["c".to_string()],
        );
        profile.company = Some("Acme".to_string());
        profile
    }

    #[rstest]
    #[tokio::test]
    async fn test_upsert_creates_profile_with_parsed_skills(upsert_dto: UpsertProfileDTO) {
        let mut profile_reader = MockProfileReaderMock::new();
        let mut profile_writer = MockProfileWriterMock::new();

        profile_reader.expect_find_by_user_id().returning(|_| Ok(None));
        profile_writer.expect_save().returning(|profile| {
            assert_eq!(profile.skills, vec!["go", "rust"]);
            assert_eq!(profile.status, "Developer");
            Ok(())
        });

        let interactor = UpsertProfileInteractor::new(
            Arc::new(committing_session()),
            Arc::new(profile_reader),
            Arc::new(profile_writer),
        );

        let profile = interactor.execute(upsert_dto).await.unwrap();
        assert_eq!(profile.skills, vec!["go", "rust"]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_upsert_preserves_omitted_fields(upsert_dto: UpsertProfileDTO) {
        let user_id = upsert_dto.user_id.clone();
        let mut profile_reader = MockProfileReaderMock::new();
        let mut profile_writer = MockProfileWriterMock::new();

        profile_reader
            .expect_find_by_user_id()
            .return_once(move |_| Ok(Some(existing_profile(&user_id))));
        profile_writer.expect_save().returning(|_| Ok(()));

        let interactor = UpsertProfileInteractor::new(
            Arc::new(committing_session()),
            Arc::new(profile_reader),
            Arc::new(profile_writer),
        );

        let profile = interactor.execute(upsert_dto).await.unwrap();
        // company was not in the request, the stored value survives
        assert_eq!(profile.company.as_deref(), Some("Acme"));
        assert_eq!(profile.status, "Developer");
    }

    #[rstest]
    #[tokio::test]
    async fn test_upsert_is_keyed_by_owner(upsert_dto: UpsertProfileDTO) {
        let user_id = upsert_dto.user_id.clone();
        let existing = existing_profile(&user_id);
        let existing_id = existing.id.value;
        let mut profile_reader = MockProfileReaderMock::new();
        let mut profile_writer = MockProfileWriterMock::new();

        profile_reader
            .expect_find_by_user_id()
            .return_once(move |_| Ok(Some(existing)));
        profile_writer.expect_save().returning(|_| Ok(()));

        let interactor = UpsertProfileInteractor::new(
            Arc::new(committing_session()),
            Arc::new(profile_reader),
            Arc::new(profile_writer),
        );

        // a second submission updates in place, it never mints a new aggregate
        let profile = interactor.execute(upsert_dto).await.unwrap();
        assert_eq!(profile.id.value, existing_id);
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_own_profile_not_found() {
        let mut profile_reader = MockProfileReaderMock::new();
        profile_reader.expect_find_by_user_id().returning(|_| Ok(None));

        let interactor = GetOwnProfileInteractor::new(Arc::new(profile_reader));
        let result = interactor
            .execute(IdDTO {
                id: Id::<User>::generate().to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound("Profile")));
    }

    #[rstest]
    #[tokio::test]
    async fn test_add_experience_appends() {
        let user_id = Id::<User>::generate().to_string();
        let reader_user_id = user_id.clone();
        let mut profile_reader = MockProfileReaderMock::new();
        let mut profile_writer = MockProfileWriterMock::new();

        profile_reader
            .expect_find_by_user_id()
            .return_once(move |_| Ok(Some(existing_profile(&reader_user_id))));
        profile_writer.expect_save().returning(|_| Ok(()));

        let interactor = AddExperienceInteractor::new(
            Arc::new(committing_session()),
            Arc::new(profile_reader),
            Arc::new(profile_writer),
        );

        let profile = interactor
            .execute(AddExperienceDTO {
                user_id,
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                location: None,
                from: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
                to: None,
                current: true,
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].title, "Engineer");
    }

    #[rstest]
    #[tokio::test]
    async fn test_add_experience_without_profile() {
        let mut profile_reader = MockProfileReaderMock::new();
        profile_reader.expect_find_by_user_id().returning(|_| Ok(None));

        let interactor = AddExperienceInteractor::new(
            Arc::new(MockDBSessionMock::new()),
            Arc::new(profile_reader),
            Arc::new(MockProfileWriterMock::new()),
        );

        let result = interactor
            .execute(AddExperienceDTO {
                user_id: Id::<User>::generate().to_string(),
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                location: None,
                from: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
                to: None,
                current: true,
                description: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound("Profile")));
    }

    #[rstest]
    #[tokio::test]
    async fn test_remove_experience_unknown_id_is_noop() {
        let user_id = Id::<User>::generate().to_string();
        let reader_user_id = user_id.clone();
        let mut profile_reader = MockProfileReaderMock::new();
        let mut profile_writer = MockProfileWriterMock::new();

        profile_reader.expect_find_by_user_id().return_once(move |_| {
            let mut profile = existing_profile(&reader_user_id);
            profile.add_experience(Experience {
                id: Id::generate(),
                title: "kept".to_string(),
                company: "Acme".to_string(),
                location: None,
                from: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                to: None,
                current: false,
                description: None,
            });
            Ok(Some(profile))
        });
        profile_writer.expect_save().returning(|_| Ok(()));

        let interactor = RemoveExperienceInteractor::new(
            Arc::new(committing_session()),
            Arc::new(profile_reader),
            Arc::new(profile_writer),
        );

        let profile = interactor
            .execute(RemoveEntryDTO {
                user_id,
                entry_id: Id::<Experience>::generate().to_string(),
            })
            .await
            .unwrap();

        assert_eq!(profile.experience.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_delete_account_removes_profile_before_user() {
        let order: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
        let mut profile_writer = MockProfileWriterMock::new();
        let mut user_writer = MockUserWriterMock::new();

        let profile_order = order.clone();
        profile_writer.expect_delete_by_user_id().returning(move |_| {
            profile_order.lock().unwrap().push("profile");
            Ok(())
        });
        let user_order = order.clone();
        user_writer.expect_delete().returning(move |_| {
            user_order.lock().unwrap().push("user");
            Ok(())
        });

        let interactor = DeleteAccountInteractor::new(
            Arc::new(committing_session()),
            Arc::new(profile_writer),
            Arc::new(user_writer),
        );

        interactor
            .execute(IdDTO {
                id: Id::<User>::generate().to_string(),
            })
            .await
            .unwrap();

        assert_eq!(*order.lock().unwrap(), vec!["profile", "user"]);
    }
}
