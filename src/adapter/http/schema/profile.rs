use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::entities::profile::{Education, Experience, Profile};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertProfileRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
    /// Comma-delimited, e.g. `"go, rust, sql"`.
    #[validate(length(min = 1, message = "Skills is required"))]
    pub skills: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddExperienceRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddEducationRequest {
    #[validate(length(min = 1, message = "School is required"))]
    pub school: String,
    #[validate(length(min = 1, message = "Degree is required"))]
    pub degree: String,
    pub fieldofstudy: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExperienceResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl From<&Experience> for ExperienceResponse {
    fn from(entry: &Experience) -> Self {
        Self {
            id: entry.id.to_string(),
            title: entry.title.clone(),
            company: entry.company.clone(),
            location: entry.location.clone(),
            from: entry.from,
            to: entry.to,
            current: entry.current,
            description: entry.description.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EducationResponse {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl From<&Education> for EducationResponse {
    fn from(entry: &Education) -> Self {
        Self {
            id: entry.id.to_string(),
            school: entry.school.clone(),
            degree: entry.degree.clone(),
            fieldofstudy: entry.field_of_study.clone(),
            from: entry.from,
            to: entry.to,
            current: entry.current,
            description: entry.description.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SocialResponse {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: String,
    pub user: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub social: SocialResponse,
    pub experience: Vec<ExperienceResponse>,
    pub education: Vec<EducationResponse>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            user: profile.user_id.to_string(),
            company: profile.company,
            website: profile.website,
            location: profile.location,
            status: profile.status,
            skills: profile.skills,
            bio: profile.bio,
            githubusername: profile.github_username,
            social: SocialResponse {
                youtube: profile.social.youtube,
                twitter: profile.social.twitter,
                instagram: profile.social.instagram,
                linkedin: profile.social.linkedin,
                facebook: profile.social.facebook,
            },
            experience: profile.experience.iter().map(ExperienceResponse::from).collect(),
            education: profile.education.iter().map(EducationResponse::from).collect(),
            updated_at: profile.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;
    use validator::Validate;

    use crate::adapter::http::schema::profile::{AddEducationRequest, AddExperienceRequest, UpsertProfileRequest};

    #[rstest]
    fn test_upsert_requires_status_and_skills() {
        let request: UpsertProfileRequest = serde_json::from_value(json!({
            "status": "",
            "skills": ""
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("status"));
        assert!(errors.field_errors().contains_key("skills"));
    }

    #[rstest]
    fn test_experience_parses_dates() {
        let request: AddExperienceRequest = serde_json::from_value(json!({
            "title": "Engineer",
            "company": "Acme",
            "from": "2022-03-01",
            "current": true
        }))
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.from.to_string(), "2022-03-01");
        assert!(request.to.is_none());
    }

    #[rstest]
    fn test_education_requires_school_and_degree() {
        let request: AddEducationRequest = serde_json::from_value(json!({
            "school": "",
            "degree": "",
            "from": "2016-09-01"
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("school"));
        assert!(errors.field_errors().contains_key("degree"));
    }
}
