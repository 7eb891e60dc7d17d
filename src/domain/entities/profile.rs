use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: Id<Experience>,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: Id<Education>,
    pub school: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SocialLinks {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
}

/// Profile aggregate: one per user, owning its experience and education
/// entries. Experience and education keep insertion order (oldest first),
/// unlike post likes/comments which are newest-first.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Id<Profile>,
    pub user_id: Id<User>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(user_id: Id<User>, status: String, skills: Vec<String>) -> Self {
        Self {
            id: Id::generate(),
            user_id,
            company: None,
            website: None,
            location: None,
            status,
            skills,
            bio: None,
            github_username: None,
            social: SocialLinks::default(),
            experience: Vec::new(),
            education: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Splits a comma-delimited skills string, trimming each token.
    /// Empty tokens are kept: `"go, ,rust"` yields `["go", "", "rust"]`.
    pub fn parse_skills(raw: &str) -> Vec<String> {
        raw.split(',').map(|s| s.trim().to_string()).collect()
    }

    pub fn add_experience(&mut self, entry: Experience) {
        self.experience.push(entry);
    }

    /// Removing an unknown entry id is a no-op.
    pub fn remove_experience(&mut self, entry_id: &Id<Experience>) {
        self.experience.retain(|e| e.id.value != entry_id.value);
    }

    pub fn add_education(&mut self, entry: Education) {
        self.education.push(entry);
    }

    pub fn remove_education(&mut self, entry_id: &Id<Education>) {
        self.education.retain(|e| e.id.value != entry_id.value);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::domain::entities::id::Id;
    use crate::domain::entities::profile::{Education, Experience, Profile};

    fn experience(title: &str) -> Experience {
        Experience {
            id: Id::generate(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: None,
            from: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            to: None,
            current: true,
            description: None,
        }
    }

    fn profile() -> Profile {
        Profile::new(Id::generate(), "Developer".to_string(), vec!["rust".to_string()])
    }

    #[test]
    fn test_parse_skills_trims_tokens() {
        assert_eq!(Profile::parse_skills("go, rust,  sql"), vec!["go", "rust", "sql"]);
    }

    #[test]
    fn test_parse_skills_keeps_empty_tokens() {
        assert_eq!(Profile::parse_skills("go, ,rust,"), vec!["go", "", "rust", ""]);
    }

    #[test]
    fn test_experience_appends_in_insertion_order() {
        let mut profile = profile();
        profile.add_experience(experience("first"));
        profile.add_experience(experience("second"));
        let titles: Vec<&str> = profile.experience.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_remove_experience_by_id() {
        let mut profile = profile();
        let kept = experience("kept");
        let removed = experience("removed");
        let removed_id = removed.id.clone();
        profile.add_experience(kept);
        profile.add_experience(removed);

        profile.remove_experience(&removed_id);

        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].title, "kept");
    }

    #[test]
    fn test_remove_experience_unknown_id_is_noop() {
        let mut profile = profile();
        profile.add_experience(experience("only"));

        profile.remove_experience(&Id::generate());

        assert_eq!(profile.experience.len(), 1);
    }

    #[test]
    fn test_education_round_trips_through_json() {
        let entry = Education {
            id: Id::generate(),
            school: "MIT".to_string(),
            degree: "BSc".to_string(),
            field_of_study: Some("CS".to_string()),
            from: NaiveDate::from_ymd_opt(2016, 9, 1).unwrap(),
            to: Some(NaiveDate::from_ymd_opt(2020, 6, 1).unwrap()),
            current: false,
            description: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        let back: Education = serde_json::from_value(json).unwrap();
        assert_eq!(back.id.value, entry.id.value);
        assert_eq!(back.school, "MIT");
        assert_eq!(back.to, entry.to);
    }
}
