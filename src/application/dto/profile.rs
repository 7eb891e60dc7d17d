use chrono::NaiveDate;

#[derive(Debug)]
pub struct UpsertProfileDTO {
    pub user_id: String,
    pub status: String,
    pub skills: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
}

#[derive(Debug)]
pub struct AddExperienceDTO {
    pub user_id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug)]
pub struct AddEducationDTO {
    pub user_id: String,
    pub school: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug)]
pub struct RemoveEntryDTO {
    pub user_id: String,
    pub entry_id: String,
}
