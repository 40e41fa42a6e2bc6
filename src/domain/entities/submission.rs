use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::skill::{NewSkill, Skill};

/// Why the user is building a career map. Stored as a Postgres enum,
/// serialized as the same kebab-case codes the intake form sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "submission_purpose", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Purpose {
    JobSearch,
    CareerChange,
    SkillReview,
    SelfAnalysis,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewSubmissionForm {
    #[validate(length(min = 2, max = 50, message = "Username must be 2 to 50 characters"))]
    pub username: String,

    #[validate(range(min = 18, max = 60, message = "Age must be between 18 and 60"))]
    pub age: i32,

    #[validate(range(min = 1, message = "Years of experience must be at least 1"))]
    pub years_of_experience: i32,

    pub annual_salary: Option<i64>,

    pub purpose: Option<Purpose>,

    #[validate(
        length(min = 1, message = "At least one skill is required"),
        nested
    )]
    pub skills: Vec<NewSkill>,
}

#[derive(Debug)]
pub struct SubmissionInsert {
    pub username: String,
    pub age: i32,
    pub years_of_experience: i32,
    pub annual_salary: Option<i64>,
    pub purpose: Option<Purpose>,
    pub created_at: DateTime<Utc>,
}

impl NewSubmissionForm {
    pub fn prepare_for_insert(&self) -> SubmissionInsert {
        SubmissionInsert {
            username: self.username.trim().to_string(),
            age: self.age,
            years_of_experience: self.years_of_experience,
            annual_salary: self.annual_salary,
            purpose: self.purpose,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Submission {
    pub id: Uuid,
    pub username: String,
    pub age: i32,
    pub years_of_experience: i32,
    pub annual_salary: Option<i64>,
    pub purpose: Option<Purpose>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SubmissionDetail {
    #[serde(flatten)]
    pub submission: Submission,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Serialize)]
pub struct SubmissionListResponse {
    pub submissions: Vec<Submission>,
    pub total: i64,
}
