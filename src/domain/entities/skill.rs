use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewSkill {
    #[validate(length(min = 1, max = 100, message = "Skill name cannot be empty"))]
    pub name: String,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
