use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::{
        skill::{NewSkill, Skill},
        submission::{Submission, SubmissionInsert},
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxSubmissionRepo,
};

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn create_submission(&self, submission: &SubmissionInsert) -> Result<Uuid, AppError>;
    async fn create_skills(&self, submission_id: &Uuid, skills: &[NewSkill]) -> Result<(), AppError>;
    async fn get_submission_by_id(&self, id: &Uuid) -> Result<Submission, AppError>;
    async fn list_skills(&self, submission_id: &Uuid) -> Result<Vec<Skill>, AppError>;
    async fn list_submissions(&self) -> Result<Vec<Submission>, AppError>;
    async fn count_submissions(&self) -> Result<i64, AppError>;
    async fn delete_submission(&self, id: &Uuid) -> Result<(), AppError>;
    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxSubmissionRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxSubmissionRepo { pool }
    }
}

#[async_trait]
impl SubmissionRepository for SqlxSubmissionRepo {
    async fn create_submission(&self, submission: &SubmissionInsert) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO submissions (username, age, years_of_experience, annual_salary, purpose, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&submission.username)
        .bind(submission.age)
        .bind(submission.years_of_experience)
        .bind(submission.annual_salary)
        .bind(submission.purpose)
        .bind(submission.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn create_skills(&self, submission_id: &Uuid, skills: &[NewSkill]) -> Result<(), AppError> {
        // Inserted one at a time after the parent id is known. The writes are
        // not wrapped in a transaction with the parent insert, so a failure
        // here leaves the submission row behind.
        for skill in skills {
            sqlx::query(
                r#"
                INSERT INTO submission_skills (submission_id, name)
                VALUES ($1, $2)
                "#,
            )
            .bind(submission_id)
            .bind(skill.name.trim())
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }

    async fn get_submission_by_id(&self, id: &Uuid) -> Result<Submission, AppError> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            SELECT id, username, age, years_of_experience, annual_salary, purpose, created_at
            FROM submissions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(submission)
    }

    async fn list_skills(&self, submission_id: &Uuid) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"
            SELECT id, submission_id, name, created_at
            FROM submission_skills
            WHERE submission_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(submission_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn list_submissions(&self) -> Result<Vec<Submission>, AppError> {
        let submissions = sqlx::query_as::<_, Submission>(
            r#"
            SELECT id, username, age, years_of_experience, annual_salary, purpose, created_at
            FROM submissions
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }

    async fn count_submissions(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM submissions"#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn delete_submission(&self, id: &Uuid) -> Result<(), AppError> {
        sqlx::query(r#"DELETE FROM submissions WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|result| {
                if result.rows_affected() == 0 {
                    Err(AppError::NotFound("Submission not found".into()))
                } else {
                    Ok(())
                }
            })?
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
