use validator::Validate;

use crate::{
    entities::submission::{
        NewSubmissionForm, SubmissionDetail, SubmissionListResponse, SubmissionResponse,
    },
    errors::AppError,
    repositories::submission::SubmissionRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct SubmissionHandler<R>
where
    R: SubmissionRepository,
{
    pub submission_repo: R,
}

impl<R> SubmissionHandler<R>
where
    R: SubmissionRepository,
{
    pub fn new(submission_repo: R) -> Self {
        SubmissionHandler { submission_repo }
    }

    /// Handles a new career map submission: validate, insert the submission,
    /// then insert its skills keyed to the returned id. The two writes are
    /// sequential, not atomic; if the skill insert fails the submission row
    /// is already committed and stays behind.
    pub async fn create_submission(
        &self,
        request: NewSubmissionForm,
    ) -> Result<SubmissionResponse, AppError> {
        request.validate()?;

        let new_submission = request.prepare_for_insert();

        let id = self.submission_repo.create_submission(&new_submission).await?;

        if let Err(e) = self.submission_repo.create_skills(&id, &request.skills).await {
            tracing::error!(
                "Submission {} was saved but its skills were not: {}",
                id,
                e
            );
            return Err(e);
        }

        Ok(SubmissionResponse {
            id,
            message: "Your career map has been received.".to_string(),
        })
    }

    /// Retrieves a submission and its skills by ID
    pub async fn get_submission(&self, id: &str) -> Result<SubmissionDetail, AppError> {
        let valid_id = valid_uuid(id)?;

        let submission = self.submission_repo.get_submission_by_id(&valid_id).await?;
        let skills = self.submission_repo.list_skills(&valid_id).await?;

        Ok(SubmissionDetail { submission, skills })
    }

    /// Lists all submissions, newest first
    pub async fn list_submissions(&self) -> Result<SubmissionListResponse, AppError> {
        let submissions = self.submission_repo.list_submissions().await?;
        let total = self.submission_repo.count_submissions().await?;

        Ok(SubmissionListResponse { submissions, total })
    }

    /// Deletes a submission; its skills go with it
    pub async fn delete_submission(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;

        self.submission_repo
            .delete_submission(&valid_id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => AppError::NotFound("Submission not found".to_string()),
                _ => e,
            })
    }
}
