mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, utils};

use repositories::sqlx_repo::SqlxSubmissionRepo;
use use_cases::submission::SubmissionHandler;

pub struct AppState {
    pub submission_handler: AppSubmissionHandler,
}

pub type AppSubmissionHandler = SubmissionHandler<SqlxSubmissionRepo>;

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let submission_repo = SqlxSubmissionRepo::new(pool);
        let submission_handler = SubmissionHandler::new(submission_repo);

        AppState { submission_handler }
    }
}
