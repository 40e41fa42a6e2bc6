use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxSubmissionRepo {
    pub pool: PgPool,
}
