use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::resume::ResumeRow;

/// Loads a resume owned by `user_id`. `None` if it does not exist or belongs to someone else.
pub async fn fetch_resume(
    pool: &PgPool,
    user_id: Uuid,
    resume_id: Uuid,
) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
        .bind(resume_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Overwrites the stored ATS score. Each analysis replaces the previous one.
pub async fn record_ats_score(
    pool: &PgPool,
    user_id: Uuid,
    resume_id: Uuid,
    score: u32,
) -> Result<()> {
    let score = i32::try_from(score)?;
    let result = sqlx::query(
        "UPDATE resumes SET ats_score = $1, updated_at = NOW() WHERE id = $2 AND user_id = $3",
    )
    .bind(score)
    .bind(resume_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        anyhow::bail!("resume {resume_id} disappeared before its score was recorded");
    }
    Ok(())
}
