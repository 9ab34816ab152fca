use sqlx::PgPool;
use uuid::Uuid;

use crate::demo_request::DemoRequest;
use crate::models::{FormSubmission, SendyStatus};

/// Insert-only: the service never reads these rows back.
pub async fn create(
    pool: &PgPool,
    request: &DemoRequest,
    sendy_status: SendyStatus,
    sendy_response: &str,
) -> Result<FormSubmission, sqlx::Error> {
    sqlx::query_as::<_, FormSubmission>(
        "INSERT INTO form_submissions (id, name, email, phone_number, sendy_status, sendy_response)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(&request.full_name)
    .bind(&request.company_email)
    .bind(&request.phone_number)
    .bind(sendy_status.as_str())
    .bind(sendy_response)
    .fetch_one(pool)
    .await
}
