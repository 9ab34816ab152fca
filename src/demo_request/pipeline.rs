use uuid::Uuid;

use crate::db;
use crate::models::SendyStatus;
use crate::state::SharedState;

use super::DemoRequest;

pub struct PipelineResult {
    pub sendy_status: SendyStatus,
    /// `None` when the audit insert failed. Callers must not change the
    /// response because of it.
    pub record_id: Option<Uuid>,
}

impl PipelineResult {
    pub fn forwarded(&self) -> bool {
        self.sendy_status == SendyStatus::Success
    }
}

/// Forward to Sendy, then record the attempt. Neither step is retried and
/// neither failure aborts the pipeline.
pub async fn run(state: &SharedState, request: &DemoRequest) -> PipelineResult {
    let outcome = state.sendy.subscribe(request).await;

    let record_id = match db::form_submissions::create(
        &state.pool,
        request,
        outcome.status,
        &outcome.response,
    )
    .await
    {
        Ok(record) => Some(record.id),
        Err(e) => {
            tracing::error!(
                email = %request.company_email,
                sendy_status = %outcome.status,
                "Failed to store demo request: {e}"
            );
            None
        }
    };

    tracing::info!(
        sendy_status = %outcome.status,
        record_id = ?record_id,
        "Demo request processed"
    );

    PipelineResult {
        sendy_status: outcome.status,
        record_id,
    }
}
