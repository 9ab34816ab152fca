use std::sync::Arc;

use sqlx::PgPool;

use crate::sendy::SendyClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: PgPool,
    pub sendy: SendyClient,
}
