//! Statistics API endpoints

use api_types::stats::Summary;
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// Handle requests for the expense summary
pub async fn get_summary(State(state): State<ServerState>) -> Result<Json<Summary>, ServerError> {
    let summary = state.with_engine(|engine| Ok(engine.summary())).await?;

    Ok(Json(Summary {
        count: summary.count,
        total: summary.total,
        per_category: summary.per_category,
    }))
}
