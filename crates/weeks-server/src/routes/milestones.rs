use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /api/milestones: every milestone, with the calendar date of its week
/// once a birth date is set.
pub async fn list_milestones(State(app): State<AppState>) -> Json<serde_json::Value> {
    let list = app.read(|s| {
        s.milestones
            .iter()
            .map(|m| {
                serde_json::json!({
                    "week_index": m.week_index,
                    "description": m.description,
                    "date": s
                        .birth_date
                        .and_then(|b| weeks_core::calendar::week_start(b, m.week_index)),
                })
            })
            .collect::<Vec<_>>()
    });
    Json(serde_json::json!(list))
}
