use axum::extract::State;
use axum::Json;
use weeks_core::state::View;

use crate::state::AppState;

/// GET /api/state: everything the page renders (inputs, grid, which is null until a
/// birth date is set, milestones and the editor snapshot).
pub async fn get_state(State(app): State<AppState>) -> Json<View> {
    Json(app.view())
}
