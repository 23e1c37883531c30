use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /api/config: effective config plus validation warnings.
pub async fn get_config(State(app): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "config": &*app.config,
        "warnings": app.config.validate(),
        "lifespan_min": weeks_core::calendar::LIFESPAN_MIN,
        "lifespan_max": weeks_core::calendar::LIFESPAN_MAX,
    }))
}
