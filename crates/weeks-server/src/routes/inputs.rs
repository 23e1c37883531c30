use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use weeks_core::calendar;
use weeks_core::error::WeeksError;
use weeks_core::state::{self, Action, View};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct BirthDateBody {
    /// `YYYY-MM-DD`; null or empty clears the birth date.
    #[serde(default)]
    pub birth_date: Option<String>,
}

/// PUT /api/birth-date: set or clear the birth date.
pub async fn put_birth_date(
    State(app): State<AppState>,
    Json(body): Json<BirthDateBody>,
) -> Result<Json<View>, AppError> {
    let birth_date = state::parse_birth_date(body.birth_date.as_deref().unwrap_or(""))?;
    let (_, view) = app.apply(Action::SetBirthDate { birth_date })?;
    tracing::info!(?birth_date, "birth date updated");
    Ok(Json(view))
}

#[derive(Deserialize)]
pub struct LifespanBody {
    pub years: u32,
}

/// PUT /api/lifespan: set the lifespan. The input control's 1–120 range is
/// enforced here; the week model itself does not clamp.
pub async fn put_lifespan(
    State(app): State<AppState>,
    Json(body): Json<LifespanBody>,
) -> Result<Json<View>, AppError> {
    if !calendar::lifespan_in_range(body.years) {
        return Err(WeeksError::InvalidLifespan(body.years).into());
    }
    let (_, view) = app.apply(Action::SetLifespan { years: body.years })?;
    tracing::info!(years = body.years, "lifespan updated");
    Ok(Json(view))
}
