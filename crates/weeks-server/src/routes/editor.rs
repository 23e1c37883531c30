use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use weeks_core::state::{Action, Outcome, View};

use crate::error::AppError;
use crate::state::AppState;

/// POST /api/weeks/{index}/select: a grid cell was clicked.
pub async fn select_week(
    State(app): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<View>, AppError> {
    let (_, view) = app.apply(Action::SelectWeek { week: index })?;
    Ok(Json(view))
}

/// POST /api/editor/by-date: open the editor in date mode.
pub async fn open_by_date(State(app): State<AppState>) -> Result<Json<View>, AppError> {
    let (_, view) = app.apply(Action::OpenByDate)?;
    Ok(Json(view))
}

#[derive(Deserialize, Default)]
pub struct EditorPatch {
    pub description: Option<String>,
    pub date: Option<String>,
    pub picker_open: Option<bool>,
}

/// PATCH /api/editor: update any of the open editor's fields.
pub async fn patch_editor(
    State(app): State<AppState>,
    Json(body): Json<EditorPatch>,
) -> Result<Json<View>, AppError> {
    let mut actions = Vec::new();
    if let Some(open) = body.picker_open {
        actions.push(Action::SetPickerOpen { open });
    }
    if let Some(text) = body.date {
        actions.push(Action::SetDate { text });
    }
    if let Some(text) = body.description {
        actions.push(Action::SetDescription { text });
    }

    let view = app.with(|s, today| {
        for action in actions {
            s.apply(action, today)?;
        }
        Ok::<_, AppError>(s.view(today))
    })?;
    Ok(Json(view))
}

/// POST /api/editor/commit: add the pending milestone.
pub async fn commit(State(app): State<AppState>) -> Result<Json<View>, AppError> {
    let (outcome, view) = app.apply(Action::Commit)?;
    if let Outcome::Committed(m) = &outcome {
        tracing::info!(week = m.week_index, description = %m.description, "milestone added");
    }
    Ok(Json(view))
}

/// POST /api/editor/cancel: close the editor without adding anything.
pub async fn cancel(State(app): State<AppState>) -> Result<Json<View>, AppError> {
    let (_, view) = app.apply(Action::Cancel)?;
    Ok(Json(view))
}
