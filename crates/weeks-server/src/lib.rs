pub mod embed;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, patch, post, put};
use axum::Router;
use chrono::NaiveDate;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use weeks_core::config::Config;

pub use state::AppState;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve_on()` and available for integration testing.
pub fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // View
        .route("/api/state", get(routes::state::get_state))
        // Inputs
        .route("/api/birth-date", put(routes::inputs::put_birth_date))
        .route("/api/lifespan", put(routes::inputs::put_lifespan))
        // Milestone editor
        .route(
            "/api/weeks/{index}/select",
            post(routes::editor::select_week),
        )
        .route("/api/editor/by-date", post(routes::editor::open_by_date))
        .route("/api/editor", patch(routes::editor::patch_editor))
        .route("/api/editor/commit", post(routes::editor::commit))
        .route("/api/editor/cancel", post(routes::editor::cancel))
        // Milestones
        .route("/api/milestones", get(routes::milestones::list_milestones))
        // Config
        .route("/api/config", get(routes::config::get_config))
        .fallback(embed::static_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the web UI on a pre-bound listener.
///
/// Accepting a bound `TcpListener` lets the caller print the actual port
/// first when `port = 0` and the OS picks one.
pub async fn serve_on(
    config: Config,
    pinned_today: Option<NaiveDate>,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(AppState::new(config, pinned_today)?);

    tracing::info!("life-in-weeks UI listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        if let Err(e) = open::that(&url) {
            tracing::warn!(error = %e, "could not open browser");
        }
    }

    axum::serve(listener, app).await?;
    Ok(())
}
