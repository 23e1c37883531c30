use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

use crate::error::AppError;

#[derive(Embed)]
#[folder = "../../frontend/dist/"]
struct FrontendAssets;

const INDEX: &str = "index.html";

/// Embedded file at `path` with its guessed content type.
fn asset(path: &str) -> Option<Response> {
    let content = <FrontendAssets as Embed>::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Some(
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, mime.as_ref()),
                (header::CACHE_CONTROL, "no-cache"),
            ],
            content.data.into_owned(),
        )
            .into_response(),
    )
}

/// Fallback for everything the API router does not match.
///
/// Unknown `/api/` paths answer with the API's JSON error body; any other
/// path is either an embedded file or the page itself.
pub async fn static_handler(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    if path.starts_with("api/") {
        return AppError::not_found(format!("no such endpoint: /{path}")).into_response();
    }
    asset(path)
        .or_else(|| asset(INDEX))
        .unwrap_or_else(|| (StatusCode::NOT_FOUND, "frontend not built").into_response())
}
