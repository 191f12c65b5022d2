use std::path::Path;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::query::CallbackQuery;

/// Page served at the root path. Read from the working directory on every
/// request, so edits show up on the next reload.
pub const TEST_PAGE: &str = "test-oauth2-client.html";

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("failed to read {path:?}: {source}")]
    Unreadable {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// All routes. Anything other than the test page and the callback falls
/// through to plain static file serving rooted at the working directory.
pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/callback", get(callback))
        .fallback_service(ServeDir::new("."))
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Result<Html<String>, PageError> {
    load_page(Path::new(TEST_PAGE)).await
}

async fn load_page(path: &Path) -> Result<Html<String>, PageError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PageError::Unreadable {
            path: path.to_owned(),
            source,
        })?;

    Ok(Html(contents))
}

/// Hands the callback parameters back to the browser.
///
/// A 200 with a script-driven navigation, not a 3xx redirect: the query has
/// to reach the test page's own script untouched.
async fn callback(query: CallbackQuery) -> Html<String> {
    tracing::debug!(parameters = ?query.parameters(), "callback received");

    Html(callback_page(query.raw()))
}

fn callback_page(raw_query: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>OAuth2 callback</title>
    <meta charset="UTF-8">
</head>
<body>
    <p>Processing the authorization response...</p>
    <script>
        window.location.href = '/{raw_query}';
    </script>
</body>
</html>
"#
    )
}
