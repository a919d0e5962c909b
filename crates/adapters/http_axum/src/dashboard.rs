//! Dashboard page — a single static HTML document.
//!
//! All live data comes from the JSON API; the page polls it from the browser,
//! so no server-side templating is involved and the handler needs no state.

use axum::Router;
use axum::response::Html;
use axum::routing::get;

const INDEX_HTML: &str = include_str!("dashboard/index.html");

/// Build the dashboard sub-router.
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}

/// `GET /` — the dashboard page.
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
