use axum::{
    extract::State,
    handler::Handler,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Router,
};
use std::path::{Component, Path, PathBuf};
use tower_http::services::ServeDir;

/// Serves the frontend from `dir` for every request no route matched.
/// Extension-less paths also resolve to `<path>.html`.
pub fn with_static_files(router: Router, dir: PathBuf) -> Router {
    let html = html_fallback.with_state(dir.clone());
    router.fallback_service(ServeDir::new(dir).fallback(html))
}

async fn html_fallback(State(dir): State<PathBuf>, uri: Uri) -> Response {
    let Some(path) = html_path(&dir, uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Html(page).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

fn html_path(dir: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = Path::new(request_path.trim_start_matches('/'));
    if relative.as_os_str().is_empty() || relative.extension().is_some() {
        return None;
    }
    if !relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return None;
    }
    let mut path = dir.join(relative);
    path.set_extension("html");
    Some(path)
}
