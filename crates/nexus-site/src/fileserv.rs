//! Static file fallback for the axum router.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use leptos::LeptosOptions;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::app::App;

/// Serves a static file when one matches the request path, otherwise renders
/// the application (which shows its own not-found view).
pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> Response {
    let root = options.site_root.clone();
    let res = get_static_file(uri, &root).await;

    if res.status() == StatusCode::OK {
        res
    } else {
        let handler = leptos_axum::render_app_to_stream(options.to_owned(), App);
        handler(req).await.into_response()
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Response {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("static file request");
    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => res.into_response(),
        // ServeDir is infallible
        Err(err) => match err {},
    }
}
