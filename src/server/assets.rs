use std::borrow::Cow;

use axum::extract::Path;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;

/// Page bundle. Read from disk in debug builds, embedded in release.
#[derive(RustEmbed)]
#[folder = "assets/"]
struct PageAssets;

pub(super) async fn index() -> Response {
    embedded("index.html")
}

pub(super) async fn asset(Path(path): Path<String>) -> Response {
    embedded(&path)
}

fn embedded(path: &str) -> Response {
    match PageAssets::get(path) {
        Some(asset) => {
            let mime = mime_guess::from_path(path)
                .first_or_octet_stream()
                .to_string();
            let body: Cow<'static, [u8]> = asset.data;
            ([(CONTENT_TYPE, mime)], body.into_owned()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
