use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;

/// A pet entry as served by the mock endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pet {
    pub title: String,
    pub description: String,
    pub url: String,
    pub created: String,
}

/// The smallest valid PNG header, enough for a client to recognize the file.
pub const IMAGE_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Image names the server answers for; anything else is a 404.
pub const IMAGE_NAMES: [&str; 4] = ["1.png", "2.png", "3.png", "4.png"];

#[derive(Clone)]
pub struct AppState {
    payload: Arc<Value>,
}

/// The default collection, with image URLs rooted at `base_url`.
pub fn fixture_pets(base_url: &str) -> Vec<Pet> {
    let base = base_url.trim_end_matches('/');
    [
        ("Rex", "A dog", "2021-03-01"),
        ("Mia", "A cat", "2022-07-14"),
        ("Bella", "Friendly dog who loves the beach", "2020-11-30"),
        ("Tom", "Grumpy old cat", "2019-01-05"),
    ]
    .into_iter()
    .zip(IMAGE_NAMES)
    .map(|((title, description, created), image)| Pet {
        title: title.to_string(),
        description: description.to_string(),
        url: format!("{base}/images/{image}"),
        created: created.to_string(),
    })
    .collect()
}

/// Router serving the fixture collection.
pub fn app(base_url: &str) -> Router {
    app_with_payload(serde_json::to_value(fixture_pets(base_url)).unwrap_or(Value::Null))
}

/// Router serving `payload` verbatim from `/pets`, valid or not.
pub fn app_with_payload(payload: Value) -> Router {
    let state = AppState {
        payload: Arc::new(payload),
    };
    Router::new()
        .route("/pets", get(list_pets))
        .route("/images/{name}", get(get_image))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    let base_url = format!("http://{}", listener.local_addr()?);
    axum::serve(listener, app(&base_url)).await
}

pub async fn run_with_payload(listener: TcpListener, payload: Value) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_payload(payload)).await
}

async fn list_pets(State(state): State<AppState>) -> Json<Value> {
    tracing::debug!("serving pet listing");
    Json(state.payload.as_ref().clone())
}

async fn get_image(Path(name): Path<String>) -> Result<impl IntoResponse, StatusCode> {
    if !IMAGE_NAMES.contains(&name.as_str()) {
        tracing::debug!(%name, "unknown image");
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(([(header::CONTENT_TYPE, "image/png")], Bytes::from_static(IMAGE_BYTES)))
}
