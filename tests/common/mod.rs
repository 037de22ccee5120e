#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    io::Cursor,
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Extension, Json, Router,
    extract::{Path, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use fmsquared::{lastfm::LastFmClient, types::AlbumRecord};
use image::{ImageFormat, Rgb, RgbImage};
use serde_json::{Value, json};

/// In-process stand-in for the Last.fm API and a cover art host.
#[derive(Clone)]
pub struct MockLastFm {
    pub addr: SocketAddr,
    pub total_albums: usize,
    /// Album indices whose largest cover URL is empty.
    pub missing_art: Arc<HashSet<usize>>,
    pub requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
    pub cover_hits: Arc<AtomicUsize>,
}

impl MockLastFm {
    pub fn api_url(&self) -> String {
        format!("http://{}/2.0/", self.addr)
    }

    pub fn cover_url(&self, name: &str) -> String {
        format!("http://{}/covers/{}", self.addr, name)
    }

    pub fn client(&self) -> LastFmClient {
        LastFmClient::with_api_url("test-key", self.api_url())
    }

    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn cover_hits(&self) -> usize {
        self.cover_hits.load(Ordering::SeqCst)
    }
}

pub async fn start_mock(total_albums: usize) -> MockLastFm {
    start_mock_with_missing_art(total_albums, &[]).await
}

pub async fn start_mock_with_missing_art(total_albums: usize, missing_art: &[usize]) -> MockLastFm {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mock = MockLastFm {
        addr,
        total_albums,
        missing_art: Arc::new(missing_art.iter().copied().collect()),
        requests: Arc::new(Mutex::new(Vec::new())),
        cover_hits: Arc::new(AtomicUsize::new(0)),
    };

    let app = Router::new()
        .route("/2.0/", get(api))
        .route("/covers/{file}", get(cover))
        .layer(Extension(mock.clone()));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    mock
}

async fn api(
    Query(params): Query<HashMap<String, String>>,
    Extension(mock): Extension<MockLastFm>,
) -> Response {
    mock.requests.lock().unwrap().push(params.clone());

    match params.get("user").map(String::as_str) {
        Some("nobody") => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": 6, "message": "User not found" })),
            )
                .into_response();
        }
        Some("garbled") => return Json(json!({ "unexpected": true })).into_response(),
        Some("suspended") => {
            return Json(json!({ "error": 29, "message": "Rate limit exceeded" })).into_response();
        }
        _ => {}
    }

    let limit: usize = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(50);
    let page: usize = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);

    let start = ((page - 1) * limit).min(mock.total_albums);
    let end = (start + limit).min(mock.total_albums);
    let albums: Vec<Value> = (start..end).map(|i| album_json(&mock, i)).collect();

    Json(json!({
        "topalbums": {
            "album": albums,
            "@attr": { "user": params.get("user"), "page": page.to_string() }
        }
    }))
    .into_response()
}

fn album_json(mock: &MockLastFm, index: usize) -> Value {
    let largest = if mock.missing_art.contains(&index) {
        String::new()
    } else {
        mock.cover_url(&format!("{}.png", index))
    };

    json!({
        "name": format!("Album {}", index),
        "artist": { "name": format!("Artist {}", index) },
        "playcount": (100_000 - index).to_string(),
        "image": [
            { "#text": mock.cover_url(&format!("{}-small.png", index)), "size": "small" },
            { "#text": mock.cover_url(&format!("{}-medium.png", index)), "size": "medium" },
            { "#text": largest, "size": "extralarge" }
        ]
    })
}

async fn cover(Path(file): Path<String>, Extension(mock): Extension<MockLastFm>) -> Response {
    mock.cover_hits.fetch_add(1, Ordering::SeqCst);

    if file == "broken.png" {
        return ([(header::CONTENT_TYPE, "image/png")], b"not an image".to_vec()).into_response();
    }
    if file == "gone.png" {
        return StatusCode::NOT_FOUND.into_response();
    }

    // even covers are white, odd ones black
    let index: usize = file
        .trim_end_matches(".png")
        .split('-')
        .next()
        .and_then(|i| i.parse().ok())
        .unwrap_or(0);
    let color = if index % 2 == 0 {
        Rgb([255, 255, 255])
    } else {
        Rgb([0, 0, 0])
    };

    ([(header::CONTENT_TYPE, "image/png")], png_bytes(300, 300, color)).into_response()
}

pub fn png_bytes(width: u32, height: u32, color: Rgb<u8>) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, color);
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

pub fn test_album(index: usize, images: &[&str]) -> AlbumRecord {
    AlbumRecord {
        name: format!("Album {}", index),
        artist: format!("Artist {}", index),
        playcount: index as u64,
        images: images.iter().map(|s| s.to_string()).collect(),
    }
}

/// Albums without any cover URL; they render as black cells offline.
pub fn offline_albums(count: usize) -> Vec<AlbumRecord> {
    (0..count).map(|i| test_album(i, &[""])).collect()
}
