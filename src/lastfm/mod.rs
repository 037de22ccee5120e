//! # Last.fm Integration Module
//!
//! Thin client for the Last.fm Web API. Every call is an HTTP GET against a
//! single endpoint with `method`, `api_key` and `format=json` query
//! parameters plus method specific ones.
//!
//! ```text
//! Collage pipeline
//!          ↓
//! LastFmClient (query building, status mapping, pagination)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Last.fm Web API
//! ```
//!
//! ## Error Handling
//!
//! There is no retry or rate limit handling. Any non-success status is mapped
//! to [`CollageError::RemoteService`](crate::CollageError::RemoteService),
//! using the `message` of Last.fm's JSON error body when one is present, and
//! aborts the whole operation.
//!
//! ## Usage
//!
//! ```rust
//! let client = LastFmClient::new(token);
//! let albums = client.top_albums("rj", Period::SevenDays, 25).await?;
//! ```

mod albums;
mod client;

pub use albums::MAX_PAGE_SIZE;
pub use client::LastFmClient;
