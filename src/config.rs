//! Configuration management for the collage generator.
//!
//! Values are read from environment variables, optionally seeded from a
//! `.env` file in the local data directory:
//! 1. Command-line flags (highest priority, handled by the caller)
//! 2. Environment variables / `.env` file
//! 3. Application defaults

use std::{
    env,
    path::{Path, PathBuf},
};

use ab_glyph::FontArc;

use crate::{debug, error::CollageError};

/// Default endpoint of the Last.fm Web API.
pub const DEFAULT_API_URL: &str = "http://ws.audioscrobbler.com/2.0/";

/// Well-known font locations tried when no font was configured.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Loads environment variables from `fmsquared/.env` in the local data
/// directory.
///
/// A missing file is not an error, every setting has a default.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/fmsquared/.env`
/// - macOS: `~/Library/Application Support/fmsquared/.env`
/// - Windows: `%LOCALAPPDATA%/fmsquared/.env`
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if async_fs::metadata(&path).await.is_err() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())?;
    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("fmsquared/.env");
    path
}

/// Returns the Last.fm API endpoint, `LASTFM_API_URL` or the public default.
pub fn api_url() -> String {
    env::var("LASTFM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the font configured through `FMSQUARED_FONT`, if any.
pub fn font_path() -> Option<PathBuf> {
    env::var_os("FMSQUARED_FONT").map(PathBuf::from)
}

/// Returns the first system font candidate that exists on this host.
pub fn find_system_font() -> Option<PathBuf> {
    SYSTEM_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

/// Font compiled into the binary, used when nothing else is available.
const BUNDLED_FONT: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

/// Returns the font shipped with the binary (DejaVu Sans).
pub fn bundled_font() -> Result<FontArc, CollageError> {
    FontArc::try_from_slice(BUNDLED_FONT)
        .map_err(|e| CollageError::FontNotFound(format!("bundled font: {}", e)))
}

/// Resolves and loads the caption font.
///
/// An explicit path (from `--font`) wins over `FMSQUARED_FONT`, which wins
/// over the system candidates, which win over the bundled font. An explicitly
/// configured font that cannot be loaded is an error rather than a silent
/// fallback; an unreadable system font falls through to the bundled one.
pub async fn load_font(explicit: Option<PathBuf>) -> Result<FontArc, CollageError> {
    if let Some(path) = explicit.or_else(font_path) {
        return read_font(&path).await;
    }

    if let Some(path) = find_system_font() {
        match read_font(&path).await {
            Ok(font) => return Ok(font),
            Err(e) => debug!("Skipping system font: {}", e),
        }
    }

    debug!("Using the bundled font");
    bundled_font()
}

async fn read_font(path: &Path) -> Result<FontArc, CollageError> {
    debug!("Loading font from {}", path.display());
    let bytes = async_fs::read(path)
        .await
        .map_err(|e| CollageError::FontNotFound(format!("{}: {}", path.display(), e)))?;

    FontArc::try_from_vec(bytes)
        .map_err(|e| CollageError::FontNotFound(format!("{}: {}", path.display(), e)))
}
