//! # Collage Module
//!
//! Turns a flat, ranked list of albums into a single collage image.
//!
//! ```text
//! Vec<AlbumRecord>
//!      ↓ grid      (optional empty-art filter, row-major partition)
//! Grid
//!      ↓ artwork   (download + 200x200 fit, or black placeholder)
//! cover
//!      ↓ color     (k-means dominant color → caption color)
//! captioned cell
//!      ↓ compose   (cells → rows → collage)
//! RgbImage
//! ```
//!
//! [`save_png`] writes the result so that a failed run never leaves a
//! partially written file behind.

pub mod artwork;
pub mod color;
pub mod compose;
pub mod grid;

use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

use image::{ImageFormat, RgbImage};

use crate::error::CollageError;

pub use artwork::{COVER_SIZE, resolve_cover};
pub use color::{dominant_color, font_color};
pub use compose::{CaptionOptions, compose_collage};
pub use grid::{Grid, build_grid};

/// Encodes `image` as PNG and moves it into place at `path`.
///
/// The encoded bytes go to a hidden sibling file first, which is then renamed
/// over `path`.
pub async fn save_png(image: &RgbImage, path: &Path) -> Result<(), CollageError> {
    let mut bytes: Vec<u8> = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

    let staging = staging_path(path);
    async_fs::write(&staging, &bytes).await?;

    if let Err(e) = async_fs::rename(&staging, path).await {
        let _ = async_fs::remove_file(&staging).await;
        return Err(e.into());
    }

    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "collage.png".to_string());
    path.with_file_name(format!(".{}.partial", name))
}
