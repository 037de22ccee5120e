use image::{DynamicImage, RgbImage, imageops::FilterType};
use reqwest::Client;

use crate::{debug, error::CollageError, types::AlbumRecord, utils};

/// Edge length in pixels of every collage cell.
pub const COVER_SIZE: u32 = 200;

/// Extensions of cover art URLs that are downloaded and decoded.
pub const ART_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// The largest cover URL of `album`, if it is non-empty and points to a
/// supported image format.
pub fn art_url(album: &AlbumRecord) -> Option<&str> {
    let url = album.largest_image().filter(|url| !url.is_empty())?;
    let extension = utils::url_extension(url)?;

    ART_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(url)
}

/// Solid black cell used when an album has no usable cover.
pub fn blank_cover() -> RgbImage {
    RgbImage::new(COVER_SIZE, COVER_SIZE)
}

/// Scales a decoded cover to exactly [`COVER_SIZE`] square.
pub fn fit_cover(image: DynamicImage) -> RgbImage {
    if image.width() == COVER_SIZE && image.height() == COVER_SIZE {
        return image.to_rgb8();
    }

    image
        .resize_exact(COVER_SIZE, COVER_SIZE, FilterType::Lanczos3)
        .to_rgb8()
}

/// Fetches the cover of `album`, or synthesizes a black one.
///
/// No request is made when the album has no usable cover URL. Download and
/// decode failures are returned as is, nothing is retried.
pub async fn resolve_cover(http: &Client, album: &AlbumRecord) -> Result<RgbImage, CollageError> {
    let Some(url) = art_url(album) else {
        debug!("Creating empty album art for {}", album.name);
        return Ok(blank_cover());
    };

    debug!("Downloading album art for {}", album.name);
    let bytes = http
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    let image = image::load_from_memory(&bytes)?;
    Ok(fit_cover(image))
}
