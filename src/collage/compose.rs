use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{Rgb, RgbImage, imageops};
use imageproc::drawing::draw_text_mut;
use reqwest::Client;

use crate::{debug, error::CollageError, types::AlbumRecord, utils};

use super::{
    artwork::{self, COVER_SIZE},
    color,
    grid::Grid,
};

/// Caption font size in pixels.
pub const FONT_SIZE: f32 = 15.0;

/// What goes into the caption drawn on each cover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptionOptions {
    /// Leave out the album name.
    pub artist_only: bool,
    /// Append the play count as `<n> plays`.
    pub show_playcount: bool,
}

/// Caption lines for `album`: artist, then album name unless `artist_only`,
/// then the play count when requested.
pub fn caption_text(album: &AlbumRecord, options: CaptionOptions) -> String {
    let mut text = album.artist.clone();
    if !options.artist_only {
        text.push('\n');
        text.push_str(&album.name);
    }
    if options.show_playcount {
        text.push('\n');
        text.push_str(&format!("{} plays", album.playcount));
    }
    text
}

/// Draws `text` line by line into the top-left corner of `cover`.
pub fn draw_caption(cover: &mut RgbImage, text: &str, color: Rgb<u8>, font: &FontArc) {
    let scale = PxScale::from(FONT_SIZE);
    let scaled = font.as_scaled(scale);
    let line_height = scaled.height() + scaled.line_gap();

    for (index, line) in text.lines().enumerate() {
        let y = (index as f32 * line_height).round() as i32;
        draw_text_mut(cover, color, 0, y, scale, font, line);
    }
}

/// Builds the finished cell of `album`: cover art with a contrasting caption.
///
/// Without a font the caption is skipped.
pub async fn render_cell(
    http: &Client,
    album: &AlbumRecord,
    font: Option<&FontArc>,
    options: CaptionOptions,
) -> Result<RgbImage, CollageError> {
    let mut cover = artwork::resolve_cover(http, album).await?;

    let dominant = color::dominant_color(&cover);
    debug!(
        "Dominant color for {} is #{}",
        album.name,
        color::to_hex(dominant)
    );

    if let Some(font) = font {
        debug!("Writing text to image");
        let text = caption_text(album, options);
        draw_caption(&mut cover, &text, color::font_color(dominant), font);
    }

    Ok(cover)
}

/// Places `cells` side by side, left to right, without gaps.
pub fn join_row(cells: &[RgbImage]) -> RgbImage {
    let width = cells.iter().map(RgbImage::width).sum();
    let height = cells.iter().map(RgbImage::height).max().unwrap_or(COVER_SIZE);
    let mut row = RgbImage::new(width, height);

    let mut x_offset: i64 = 0;
    for cell in cells {
        imageops::replace(&mut row, cell, x_offset, 0);
        x_offset += cell.width() as i64;
    }
    row
}

/// Stacks `rows` top to bottom, without gaps. The first row sets the width.
pub fn stack_rows(rows: &[RgbImage]) -> RgbImage {
    let width = rows.first().map(RgbImage::width).unwrap_or(0);
    let height = rows.iter().map(RgbImage::height).sum();
    let mut collage = RgbImage::new(width, height);

    let mut y_offset: i64 = 0;
    for row in rows {
        imageops::replace(&mut collage, row, 0, y_offset);
        y_offset += row.height() as i64;
    }
    collage
}

/// Renders every cell of `grid` in row-major order and assembles the collage
/// of `200 * width` by `200 * height` pixels.
///
/// Cells are processed one at a time; the first failure aborts the whole
/// composition.
pub async fn compose_collage(
    http: &Client,
    grid: &Grid,
    font: Option<&FontArc>,
    options: CaptionOptions,
) -> Result<RgbImage, CollageError> {
    let pb = utils::progress_bar(grid.len() as u64, "Composing covers");
    let mut rows: Vec<RgbImage> = Vec::with_capacity(grid.height());

    for albums in grid.rows() {
        let mut cells: Vec<RgbImage> = Vec::with_capacity(albums.len());
        for album in albums {
            match render_cell(http, album, font, options).await {
                Ok(cell) => cells.push(cell),
                Err(e) => {
                    pb.finish_and_clear();
                    return Err(e);
                }
            }
            pb.inc(1);
        }

        debug!("Making a new horizontal group of images");
        rows.push(join_row(&cells));
    }

    pb.finish_and_clear();
    debug!("Making the final image");
    Ok(stack_rows(&rows))
}
