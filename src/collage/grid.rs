use crate::{debug, error::CollageError, types::AlbumRecord};

/// Albums laid out row-major, `height` rows of exactly `width` albums each.
///
/// Only [`build_grid`] creates a grid, so the shape always matches the
/// requested dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Vec<AlbumRecord>>,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<AlbumRecord>] {
        &self.rows
    }

    /// Number of cells, `width * height`.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Albums in row-major order.
    pub fn albums(&self) -> impl Iterator<Item = &AlbumRecord> {
        self.rows.iter().flatten()
    }
}

/// Drops every album with at least one empty cover URL, keeping order.
///
/// Note that any missing resolution disqualifies an album, not only the
/// largest one used for rendering.
pub fn without_missing_art(albums: Vec<AlbumRecord>) -> Vec<AlbumRecord> {
    albums
        .into_iter()
        .filter(|album| {
            let missing = album.has_missing_art();
            if missing {
                debug!("Skipping {} - {}: missing album art", album.artist, album.name);
            }
            !missing
        })
        .collect()
}

/// Arranges `albums` into a `width` x `height` grid.
///
/// The first `width * height` albums (after optional filtering) are used in
/// order, row by row. Surplus albums are ignored.
///
/// # Errors
///
/// - `InvalidArgument` when a dimension is zero
/// - `TooFewAlbums` when fewer than `width * height` albums remain
pub fn build_grid(
    width: usize,
    height: usize,
    albums: Vec<AlbumRecord>,
    exclude_empty_art: bool,
) -> Result<Grid, CollageError> {
    if width == 0 || height == 0 {
        return Err(CollageError::InvalidArgument(format!(
            "grid dimensions must be positive, got {}x{}",
            width, height
        )));
    }

    let albums = if exclude_empty_art {
        without_missing_art(albums)
    } else {
        albums
    };

    let needed = width * height;
    if needed > albums.len() {
        return Err(CollageError::TooFewAlbums {
            needed,
            available: albums.len(),
        });
    }

    let mut albums = albums.into_iter();
    let rows: Vec<Vec<AlbumRecord>> = (0..height)
        .map(|_| albums.by_ref().take(width).collect())
        .collect();

    Ok(Grid {
        width,
        height,
        rows,
    })
}
