use crate::{
    debug,
    error::CollageError,
    types::{AlbumRecord, ApiErrorResponse, Period, TopAlbumsResponse},
};

use super::LastFmClient;

/// Largest page Last.fm serves for `user.gettopalbums`.
///
/// Every page of a fetch is requested with the same size because Last.fm
/// offsets page `n` by `(n - 1) * limit`; a smaller last page would skip albums.
pub const MAX_PAGE_SIZE: usize = 1000;

impl LastFmClient {
    /// Retrieves a user's top albums, most played first.
    ///
    /// Last.fm caps a page at [`MAX_PAGE_SIZE`] albums, so `ceil(limit / 1000)`
    /// pages are requested one after another, each of size `min(limit, 1000)`,
    /// and concatenated in the order received. The last page is truncated so
    /// that at most `limit` albums are returned. A page shorter than the page
    /// size means the user has no more albums and ends the fetch early.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` when `limit` is zero
    /// - `RemoteService` for any non-success status or an error body served
    ///   with a success status, no partial result is kept
    /// - `MalformedResponse` when the payload lacks `topalbums.album` or
    ///   carries a non-numeric play count
    pub async fn top_albums(
        &self,
        user: &str,
        period: Period,
        limit: usize,
    ) -> Result<Vec<AlbumRecord>, CollageError> {
        if limit == 0 {
            return Err(CollageError::InvalidArgument(
                "album limit must be at least 1".to_string(),
            ));
        }

        let page_size = limit.min(MAX_PAGE_SIZE);
        let pages = limit.div_ceil(MAX_PAGE_SIZE);
        let mut albums: Vec<AlbumRecord> = Vec::with_capacity(limit);

        for page in 1..=pages {
            let remaining = limit - albums.len();
            debug!("Getting {} albums (page {}/{})", remaining.min(page_size), page, pages);

            let batch = self.top_albums_page(user, period, page_size, page).await?;
            let exhausted = batch.len() < page_size;

            albums.extend(batch.into_iter().take(remaining));

            if exhausted {
                debug!("User {} has no more albums after {}", user, albums.len());
                break;
            }
        }

        Ok(albums)
    }

    async fn top_albums_page(
        &self,
        user: &str,
        period: Period,
        page_size: usize,
        page: usize,
    ) -> Result<Vec<AlbumRecord>, CollageError> {
        let response = self
            .call(
                "user.gettopalbums",
                &[
                    ("user", user.to_string()),
                    ("period", period.to_string()),
                    ("limit", page_size.to_string()),
                    ("page", page.to_string()),
                ],
            )
            .await?;

        let body = response.text().await?;
        parse_top_albums(&body)
    }
}

/// Validates a `user.gettopalbums` payload into album records.
///
/// Last.fm sometimes reports failures as `{"error": n, "message": ...}` with
/// a `200` status; those become `RemoteService` errors.
pub(crate) fn parse_top_albums(body: &str) -> Result<Vec<AlbumRecord>, CollageError> {
    if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(body) {
        return Err(CollageError::RemoteService {
            status: 200,
            message: format!("{} (error {})", api_error.message, api_error.error),
        });
    }

    let parsed: TopAlbumsResponse = serde_json::from_str(body)
        .map_err(|e| CollageError::MalformedResponse(e.to_string()))?;

    parsed
        .topalbums
        .album
        .into_iter()
        .map(AlbumRecord::try_from)
        .collect()
}
