use thiserror::Error;

/// Error types for collage generation.
///
/// Every variant is fatal for a run: nothing is retried and the collage file
/// is only written once composition has fully succeeded.
#[derive(Error, Debug)]
pub enum CollageError {
    /// A caller supplied value is outside its allowed domain, e.g. an unknown
    /// time period or a zero grid dimension.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The scrobbling API answered with a non-success status.
    #[error("Last.fm API request failed with status {status}: {message}")]
    RemoteService { status: u16, message: String },

    /// The scrobbling API answered successfully but the payload does not have
    /// the expected shape.
    #[error("Malformed Last.fm response: {0}")]
    MalformedResponse(String),

    /// After filtering there are not enough albums to fill every grid cell.
    #[error("Not enough albums available: need {needed}, have {available}")]
    TooFewAlbums { needed: usize, available: usize },

    /// No usable font could be loaded for the caption overlay.
    #[error("No usable font found: {0}")]
    FontNotFound(String),

    /// Network level failure while talking to the API or a cover art host.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Cover art could not be decoded or the collage could not be encoded.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CollageError {
    /// Returns `true` for errors reported by the remote API itself, malformed
    /// payloads included.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            CollageError::RemoteService { .. } | CollageError::MalformedResponse(_)
        )
    }
}
