use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Url;

use crate::types::Period;

/// Extra share of albums fetched when empty covers get filtered out.
pub const EMPTY_ART_HEADROOM_PERCENT: usize = 25;

/// Number of albums to request for a `width` x `height` collage.
///
/// Filtering albums without cover art shrinks the list, so a quarter more
/// albums is requested in that case (rounded down).
pub fn fetch_limit(width: u32, height: u32, exclude_empty_art: bool) -> usize {
    let cells = width as usize * height as usize;
    if exclude_empty_art {
        cells + cells * EMPTY_ART_HEADROOM_PERCENT / 100
    } else {
        cells
    }
}

/// Lower-cased file extension of the last path segment of `url`.
///
/// Query strings and fragments are ignored. Strings that are not absolute
/// URLs are treated as plain paths.
pub fn url_extension(url: &str) -> Option<String> {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or("").to_string(),
    };

    let file_name = path.rsplit('/').next()?;
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }

    Some(ext.to_ascii_lowercase())
}

/// Value parser for the `--period` flag.
pub fn parse_period(value: &str) -> Result<Period, String> {
    value.parse::<Period>().map_err(|e| e.to_string())
}

/// Spinner for phases of unknown length. Hidden in verbose mode so it does
/// not interleave with debug output.
pub fn spinner(message: &str) -> ProgressBar {
    if crate::is_verbose() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Progress bar over `len` steps.
pub fn progress_bar(len: u64, message: &str) -> ProgressBar {
    if crate::is_verbose() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_message(message.to_string());
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg} [{bar:30.blue}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
