//! Last.fm Collage Generator Library
//!
//! This library fetches a user's most listened albums from the Last.fm API and
//! composes their cover art into a single grid collage. Each cover can carry a
//! caption (artist, album, play count) whose color is picked for contrast
//! against the cover's dominant color.
//!
//! # Modules
//!
//! - `cli` - Command-line orchestration of a full collage run
//! - `collage` - Grid layout, dominant color extraction and image composition
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by every stage of the pipeline
//! - `lastfm` - Last.fm Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use fmsquared::{collage, lastfm::LastFmClient, types::Period};
//!
//! #[tokio::main]
//! async fn main() -> fmsquared::Res<()> {
//!     let client = LastFmClient::new("api-key");
//!     let albums = client.top_albums("someone", Period::Overall, 9).await?;
//!     let grid = collage::build_grid(3, 3, albums, false)?;
//!     Ok(())
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

pub mod cli;
pub mod collage;
pub mod config;
pub mod error;
pub mod lastfm;
pub mod types;
pub mod utils;

pub use error::CollageError;

/// A convenient Result type alias for operations that may fail.
///
/// Used at the binary boundary where errors of different origins meet.
/// Library functions return [`CollageError`] directly.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enables or disables output of the [`debug!`] macro.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

/// Returns `true` when verbose output was requested.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching {} albums", limit);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for the binary entry point: the collage is never written once
/// this macro has been reached, so no partial output is left behind.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a dimmed diagnostic line, only when verbose output is enabled.
///
/// # Example
///
/// ```
/// fmsquared::set_verbose(true);
/// debug!("Dominant color for {} is #{}", album, hex);
/// ```
#[macro_export]
macro_rules! debug {
  ($($arg:tt)*) => ({
    if $crate::is_verbose() {
      use colored::Colorize;
      println!("[{}] {}", "·".dimmed(), std::format_args!($($arg)*));
    }
  })
}
