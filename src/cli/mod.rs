//! # CLI Module
//!
//! Command-line orchestration of a collage run:
//!
//! ```text
//! font → Last.fm top albums → grid → compose → save
//! ```
//!
//! Every stage returns a [`CollageError`](crate::CollageError) that ends the
//! run. The output file is only written after composition has succeeded.

mod generate;

pub use generate::CollageRequest;
pub use generate::generate;
pub use generate::run;
