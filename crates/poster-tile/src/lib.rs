//! Poster tiling - splitting an oversized raster image across standard
//! paper sheets
//!
//! Given an image, a print density and a paper size, this crate works out
//! how many sheets the print needs, composes one PDF page per sheet with
//! the image shifted so each page reveals its own crop, and draws the
//! overlap markers and diagonal alignment grid used to trim and reassemble
//! the sheets. A small interactive session type lets the user derive the
//! density empirically by measuring reference lines on the image.

pub mod calibrate;
mod compose;
mod layout;
mod options;
mod pdf;
mod types;

pub use calibrate::{MeasureSession, MeasuredSegment, SegmentId};
pub use compose::{compose, DashPattern, DocumentEmitter, StrokeColor};
pub use layout::{compute_layout, TileLayout};
pub use options::PosterOptions;
pub use pdf::{generate_poster_pdf, render_poster, PdfEmitter};
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PosterError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PosterError>;

/// Millimeters per inch, used everywhere pixel sizes meet paper sizes.
pub const INCH_TO_MM: f32 = 25.4;
