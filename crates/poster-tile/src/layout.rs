//! Layout calculation
//!
//! Pure geometry: given image pixel dimensions, a print density, a paper
//! size and an overlap margin, work out how many sheets the poster needs
//! per axis and the size of the composite canvas.

use crate::types::{ImageDimensions, PaperSpec};
use crate::{PosterError, Result, INCH_TO_MM};

/// Result of the tiling calculation.
///
/// `total_width_mm`/`total_height_mm` describe the composite canvas the
/// sheet grid covers; it is always at least as large as the image, the
/// excess being reassembly slack on the far edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileLayout {
    /// Physical image size at the given density
    pub image_width_in: f32,
    pub image_height_in: f32,
    pub image_width_mm: f32,
    pub image_height_mm: f32,
    /// Effective advance per sheet (paper dimension minus overlap)
    pub pitch_width_mm: f32,
    pub pitch_height_mm: f32,
    /// Sheet counts per axis, each at least 1
    pub sheets_across: u32,
    pub sheets_down: u32,
    /// Composite canvas size covered by the sheet grid
    pub total_width_mm: f32,
    pub total_height_mm: f32,
}

/// Compute the sheet grid for an image.
///
/// # Arguments
/// * `image` - source image pixel dimensions
/// * `dpi` - print density in pixels per inch
/// * `paper` - sheet dimensions in millimeters
/// * `overlap_mm` - margin shared by adjacent sheets
///
/// Pure and deterministic; safe to call on every input change.
pub fn compute_layout(
    image: ImageDimensions,
    dpi: f32,
    paper: &PaperSpec,
    overlap_mm: f32,
) -> Result<TileLayout> {
    validate_inputs(image, dpi, paper, overlap_mm)?;

    let image_width_in = image.width_px as f32 / dpi;
    let image_height_in = image.height_px as f32 / dpi;

    let image_width_mm = image_width_in * INCH_TO_MM;
    let image_height_mm = image_height_in * INCH_TO_MM;

    let pitch_width_mm = paper.width_mm - overlap_mm;
    let pitch_height_mm = paper.height_mm - overlap_mm;

    let sheets_across = sheets_for_axis(image_width_mm, pitch_width_mm, overlap_mm);
    let sheets_down = sheets_for_axis(image_height_mm, pitch_height_mm, overlap_mm);

    Ok(TileLayout {
        image_width_in,
        image_height_in,
        image_width_mm,
        image_height_mm,
        pitch_width_mm,
        pitch_height_mm,
        sheets_across,
        sheets_down,
        total_width_mm: sheets_across as f32 * pitch_width_mm + overlap_mm,
        total_height_mm: sheets_down as f32 * pitch_height_mm + overlap_mm,
    })
}

/// Sheets needed along one axis.
///
/// The first sheet's overlap band is free (nothing abuts it until a second
/// sheet exists), hence the `- overlap` in the numerator. An image that
/// fits entirely inside the overlap band would compute to 0 sheets, so the
/// count is clamped to 1.
fn sheets_for_axis(image_mm: f32, pitch_mm: f32, overlap_mm: f32) -> u32 {
    let sheets = ((image_mm - overlap_mm) / pitch_mm).ceil();
    if sheets < 1.0 {
        1
    } else {
        sheets as u32
    }
}

fn validate_inputs(
    image: ImageDimensions,
    dpi: f32,
    paper: &PaperSpec,
    overlap_mm: f32,
) -> Result<()> {
    if image.width_px == 0 || image.height_px == 0 {
        return Err(PosterError::Config(format!(
            "image dimensions must be positive, got {}x{} px",
            image.width_px, image.height_px
        )));
    }
    if !(dpi > 0.0) || !dpi.is_finite() {
        return Err(PosterError::Config(format!(
            "density must be a positive number of pixels per inch, got {}",
            dpi
        )));
    }
    if !(paper.width_mm > 0.0) || !(paper.height_mm > 0.0) {
        return Err(PosterError::Config(format!(
            "paper dimensions must be positive, got {}x{} mm",
            paper.width_mm, paper.height_mm
        )));
    }
    if overlap_mm < 0.0 {
        return Err(PosterError::Config(format!(
            "overlap must not be negative, got {} mm",
            overlap_mm
        )));
    }
    if overlap_mm >= paper.width_mm.min(paper.height_mm) {
        return Err(PosterError::Config(format!(
            "overlap ({} mm) must be smaller than both paper dimensions ({}x{} mm)",
            overlap_mm, paper.width_mm, paper.height_mm
        )));
    }
    Ok(())
}
