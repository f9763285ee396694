//! Page composition
//!
//! Walks the sheet grid produced by the layout calculation and tells a
//! [`DocumentEmitter`] what to draw on each page: the image crop, the
//! overlap boundary markers and the diagonal alignment grid. All
//! coordinates handed to the emitter are page-relative millimeters with
//! the origin at the top-left corner of the page.

use crate::layout::{compute_layout, TileLayout};
use crate::options::PosterOptions;
use crate::types::{GridPlacement, ImageDimensions, OverlapMarkerStyle, PaperSpec};
use crate::Result;

/// Spacing of the diagonal alignment grid lattice
const GRID_SIZE_MM: f32 = 50.0;

const GRID_LINE_WIDTH_MM: f32 = 0.25;
const MARKER_LINE_WIDTH_MM: f32 = 0.5;

/// Dash pattern for dashed overlap markers: 10 mm dash, 1 mm phase
const MARKER_DASH: DashPattern = DashPattern {
    dash_mm: 10.0,
    phase_mm: 1.0,
};

const MARKER_COLOR: StrokeColor = StrokeColor {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};

// #008000
const GRID_COLOR: StrokeColor = StrokeColor {
    r: 0.0,
    g: 0.5,
    b: 0.0,
};

/// RGB stroke color, components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Uniform dash pattern for stroked lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    pub dash_mm: f32,
    pub phase_mm: f32,
}

/// Sink for the composed document.
///
/// The composer decides *what* to draw in physical units; an emitter turns
/// that into an actual document. Coordinates are page-relative millimeters,
/// y growing downward from the top-left page corner. The first
/// `begin_page` call starts the document. Any error aborts the whole
/// composition; no partial document is surfaced.
pub trait DocumentEmitter {
    /// Start a new page of the given size
    fn begin_page(&mut self, paper: &PaperSpec) -> Result<()>;

    /// Place the source image with its top-left corner at `(x_mm, y_mm)`,
    /// scaled to `width_mm` x `height_mm`. Offsets may be negative; the
    /// page acts as a window onto the oversized image.
    fn place_image(&mut self, x_mm: f32, y_mm: f32, width_mm: f32, height_mm: f32) -> Result<()>;

    fn set_stroke_color(&mut self, color: StrokeColor) -> Result<()>;

    fn set_line_width(&mut self, width_mm: f32) -> Result<()>;

    /// `None` resets to a solid line
    fn set_dash_pattern(&mut self, dash: Option<DashPattern>) -> Result<()>;

    fn draw_line(&mut self, x0_mm: f32, y0_mm: f32, x1_mm: f32, y1_mm: f32) -> Result<()>;

    fn draw_text(&mut self, text: &str, x_mm: f32, y_mm: f32) -> Result<()>;
}

/// Compose the tiled poster document.
///
/// Validates the options, computes the sheet grid once, then emits one
/// page per grid cell in row-major order (plus one extra page per cell
/// when the grid placement is [`GridPlacement::Back`]). Returns the
/// layout so callers can report sheet counts without recomputing.
pub fn compose<E: DocumentEmitter>(
    image: ImageDimensions,
    options: &PosterOptions,
    emitter: &mut E,
) -> Result<TileLayout> {
    options.validate()?;

    let layout = compute_layout(image, options.dpi, &options.paper, options.overlap_mm)?;

    log::info!(
        "composing {}x{} sheet grid, canvas {:.1}x{:.1} mm",
        layout.sheets_across,
        layout.sheets_down,
        layout.total_width_mm,
        layout.total_height_mm,
    );

    for j in 0..layout.sheets_down {
        for i in 0..layout.sheets_across {
            let offset_x = i as f32 * layout.pitch_width_mm;
            let offset_y = j as f32 * layout.pitch_height_mm;

            log::debug!("page ({}, {}) at offset ({:.1}, {:.1}) mm", i, j, offset_x, offset_y);

            emitter.begin_page(&options.paper)?;
            emitter.place_image(
                -offset_x,
                -offset_y,
                layout.image_width_mm,
                layout.image_height_mm,
            )?;

            draw_overlap_markers(emitter, options, &layout, i, j)?;
            draw_alignment_grid(emitter, options, offset_x, offset_y)?;
        }
    }

    Ok(layout)
}

/// Draw boundary markers on edges where a neighboring sheet exists and the
/// position setting includes that edge.
fn draw_overlap_markers<E: DocumentEmitter>(
    emitter: &mut E,
    options: &PosterOptions,
    layout: &TileLayout,
    i: u32,
    j: u32,
) -> Result<()> {
    let position = options.marker_position;
    if !position.includes_left()
        && !position.includes_top()
        && !position.includes_right()
        && !position.includes_bottom()
    {
        return Ok(());
    }

    let paper = &options.paper;
    let overlap = options.overlap_mm;

    emitter.set_stroke_color(MARKER_COLOR)?;
    emitter.set_line_width(MARKER_LINE_WIDTH_MM)?;
    match options.marker_style {
        OverlapMarkerStyle::Dashed => emitter.set_dash_pattern(Some(MARKER_DASH))?,
        OverlapMarkerStyle::Solid => emitter.set_dash_pattern(None)?,
    }

    // Left edge
    if position.includes_left() && i > 0 {
        emitter.draw_line(overlap, 0.0, overlap, paper.height_mm)?;
    }

    // Top edge
    if position.includes_top() && j > 0 {
        emitter.draw_line(0.0, overlap, paper.width_mm, overlap)?;
    }

    // Right edge
    if position.includes_right() && i < layout.sheets_across - 1 {
        emitter.draw_line(
            paper.width_mm - overlap,
            0.0,
            paper.width_mm - overlap,
            paper.height_mm,
        )?;
    }

    // Bottom edge
    if position.includes_bottom() && j < layout.sheets_down - 1 {
        emitter.draw_line(
            0.0,
            paper.height_mm - overlap,
            paper.width_mm,
            paper.height_mm - overlap,
        )?;
    }

    Ok(())
}

/// Draw the diagonal alignment lattice.
///
/// The lattice is anchored to a page-global datum recomputed from the
/// page's offset, so lines on adjacent sheets continue each other exactly
/// when the sheets are reassembled, even though every page is drawn in
/// isolation.
fn draw_alignment_grid<E: DocumentEmitter>(
    emitter: &mut E,
    options: &PosterOptions,
    offset_x: f32,
    offset_y: f32,
) -> Result<()> {
    match options.grid_placement {
        GridPlacement::None => return Ok(()),
        GridPlacement::Back => emitter.begin_page(&options.paper)?,
        GridPlacement::Front => {}
    }

    let paper = &options.paper;

    emitter.set_stroke_color(GRID_COLOR)?;
    emitter.set_line_width(GRID_LINE_WIDTH_MM)?;
    emitter.set_dash_pattern(None)?;

    let max = paper.width_mm + paper.height_mm + GRID_SIZE_MM * 2.0;

    // Lattice anchors: nearest grid multiples left of and above the page,
    // plus one below it for the falling family
    let datum_x = GRID_SIZE_MM * (offset_x / GRID_SIZE_MM).floor();
    let datum_y_above = GRID_SIZE_MM * (offset_y / GRID_SIZE_MM).floor();
    let datum_y_below = GRID_SIZE_MM * (((offset_y + paper.height_mm) / GRID_SIZE_MM).floor() + 1.0);

    // Datum values translated into page coordinates
    let x = datum_x - offset_x;
    let y_above = datum_y_above - offset_y;
    let y_below = datum_y_below - offset_y;

    let mut t = GRID_SIZE_MM;
    while t < max {
        // Rising family (SW-NE)
        emitter.draw_line(x, y_above + t, x + t, y_above)?;
        // Falling family (NW-SE)
        emitter.draw_line(x, y_below - t, x + t, y_below)?;
        t += GRID_SIZE_MM;
    }

    if options.debug_overlay {
        emitter.draw_text(&format!("Page Offset: ({},{})", offset_x, offset_y), 10.0, 24.0)?;
        emitter.draw_text(
            &format!("Page Size: ({},{})", paper.width_mm, paper.height_mm),
            10.0,
            32.0,
        )?;
        emitter.draw_text(
            &format!(
                "Grid Datum: ({},{}), ({},{})",
                datum_x, datum_y_above, datum_x, datum_y_below
            ),
            10.0,
            40.0,
        )?;
        emitter.draw_text(
            &format!(
                "Relative Datum: ({},{}), ({},{})",
                x, y_above, x, y_below
            ),
            10.0,
            48.0,
        )?;
        emitter.draw_text(&format!("Grid Max: {}", max), 10.0, 56.0)?;
    }

    Ok(())
}
