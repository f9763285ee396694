//! Generates a tiled poster PDF from a synthetic gradient image.
//!
//! Usage: cargo run --example make_poster -p poster-tile
//!
//! Writes poster_tiled.pdf to the current directory: a 2x2 A4 sheet grid
//! with dashed overlap markers and a diagonal alignment grid on dedicated
//! back pages. Print it, trim each sheet along its markers, and the green
//! diagonals should line up across the seams.

use poster_tile::*;
use printpdf::{RawImage, RawImageData, RawImageFormat};

/// Builds an RGB gradient large enough to need four A4 sheets at 96 dpi
fn gradient_image(width: usize, height: usize) -> RawImage {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 255 / width) as u8);
            pixels.push((y * 255 / height) as u8);
            pixels.push(96);
        }
    }

    RawImage {
        pixels: RawImageData::U8(pixels),
        width,
        height,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let image = gradient_image(1500, 2100);

    let options = PosterOptions {
        dpi: 96.0,
        paper: PaperSize::A4.spec(Orientation::Portrait),
        overlap_mm: 10.0,
        grid_placement: GridPlacement::Back,
        marker_position: OverlapMarkerPosition::Both,
        marker_style: OverlapMarkerStyle::Dashed,
        debug_overlay: false,
    };

    let layout = generate_poster_pdf(image, &options, "poster_tiled.pdf").await?;

    println!(
        "Wrote poster_tiled.pdf: {}x{} sheets, canvas {:.0}x{:.0} mm",
        layout.sheets_across, layout.sheets_down, layout.total_width_mm, layout.total_height_mm
    );
    Ok(())
}
