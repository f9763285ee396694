//! printpdf backend for the [`DocumentEmitter`] contract
//!
//! Translates the composer's top-left-origin millimeter coordinates into
//! printpdf's bottom-left-origin point space, embeds the source image once
//! as an XObject and reuses it on every page.

use crate::compose::{compose, DashPattern, DocumentEmitter, StrokeColor};
use crate::layout::TileLayout;
use crate::options::PosterOptions;
use crate::types::{ImageDimensions, PaperSpec};
use crate::{PosterError, Result};
use printpdf::*;
use std::path::Path;

const DEBUG_FONT_SIZE_PT: f32 = 10.0;

pub struct PdfEmitter {
    doc: PdfDocument,
    image_id: XObjectId,
    image_px: ImageDimensions,
    current: Option<PageInProgress>,
}

struct PageInProgress {
    width_mm: f32,
    height_mm: f32,
    ops: Vec<Op>,
}

impl PdfEmitter {
    /// Create an emitter for one poster document. The image is registered
    /// up front; every page references the same XObject.
    pub fn new(title: &str, image: RawImage) -> Self {
        let image_px = ImageDimensions::new(image.width as u32, image.height as u32);
        let mut doc = PdfDocument::new(title);
        let image_id = doc.add_image(&image);

        Self {
            doc,
            image_id,
            image_px,
            current: None,
        }
    }

    pub fn image_dimensions(&self) -> ImageDimensions {
        self.image_px
    }

    fn page(&mut self) -> Result<&mut PageInProgress> {
        self.current
            .as_mut()
            .ok_or_else(|| PosterError::Pdf("no page started".to_string()))
    }

    fn flush_page(&mut self) {
        if let Some(page) = self.current.take() {
            self.doc.pages.push(PdfPage::new(
                Mm(page.width_mm),
                Mm(page.height_mm),
                page.ops,
            ));
        }
    }

    /// Finish the document and return the PDF bytes.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        self.flush_page();
        if self.doc.pages.is_empty() {
            return Err(PosterError::Pdf("document has no pages".to_string()));
        }

        let mut warnings = Vec::new();
        let bytes = self.doc.save(&PdfSaveOptions::default(), &mut warnings);
        for warning in &warnings {
            log::warn!("pdf save: {:?}", warning);
        }
        Ok(bytes)
    }

    /// Flip a top-down y coordinate into PDF space
    fn flip_y(page_height_mm: f32, y_mm: f32) -> Pt {
        Mm(page_height_mm - y_mm).into_pt()
    }
}

impl DocumentEmitter for PdfEmitter {
    fn begin_page(&mut self, paper: &PaperSpec) -> Result<()> {
        self.flush_page();
        self.current = Some(PageInProgress {
            width_mm: paper.width_mm,
            height_mm: paper.height_mm,
            ops: Vec::new(),
        });
        Ok(())
    }

    fn place_image(&mut self, x_mm: f32, y_mm: f32, width_mm: f32, height_mm: f32) -> Result<()> {
        let image_px = self.image_px;
        let image_id = self.image_id.clone();
        let page = self.page()?;

        // With dpi = 72 the image renders at one point per pixel, so the
        // scale factors map pixels directly onto the target physical size.
        let scale_x = Mm(width_mm).into_pt().0 / image_px.width_px as f32;
        let scale_y = Mm(height_mm).into_pt().0 / image_px.height_px as f32;

        // printpdf anchors the XObject at its bottom-left corner
        let translate_x = Mm(x_mm).into_pt();
        let translate_y = Self::flip_y(page.height_mm, y_mm + height_mm);

        page.ops.push(Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(translate_x),
                translate_y: Some(translate_y),
                rotate: None,
                scale_x: Some(scale_x),
                scale_y: Some(scale_y),
                dpi: Some(72.0),
            },
        });
        Ok(())
    }

    fn set_stroke_color(&mut self, color: StrokeColor) -> Result<()> {
        let page = self.page()?;
        page.ops.push(Op::SetOutlineColor {
            col: Color::Rgb(Rgb {
                r: color.r,
                g: color.g,
                b: color.b,
                icc_profile: None,
            }),
        });
        Ok(())
    }

    fn set_line_width(&mut self, width_mm: f32) -> Result<()> {
        let page = self.page()?;
        page.ops.push(Op::SetOutlineThickness {
            pt: Mm(width_mm).into_pt(),
        });
        Ok(())
    }

    fn set_dash_pattern(&mut self, dash: Option<DashPattern>) -> Result<()> {
        let page = self.page()?;
        let pattern = match dash {
            Some(dash) => LineDashPattern {
                offset: Mm(dash.phase_mm).into_pt().0 as i64,
                dash_1: Some(Mm(dash.dash_mm).into_pt().0 as i64),
                ..Default::default()
            },
            None => LineDashPattern::default(),
        };
        page.ops.push(Op::SetLineDashPattern { dash: pattern });
        Ok(())
    }

    fn draw_line(&mut self, x0_mm: f32, y0_mm: f32, x1_mm: f32, y1_mm: f32) -> Result<()> {
        let page = self.page()?;
        let height_mm = page.height_mm;
        let line = Line {
            points: vec![
                LinePoint {
                    p: Point {
                        x: Mm(x0_mm).into_pt(),
                        y: Self::flip_y(height_mm, y0_mm),
                    },
                    bezier: false,
                },
                LinePoint {
                    p: Point {
                        x: Mm(x1_mm).into_pt(),
                        y: Self::flip_y(height_mm, y1_mm),
                    },
                    bezier: false,
                },
            ],
            is_closed: false,
        };
        page.ops.push(Op::DrawLine { line });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x_mm: f32, y_mm: f32) -> Result<()> {
        let page = self.page()?;
        let height_mm = page.height_mm;
        page.ops.push(Op::StartTextSection);
        page.ops.push(Op::SetTextCursor {
            pos: Point {
                x: Mm(x_mm).into_pt(),
                y: Self::flip_y(height_mm, y_mm),
            },
        });
        page.ops.push(Op::SetFontSizeBuiltinFont {
            font: BuiltinFont::Helvetica,
            size: Pt(DEBUG_FONT_SIZE_PT),
        });
        page.ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.to_string())],
            font: BuiltinFont::Helvetica,
        });
        page.ops.push(Op::EndTextSection);
        Ok(())
    }
}

/// Render the tiled poster to PDF bytes.
pub fn render_poster(image: RawImage, options: &PosterOptions) -> Result<(TileLayout, Vec<u8>)> {
    let mut emitter = PdfEmitter::new("Poster", image);
    let dims = emitter.image_dimensions();
    let layout = compose(dims, options, &mut emitter)?;
    let bytes = emitter.finish()?;

    log::info!(
        "rendered {} sheet(s), {} bytes",
        layout.sheets_across * layout.sheets_down,
        bytes.len()
    );
    Ok((layout, bytes))
}

/// Render the poster and write it to `output_path`.
///
/// PDF generation is CPU-bound, so it runs on a blocking task; the file
/// write is async.
pub async fn generate_poster_pdf(
    image: RawImage,
    options: &PosterOptions,
    output_path: impl AsRef<Path>,
) -> Result<TileLayout> {
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    let (layout, bytes) =
        tokio::task::spawn_blocking(move || render_poster(image, &options)).await??;

    tokio::fs::write(&output_path, bytes).await?;

    Ok(layout)
}
