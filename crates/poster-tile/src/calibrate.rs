//! Interactive density calibration
//!
//! The user draws reference lines of known physical length over a scaled
//! display of the image; each line implies a density, and the session
//! reports the mean. Two clicks make a segment: the first anchors it, the
//! second finalizes it. Pointer movement between the two produces a live
//! candidate for preview rendering only.

use crate::{PosterError, Result, INCH_TO_MM};

pub type SegmentId = u64;

/// A finalized reference line in image-pixel space with a user-declared
/// real-world length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredSegment {
    id: SegmentId,
    start: (f32, f32),
    end: (f32, f32),
    length_mm: f32,
}

impl MeasuredSegment {
    pub fn id(&self) -> SegmentId {
        self.id
    }

    /// Endpoints in image-pixel space
    pub fn endpoints(&self) -> ((f32, f32), (f32, f32)) {
        (self.start, self.end)
    }

    /// Declared real-world length in millimeters
    pub fn length_mm(&self) -> f32 {
        self.length_mm
    }

    pub fn pixel_length(&self) -> f32 {
        pixel_distance(self.start, self.end)
    }

    /// Density implied by this segment, or `None` when the declared
    /// length is degenerate.
    pub fn implied_dpi(&self) -> Option<f32> {
        if self.length_mm > 0.0 {
            Some(self.pixel_length() / self.length_mm * INCH_TO_MM)
        } else {
            None
        }
    }

    /// Angle of the segment in radians, for renderers that rotate tick
    /// marks and labels into the segment's own frame.
    pub fn angle(&self) -> f32 {
        (self.end.1 - self.start.1).atan2(self.end.0 - self.start.0)
    }

    /// Display label, e.g. `"120mm"`
    pub fn label(&self) -> String {
        format!("{:.0}mm", self.length_mm)
    }
}

/// One calibration session over a displayed image.
///
/// Click positions arrive in display coordinates; the session divides out
/// the display-to-image scale factor so all stored geometry is in image
/// pixels. Segments live only as long as the session.
#[derive(Debug, Clone)]
pub struct MeasureSession {
    fallback_dpi: f32,
    /// Display pixels per image pixel
    display_scale: f32,
    segments: Vec<MeasuredSegment>,
    anchor: Option<(f32, f32)>,
    candidate_end: Option<(f32, f32)>,
    next_id: SegmentId,
}

impl MeasureSession {
    /// # Arguments
    /// * `fallback_dpi` - density reported while no segments exist, and
    ///   used to derive each new segment's default declared length
    /// * `display_scale` - display pixels per image pixel of the preview
    ///   the user is clicking on
    pub fn new(fallback_dpi: f32, display_scale: f32) -> Result<Self> {
        if !(fallback_dpi > 0.0) || !fallback_dpi.is_finite() {
            return Err(PosterError::Config(format!(
                "fallback dpi must be positive, got {}",
                fallback_dpi
            )));
        }
        if !(display_scale > 0.0) || !display_scale.is_finite() {
            return Err(PosterError::Config(format!(
                "display scale must be positive, got {}",
                display_scale
            )));
        }
        Ok(Self {
            fallback_dpi,
            display_scale,
            segments: Vec::new(),
            anchor: None,
            candidate_end: None,
            next_id: 0,
        })
    }

    /// Handle a click at display coordinates.
    ///
    /// The first click anchors a segment; the second finalizes it and
    /// returns its id. With `axis_lock` the second point snaps to a purely
    /// horizontal or vertical line from the anchor, whichever axis has the
    /// larger displacement.
    pub fn click(&mut self, x_display: f32, y_display: f32, axis_lock: bool) -> Option<SegmentId> {
        let point = self.to_image(x_display, y_display);

        match self.anchor.take() {
            None => {
                self.anchor = Some(point);
                self.candidate_end = None;
                None
            }
            Some(anchor) => {
                let end = if axis_lock {
                    snap_to_axis(anchor, point)
                } else {
                    point
                };

                let id = self.next_id;
                self.next_id += 1;

                // Default declared length from the current estimate,
                // rounded to the nearest millimeter
                let length_mm =
                    (pixel_distance(anchor, end) / self.dpi() * INCH_TO_MM).round();

                self.segments.push(MeasuredSegment {
                    id,
                    start: anchor,
                    end,
                    length_mm,
                });
                self.candidate_end = None;
                Some(id)
            }
        }
    }

    /// Handle pointer movement at display coordinates. Updates the live
    /// candidate while a segment is anchored; a no-op otherwise.
    pub fn pointer_moved(&mut self, x_display: f32, y_display: f32, axis_lock: bool) {
        let Some(anchor) = self.anchor else {
            return;
        };

        let point = self.to_image(x_display, y_display);
        self.candidate_end = Some(if axis_lock {
            snap_to_axis(anchor, point)
        } else {
            point
        });
    }

    /// The in-progress segment, as image-space endpoints, when the session
    /// is anchored and the pointer has moved.
    pub fn candidate(&self) -> Option<((f32, f32), (f32, f32))> {
        Some((self.anchor?, self.candidate_end?))
    }

    pub fn is_anchored(&self) -> bool {
        self.anchor.is_some()
    }

    /// Replace a segment's declared length. Zero or negative lengths are
    /// rejected, they would make the implied density undefined.
    pub fn set_length(&mut self, id: SegmentId, length_mm: f32) -> Result<()> {
        if !(length_mm > 0.0) || !length_mm.is_finite() {
            return Err(PosterError::Config(format!(
                "segment length must be positive, got {} mm",
                length_mm
            )));
        }
        let segment = self
            .segments
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| PosterError::Config(format!("no segment with id {}", id)))?;
        segment.length_mm = length_mm;
        Ok(())
    }

    /// Remove a segment. Returns whether it existed. Other segments keep
    /// their ids.
    pub fn remove(&mut self, id: SegmentId) -> bool {
        let before = self.segments.len();
        self.segments.retain(|s| s.id != id);
        self.segments.len() != before
    }

    pub fn segments(&self) -> &[MeasuredSegment] {
        &self.segments
    }

    /// Current density estimate: the unweighted mean of each segment's
    /// implied density, or the fallback when no segment contributes one.
    pub fn dpi(&self) -> f32 {
        let implied: Vec<f32> = self
            .segments
            .iter()
            .filter_map(|s| s.implied_dpi())
            .collect();

        if implied.is_empty() {
            self.fallback_dpi
        } else {
            implied.iter().sum::<f32>() / implied.len() as f32
        }
    }

    /// Discard all segments and any in-progress anchor.
    pub fn reset(&mut self) {
        self.segments.clear();
        self.anchor = None;
        self.candidate_end = None;
        self.next_id = 0;
    }

    fn to_image(&self, x_display: f32, y_display: f32) -> (f32, f32) {
        (x_display / self.display_scale, y_display / self.display_scale)
    }
}

/// Snap `point` to a purely horizontal or vertical line through `anchor`,
/// keeping the axis with the larger absolute displacement.
fn snap_to_axis(anchor: (f32, f32), point: (f32, f32)) -> (f32, f32) {
    let dx = (anchor.0 - point.0).abs();
    let dy = (anchor.1 - point.1).abs();
    if dx < dy {
        (anchor.0, point.1)
    } else {
        (point.0, anchor.1)
    }
}

fn pixel_distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}
