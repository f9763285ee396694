/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Build a concrete paper spec with orientation applied
    pub fn spec(self, orientation: Orientation) -> PaperSpec {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => PaperSpec {
                width_mm: w,
                height_mm: h,
            },
            Orientation::Landscape => PaperSpec {
                width_mm: h,
                height_mm: w,
            },
        }
    }
}

/// Concrete sheet dimensions in millimeters.
///
/// Orientation is derived from the dimensions rather than stored, so a
/// spec can never disagree with itself.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaperSpec {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PaperSpec {
    pub fn new(width_mm: f32, height_mm: f32) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }

    pub fn orientation(&self) -> Orientation {
        if self.width_mm < self.height_mm {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

impl Default for PaperSpec {
    fn default() -> Self {
        PaperSize::A4.spec(Orientation::Portrait)
    }
}

/// Pixel dimensions of the source image, as reported by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width_px: u32,
    pub height_px: u32,
}

impl ImageDimensions {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }
}

/// Where the diagonal alignment grid is drawn relative to the image layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridPlacement {
    /// No grid
    #[default]
    None,
    /// Drawn on the image page, on top of the image
    Front,
    /// Drawn on a dedicated page appended after each image page
    Back,
}

/// Which sheet edges receive an overlap boundary marker.
///
/// The compass names describe corner pairs: `NW` marks the left and top
/// edges, `SE` the right and bottom, and so on. A marker is only actually
/// drawn when a neighboring sheet exists on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlapMarkerPosition {
    None,
    NE,
    NW,
    SE,
    SW,
    #[default]
    Both,
}

impl OverlapMarkerPosition {
    pub fn includes_left(self) -> bool {
        matches!(self, Self::Both | Self::NW | Self::SW)
    }

    pub fn includes_top(self) -> bool {
        matches!(self, Self::Both | Self::NE | Self::NW)
    }

    pub fn includes_right(self) -> bool {
        matches!(self, Self::Both | Self::NE | Self::SE)
    }

    pub fn includes_bottom(self) -> bool {
        matches!(self, Self::Both | Self::SE | Self::SW)
    }
}

/// Line style for overlap markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlapMarkerStyle {
    #[default]
    Dashed,
    Solid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_orientation_is_derived() {
        let portrait = PaperSize::A4.spec(Orientation::Portrait);
        assert_eq!(portrait.orientation(), Orientation::Portrait);
        assert_eq!(portrait.width_mm, 210.0);
        assert_eq!(portrait.height_mm, 297.0);

        let landscape = PaperSize::A3.spec(Orientation::Landscape);
        assert_eq!(landscape.orientation(), Orientation::Landscape);
        assert_eq!(landscape.width_mm, 420.0);
        assert_eq!(landscape.height_mm, 297.0);
    }

    #[test]
    fn test_marker_position_edge_mapping() {
        assert!(OverlapMarkerPosition::NW.includes_left());
        assert!(OverlapMarkerPosition::NW.includes_top());
        assert!(!OverlapMarkerPosition::NW.includes_right());
        assert!(!OverlapMarkerPosition::NW.includes_bottom());

        assert!(OverlapMarkerPosition::SE.includes_right());
        assert!(OverlapMarkerPosition::SE.includes_bottom());
        assert!(!OverlapMarkerPosition::SE.includes_left());
        assert!(!OverlapMarkerPosition::SE.includes_top());

        for pos in [
            OverlapMarkerPosition::NE,
            OverlapMarkerPosition::NW,
            OverlapMarkerPosition::SE,
            OverlapMarkerPosition::SW,
        ] {
            let edges = [
                pos.includes_left(),
                pos.includes_top(),
                pos.includes_right(),
                pos.includes_bottom(),
            ];
            assert_eq!(edges.iter().filter(|e| **e).count(), 2);
        }

        let both = OverlapMarkerPosition::Both;
        assert!(
            both.includes_left()
                && both.includes_top()
                && both.includes_right()
                && both.includes_bottom()
        );

        let none = OverlapMarkerPosition::None;
        assert!(
            !none.includes_left()
                && !none.includes_top()
                && !none.includes_right()
                && !none.includes_bottom()
        );
    }
}
