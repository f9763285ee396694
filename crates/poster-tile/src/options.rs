use crate::types::*;
use crate::{PosterError, Result};

/// Poster generation configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PosterOptions {
    /// Print density in pixels per inch
    pub dpi: f32,

    /// Output sheet dimensions
    pub paper: PaperSpec,

    /// Margin shared by adjacent sheets, in millimeters
    pub overlap_mm: f32,

    /// Diagonal alignment grid placement
    pub grid_placement: GridPlacement,

    /// Which sheet edges receive overlap markers
    pub marker_position: OverlapMarkerPosition,

    /// Overlap marker line style
    pub marker_style: OverlapMarkerStyle,

    /// Draw page offset and grid datum values on grid pages
    #[cfg_attr(feature = "serde", serde(default))]
    pub debug_overlay: bool,
}

impl Default for PosterOptions {
    fn default() -> Self {
        Self {
            dpi: 96.0,
            paper: PaperSpec::default(),
            overlap_mm: 10.0,
            grid_placement: GridPlacement::None,
            marker_position: OverlapMarkerPosition::Both,
            marker_style: OverlapMarkerStyle::Dashed,
            debug_overlay: false,
        }
    }
}

impl PosterOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| PosterError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PosterError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !(self.dpi > 0.0) || !self.dpi.is_finite() {
            return Err(PosterError::Config(format!(
                "dpi must be positive, got {}",
                self.dpi
            )));
        }
        if !(self.paper.width_mm > 0.0) || !(self.paper.height_mm > 0.0) {
            return Err(PosterError::Config(format!(
                "paper dimensions must be positive, got {}x{} mm",
                self.paper.width_mm, self.paper.height_mm
            )));
        }
        if self.overlap_mm < 0.0 {
            return Err(PosterError::Config(format!(
                "overlap_mm must not be negative, got {}",
                self.overlap_mm
            )));
        }
        if self.overlap_mm >= self.paper.width_mm.min(self.paper.height_mm) {
            return Err(PosterError::Config(format!(
                "overlap_mm ({}) must be smaller than both paper dimensions ({}x{} mm)",
                self.overlap_mm, self.paper.width_mm, self.paper.height_mm
            )));
        }
        Ok(())
    }
}
