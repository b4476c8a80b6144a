use std::path::Path;

use alloc_heatmap_protocol::{Color, Rect};
use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, Result};
use crate::model::GridPosition;

/// What to do with samples outside [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Fail the load with [`HeatmapError::OutOfRangeSample`].
    #[default]
    Reject,
    /// Keep the sample and let the color scale extrapolate.
    Extrapolate,
}

/// Layout and data-source settings for one heatmap.
///
/// Every field has a default, so a config file only needs to name what it
/// changes:
///
/// ```toml
/// column_size = 64
/// range_policy = "extrapolate"
/// high = { r = 200, g = 0, b = 0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeatmapConfig {
    /// Total surface width in pixels, margins included.
    pub width: u32,
    /// Total surface height in pixels, margins included.
    pub height: u32,
    /// Margin on each side of the plot area.
    pub margin: u32,
    /// Cells per grid row.
    pub column_size: usize,
    pub cell_width: u32,
    pub cell_height: u32,
    /// Gap subtracted from each cell's width.
    pub width_padding: u32,
    /// Gap subtracted from each cell's height.
    pub height_padding: u32,
    /// Path the snapshot is fetched from.
    pub endpoint: String,
    /// Id of the element hosting the surface.
    pub container: String,
    /// Color at 0.
    pub low: Color,
    /// Color at 1.
    pub high: Color,
    pub range_policy: RangePolicy,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 800,
            margin: 30,
            column_size: 128,
            cell_width: 8,
            cell_height: 8,
            width_padding: 1,
            height_padding: 1,
            endpoint: "/getalloc".to_string(),
            container: "alloc".to_string(),
            low: Color::WHITE,
            high: Color::GREEN,
            range_policy: RangePolicy::Reject,
        }
    }
}

impl HeatmapConfig {
    /// Load and validate a TOML config file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HeatmapError::InvalidConfig(format!(
                "failed to read config file '{}': {e}",
                path.display()
            ))
        })?;

        let config: HeatmapConfig = toml::from_str(&content).map_err(|e| {
            HeatmapError::InvalidConfig(format!(
                "failed to parse config file '{}': {e}",
                path.display()
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.column_size == 0 {
            return Err(HeatmapError::InvalidConfig(
                "column_size must be at least 1".to_string(),
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(HeatmapError::InvalidConfig(format!(
                "surface must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.margin.saturating_mul(2) >= self.width.min(self.height) {
            return Err(HeatmapError::InvalidConfig(format!(
                "margin {} leaves no plot area on a {}x{} surface",
                self.margin, self.width, self.height
            )));
        }
        if self.column_size.checked_mul(self.cell_width as usize).is_none() {
            return Err(HeatmapError::InvalidConfig(format!(
                "column_size {} is too large for {}px cells",
                self.column_size, self.cell_width
            )));
        }
        if self.width_padding >= self.cell_width || self.height_padding >= self.cell_height {
            return Err(HeatmapError::InvalidConfig(format!(
                "padding {}x{} must be smaller than the {}x{} cell",
                self.width_padding, self.height_padding, self.cell_width, self.cell_height
            )));
        }
        Ok(())
    }

    /// Width of the plot area inside the margins.
    pub fn inner_width(&self) -> u32 {
        self.width.saturating_sub(self.margin.saturating_mul(2))
    }

    /// Height of the plot area inside the margins.
    pub fn inner_height(&self) -> u32 {
        self.height.saturating_sub(self.margin.saturating_mul(2))
    }

    /// Grid columns that fit across the surface.
    pub fn visible_columns(&self) -> usize {
        let across = (self.width / self.cell_width.max(1)) as usize;
        self.column_size.min(across)
    }

    /// Grid rows that fit down the surface.
    pub fn visible_rows(&self) -> usize {
        (self.height / self.cell_height.max(1)) as usize
    }

    /// Number of cells that land fully on the surface.
    pub fn capacity(&self) -> usize {
        self.visible_columns().saturating_mul(self.visible_rows())
    }

    /// How many cells of a `len`-sample snapshot fall past the right or
    /// bottom edge of the surface.
    pub fn clipped_cells(&self, len: usize) -> usize {
        let columns = self.column_size.max(1);
        let full_rows = len / columns;
        let rem = len % columns;
        let rows = self.visible_rows();
        let cols = self.visible_columns();

        let mut visible = full_rows.min(rows).saturating_mul(cols);
        if full_rows < rows {
            visible = visible.saturating_add(rem.min(cols));
        }
        len.saturating_sub(visible)
    }

    /// Rectangle drawn for the cell at `pos`.
    pub fn cell_rect(&self, pos: GridPosition) -> Rect {
        let cw = f64::from(self.cell_width);
        let ch = f64::from(self.cell_height);
        Rect::new(
            pos.column as f64 * cw,
            pos.row as f64 * ch,
            cw - f64::from(self.width_padding),
            ch - f64::from(self.height_padding),
        )
    }
}
