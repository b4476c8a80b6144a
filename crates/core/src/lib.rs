//! Allocation heatmap: decodes `/getalloc` snapshots and turns them into
//! render commands for a surface.

pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod renderer;
pub mod scale;
pub mod source;
pub mod surface;
pub mod svg;
pub mod views;

pub use config::{HeatmapConfig, RangePolicy};
pub use error::HeatmapError;
pub use renderer::{HeatmapRenderer, RenderState};
pub use scale::ColorScale;
pub use source::{SnapshotSource, StaticSource};
pub use surface::Surface;
pub use svg::SvgSurface;
