pub mod heatmap;

pub use heatmap::render_heatmap;
