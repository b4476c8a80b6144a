use log::{debug, info, warn};

use crate::config::HeatmapConfig;
use crate::error::Result;
use crate::model::AllocationSnapshot;
use crate::parsers::decode_snapshot;
use crate::scale::ColorScale;
use crate::source::SnapshotSource;
use crate::surface::Surface;
use crate::views::render_heatmap;

/// Lifecycle of a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// Surface sized, nothing drawn yet.
    Uninitialized,
    /// At least one snapshot has been drawn.
    Rendered,
}

/// Fetches allocation snapshots and draws them onto a surface.
///
/// Every successful render clears the surface first, so the surface always
/// holds exactly the cells of the last snapshot. A failed fetch or decode
/// leaves both the surface and the state untouched. A failed draw leaves the
/// state untouched but the surface may already be cleared.
pub struct HeatmapRenderer<S: Surface> {
    config: HeatmapConfig,
    scale: ColorScale,
    surface: S,
    state: RenderState,
}

impl<S: Surface> HeatmapRenderer<S> {
    /// Validate `config`, size `surface`, and build the color scale.
    pub fn new(config: HeatmapConfig, mut surface: S) -> Result<Self> {
        config.validate()?;
        surface.resize(config.width, config.height);
        let scale = ColorScale::new(config.low, config.high);
        Ok(Self {
            config,
            scale,
            surface,
            state: RenderState::Uninitialized,
        })
    }

    /// Fetch one snapshot from `source` and draw it.
    ///
    /// Returns the number of cells drawn.
    pub async fn load_and_render<Src: SnapshotSource>(&mut self, source: &Src) -> Result<usize> {
        debug!("fetching snapshot from {}", source.describe());
        let body = source.fetch().await?;
        self.render_payload(&body)
    }

    /// Decode a response body and draw it. This is the completion step of
    /// [`load_and_render`](Self::load_and_render).
    pub fn render_payload(&mut self, body: &[u8]) -> Result<usize> {
        let snapshot = decode_snapshot(body, self.config.range_policy)?;
        self.render_snapshot(&snapshot)
    }

    /// Draw an already decoded snapshot.
    pub fn render_snapshot(&mut self, snapshot: &AllocationSnapshot) -> Result<usize> {
        let clipped = self.config.clipped_cells(snapshot.len());
        if clipped > 0 {
            warn!(
                "{clipped} of {} cells fall outside the {}x{} surface, which shows {} columns by {} rows",
                snapshot.len(),
                self.config.width,
                self.config.height,
                self.config.visible_columns(),
                self.config.visible_rows(),
            );
        }

        let commands = render_heatmap(snapshot, &self.config, &self.scale);
        self.surface.clear();
        self.surface.draw(&commands)?;
        self.state = RenderState::Rendered;

        info!(
            "rendered {} cells in {} rows",
            snapshot.len(),
            snapshot.rows(self.config.column_size)
        );
        Ok(snapshot.len())
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn config(&self) -> &HeatmapConfig {
        &self.config
    }

    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RangePolicy;
    use crate::error::HeatmapError;
    use crate::source::StaticSource;
    use crate::svg::SvgSurface;
    use alloc_heatmap_protocol::{Color, RenderCommand};
    use futures::executor::block_on;

    struct FailingSource;

    impl SnapshotSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<u8>> {
            Err(HeatmapError::NetworkFailure("connection refused".into()))
        }

        fn describe(&self) -> String {
            "unreachable host".into()
        }
    }

    /// Accepts `clear` but refuses every draw.
    #[derive(Default)]
    struct BrokenSurface {
        cleared: bool,
    }

    impl Surface for BrokenSurface {
        fn resize(&mut self, _width: u32, _height: u32) {}

        fn clear(&mut self) {
            self.cleared = true;
        }

        fn draw(&mut self, _commands: &[RenderCommand]) -> Result<()> {
            Err(HeatmapError::SurfaceFailure("container detached".into()))
        }
    }

    fn renderer() -> HeatmapRenderer<SvgSurface> {
        HeatmapRenderer::new(HeatmapConfig::default(), SvgSurface::new()).unwrap()
    }

    #[test]
    fn new_sizes_surface() {
        let r = renderer();
        assert_eq!(r.state(), RenderState::Uninitialized);
        assert_eq!(r.surface().size(), (1024, 800));
        assert_eq!(r.scale().map(1.0), Color::GREEN);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let cfg = HeatmapConfig {
            column_size: 0,
            ..Default::default()
        };
        assert!(HeatmapRenderer::new(cfg, SvgSurface::new()).is_err());
    }

    #[test]
    fn load_and_render_draws_every_sample() {
        let mut r = renderer();
        let drawn = block_on(r.load_and_render(&StaticSource::new("[0, 1, 0.5]"))).unwrap();
        assert_eq!(drawn, 3);
        assert_eq!(r.state(), RenderState::Rendered);
        assert_eq!(r.surface().rect_count(), 3);
    }

    #[test]
    fn rerender_replaces_previous_cells() {
        let mut r = renderer();
        let source = StaticSource::new("[0.1, 0.2, 0.3, 0.4]");
        block_on(r.load_and_render(&source)).unwrap();
        let first = r.surface().commands().to_vec();
        block_on(r.load_and_render(&source)).unwrap();
        assert_eq!(r.surface().commands(), first.as_slice());
        assert_eq!(r.surface().rect_count(), 4);
    }

    #[test]
    fn network_failure_leaves_state_untouched() {
        let mut r = renderer();
        let err = block_on(r.load_and_render(&FailingSource)).unwrap_err();
        assert!(matches!(err, HeatmapError::NetworkFailure(_)));
        assert_eq!(r.state(), RenderState::Uninitialized);
        assert!(r.surface().commands().is_empty());
    }

    #[test]
    fn malformed_payload_keeps_previous_render() {
        let mut r = renderer();
        r.render_payload(b"[0.5]").unwrap();
        let err = r.render_payload(b"{\"oops\": true}").unwrap_err();
        assert!(matches!(err, HeatmapError::MalformedResponse(_)));
        assert_eq!(r.state(), RenderState::Rendered);
        assert_eq!(r.surface().rect_count(), 1);
    }

    #[test]
    fn extrapolate_policy_accepts_out_of_range() {
        let cfg = HeatmapConfig {
            range_policy: RangePolicy::Extrapolate,
            ..Default::default()
        };
        let mut r = HeatmapRenderer::new(cfg, SvgSurface::new()).unwrap();
        assert_eq!(r.render_payload(b"[1.5]").unwrap(), 1);
        assert!(matches!(
            renderer().render_payload(b"[1.5]"),
            Err(HeatmapError::OutOfRangeSample { index: 0, .. })
        ));
    }

    #[test]
    fn overflowing_snapshot_is_still_drawn() {
        let mut r = renderer();
        let snap = AllocationSnapshot::new(vec![0.5; 12_800 + 130]);
        assert_eq!(r.render_snapshot(&snap).unwrap(), 12_930);
        assert_eq!(r.into_surface().rect_count(), 12_930);
    }

    #[test]
    fn surface_failure_is_reported_and_state_kept() {
        let mut r = HeatmapRenderer::new(HeatmapConfig::default(), BrokenSurface::default())
            .unwrap();
        let err = r.render_payload(b"[0.5, 0.25]").unwrap_err();
        assert!(matches!(err, HeatmapError::SurfaceFailure(_)));
        assert_eq!(r.state(), RenderState::Uninitialized);
        assert!(r.surface().cleared);
    }

    #[test]
    fn wide_grid_still_renders_every_sample() {
        let cfg = HeatmapConfig {
            column_size: 256,
            ..Default::default()
        };
        let mut r = HeatmapRenderer::new(cfg, SvgSurface::new()).unwrap();
        assert_eq!(r.render_payload(b"[0.1, 0.2, 0.3]").unwrap(), 3);
        assert_eq!(r.config().clipped_cells(512), 256);
    }

    #[test]
    fn huge_column_size_is_refused_before_rendering() {
        let cfg = HeatmapConfig {
            column_size: usize::MAX / 2,
            ..Default::default()
        };
        assert!(matches!(
            HeatmapRenderer::new(cfg, SvgSurface::new()),
            Err(HeatmapError::InvalidConfig(_))
        ));
    }
}
