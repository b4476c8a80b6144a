//! Integration test: feed saved `/getalloc` responses through the renderer
//! and check the resulting surface and SVG document.

use alloc_heatmap_core::{
    HeatmapConfig, HeatmapError, HeatmapRenderer, RenderState, StaticSource, SvgSurface,
};
use alloc_heatmap_protocol::{Color, RenderCommand};
use futures::executor::block_on;

fn load(body: &[u8]) -> Result<HeatmapRenderer<SvgSurface>, HeatmapError> {
    let mut renderer = HeatmapRenderer::new(HeatmapConfig::default(), SvgSurface::new())?;
    block_on(renderer.load_and_render(&StaticSource::new(body)))?;
    Ok(renderer)
}

#[test]
fn renders_saved_snapshot() {
    let data = include_bytes!("fixtures/getalloc-300.json");
    let renderer = load(data).expect("fixture should render");
    assert_eq!(renderer.state(), RenderState::Rendered);

    let surface = renderer.surface();
    assert_eq!(surface.rect_count(), 300);

    let rects: Vec<_> = surface
        .commands()
        .iter()
        .filter_map(RenderCommand::as_rect)
        .collect();

    // Head of the region is full, tail is empty.
    assert_eq!(*rects[1].1, Color::GREEN);
    assert_eq!(*rects[299].1, Color::WHITE);

    // 300 = 2 full rows of 128 + 44 on the third.
    let third_row = rects.iter().filter(|(r, _)| r.y == 16.0).count();
    assert_eq!(third_row, 44);
    assert!(rects.iter().all(|(r, _)| r.y <= 16.0));

    let svg = surface.to_svg();
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1024" height="800""#));
    assert_eq!(svg.matches("<rect ").count(), 300);
    assert!(svg.contains(r#"<g id="alloc">"#));
}

#[test]
fn null_snapshot_renders_empty_grid() {
    let renderer = load(include_bytes!("fixtures/getalloc-null.json")).expect("null is empty");
    assert_eq!(renderer.state(), RenderState::Rendered);
    assert_eq!(renderer.surface().rect_count(), 0);
}

#[test]
fn malformed_snapshot_is_reported() {
    let err = load(include_bytes!("fixtures/getalloc-malformed.json"))
        .err()
        .expect("string element must be rejected");
    assert!(matches!(err, HeatmapError::MalformedResponse(_)));
    assert!(err.to_string().contains("element 2"));
}

#[test]
fn same_response_twice_gives_identical_cells() {
    let data = include_bytes!("fixtures/getalloc-300.json");
    let a = load(data).expect("first load");
    let b = load(data).expect("second load");
    assert_eq!(a.surface().commands(), b.surface().commands());
}
