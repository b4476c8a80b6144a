mod logger;
mod source;
mod surface;

use alloc_heatmap_core::{HeatmapConfig, HeatmapError, HeatmapRenderer, SvgSurface};
use alloc_heatmap_protocol::RenderCommand;
use wasm_bindgen::prelude::*;

pub use source::HttpSource;
pub use surface::DomSurface;

/// Page entry point: draw `/getalloc` into `#alloc` once.
///
/// A page without an `#alloc` element is left alone so it can call
/// [`load_into`] with its own ids instead.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let config = HeatmapConfig::default();
    let surface = match DomSurface::attach(&config.container) {
        Ok(s) => s,
        Err(e) => {
            log::info!("not auto-loading: {e}");
            return Ok(());
        }
    };

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = load(config, surface).await {
            log::error!("{e}");
        }
    });
    Ok(())
}

/// Fetch `endpoint` and draw it into the element with id `container`.
///
/// Resolves to the number of cells drawn.
#[wasm_bindgen]
pub fn load_into(container: String, endpoint: String) -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        let config = HeatmapConfig {
            container,
            endpoint,
            ..HeatmapConfig::default()
        };
        let surface =
            DomSurface::attach(&config.container).map_err(|e| JsValue::from(JsError::new(&e)))?;
        let drawn = load(config, surface)
            .await
            .map_err(|e| JsValue::from(JsError::new(&e.to_string())))?;
        Ok(cell_count(drawn))
    })
}

/// Render a `/getalloc` body to an SVG document string.
#[wasm_bindgen]
pub fn render_svg(data: &[u8]) -> Result<String, JsError> {
    let mut renderer = HeatmapRenderer::new(HeatmapConfig::default(), SvgSurface::new())
        .map_err(|e| JsError::new(&e.to_string()))?;
    renderer
        .render_payload(data)
        .map_err(|e| JsError::new(&e.to_string()))?;
    Ok(renderer.surface().to_svg())
}

/// Render a `/getalloc` body to render commands as JSON, for callers that
/// draw on their own canvas.
#[wasm_bindgen]
pub fn render_commands(data: &[u8]) -> Result<String, JsError> {
    let mut renderer = HeatmapRenderer::new(HeatmapConfig::default(), SvgSurface::new())
        .map_err(|e| JsError::new(&e.to_string()))?;
    renderer
        .render_payload(data)
        .map_err(|e| JsError::new(&e.to_string()))?;
    let commands: &[RenderCommand] = renderer.surface().commands();
    serde_json::to_string(commands).map_err(|e| JsError::new(&e.to_string()))
}

async fn load(config: HeatmapConfig, surface: DomSurface) -> Result<usize, HeatmapError> {
    let source = HttpSource::new(config.endpoint.clone());
    let mut renderer = HeatmapRenderer::new(config, surface)?;
    let drawn = renderer.load_and_render(&source).await?;
    log::debug!("drew {drawn} cells into #{}", renderer.config().container);
    Ok(drawn)
}

/// Cell counts cross into JS as a `Number`, which is exact up to 2^53.
fn cell_count(drawn: usize) -> JsValue {
    JsValue::from_f64(cell_count_f64(drawn))
}

fn cell_count_f64(drawn: usize) -> f64 {
    drawn as f64
}
