use alloc_heatmap_core::error::Result;
use alloc_heatmap_core::{HeatmapError, SnapshotSource};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Fetches the snapshot over HTTP with the page's `window.fetch`.
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl SnapshotSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        let window =
            web_sys::window().ok_or_else(|| HeatmapError::NetworkFailure("no window".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_str(&self.url))
            .await
            .map_err(|e| HeatmapError::NetworkFailure(format!("{}: {e:?}", self.url)))?;
        let resp: web_sys::Response = resp_value
            .dyn_into()
            .map_err(|_| HeatmapError::NetworkFailure("not a Response".into()))?;
        if !resp.ok() {
            return Err(HeatmapError::NetworkFailure(format!(
                "{}: HTTP {}",
                self.url,
                resp.status()
            )));
        }
        let buf = JsFuture::from(
            resp.array_buffer()
                .map_err(|e| HeatmapError::NetworkFailure(format!("{e:?}")))?,
        )
        .await
        .map_err(|e| HeatmapError::NetworkFailure(format!("{e:?}")))?;
        let uint8 = js_sys::Uint8Array::new(&buf);
        Ok(uint8.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
