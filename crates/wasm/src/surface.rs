use alloc_heatmap_core::error::Result;
use alloc_heatmap_core::svg::render_svg;
use alloc_heatmap_core::{HeatmapError, Surface};
use alloc_heatmap_protocol::RenderCommand;

/// Draws into a DOM container by replacing its children with an `<svg>`.
pub struct DomSurface {
    element: web_sys::Element,
    width: u32,
    height: u32,
}

impl DomSurface {
    /// Bind to the element with id `container_id`.
    pub fn attach(container_id: &str) -> std::result::Result<Self, String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;
        let element = document
            .get_element_by_id(container_id)
            .ok_or_else(|| format!("no element with id '{container_id}'"))?;
        Ok(Self {
            element,
            width: 0,
            height: 0,
        })
    }
}

impl Surface for DomSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.element.set_inner_html("");
    }

    fn draw(&mut self, commands: &[RenderCommand]) -> Result<()> {
        let svg = render_svg(commands, self.width, self.height);
        self.element
            .insert_adjacent_html("beforeend", &svg)
            .map_err(|e| HeatmapError::SurfaceFailure(format!("{e:?}")))
    }
}
