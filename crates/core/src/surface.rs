use alloc_heatmap_protocol::RenderCommand;

use crate::error::Result;

/// A drawable target that consumes render commands.
///
/// Implemented by the in-memory [`SvgSurface`](crate::svg::SvgSurface) and
/// by the browser DOM surface in the wasm bridge.
pub trait Surface {
    /// Set the total drawable size in pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Remove everything previously drawn.
    fn clear(&mut self);

    /// Draw `commands` on top of the current contents.
    fn draw(&mut self, commands: &[RenderCommand]) -> Result<()>;
}
