//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use alloc_heatmap_protocol::RenderCommand;

use crate::error::Result;
use crate::surface::Surface;

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` are the full surface size in pixels. No background
/// is painted, so uncovered area stays transparent.
pub fn render_svg(commands: &[RenderCommand], width: u32, height: u32) -> String {
    let mut svg = String::with_capacity(commands.len() * 80 + 128);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#,
    ));

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect { rect, fill } => {
                svg.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" style="fill: {fill}"/>"#,
                    rect.x, rect.y, rect.w, rect.h,
                ));
            }
            RenderCommand::BeginGroup { id } => {
                svg.push_str(&format!(r#"<g id="{}">"#, escape_xml(id)));
            }
            RenderCommand::EndGroup => svg.push_str("</g>"),
        }
    }

    svg.push_str("</svg>");
    svg
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// In-memory surface that keeps the last drawn command list and renders it
/// to SVG on demand.
#[derive(Debug, Default)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    commands: Vec<RenderCommand>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn rect_count(&self) -> usize {
        self.commands.iter().filter(|c| c.as_rect().is_some()).count()
    }

    pub fn to_svg(&self) -> String {
        render_svg(&self.commands, self.width, self.height)
    }
}

impl Surface for SvgSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw(&mut self, commands: &[RenderCommand]) -> Result<()> {
        self.commands.extend_from_slice(commands);
        Ok(())
    }
}
