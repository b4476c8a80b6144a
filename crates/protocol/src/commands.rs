use serde::{Deserialize, Serialize};

use crate::types::{Color, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` per render pass. Surfaces consume
/// this list sequentially — each command carries all the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled rectangle.
    DrawRect { rect: Rect, fill: Color },

    /// Begin a logical group (e.g. the cell grid). Surfaces may map this to
    /// an SVG `<g>` or ignore it.
    BeginGroup { id: String },

    /// End the current group.
    EndGroup,
}

impl RenderCommand {
    /// The rectangle and fill of a `DrawRect`, `None` for anything else.
    pub fn as_rect(&self) -> Option<(&Rect, &Color)> {
        match self {
            RenderCommand::DrawRect { rect, fill } => Some((rect, fill)),
            _ => None,
        }
    }
}
