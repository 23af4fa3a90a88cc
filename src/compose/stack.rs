use crate::compose::resolve::{self, RenderInstruction};
use crate::foundation::core::Canvas;
use crate::scene::corner::CornerContext;
use crate::settings::ThumbnailSettings;

/// Resolved canvas: every visible layer in paint order (first = bottom).
#[derive(Clone, Debug, PartialEq)]
pub struct Composition {
    pub canvas: Canvas,
    pub layers: Vec<RenderInstruction>,
}

impl Composition {
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }
}

/// Resolve and stack every layer of `doc`.
///
/// Corner decorations come from `corners`; `doc.corner_settings` is only the persisted copy.
/// Layers sort by `zIndex` and, at equal `zIndex`, keep document order: background, images,
/// corners, HUD, markers, logo texts, title, frames.
#[tracing::instrument(skip(doc, corners))]
pub fn compose(doc: &ThumbnailSettings, corners: &CornerContext, canvas: Canvas) -> Composition {
    let mut nodes: Vec<RenderInstruction> = Vec::new();

    nodes.extend(resolve::resolve_background(&doc.background_styles));
    nodes.extend(doc.image_layers.iter().filter_map(resolve::resolve_image));
    nodes.extend(resolve::resolve_corners(corners));
    nodes.extend(resolve::resolve_hud(&doc.hud_settings));
    nodes.extend(resolve::resolve_markers(&doc.marker_settings));
    nodes.extend(doc.logo_text_layers.iter().filter_map(resolve::resolve_logo_text));
    nodes.push(resolve::resolve_title(&doc.title, &doc.title_style));
    nodes.extend(doc.frame_layers.iter().filter_map(resolve::resolve_frame));

    let mut keyed: Vec<((i32, usize), RenderInstruction)> = nodes
        .into_iter()
        .enumerate()
        .map(|(order, node)| ((node.z_index, order), node))
        .collect();
    keyed.sort_by_key(|(key, _)| *key);

    let layers: Vec<RenderInstruction> = keyed.into_iter().map(|(_, node)| node).collect();
    tracing::debug!(layers = layers.len(), "composition resolved");
    Composition { canvas, layers }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/stack.rs"]
mod tests;
