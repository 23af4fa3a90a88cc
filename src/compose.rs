//! Composition engine: maps editor state to immutable, z-ordered render instructions.

pub mod css;
pub mod resolve;
pub mod stack;

pub use resolve::{
    BackgroundFill, CornerGlyph, FrameLine, HudPanel, HudRow, ImageContent, Justify,
    LayerContent, LayerKind, LayerSource, MarkerGlyph, Placement, RenderInstruction, TextBlock,
};
pub use stack::{Composition, compose};
