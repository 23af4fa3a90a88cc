//! Thumbcraft is a layered thumbnail composition engine.
//!
//! A thumbnail is a fixed 16:9 canvas of independently styled layers: a title, logo texts,
//! images, a HUD metric panel, markers, frames, decorative corners and a background preset.
//! The public API is session-oriented:
//!
//! - Open an [`EditorSession`] (seeded with defaults or loaded from settings JSON)
//! - Edit layers programmatically or through pointer gestures
//! - Resolve a [`Composition`] and export it as settings JSON or a PNG
#![forbid(unsafe_code)]

pub mod compose;
pub mod export;
pub mod foundation;
pub mod interact;
pub mod scene;
pub mod session;
pub mod settings;
pub mod style;

pub use crate::compose::{Composition, LayerContent, LayerSource, RenderInstruction, compose};
pub use crate::export::{
    ClipboardSource, FileSource, FsFileSource, ImageFetcher, ImageLoader, ImageLoaderOpts,
    RasterOpts, Rasterizer, SvgRasterizer,
};
pub use crate::foundation::core::{Canvas, Point, Position, Size, Vec2};
pub use crate::foundation::error::{ThumbcraftError, ThumbcraftResult};
pub use crate::interact::{HitPart, LayerTarget, LayerUpdate, PointerDown, PointerListeners};
pub use crate::scene::corner::{CornerContext, CornerSettingsPatch};
pub use crate::session::EditorSession;
pub use crate::settings::ThumbnailSettings;
