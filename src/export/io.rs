//! Host capabilities the editor consumes.

use crate::compose::Composition;
use crate::export::raster::RasterOpts;
use crate::foundation::error::{ThumbcraftError, ThumbcraftResult};
use anyhow::Context;
use std::path::Path;

/// Turns a resolved composition into encoded image bytes.
pub trait Rasterizer {
    fn rasterize(&self, composition: &Composition, opts: &RasterOpts) -> ThumbcraftResult<Vec<u8>>;
}

/// Current text contents of the system clipboard.
pub trait ClipboardSource {
    /// Fails with [`ThumbcraftError::Clipboard`] when access is denied or unavailable.
    fn read_text(&self) -> ThumbcraftResult<String>;
}

/// Reads a user-picked file as text.
pub trait FileSource {
    fn read_text(&self, path: &Path) -> ThumbcraftResult<String>;
}

/// Fetches the raw bytes behind an image URL.
pub trait ImageFetcher {
    fn fetch(&self, url: &str) -> ThumbcraftResult<Vec<u8>>;
}

impl<T: ClipboardSource + ?Sized> ClipboardSource for &T {
    fn read_text(&self) -> ThumbcraftResult<String> {
        (**self).read_text()
    }
}

impl<T: ImageFetcher + ?Sized> ImageFetcher for &T {
    fn fetch(&self, url: &str) -> ThumbcraftResult<Vec<u8>> {
        (**self).fetch(url)
    }
}

/// Local filesystem [`FileSource`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FsFileSource;

impl FileSource for FsFileSource {
    fn read_text(&self, path: &Path) -> ThumbcraftResult<String> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read settings file '{}'", path.display()))?;
        Ok(text)
    }
}

/// Clipboard that always refuses access (headless hosts).
#[derive(Clone, Copy, Debug, Default)]
pub struct NoClipboard;

impl ClipboardSource for NoClipboard {
    fn read_text(&self) -> ThumbcraftResult<String> {
        Err(ThumbcraftError::clipboard("no clipboard available"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/io.rs"]
mod tests;
