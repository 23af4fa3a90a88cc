//! Output side: collaborator traits, image loading and the built-in PNG rasterizer.

pub mod image_loader;
pub mod io;
pub mod raster;
pub mod svg;

pub use image_loader::{ImageLoader, ImageLoaderOpts, LoadedImage, normalize_image_url};
pub use io::{ClipboardSource, FileSource, FsFileSource, ImageFetcher, NoClipboard, Rasterizer};
pub use raster::{RasterOpts, SvgRasterizer};
