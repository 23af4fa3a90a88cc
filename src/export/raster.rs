use crate::compose::Composition;
use crate::export::image_loader::{ImageLoader, ImageLoaderOpts, LocalFetcher};
use crate::export::io::{ImageFetcher, Rasterizer};
use crate::export::svg::build_svg;
use crate::foundation::error::{ThumbcraftError, ThumbcraftResult};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Largest output edge in device pixels.
const MAX_DIM: u32 = 16_384;

/// Output size and fill of an exported image.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterOpts {
    /// Logical width in pixels.
    pub width: u32,
    /// Logical height in pixels.
    pub height: u32,
    /// Device pixels per logical pixel.
    pub pixel_ratio: f64,
    /// Solid fill painted before any layer.
    pub background: String,
}

impl Default for RasterOpts {
    fn default() -> Self {
        Self {
            width: 2560,
            height: 1440,
            pixel_ratio: 2.0,
            background: "#000000".to_owned(),
        }
    }
}

impl RasterOpts {
    /// Output size in device pixels.
    pub fn device_size(&self) -> ThumbcraftResult<(u32, u32)> {
        fn dim(logical: u32, ratio: f64) -> ThumbcraftResult<u32> {
            let v = (f64::from(logical) * ratio).round();
            if !v.is_finite() || v < 1.0 || v > f64::from(MAX_DIM) {
                return Err(ThumbcraftError::export(format!(
                    "output dimension {v} outside 1..={MAX_DIM}"
                )));
            }
            Ok(v as u32)
        }
        Ok((
            dim(self.width, self.pixel_ratio)?,
            dim(self.height, self.pixel_ratio)?,
        ))
    }
}

/// Built-in [`Rasterizer`]: composition to SVG, rendered with resvg, encoded as PNG.
pub struct SvgRasterizer<F = LocalFetcher> {
    loader: ImageLoader<F>,
    fontdb: Arc<usvg::fontdb::Database>,
}

impl SvgRasterizer<LocalFetcher> {
    /// Local images only, relative paths resolved against `assets_root`.
    pub fn new(assets_root: Option<PathBuf>) -> Self {
        let fontdb = build_fontdb(assets_root.as_deref());
        Self {
            loader: ImageLoader::new(LocalFetcher::new(assets_root), ImageLoaderOpts::default()),
            fontdb,
        }
    }
}

impl<F: ImageFetcher> SvgRasterizer<F> {
    pub fn with_loader(loader: ImageLoader<F>, assets_root: Option<&Path>) -> Self {
        Self {
            loader,
            fontdb: build_fontdb(assets_root),
        }
    }

    /// SVG document the rasterizer would render.
    pub fn to_svg(&self, composition: &Composition) -> String {
        build_svg(composition, &self.loader)
    }
}

impl<F: ImageFetcher> Rasterizer for SvgRasterizer<F> {
    #[tracing::instrument(skip(self, composition, opts), fields(w = opts.width, h = opts.height))]
    fn rasterize(&self, composition: &Composition, opts: &RasterOpts) -> ThumbcraftResult<Vec<u8>> {
        let (width, height) = opts.device_size()?;
        let svg = self.to_svg(composition);

        let options = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            font_resolver: make_font_resolver(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &options)
            .map_err(|e| ThumbcraftError::export(format!("parse composed scene: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| ThumbcraftError::export("failed to allocate output pixmap"))?;
        let bg = crate::style::color::parse_hex(&opts.background)
            .map_err(|e| ThumbcraftError::export(format!("background colour: {e}")))?;
        pixmap.fill(resvg::tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));

        let sx = (width as f32) / tree.size().width();
        let sy = (height as f32) / tree.size().height();
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(sx, sy),
            &mut pixmap.as_mut(),
        );

        let mut rgba = pixmap.take();
        unpremultiply_in_place(&mut rgba);
        encode_png(width, height, rgba)
    }
}

fn encode_png(width: u32, height: u32, rgba: Vec<u8>) -> ThumbcraftResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| ThumbcraftError::export("pixel buffer size mismatch"))?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| ThumbcraftError::export(format!("encode png: {e}")))?;
    Ok(buf)
}

fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

fn build_fontdb(assets_root: Option<&Path>) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    if let Some(root) = assets_root {
        load_fonts_from_dir(&mut db, &root.join("fonts"));
        load_fonts_from_dir(&mut db, root);
    }
    Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in rd.flatten() {
        let path = entry.path();
        let is_font = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc"));
        if path.is_file() && is_font {
            let _ = db.load_font_file(&path);
        }
    }
}

/// Requested families first, then generic fallbacks, then any face at all.
fn make_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<usvg::fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => usvg::fontdb::Family::Name(s),
                });
            }
            families.push(usvg::fontdb::Family::SansSerif);

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: usvg::fontdb::Stretch::Normal,
                style: usvg::fontdb::Style::Normal,
            };
            fontdb
                .query(&query)
                .or_else(|| fontdb.faces().next().map(|f| f.id))
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/raster.rs"]
mod tests;
