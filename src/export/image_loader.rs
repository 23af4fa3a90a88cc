//! Image source policy: direct fetch, then one retry through a CORS proxy, then a placeholder.

use crate::export::io::ImageFetcher;
use crate::foundation::error::{ThumbcraftError, ThumbcraftResult};
use anyhow::Context;
use base64::Engine;
use std::path::PathBuf;

/// Graphic shown in place of an image that could not be loaded.
pub const PLACEHOLDER_SVG: &str = concat!(
    r##"<svg width="800" height="450" xmlns="http://www.w3.org/2000/svg">"##,
    r##"<rect width="100%" height="100%" fill="#f0f0f0"/>"##,
    r##"<text x="50%" y="50%" font-family="Arial" font-size="20" fill="#666" "##,
    r##"text-anchor="middle" dy=".3em">Image Load Error</text></svg>"##,
);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageLoaderOpts {
    /// Proxy URL with `{url}` standing for the percent-encoded source URL.
    pub proxy_template: String,
    /// When `false`, a failed direct fetch goes straight to the placeholder.
    pub proxy_enabled: bool,
}

impl Default for ImageLoaderOpts {
    fn default() -> Self {
        Self {
            proxy_template: "https://corsproxy.io/?{url}".to_owned(),
            proxy_enabled: true,
        }
    }
}

impl ImageLoaderOpts {
    pub fn proxy_url(&self, url: &str) -> String {
        self.proxy_template
            .replace("{url}", &encode_uri_component(url))
    }
}

/// Outcome of [`ImageLoader::load`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadedImage {
    Direct(Vec<u8>),
    Proxied(Vec<u8>),
    Placeholder,
}

impl LoadedImage {
    pub fn bytes(&self) -> &[u8] {
        match self {
            LoadedImage::Direct(b) | LoadedImage::Proxied(b) => b,
            LoadedImage::Placeholder => PLACEHOLDER_SVG.as_bytes(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, LoadedImage::Placeholder)
    }

    /// `data:` URI suitable for embedding in an SVG `<image>`.
    pub fn to_data_uri(&self) -> String {
        let bytes = self.bytes();
        format!(
            "data:{};base64,{}",
            sniff_mime(bytes),
            base64::engine::general_purpose::STANDARD.encode(bytes)
        )
    }
}

/// MIME type guessed from leading bytes; SVG when the payload looks like markup.
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(image::ImageFormat::Png) => "image/png",
        Ok(image::ImageFormat::Jpeg) => "image/jpeg",
        Ok(image::ImageFormat::Gif) => "image/gif",
        Ok(image::ImageFormat::WebP) => "image/webp",
        Ok(image::ImageFormat::Bmp) => "image/bmp",
        _ => "image/svg+xml",
    }
}

fn looks_like_image(bytes: &[u8]) -> bool {
    if image::guess_format(bytes).is_ok() {
        return true;
    }
    let head = &bytes[..bytes.len().min(512)];
    String::from_utf8_lossy(head).contains("<svg")
}

pub struct ImageLoader<F> {
    fetcher: F,
    opts: ImageLoaderOpts,
}

impl<F: ImageFetcher> ImageLoader<F> {
    pub fn new(fetcher: F, opts: ImageLoaderOpts) -> Self {
        Self { fetcher, opts }
    }

    pub fn opts(&self) -> &ImageLoaderOpts {
        &self.opts
    }

    /// Load `url`, never failing: unrecoverable sources yield [`LoadedImage::Placeholder`].
    pub fn load(&self, url: &str) -> LoadedImage {
        match self.try_load(url) {
            Ok(img) => img,
            Err(err) => {
                tracing::warn!(url, error = %err, "image unavailable, using placeholder");
                LoadedImage::Placeholder
            }
        }
    }

    /// Direct fetch, then the proxy. Fails with [`ThumbcraftError::ImageLoad`].
    pub fn try_load(&self, url: &str) -> ThumbcraftResult<LoadedImage> {
        let direct = self.fetch_image(url);
        let direct_err = match direct {
            Ok(bytes) => return Ok(LoadedImage::Direct(bytes)),
            Err(e) => e,
        };

        if !self.opts.proxy_enabled || url.starts_with("data:") {
            return Err(ThumbcraftError::image_load(format!("{url}: {direct_err}")));
        }

        let proxied = self.opts.proxy_url(url);
        tracing::warn!(url, error = %direct_err, "direct image load failed, retrying via proxy");
        match self.fetch_image(&proxied) {
            Ok(bytes) => Ok(LoadedImage::Proxied(bytes)),
            Err(proxy_err) => Err(ThumbcraftError::image_load(format!(
                "{url}: {direct_err}; via proxy: {proxy_err}"
            ))),
        }
    }

    fn fetch_image(&self, url: &str) -> ThumbcraftResult<Vec<u8>> {
        let bytes = self.fetcher.fetch(url)?;
        if !looks_like_image(&bytes) {
            return Err(ThumbcraftError::image_load("response is not an image"));
        }
        Ok(bytes)
    }
}

/// Resolves `data:` URIs, `file://` URLs and plain paths (relative to `root`).
///
/// Remote URLs are refused so the loader falls through to its next stage.
#[derive(Clone, Debug, Default)]
pub struct LocalFetcher {
    pub root: Option<PathBuf>,
}

impl LocalFetcher {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }
}

impl ImageFetcher for LocalFetcher {
    fn fetch(&self, url: &str) -> ThumbcraftResult<Vec<u8>> {
        if let Some(rest) = url.strip_prefix("data:") {
            return decode_data_uri(rest);
        }
        if url.starts_with("http://") || url.starts_with("https://") {
            return Err(ThumbcraftError::image_load(format!(
                "remote fetch unavailable for '{url}'"
            )));
        }

        let path = PathBuf::from(url.strip_prefix("file://").unwrap_or(url));
        let path = match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path,
        };
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read image '{}'", path.display()))?;
        Ok(bytes)
    }
}

fn decode_data_uri(rest: &str) -> ThumbcraftResult<Vec<u8>> {
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| ThumbcraftError::image_load("malformed data URI"))?;
    if meta.ends_with(";base64") {
        base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|e| ThumbcraftError::image_load(format!("invalid base64 payload: {e}")))
    } else {
        Ok(payload.as_bytes().to_vec())
    }
}

/// Blocking HTTP fetcher; local sources are delegated to [`LocalFetcher`].
#[cfg(feature = "http")]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    local: LocalFetcher,
}

#[cfg(feature = "http")]
impl HttpFetcher {
    pub fn new(local: LocalFetcher) -> ThumbcraftResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(20))
            .build()
            .context("build HTTP client")?;
        Ok(Self { client, local })
    }
}

#[cfg(feature = "http")]
impl ImageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> ThumbcraftResult<Vec<u8>> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return self.local.fetch(url);
        }
        let resp = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ThumbcraftError::image_load(format!("GET {url}: {e}")))?;
        let bytes = resp
            .bytes()
            .map_err(|e| ThumbcraftError::image_load(format!("read body of {url}: {e}")))?;
        Ok(bytes.to_vec())
    }
}

/// Percent-encode like `encodeURIComponent`.
pub fn encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(char::from(b)),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Force `https://` on image URLs hosted on `5na5.ru`.
pub fn normalize_image_url(url: &str) -> String {
    if !url.contains("5na5.ru") || url.starts_with("https://") {
        return url.to_owned();
    }
    let rest = match url.find(':') {
        Some(i) if i > 0 && url[i..].starts_with("://") => &url[i + 3..],
        _ => url,
    };
    format!("https://{rest}")
}

/// Clipboard text worth putting into an image URL field.
pub fn accepts_pasted_url(text: &str) -> bool {
    text.contains("5na5.ru") || text.starts_with("http")
}

#[cfg(test)]
#[path = "../../tests/unit/export/image_loader.rs"]
mod tests;
