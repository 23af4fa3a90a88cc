use super::*;
use std::cell::RefCell;
use std::collections::HashMap;

const PNG_1X1: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8DwHwAFBQIAX8jx0gAAAABJRU5ErkJggg==";

fn png_bytes() -> Vec<u8> {
    base64::engine::general_purpose::STANDARD
        .decode(PNG_1X1)
        .unwrap()
}

#[derive(Default)]
struct MapFetcher {
    responses: HashMap<String, Vec<u8>>,
    requests: RefCell<Vec<String>>,
}

impl ImageFetcher for MapFetcher {
    fn fetch(&self, url: &str) -> ThumbcraftResult<Vec<u8>> {
        self.requests.borrow_mut().push(url.to_owned());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| ThumbcraftError::image_load(format!("404 {url}")))
    }
}

const SRC: &str = "https://5na5.ru/myapp/legion-go.png";

#[test]
fn direct_success_skips_the_proxy() {
    let mut f = MapFetcher::default();
    f.responses.insert(SRC.to_owned(), png_bytes());
    let loader = ImageLoader::new(&f, ImageLoaderOpts::default());

    assert_eq!(loader.load(SRC), LoadedImage::Direct(png_bytes()));
    assert_eq!(f.requests.borrow().len(), 1);
}

#[test]
fn failed_direct_load_retries_once_through_proxy() {
    let opts = ImageLoaderOpts::default();
    let mut f = MapFetcher::default();
    f.responses.insert(opts.proxy_url(SRC), png_bytes());
    let loader = ImageLoader::new(&f, opts);

    assert_eq!(loader.load(SRC), LoadedImage::Proxied(png_bytes()));
    assert_eq!(
        *f.requests.borrow(),
        vec![
            SRC.to_owned(),
            "https://corsproxy.io/?https%3A%2F%2F5na5.ru%2Fmyapp%2Flegion-go.png".to_owned()
        ]
    );
}

#[test]
fn double_failure_yields_placeholder() {
    let f = MapFetcher::default();
    let loader = ImageLoader::new(&f, ImageLoaderOpts::default());
    assert!(matches!(
        loader.try_load(SRC),
        Err(ThumbcraftError::ImageLoad(_))
    ));

    let img = loader.load(SRC);
    assert!(img.is_placeholder());
    assert!(img.to_data_uri().starts_with("data:image/svg+xml;base64,"));
    assert_eq!(f.requests.borrow().len(), 4);
}

#[test]
fn non_image_payloads_count_as_failures() {
    let mut f = MapFetcher::default();
    f.responses.insert(SRC.to_owned(), b"<html>nope</html>".to_vec());
    let loader = ImageLoader::new(
        &f,
        ImageLoaderOpts {
            proxy_enabled: false,
            ..Default::default()
        },
    );
    assert!(loader.load(SRC).is_placeholder());
    assert_eq!(f.requests.borrow().len(), 1);
}

#[test]
fn local_fetcher_decodes_data_uris_and_refuses_remote_urls() {
    let local = LocalFetcher::default();
    let uri = format!("data:image/png;base64,{PNG_1X1}");
    assert_eq!(local.fetch(&uri).unwrap(), png_bytes());
    assert!(local.fetch("https://example.com/a.png").is_err());
    assert!(local.fetch("data:nocomma").is_err());

    let loader = ImageLoader::new(local, ImageLoaderOpts::default());
    let loaded = loader.load(&uri);
    assert_eq!(loaded, LoadedImage::Direct(png_bytes()));
    assert!(loaded.to_data_uri().starts_with("data:image/png;base64,"));
}

#[test]
fn local_fetcher_resolves_relative_paths_against_root() {
    let dir = std::env::temp_dir().join(format!("thumbcraft-img-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("dot.png"), png_bytes()).unwrap();

    let local = LocalFetcher::new(Some(dir.clone()));
    assert_eq!(local.fetch("dot.png").unwrap(), png_bytes());
    assert!(local.fetch("missing.png").is_err());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn uri_component_encoding_matches_browsers() {
    assert_eq!(encode_uri_component("a b&c=d/é"), "a%20b%26c%3Dd%2F%C3%A9");
    assert_eq!(encode_uri_component("A-z_0.!~*'()"), "A-z_0.!~*'()");
}

#[test]
fn image_urls_on_5na5_are_forced_to_https() {
    assert_eq!(
        normalize_image_url("http://5na5.ru/a.png"),
        "https://5na5.ru/a.png"
    );
    assert_eq!(normalize_image_url("5na5.ru/a.png"), "https://5na5.ru/a.png");
    assert_eq!(
        normalize_image_url("https://5na5.ru/a.png"),
        "https://5na5.ru/a.png"
    );
    assert_eq!(
        normalize_image_url("http://example.com/a.png"),
        "http://example.com/a.png"
    );
}

#[test]
fn pasted_text_filter() {
    assert!(accepts_pasted_url("https://example.com/x.png"));
    assert!(accepts_pasted_url("5na5.ru/x.png"));
    assert!(!accepts_pasted_url("hello world"));
}
