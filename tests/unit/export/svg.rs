use super::*;
use crate::compose::compose;
use crate::export::image_loader::{ImageLoaderOpts, LocalFetcher};
use crate::scene::corner::CornerContext;
use crate::settings::ThumbnailSettings;

fn loader() -> ImageLoader<LocalFetcher> {
    ImageLoader::new(LocalFetcher::default(), ImageLoaderOpts::default())
}

#[test]
fn seeded_scene_builds_a_parseable_document() {
    let doc = ThumbnailSettings::seeded();
    let comp = compose(&doc, &CornerContext::default(), Canvas::THUMBNAIL);
    let svg = build_svg(&comp, &loader());

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"viewBox="0 0 2560 1440""#));
    assert!(svg.contains("LEGION GO") || svg.contains("ОБЗОР"));
    assert!(svg.contains("T-GAMERS"));
    assert!(svg.contains("feGaussianBlur"));
    // remote image without the http feature falls back to the placeholder
    assert!(svg.contains("data:image/svg+xml;base64,"));

    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default());
    assert!(tree.is_ok(), "{:?}", tree.err());
}

#[test]
fn linear_gradients_parse_angle_and_stops() {
    let g = parse_gradient("linear-gradient(180deg, #2c5364, #203a43, #0f2027)").unwrap();
    assert_eq!(g.kind, GradientKind::Linear { angle_deg: 180.0 });
    let offsets: Vec<f64> = g.stops.iter().map(|s| s.offset).collect();
    assert_eq!(offsets, vec![0.0, 0.5, 1.0]);

    let g = parse_gradient(
        "linear-gradient(45deg, rgba(0,0,0,0.2) 25%, transparent 25%, transparent 75%, rgba(0,0,0,0.2) 75%)",
    )
    .unwrap();
    assert_eq!(g.stops.len(), 4);
    assert_eq!(g.stops[0].color, "rgba(0,0,0,0.2)");
    assert_eq!(g.stops[0].offset, 0.25);
    assert_eq!(g.stops[3].offset, 0.75);

    let g = parse_gradient("linear-gradient(to right, #fff, #000)").unwrap();
    assert_eq!(g.kind, GradientKind::Linear { angle_deg: 90.0 });
}

#[test]
fn radial_and_unknown_gradients() {
    let g = parse_gradient(
        "radial-gradient(circle at 50% 50%, rgba(255,255,255,0.1) 1px, transparent 1px)",
    )
    .unwrap();
    assert_eq!(g.kind, GradientKind::Radial);
    assert_eq!(g.stops.len(), 2);

    assert!(parse_gradient("none").is_none());
    assert!(parse_gradient("url(x.png)").is_none());
    assert!(parse_gradient("linear-gradient(45deg, #fff").is_none());
}

#[test]
fn colours_split_into_opaque_paint_and_alpha() {
    assert_eq!(split_color("#000000cc"), ("#000000".to_owned(), 204.0 / 255.0));
    assert_eq!(split_color("#FFB81C"), ("#ffb81c".to_owned(), 1.0));
    assert_eq!(split_color("rgba(255, 0, 0, 0.5)"), ("#ff0000".to_owned(), 0.5));
    assert_eq!(split_color("transparent"), ("#000000".to_owned(), 0.0));
    assert_eq!(paint_attr("fill", "#00000000"), r##"fill="#000000" fill-opacity="0""##);
}

#[test]
fn text_is_escaped() {
    assert_eq!(escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
}

#[test]
fn px_parsing() {
    assert_eq!(parse_px("48px"), Some(48.0));
    assert_eq!(parse_px(" 12 "), Some(12.0));
    assert_eq!(parse_px("auto"), None);
    assert_eq!(line_height_px("1.5", 20.0), Some(30.0));
    assert_eq!(line_height_px("129px", 20.0), Some(129.0));
    assert_eq!(parse_pattern_size("20px 10px"), Some((20.0, 10.0)));
    assert_eq!(parse_pattern_size("0"), None);
}
