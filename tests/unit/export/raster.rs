use super::*;
use crate::compose::resolve::resolve_background;
use crate::foundation::core::Canvas;
use crate::style::defaults;

fn small_opts() -> RasterOpts {
    RasterOpts {
        width: 64,
        height: 36,
        pixel_ratio: 1.0,
        ..Default::default()
    }
}

fn decode(png: &[u8]) -> image::RgbaImage {
    image::load_from_memory(png).unwrap().to_rgba8()
}

#[test]
fn defaults_match_thumbnail_export() {
    let o = RasterOpts::default();
    assert_eq!((o.width, o.height), (2560, 1440));
    assert_eq!(o.pixel_ratio, 2.0);
    assert_eq!(o.background, "#000000");
    assert_eq!(o.device_size().unwrap(), (5120, 2880));
}

#[test]
fn degenerate_sizes_are_export_errors() {
    let mut o = small_opts();
    o.pixel_ratio = 0.0;
    assert!(matches!(o.device_size(), Err(ThumbcraftError::Export(_))));
    o.pixel_ratio = 1000.0;
    assert!(matches!(o.device_size(), Err(ThumbcraftError::Export(_))));
}

#[test]
fn empty_composition_is_solid_background() {
    let comp = Composition {
        canvas: Canvas {
            width: 64,
            height: 36,
        },
        layers: Vec::new(),
    };
    let png = SvgRasterizer::new(None)
        .rasterize(&comp, &small_opts())
        .unwrap();
    let img = decode(&png);
    assert_eq!(img.dimensions(), (64, 36));
    assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 255]));
}

#[test]
fn pixel_ratio_scales_output_and_background_paints() {
    let comp = Composition {
        canvas: Canvas {
            width: 64,
            height: 36,
        },
        layers: vec![resolve_background(&defaults::background_styles()).unwrap()],
    };
    let mut opts = small_opts();
    opts.pixel_ratio = 2.0;
    let img = decode(&SvgRasterizer::new(None).rasterize(&comp, &opts).unwrap());
    assert_eq!(img.dimensions(), (128, 72));
    assert!(img.pixels().any(|p| p.0[0] > 0));
}

#[test]
fn invalid_background_colour_is_an_export_error() {
    let comp = Composition {
        canvas: Canvas {
            width: 8,
            height: 8,
        },
        layers: Vec::new(),
    };
    let mut opts = small_opts();
    opts.background = "not-a-colour".to_owned();
    assert!(matches!(
        SvgRasterizer::new(None).rasterize(&comp, &opts),
        Err(ThumbcraftError::Export(_))
    ));
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut px = [64u8, 32, 0, 128, 10, 20, 30, 255, 5, 5, 5, 0];
    unpremultiply_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[10, 20, 30, 255]);
    assert_eq!(&px[8..], &[5, 5, 5, 0]);
}
