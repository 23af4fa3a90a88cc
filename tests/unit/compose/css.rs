use super::*;
use crate::compose::resolve::{resolve_background, resolve_corners, resolve_image, resolve_title};
use crate::scene::corner::CornerContext;
use crate::style::defaults;

#[test]
fn text_layer_css_matches_anchor_centred_box() {
    let css = to_css(&resolve_title("Hi", &defaults::title_style()));
    assert_eq!(css["left"], "50%");
    assert_eq!(css["top"], "83%");
    assert_eq!(css["transform"], "translate(-50%, -50%) rotate(0deg)");
    assert_eq!(css["z-index"], "20");
    assert_eq!(css["justify-content"], "center");
    assert_eq!(css["background-color"], "#000000cc");
    assert_eq!(css["padding"], "8px 16px");
    assert_eq!(css["width"], "100%");
    assert!(!css.contains_key("opacity"));
}

#[test]
fn image_css_carries_scale_blur_and_blend() {
    let mut layer = defaults::image_layer(1);
    layer.blend_mode = crate::scene::model::BlendMode::ColorDodge;
    layer.opacity = 40;
    let css = to_css(&resolve_image(&layer).unwrap());
    assert_eq!(css["transform"], "translate(-50%, -50%) rotate(0deg) scale(1)");
    assert_eq!(css["filter"], "blur(1px)");
    assert_eq!(css["mix-blend-mode"], "color-dodge");
    assert_eq!(css["opacity"], "0.4");
}

#[test]
fn corner_css_pins_edges() {
    let corners = resolve_corners(&CornerContext::default());
    let bottom_right = to_css(&corners[3]);
    assert_eq!(bottom_right["right"], "0");
    assert_eq!(bottom_right["bottom"], "0");
    assert_eq!(bottom_right["transform"], "rotate(180deg)");
    assert_eq!(bottom_right["width"], "48px");
}

#[test]
fn background_css_covers_canvas() {
    let css = to_css(&resolve_background(&defaults::background_styles()).unwrap());
    assert_eq!(css["inset"], "0");
    assert_eq!(css["background"], "linear-gradient(45deg, #ff0000, #000000)");
}
