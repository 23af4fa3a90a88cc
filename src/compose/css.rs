//! CSS-like property bag for a resolved instruction, for hosts that lay out with CSS.

use crate::compose::resolve::{LayerContent, Placement, RenderInstruction};
use crate::scene::model::{BlendMode, Extent};
use std::collections::BTreeMap;

pub type CssProperties = BTreeMap<&'static str, String>;

fn extent(e: Extent) -> String {
    match e {
        Extent::Auto => "auto".to_owned(),
        Extent::Percent(v) => format!("{v}%"),
    }
}

/// Properties of the layer's outer box.
pub fn to_css(instr: &RenderInstruction) -> CssProperties {
    let mut css = CssProperties::new();
    css.insert("position", "absolute".to_owned());

    match instr.placement {
        Placement::Centered { anchor } => {
            css.insert("left", format!("{}%", anchor.x));
            css.insert("top", format!("{}%", anchor.y));
            let mut transform = format!("translate(-50%, -50%) rotate({}deg)", instr.rotation);
            if let LayerContent::Image(img) = &instr.content {
                transform.push_str(&format!(" scale({})", img.scale));
            }
            css.insert("transform", transform);
            css.insert("transform-origin", "center center".to_owned());
        }
        Placement::FullCanvas => {
            css.insert("inset", "0".to_owned());
        }
        Placement::Corner(pos) => {
            let (right, bottom) = pos.pinned_far_edges();
            css.insert(if right { "right" } else { "left" }, "0".to_owned());
            css.insert(if bottom { "bottom" } else { "top" }, "0".to_owned());
            css.insert("transform", format!("rotate({}deg)", instr.rotation));
        }
    }

    css.insert("z-index", instr.z_index.to_string());
    if instr.opacity != 1.0 {
        css.insert("opacity", instr.opacity.to_string());
    }
    if instr.blur_px > 0.0 {
        css.insert("filter", format!("blur({}px)", instr.blur_px));
    }
    if instr.blend != BlendMode::Normal {
        css.insert("mix-blend-mode", instr.blend.css_keyword().to_owned());
    }

    match &instr.content {
        LayerContent::Text(t) => {
            css.insert("display", "flex".to_owned());
            css.insert("align-items", "center".to_owned());
            css.insert("justify-content", t.justify.css_keyword().to_owned());
            css.insert("width", format!("{}%", t.width_pct));
            if let Some(h) = t.height_pct {
                css.insert("height", format!("{h}%"));
            }
            css.insert("background-color", t.background_color.clone());
            css.insert("padding", format!("{}px {}px", t.padding.y, t.padding.x));
            css.insert("font-size", t.font_size.clone());
            css.insert("font-family", t.font_family.clone());
            css.insert("font-weight", t.font_weight.clone());
            css.insert("color", t.color.clone());
            css.insert("vertical-align", t.vertical_align.clone());
            for (key, value) in [
                ("text-transform", &t.text_transform),
                ("letter-spacing", &t.letter_spacing),
                ("text-shadow", &t.text_shadow),
                ("line-height", &t.line_height),
                ("text-align", &t.text_align),
            ] {
                if let Some(v) = value {
                    css.insert(key, v.clone());
                }
            }
        }
        LayerContent::Image(img) => {
            css.insert("width", format!("{}%", img.width_pct));
            css.insert("height", format!("{}%", img.height_pct));
        }
        LayerContent::Hud(hud) => {
            css.insert("width", extent(hud.width));
            css.insert("height", extent(hud.height));
            css.insert("background-color", hud.background_color.clone());
            css.insert("padding", format!("{}px", hud.padding_px));
            css.insert("border-radius", format!("{}px", hud.radius_px));
            css.insert("font-size", hud.style.font_size.clone());
            css.insert("font-family", hud.style.font_family.clone());
            css.insert("font-weight", hud.style.font_weight.clone());
            css.insert("color", hud.style.color.clone());
            css.insert("text-shadow", hud.style.text_shadow.clone());
        }
        LayerContent::Marker(m) => {
            css.insert("width", format!("{}px", m.edge_px));
            css.insert("height", format!("{}px", m.edge_px));
        }
        LayerContent::Frame(f) => {
            css.insert("width", format!("{}px", f.length_px));
            css.insert("height", format!("{}px", f.thickness_px));
            css.insert("background-color", f.color.clone());
        }
        LayerContent::Corner(c) => {
            css.insert("width", format!("{}px", c.box_px));
            css.insert("height", format!("{}px", c.box_px));
        }
        LayerContent::Background(bg) => {
            css.insert("background", bg.gradient.clone());
            css.insert("background-size", "cover".to_owned());
        }
    }

    css
}

#[cfg(test)]
#[path = "../../tests/unit/compose/css.rs"]
mod tests;
