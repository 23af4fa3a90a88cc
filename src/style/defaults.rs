//! Canonical default values for every layer and settings type.
//!
//! Every function allocates a fresh value. Nothing here is a shared constant, so two layers built
//! from the same default never alias a nested background, padding or metric map.

use crate::foundation::core::Position;
use crate::scene::model::{
    Background, BackgroundStyle, BlendMode, CornerSettings, Extent, FrameLayer, HudBackground,
    HudBox, HudMetric, HudSettings, HudStyle, ImageBox, ImageLayer, LogoTextLayer,
    MarkerSettings, Padding, TextStyle,
};
use std::collections::BTreeMap;

/// Title text a fresh session starts with.
pub const DEFAULT_TITLE: &str = "Обзор Legion Go: 12 месяцев спустя";

/// Text of the seeded logo layer.
pub const DEFAULT_LOGO_TEXT: &str = "T-GAMERS";

/// Text given to logo layers added after session start.
pub const NEW_LOGO_TEXT: &str = "LOGO";

/// Stacking order of a title when its style omits `zIndex`.
pub const TITLE_Z_INDEX: i32 = 20;

/// Stacking order of a logo text when its style omits `zIndex`.
pub const LOGO_Z_INDEX: i32 = 30;

/// Stacking order of a frame when it declares none.
pub const FRAME_Z_INDEX: i32 = 42;

/// Fallback frame line length, pixels.
pub const FRAME_WIDTH_PX: f64 = 200.0;

/// Fallback frame stroke thickness, pixels.
pub const FRAME_HEIGHT_PX: f64 = 4.0;

/// Fallback frame colour.
pub const FRAME_COLOR: &str = "#ff0000";

/// Vertical alignment applied when a text style omits it.
pub const VERTICAL_ALIGN: &str = "middle";

/// Background box used when a text style omits one: black, 80 % opaque, full width.
pub fn text_background() -> Background {
    Background {
        color: "#000000".to_owned(),
        opacity: 80,
        width: Some(100.0),
        height: None,
    }
}

/// Padding used when a text style omits one.
pub fn text_padding() -> Padding {
    Padding { x: 16.0, y: 8.0 }
}

pub fn title_style() -> TextStyle {
    TextStyle {
        font_size: "48px".to_owned(),
        font_family: "Arial".to_owned(),
        font_weight: "bold".to_owned(),
        color: "#ffffff".to_owned(),
        text_transform: Some("uppercase".to_owned()),
        letter_spacing: Some("0px".to_owned()),
        text_shadow: Some("2px 2px 4px rgba(0,0,0,0.5)".to_owned()),
        text_align: Some("center".to_owned()),
        vertical_align: None,
        line_height: Some("1.4".to_owned()),
        position: Position::new(50.0, 83.0),
        background: text_background(),
        padding: Some(text_padding()),
        z_index: Some(TITLE_Z_INDEX),
        rotation: Some(0.0),
    }
}

pub fn logo_text_style() -> TextStyle {
    TextStyle {
        font_size: "60px".to_owned(),
        font_family: "Arial".to_owned(),
        font_weight: "700".to_owned(),
        color: "#ffffff".to_owned(),
        text_transform: Some("uppercase".to_owned()),
        letter_spacing: Some("0px".to_owned()),
        text_shadow: Some("2px 2px 4px rgba(0,0,0,0.5)".to_owned()),
        text_align: Some("center".to_owned()),
        vertical_align: None,
        line_height: Some("1.2".to_owned()),
        position: Position::new(12.0, 15.0),
        background: Background {
            color: "#000000".to_owned(),
            opacity: 79,
            width: Some(46.0),
            height: None,
        },
        padding: Some(Padding { x: 16.0, y: 16.0 }),
        z_index: Some(TITLE_Z_INDEX),
        rotation: Some(-33.0),
    }
}

/// Logo layer seeded into a new session.
pub fn seeded_logo_text_layer() -> LogoTextLayer {
    LogoTextLayer {
        id: 1,
        text: DEFAULT_LOGO_TEXT.to_owned(),
        visible: true,
        style: logo_text_style(),
        z_index: TITLE_Z_INDEX,
    }
}

/// Logo layer created by an "add" request.
pub fn logo_text_layer(id: u32) -> LogoTextLayer {
    LogoTextLayer {
        id,
        text: NEW_LOGO_TEXT.to_owned(),
        visible: true,
        style: logo_text_style(),
        z_index: LOGO_Z_INDEX,
    }
}

pub fn image_layer(id: u32) -> ImageLayer {
    ImageLayer {
        id,
        url: "https://5na5.ru/myapp/legion-go.png".to_owned(),
        visible: true,
        position: ImageBox {
            x: 41.0,
            y: 50.0,
            width: 140.0,
            height: 141.0,
        },
        opacity: 100,
        blur: 1,
        z_index: 10,
        blend_mode: BlendMode::Normal,
        scale: 100,
    }
}

pub fn hud_settings() -> HudSettings {
    const ROWS: [(&str, u32, &str); 5] = [
        ("fps", 90, "Достоверность"),
        ("cpu", 83, "Прибыль"),
        ("gpu", 90, "Риск потерь"),
        ("ram", 85, "Надежность"),
        ("power", 85, "Гибкость"),
    ];

    let mut metrics = BTreeMap::new();
    for (key, value, label) in ROWS {
        metrics.insert(
            key.to_owned(),
            HudMetric {
                value,
                visible: true,
                color: "#4ade80".to_owned(),
                label: label.to_owned(),
            },
        );
    }

    HudSettings {
        visible: true,
        position: HudBox {
            x: 86.0,
            y: 22.0,
            width: Extent::Percent(27.0),
            height: Extent::Auto,
        },
        opacity: 100,
        blur: 0,
        z_index: 30,
        blend_mode: BlendMode::Normal,
        style: HudStyle {
            font_size: "24px".to_owned(),
            font_family: "Arial".to_owned(),
            font_weight: "700".to_owned(),
            color: "#ffffff".to_owned(),
            text_shadow: "0 0 10px #FFB81C".to_owned(),
            background: HudBackground {
                color: "#000000".to_owned(),
                opacity: 17,
            },
            bar_color: "#FFB81C".to_owned(),
            bar_height: "10px".to_owned(),
            bar_width: "120px".to_owned(),
            bar_glow: "10px".to_owned(),
            line_height: "129px".to_owned(),
        },
        order: ROWS.iter().map(|(k, _, _)| (*k).to_owned()).collect(),
        metrics,
    }
}

pub fn marker_settings() -> MarkerSettings {
    MarkerSettings {
        visible: true,
        show_left: true,
        show_right: true,
        left_position: Position::new(20.0, 46.0),
        right_position: Position::new(87.0, 49.0),
        left_rotation: 42.0,
        right_rotation: 0.0,
        left_color: "#4ade80".to_owned(),
        right_color: "#4ade80".to_owned(),
        size: 2.0,
        z_index: 100,
    }
}

pub fn frame_layer(id: u32) -> FrameLayer {
    FrameLayer {
        id,
        visible: true,
        position: Position::new(50.0, 50.0),
        color: FRAME_COLOR.to_owned(),
        width: FRAME_WIDTH_PX,
        height: FRAME_HEIGHT_PX,
        rotation: 0.0,
        z_index: FRAME_Z_INDEX,
        arrow_head: false,
    }
}

/// Built-in background presets; the first one starts active.
pub fn background_styles() -> Vec<BackgroundStyle> {
    fn preset(id: u32, name: &str, gradient: &str, pattern: &str, size: &str) -> BackgroundStyle {
        BackgroundStyle {
            id,
            name: name.to_owned(),
            gradient: gradient.to_owned(),
            pattern: pattern.to_owned(),
            pattern_size: size.to_owned(),
            active: id == 1,
        }
    }

    vec![
        preset(
            1,
            "Gaming Performance",
            "linear-gradient(45deg, #ff0000, #000000)",
            "radial-gradient(circle at 50% 50%, rgba(255,255,255,0.1) 1px, transparent 1px)",
            "20px 20px",
        ),
        preset(
            2,
            "Tech Review",
            "linear-gradient(135deg, #00ff87, #60efff)",
            "repeating-linear-gradient(45deg, rgba(0,0,0,0.1) 0px, rgba(0,0,0,0.1) 2px, transparent 2px, transparent 6px)",
            "10px 10px",
        ),
        preset(
            3,
            "Cyberpunk",
            "linear-gradient(90deg, #ff00ff, #00ffff)",
            "linear-gradient(45deg, rgba(0,0,0,0.2) 25%, transparent 25%, transparent 75%, rgba(0,0,0,0.2) 75%)",
            "30px 30px",
        ),
        preset(
            4,
            "Professional",
            "linear-gradient(180deg, #2c5364, #203a43, #0f2027)",
            "none",
            "0",
        ),
    ]
}

pub fn corner_settings() -> CornerSettings {
    CornerSettings {
        color: "#FFB81C".to_owned(),
        opacity: 100,
        size: 24.0,
        visible: true,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/defaults.rs"]
mod tests;
