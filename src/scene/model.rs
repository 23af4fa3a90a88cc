use crate::foundation::core::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Box drawn behind a text layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    /// Hex colour (`#rrggbb`).
    pub color: String,
    /// Opacity percentage `0..=100`.
    pub opacity: u32,
    /// Box width as a percentage of the canvas width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Box height as a percentage of the canvas height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Inner padding of a text box, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    /// Horizontal padding.
    pub x: f64,
    /// Vertical padding.
    pub y: f64,
}

/// Declared style of a title or logo text layer.
///
/// Optional fields fall back to type-specific defaults when the layer is composed; see
/// [`crate::compose::resolve`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// CSS font size, e.g. `"48px"`.
    pub font_size: String,
    /// Font family name.
    pub font_family: String,
    /// CSS font weight (`"bold"`, `"700"`, ...).
    pub font_weight: String,
    /// Text colour.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_shadow: Option<String>,
    /// `left`, `center` or `right`; anything else aligns to the start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    /// `top`, `middle` or `bottom`; defaults to `middle`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    /// Anchor (box centre) in canvas percentages.
    pub position: Position,
    #[serde(default = "crate::style::defaults::text_background")]
    pub background: Background,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    /// Rotation about the box centre, degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

/// One entry of the logo text list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoTextLayer {
    /// Unique within the list.
    pub id: u32,
    pub text: String,
    pub visible: bool,
    pub style: TextStyle,
    /// Persisted list-level stacking hint; the style's `zIndex` governs composition.
    pub z_index: i32,
}

/// Pixel compositing function used when layering content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
}

impl BlendMode {
    /// Every blend mode, in declaration order.
    pub const ALL: [BlendMode; 12] = [
        BlendMode::Normal,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::ColorDodge,
        BlendMode::ColorBurn,
        BlendMode::HardLight,
        BlendMode::SoftLight,
        BlendMode::Difference,
        BlendMode::Exclusion,
    ];

    /// CSS / SVG `mix-blend-mode` keyword.
    pub fn css_keyword(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::ColorDodge => "color-dodge",
            BlendMode::ColorBurn => "color-burn",
            BlendMode::HardLight => "hard-light",
            BlendMode::SoftLight => "soft-light",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
        }
    }
}

/// Placement box of an image layer, all in canvas percentages.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ImageBox {
    /// Centre of the box.
    pub fn anchor(self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Bitmap layer sourced from a URL or local path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLayer {
    pub id: u32,
    pub url: String,
    pub visible: bool,
    pub position: ImageBox,
    /// Opacity percentage `0..=100`.
    pub opacity: u32,
    /// Gaussian blur radius in pixels `0..=10`.
    pub blur: u32,
    pub z_index: i32,
    pub blend_mode: BlendMode,
    /// Uniform scale percentage (100 = natural).
    pub scale: u32,
}

/// A HUD box extent: a canvas percentage or `"auto"`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Extent {
    /// Size to content.
    #[default]
    Auto,
    /// Percentage of the matching canvas axis.
    Percent(f64),
}

impl Serialize for Extent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Extent::Auto => serializer.serialize_str("auto"),
            Extent::Percent(v) => serializer.serialize_f64(*v),
        }
    }
}

impl<'de> Deserialize<'de> for Extent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(f64),
            Str(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(v) => Ok(Extent::Percent(v)),
            Repr::Str(s) if s == "auto" => Ok(Extent::Auto),
            Repr::Str(s) => Err(serde::de::Error::custom(format!(
                "extent must be a number or \"auto\", got \"{s}\""
            ))),
        }
    }
}

/// Placement box of the HUD panel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HudBox {
    pub x: f64,
    pub y: f64,
    pub width: Extent,
    pub height: Extent,
}

/// Panel background of the HUD (no width/height, unlike text backgrounds).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HudBackground {
    pub color: String,
    pub opacity: u32,
}

/// Typography and bar styling of the HUD panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HudStyle {
    pub font_size: String,
    pub font_family: String,
    pub font_weight: String,
    pub color: String,
    pub text_shadow: String,
    pub background: HudBackground,
    pub bar_color: String,
    pub bar_height: String,
    pub bar_width: String,
    pub bar_glow: String,
    pub line_height: String,
}

/// One HUD metric row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HudMetric {
    /// Bar fill percentage `0..=100`.
    pub value: u32,
    pub visible: bool,
    pub color: String,
    pub label: String,
}

/// Performance-style metric panel.
///
/// Only keys listed in `order` render, in that order; a key present in `metrics` but absent from
/// `order` never renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HudSettings {
    pub visible: bool,
    pub position: HudBox,
    pub opacity: u32,
    pub blur: u32,
    pub z_index: i32,
    pub blend_mode: BlendMode,
    pub style: HudStyle,
    pub order: Vec<String>,
    pub metrics: BTreeMap<String, HudMetric>,
}

impl HudSettings {
    /// Metrics that render, in display order.
    pub fn visible_rows(&self) -> impl Iterator<Item = (&str, &HudMetric)> {
        self.order.iter().filter_map(|key| {
            let metric = self.metrics.get(key)?;
            metric.visible.then_some((key.as_str(), metric))
        })
    }

    /// `true` when `order` and `metrics` name exactly the same keys.
    pub fn order_matches_metrics(&self) -> bool {
        self.order.len() == self.metrics.len()
            && self.order.iter().all(|k| self.metrics.contains_key(k))
    }
}

/// Which of the two marker instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSide {
    Left,
    Right,
}

/// Per-instance view of a marker.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerInstance {
    pub show: bool,
    pub position: Position,
    pub rotation: f64,
    pub color: String,
}

/// Global marker settings plus the left and right instances.
///
/// Persisted flat (`showLeft`, `leftPosition`, ...) for compatibility with saved files; use
/// [`MarkerSettings::instance`] and [`MarkerSettings::set_instance`] for per-side access.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSettings {
    pub visible: bool,
    pub show_left: bool,
    pub show_right: bool,
    pub left_position: Position,
    pub right_position: Position,
    pub left_rotation: f64,
    pub right_rotation: f64,
    pub left_color: String,
    pub right_color: String,
    /// Size multiplier; the rendered edge is `48 * size` pixels.
    pub size: f64,
    pub z_index: i32,
}

impl MarkerSettings {
    /// Snapshot of one instance.
    pub fn instance(&self, side: MarkerSide) -> MarkerInstance {
        match side {
            MarkerSide::Left => MarkerInstance {
                show: self.show_left,
                position: self.left_position,
                rotation: self.left_rotation,
                color: self.left_color.clone(),
            },
            MarkerSide::Right => MarkerInstance {
                show: self.show_right,
                position: self.right_position,
                rotation: self.right_rotation,
                color: self.right_color.clone(),
            },
        }
    }

    /// Replace one instance wholesale.
    pub fn set_instance(&mut self, side: MarkerSide, inst: MarkerInstance) {
        match side {
            MarkerSide::Left => {
                self.show_left = inst.show;
                self.left_position = inst.position;
                self.left_rotation = inst.rotation;
                self.left_color = inst.color;
            }
            MarkerSide::Right => {
                self.show_right = inst.show;
                self.right_position = inst.position;
                self.right_rotation = inst.rotation;
                self.right_color = inst.color;
            }
        }
    }
}

/// Draggable, rotatable line annotation with an optional arrowhead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameLayer {
    pub id: u32,
    pub visible: bool,
    pub position: Position,
    pub color: String,
    /// Line length in pixels.
    pub width: f64,
    /// Stroke thickness in pixels.
    pub height: f64,
    /// Degrees.
    pub rotation: f64,
    pub z_index: i32,
    pub arrow_head: bool,
}

/// Full-canvas background preset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundStyle {
    pub id: u32,
    pub name: String,
    /// CSS gradient expression.
    pub gradient: String,
    /// CSS image expression, or `"none"`.
    pub pattern: String,
    pub pattern_size: String,
    pub active: bool,
}

impl BackgroundStyle {
    /// `false` when the preset has no pattern overlay.
    pub fn has_pattern(&self) -> bool {
        self.pattern != "none"
    }
}

/// Decorative corner configuration shared by all four corners.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CornerSettings {
    pub color: String,
    pub opacity: u32,
    /// Base size in pixels; a corner box is `2 * size` on each side.
    pub size: f64,
    pub visible: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
