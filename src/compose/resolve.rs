use crate::foundation::core::Position;
use crate::foundation::math::{clamp_percent, unit_opacity};
use crate::scene::corner::{CornerContext, CornerDisplay, CornerPosition};
use crate::scene::model::{
    BackgroundStyle, BlendMode, Extent, FrameLayer, HudSettings, HudStyle, ImageLayer,
    LogoTextLayer, MarkerSettings, MarkerSide, Padding, TextStyle,
};
use crate::style::color::with_alpha_suffix;
use crate::style::defaults;

/// Inner padding of the HUD panel, pixels.
pub const HUD_PADDING_PX: f64 = 24.0;
/// Corner radius of the HUD panel, pixels.
pub const HUD_RADIUS_PX: f64 = 12.0;
/// Edge of a marker glyph at `size == 1`, pixels.
pub const MARKER_BASE_PX: f64 = 48.0;
/// Stacking order of corner decorations (they declare none).
pub const CORNER_Z_INDEX: i32 = 0;
/// The active background preset always paints first.
pub const BACKGROUND_Z_INDEX: i32 = i32::MIN;

/// Layer category, declared in document (paint) order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerKind {
    Background,
    Image,
    Corner,
    Hud,
    Marker,
    Logo,
    Title,
    Frame,
}

/// Which piece of editor state an instruction was resolved from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerSource {
    Background { id: u32 },
    Image { id: u32 },
    Corner(CornerPosition),
    Hud,
    Marker(MarkerSide),
    Logo { id: u32 },
    Title,
    Frame { id: u32 },
}

impl LayerSource {
    pub fn kind(self) -> LayerKind {
        match self {
            LayerSource::Background { .. } => LayerKind::Background,
            LayerSource::Image { .. } => LayerKind::Image,
            LayerSource::Corner(_) => LayerKind::Corner,
            LayerSource::Hud => LayerKind::Hud,
            LayerSource::Marker(_) => LayerKind::Marker,
            LayerSource::Logo { .. } => LayerKind::Logo,
            LayerSource::Title => LayerKind::Title,
            LayerSource::Frame { .. } => LayerKind::Frame,
        }
    }
}

/// Where a layer's box sits on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Box centred on `anchor` (canvas percentages), rotated about its own centre.
    Centered { anchor: Position },
    /// Covers the whole canvas.
    FullCanvas,
    /// Pinned into one canvas corner.
    Corner(CornerPosition),
}

/// Main-axis justification of text inside its box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Justify {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
}

impl Justify {
    /// `left -> FlexStart`, `center -> Center`, `right -> FlexEnd`; anything else starts.
    pub fn from_text_align(align: Option<&str>) -> Self {
        match align {
            Some("center") => Justify::Center,
            Some("right") => Justify::FlexEnd,
            _ => Justify::FlexStart,
        }
    }

    pub fn css_keyword(self) -> &'static str {
        match self {
            Justify::FlexStart => "flex-start",
            Justify::Center => "center",
            Justify::FlexEnd => "flex-end",
        }
    }
}

/// Fully resolved text box of a title or logo layer.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub font_size: String,
    pub font_family: String,
    pub font_weight: String,
    pub color: String,
    pub text_transform: Option<String>,
    pub letter_spacing: Option<String>,
    pub text_shadow: Option<String>,
    pub line_height: Option<String>,
    pub text_align: Option<String>,
    pub justify: Justify,
    pub vertical_align: String,
    /// Background colour with the two-digit alpha suffix appended.
    pub background_color: String,
    /// Box width, percent of the canvas width.
    pub width_pct: f64,
    pub height_pct: Option<f64>,
    pub padding: Padding,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageContent {
    pub url: String,
    pub width_pct: f64,
    pub height_pct: f64,
    /// `scale / 100`.
    pub scale: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HudRow {
    pub key: String,
    pub label: String,
    pub value: u32,
    pub color: String,
    /// Bar fill, percent of the bar width.
    pub fill_pct: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HudPanel {
    pub width: Extent,
    pub height: Extent,
    pub style: HudStyle,
    pub background_color: String,
    pub padding_px: f64,
    pub radius_px: f64,
    pub rows: Vec<HudRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerGlyph {
    pub side: MarkerSide,
    pub color: String,
    pub edge_px: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameLine {
    pub color: String,
    pub length_px: f64,
    pub thickness_px: f64,
    /// SVG path of the arrowhead at the trailing end, when enabled.
    pub arrow_head: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CornerGlyph {
    pub color: String,
    pub box_px: f64,
    pub size: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundFill {
    pub gradient: String,
    /// `None` when the preset has no pattern overlay.
    pub pattern: Option<String>,
    pub pattern_size: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LayerContent {
    Text(TextBlock),
    Image(ImageContent),
    Hud(HudPanel),
    Marker(MarkerGlyph),
    Frame(FrameLine),
    Corner(CornerGlyph),
    Background(BackgroundFill),
}

/// Immutable rendering record for one layer.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderInstruction {
    pub source: LayerSource,
    pub placement: Placement,
    /// Degrees about the box centre.
    pub rotation: f64,
    pub z_index: i32,
    /// Layer opacity in `[0, 1]`.
    pub opacity: f64,
    pub blur_px: f64,
    pub blend: BlendMode,
    pub content: LayerContent,
}

/// Merge a declared text style over the defaults of its layer type.
pub fn resolve_text(
    source: LayerSource,
    text: &str,
    style: &TextStyle,
    default_z: i32,
) -> RenderInstruction {
    let bg = &style.background;
    let width_pct = match bg.width {
        Some(w) if w != 0.0 && w.is_finite() => w,
        _ => 100.0,
    };

    let block = TextBlock {
        text: text.to_owned(),
        font_size: style.font_size.clone(),
        font_family: style.font_family.clone(),
        font_weight: style.font_weight.clone(),
        color: style.color.clone(),
        text_transform: style.text_transform.clone(),
        letter_spacing: style.letter_spacing.clone(),
        text_shadow: style.text_shadow.clone(),
        line_height: style.line_height.clone(),
        text_align: style.text_align.clone(),
        justify: Justify::from_text_align(style.text_align.as_deref()),
        vertical_align: style
            .vertical_align
            .clone()
            .unwrap_or_else(|| defaults::VERTICAL_ALIGN.to_owned()),
        background_color: with_alpha_suffix(&bg.color, f64::from(bg.opacity)),
        width_pct,
        height_pct: bg.height,
        padding: style.padding.unwrap_or_else(defaults::text_padding),
    };

    RenderInstruction {
        source,
        placement: Placement::Centered {
            anchor: style.position,
        },
        rotation: style.rotation.unwrap_or(0.0),
        z_index: style.z_index.unwrap_or(default_z),
        opacity: 1.0,
        blur_px: 0.0,
        blend: BlendMode::Normal,
        content: LayerContent::Text(block),
    }
}

pub fn resolve_title(title: &str, style: &TextStyle) -> RenderInstruction {
    resolve_text(LayerSource::Title, title, style, defaults::TITLE_Z_INDEX)
}

/// `None` for hidden layers.
pub fn resolve_logo_text(layer: &LogoTextLayer) -> Option<RenderInstruction> {
    layer.visible.then(|| {
        resolve_text(
            LayerSource::Logo { id: layer.id },
            &layer.text,
            &layer.style,
            defaults::LOGO_Z_INDEX,
        )
    })
}

pub fn resolve_image(layer: &ImageLayer) -> Option<RenderInstruction> {
    if !layer.visible || layer.url.is_empty() {
        return None;
    }
    Some(RenderInstruction {
        source: LayerSource::Image { id: layer.id },
        placement: Placement::Centered {
            anchor: layer.position.anchor(),
        },
        rotation: 0.0,
        z_index: layer.z_index,
        opacity: unit_opacity(f64::from(layer.opacity)),
        blur_px: f64::from(layer.blur),
        blend: layer.blend_mode,
        content: LayerContent::Image(ImageContent {
            url: layer.url.clone(),
            width_pct: layer.position.width,
            height_pct: layer.position.height,
            scale: f64::from(layer.scale) / 100.0,
        }),
    })
}

pub fn resolve_hud(hud: &HudSettings) -> Option<RenderInstruction> {
    if !hud.visible {
        return None;
    }
    let rows = hud
        .visible_rows()
        .map(|(key, m)| HudRow {
            key: key.to_owned(),
            label: m.label.clone(),
            value: m.value,
            color: m.color.clone(),
            fill_pct: clamp_percent(f64::from(m.value)),
        })
        .collect();

    Some(RenderInstruction {
        source: LayerSource::Hud,
        placement: Placement::Centered {
            anchor: Position::new(hud.position.x, hud.position.y),
        },
        rotation: 0.0,
        z_index: hud.z_index,
        opacity: unit_opacity(f64::from(hud.opacity)),
        blur_px: f64::from(hud.blur),
        blend: hud.blend_mode,
        content: LayerContent::Hud(HudPanel {
            width: hud.position.width,
            height: hud.position.height,
            style: hud.style.clone(),
            background_color: with_alpha_suffix(
                &hud.style.background.color,
                f64::from(hud.style.background.opacity),
            ),
            padding_px: HUD_PADDING_PX,
            radius_px: HUD_RADIUS_PX,
            rows,
        }),
    })
}

/// Left then right; empty while markers are hidden.
pub fn resolve_markers(markers: &MarkerSettings) -> Vec<RenderInstruction> {
    if !markers.visible {
        return Vec::new();
    }
    [MarkerSide::Left, MarkerSide::Right]
        .into_iter()
        .filter_map(|side| {
            let inst = markers.instance(side);
            inst.show.then(|| RenderInstruction {
                source: LayerSource::Marker(side),
                placement: Placement::Centered {
                    anchor: inst.position,
                },
                rotation: inst.rotation,
                z_index: markers.z_index,
                opacity: 1.0,
                blur_px: 0.0,
                blend: BlendMode::Normal,
                content: LayerContent::Marker(MarkerGlyph {
                    side,
                    color: inst.color,
                    edge_px: MARKER_BASE_PX * markers.size,
                }),
            })
        })
        .collect()
}

/// Zero or empty frame fields fall back to the frame defaults.
///
/// Position is the exception: `0` is a real edge position, so only non-finite axes fall back.
pub fn resolve_frame(frame: &FrameLayer) -> Option<RenderInstruction> {
    if !frame.visible {
        return None;
    }
    fn or_f64(v: f64, fallback: f64) -> f64 {
        if v == 0.0 || v.is_nan() { fallback } else { v }
    }

    let length = or_f64(frame.width, defaults::FRAME_WIDTH_PX);
    let thickness = or_f64(frame.height, defaults::FRAME_HEIGHT_PX);
    let color = if frame.color.is_empty() {
        defaults::FRAME_COLOR.to_owned()
    } else {
        frame.color.clone()
    };

    Some(RenderInstruction {
        source: LayerSource::Frame { id: frame.id },
        placement: Placement::Centered {
            anchor: frame_anchor(frame),
        },
        rotation: or_f64(frame.rotation, 0.0),
        z_index: if frame.z_index == 0 {
            defaults::FRAME_Z_INDEX
        } else {
            frame.z_index
        },
        opacity: 1.0,
        blur_px: 0.0,
        blend: BlendMode::Normal,
        content: LayerContent::Frame(FrameLine {
            color,
            length_px: length,
            thickness_px: thickness,
            arrow_head: frame.arrow_head.then(|| arrow_head_path(length)),
        }),
    })
}

/// Where a frame is drawn and where a drag of it starts from.
pub fn frame_anchor(frame: &FrameLayer) -> Position {
    fn axis(v: f64) -> f64 {
        if v.is_finite() { v } else { 50.0 }
    }
    Position::new(axis(frame.position.x), axis(frame.position.y))
}

/// Open chevron at the trailing end of a line of length `w`.
pub fn arrow_head_path(w: f64) -> String {
    format!("M {} -6 L {} 0 L {} 6", w - 10.0, w, w - 10.0)
}

/// One instruction per corner display, all reading the same context.
pub fn resolve_corners(ctx: &CornerContext) -> Vec<RenderInstruction> {
    CornerDisplay::all()
        .iter()
        .filter_map(|display| display.view(ctx))
        .map(|view| RenderInstruction {
            source: LayerSource::Corner(view.position),
            placement: Placement::Corner(view.position),
            rotation: view.position.rotation_deg(),
            z_index: CORNER_Z_INDEX,
            opacity: view.opacity,
            blur_px: 0.0,
            blend: BlendMode::Normal,
            content: LayerContent::Corner(CornerGlyph {
                color: view.color,
                box_px: view.box_px,
                size: view.size,
            }),
        })
        .collect()
}

/// The active preset, painted under everything else.
pub fn resolve_background(styles: &[BackgroundStyle]) -> Option<RenderInstruction> {
    let style = crate::scene::layers::active_background(styles)?;
    Some(RenderInstruction {
        source: LayerSource::Background { id: style.id },
        placement: Placement::FullCanvas,
        rotation: 0.0,
        z_index: BACKGROUND_Z_INDEX,
        opacity: 1.0,
        blur_px: 0.0,
        blend: BlendMode::Normal,
        content: LayerContent::Background(BackgroundFill {
            gradient: style.gradient.clone(),
            pattern: style.has_pattern().then(|| style.pattern.clone()),
            pattern_size: style.pattern_size.clone(),
        }),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compose/resolve.rs"]
mod tests;
