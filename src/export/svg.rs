//! Composition to SVG document.
//!
//! Each instruction becomes one `<g>` in paint order. CSS-only styling is approximated:
//! `linear-gradient` / `radial-gradient` backgrounds map to SVG gradients, CSS blur maps to
//! `feGaussianBlur`, and blend modes map to `mix-blend-mode`. Text shadows and animations are
//! not reproduced.

use crate::compose::resolve::{
    BackgroundFill, CornerGlyph, FrameLine, HudPanel, ImageContent, Justify, LayerContent,
    MarkerGlyph, Placement, RenderInstruction, TextBlock,
};
use crate::compose::Composition;
use crate::export::image_loader::ImageLoader;
use crate::export::io::ImageFetcher;
use crate::foundation::core::{Canvas, Point};
use crate::scene::model::{BlendMode, Extent};
use std::fmt::Write as _;

/// HUD row height, pixels.
const HUD_ROW_PX: f64 = 36.0;
/// Vertical gap between HUD rows, pixels.
const HUD_ROW_GAP_PX: f64 = 16.0;
const HUD_LABEL_MIN_PX: f64 = 180.0;
const HUD_VALUE_PX: f64 = 48.0;

/// Build the SVG document for `comp`, loading images through `loader`.
#[tracing::instrument(skip(comp, loader), fields(layers = comp.layers.len()))]
pub fn build_svg<F: ImageFetcher>(comp: &Composition, loader: &ImageLoader<F>) -> String {
    let mut b = SvgBuilder::new(comp.canvas);
    for instr in &comp.layers {
        b.layer(instr, loader);
    }
    b.finish()
}

struct SvgBuilder {
    canvas: Canvas,
    defs: String,
    body: String,
    next_id: usize,
}

impl SvgBuilder {
    fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            defs: String::new(),
            body: String::new(),
            next_id: 0,
        }
    }

    fn fresh_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }

    fn finish(self) -> String {
        let (w, h) = (self.canvas.width, self.canvas.height);
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
                r#"xmlns:xlink="http://www.w3.org/1999/xlink" "#,
                r#"width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
                "<defs>{defs}</defs>{body}</svg>"
            ),
            w = w,
            h = h,
            defs = self.defs,
            body = self.body
        )
    }

    fn layer<F: ImageFetcher>(&mut self, instr: &RenderInstruction, loader: &ImageLoader<F>) {
        let mut attrs = String::new();
        if instr.opacity < 1.0 {
            let _ = write!(attrs, r#" opacity="{}""#, instr.opacity);
        }
        if instr.blend != BlendMode::Normal {
            let _ = write!(
                attrs,
                r#" style="mix-blend-mode:{}""#,
                instr.blend.css_keyword()
            );
        }
        if instr.blur_px > 0.0 {
            let id = self.fresh_id("blur");
            let _ = write!(
                self.defs,
                r#"<filter id="{id}" x="-20%" y="-20%" width="140%" height="140%"><feGaussianBlur stdDeviation="{}"/></filter>"#,
                instr.blur_px
            );
            let _ = write!(attrs, r#" filter="url(#{id})""#);
        }

        let _ = write!(self.body, "<g{attrs}>");
        let anchor = self.anchor_px(instr.placement);
        match &instr.content {
            LayerContent::Background(fill) => self.background(fill),
            LayerContent::Image(img) => self.image(img, anchor, loader),
            LayerContent::Corner(glyph) => {
                if let Placement::Corner(pos) = instr.placement {
                    self.corner(glyph, pos.pinned_far_edges(), instr.rotation);
                }
            }
            LayerContent::Hud(panel) => self.hud(panel, anchor),
            LayerContent::Marker(glyph) => self.marker(glyph, anchor, instr.rotation),
            LayerContent::Text(block) => self.text(block, anchor, instr.rotation),
            LayerContent::Frame(line) => self.frame(line, anchor, instr.rotation),
        }
        self.body.push_str("</g>");
    }

    fn anchor_px(&self, placement: Placement) -> Point {
        match placement {
            Placement::Centered { anchor } => anchor.to_canvas_point(self.canvas),
            Placement::FullCanvas | Placement::Corner(_) => {
                let s = self.canvas.size();
                Point::new(s.width / 2.0, s.height / 2.0)
            }
        }
    }

    fn background(&mut self, fill: &BackgroundFill) {
        let s = self.canvas.size();
        let paint = match parse_gradient(&fill.gradient) {
            Some(g) => self.gradient_def(&g, s.width, s.height, 0.0, 0.0),
            None => paint_attr("fill", &fill.gradient),
        };
        let _ = write!(
            self.body,
            r#"<rect x="0" y="0" width="{}" height="{}" {paint}/>"#,
            s.width, s.height
        );

        let Some(pattern) = &fill.pattern else {
            return;
        };
        let Some(g) = parse_gradient(pattern) else {
            return;
        };
        let (tw, th) = parse_pattern_size(&fill.pattern_size).unwrap_or((s.width, s.height));
        let tile_paint = self.gradient_def(&g, tw, th, 0.0, 0.0);
        let id = self.fresh_id("pattern");
        let _ = write!(
            self.defs,
            r#"<pattern id="{id}" patternUnits="userSpaceOnUse" width="{tw}" height="{th}"><rect width="{tw}" height="{th}" {tile_paint}/></pattern>"#
        );
        let _ = write!(
            self.body,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="url(#{id})"/>"#,
            s.width, s.height
        );
    }

    /// Register a gradient over a `w x h` box at `(x, y)`; returns the `fill` attribute.
    fn gradient_def(&mut self, g: &Gradient, w: f64, h: f64, x: f64, y: f64) -> String {
        let id = self.fresh_id("grad");
        let mut stops = String::new();
        for stop in &g.stops {
            let (color, alpha) = split_color(&stop.color);
            let _ = write!(
                stops,
                r#"<stop offset="{}" stop-color="{color}" stop-opacity="{alpha}"/>"#,
                stop.offset
            );
        }
        match g.kind {
            GradientKind::Linear { angle_deg } => {
                let a = angle_deg.to_radians();
                let (dx, dy) = (a.sin(), -a.cos());
                let half = (w * dx.abs() + h * dy.abs()) / 2.0;
                let (cx, cy) = (x + w / 2.0, y + h / 2.0);
                let _ = write!(
                    self.defs,
                    r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">{stops}</linearGradient>"#,
                    cx - dx * half,
                    cy - dy * half,
                    cx + dx * half,
                    cy + dy * half
                );
            }
            GradientKind::Radial => {
                let r = (w * w + h * h).sqrt() / 2.0;
                let _ = write!(
                    self.defs,
                    r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" cx="{}" cy="{}" r="{r}">{stops}</radialGradient>"#,
                    x + w / 2.0,
                    y + h / 2.0
                );
            }
        }
        format!(r#"fill="url(#{id})""#)
    }

    fn image<F: ImageFetcher>(
        &mut self,
        img: &ImageContent,
        anchor: Point,
        loader: &ImageLoader<F>,
    ) {
        let s = self.canvas.size();
        let w = img.width_pct / 100.0 * s.width * img.scale;
        let h = img.height_pct / 100.0 * s.height * img.scale;
        if !(w > 0.0 && h > 0.0) {
            return;
        }
        let data = loader.load(&img.url).to_data_uri();
        let _ = write!(
            self.body,
            r#"<image x="{}" y="{}" width="{w}" height="{h}" preserveAspectRatio="xMidYMid slice" xlink:href="{data}"/>"#,
            anchor.x - w / 2.0,
            anchor.y - h / 2.0
        );
    }

    fn text(&mut self, t: &TextBlock, anchor: Point, rotation: f64) {
        let s = self.canvas.size();
        let font_px = parse_px(&t.font_size).unwrap_or(16.0);
        let line_px = t
            .line_height
            .as_deref()
            .and_then(|lh| line_height_px(lh, font_px))
            .unwrap_or(font_px * 1.2);

        let w = t.width_pct / 100.0 * s.width;
        let h = match t.height_pct {
            Some(p) => p / 100.0 * s.height,
            None => line_px + 2.0 * t.padding.y,
        };
        let (left, top) = (anchor.x - w / 2.0, anchor.y - h / 2.0);

        let _ = write!(
            self.body,
            r#"<g transform="rotate({rotation} {} {})">"#,
            anchor.x, anchor.y
        );
        let bg = paint_attr("fill", &t.background_color);
        let _ = write!(
            self.body,
            r#"<rect x="{left}" y="{top}" width="{w}" height="{h}" {bg}/>"#
        );

        let (x, text_anchor) = match t.justify {
            Justify::FlexStart => (left + t.padding.x, "start"),
            Justify::Center => (anchor.x, "middle"),
            Justify::FlexEnd => (left + w - t.padding.x, "end"),
        };
        let y = match t.vertical_align.as_str() {
            "top" => top + t.padding.y + line_px / 2.0,
            "bottom" => top + h - t.padding.y - line_px / 2.0,
            _ => anchor.y,
        };
        let content = match t.text_transform.as_deref() {
            Some("uppercase") => t.text.to_uppercase(),
            Some("lowercase") => t.text.to_lowercase(),
            _ => t.text.clone(),
        };
        let spacing = t
            .letter_spacing
            .as_deref()
            .and_then(parse_px)
            .filter(|v| *v != 0.0)
            .map(|v| format!(r#" letter-spacing="{v}""#))
            .unwrap_or_default();
        let fill = paint_attr("fill", &t.color);
        let _ = write!(
            self.body,
            r#"<text x="{x}" y="{y}" font-family="{}" font-size="{font_px}" font-weight="{}" {fill} text-anchor="{text_anchor}" dominant-baseline="central"{spacing}>{}</text></g>"#,
            escape(&t.font_family),
            escape(&t.font_weight),
            escape(&content)
        );
    }

    fn hud(&mut self, p: &HudPanel, anchor: Point) {
        let s = self.canvas.size();
        let font_px = parse_px(&p.style.font_size).unwrap_or(24.0);
        let bar_w = parse_px(&p.style.bar_width).unwrap_or(120.0);
        let bar_h = parse_px(&p.style.bar_height).unwrap_or(10.0);
        let rows = p.rows.len() as f64;

        let content_w = 24.0 + 12.0 + HUD_LABEL_MIN_PX + 16.0 + bar_w + 16.0 + HUD_VALUE_PX;
        let content_h = if rows > 0.0 {
            rows * HUD_ROW_PX + (rows - 1.0) * HUD_ROW_GAP_PX
        } else {
            0.0
        };
        let w = match p.width {
            Extent::Percent(v) => v / 100.0 * s.width,
            Extent::Auto => content_w + 2.0 * p.padding_px,
        };
        let h = match p.height {
            Extent::Percent(v) => v / 100.0 * s.height,
            Extent::Auto => content_h + 2.0 * p.padding_px,
        };
        let (left, top) = (anchor.x - w / 2.0, anchor.y - h / 2.0);

        let bg = paint_attr("fill", &p.background_color);
        let _ = write!(
            self.body,
            r##"<rect x="{left}" y="{top}" width="{w}" height="{h}" rx="{r}" ry="{r}" {bg} stroke="#ffffff" stroke-opacity="0.1" stroke-width="1"/>"##,
            r = p.radius_px
        );

        let family = escape(&p.style.font_family);
        let weight = escape(&p.style.font_weight);
        let text_fill = paint_attr("fill", &p.style.color);
        let bar_fill = paint_attr("fill", &p.style.bar_color);
        let inner_left = left + p.padding_px;
        let inner_right = left + w - p.padding_px;

        for (i, row) in p.rows.iter().enumerate() {
            let cy = top + p.padding_px + i as f64 * (HUD_ROW_PX + HUD_ROW_GAP_PX) + HUD_ROW_PX / 2.0;
            let dot = paint_attr("fill", &row.color);
            let _ = write!(
                self.body,
                r#"<circle cx="{}" cy="{cy}" r="6" {dot}/>"#,
                inner_left + 12.0
            );
            let _ = write!(
                self.body,
                r#"<text x="{}" y="{cy}" font-family="{family}" font-size="{font_px}" font-weight="{weight}" {text_fill} dominant-baseline="central">{}</text>"#,
                inner_left + 36.0,
                escape(&row.label)
            );

            let value_left = inner_right - HUD_VALUE_PX;
            let bar_left = value_left - 16.0 - bar_w;
            let bar_top = cy - bar_h / 2.0;
            let _ = write!(
                self.body,
                r##"<rect x="{bar_left}" y="{bar_top}" width="{bar_w}" height="{bar_h}" rx="{r}" fill="#000000" fill-opacity="0.3"/>"##,
                r = bar_h / 2.0
            );
            let _ = write!(
                self.body,
                r#"<rect x="{bar_left}" y="{bar_top}" width="{}" height="{bar_h}" rx="{r}" {bar_fill}/>"#,
                bar_w * row.fill_pct / 100.0,
                r = bar_h / 2.0
            );
            let _ = write!(
                self.body,
                r#"<rect x="{value_left}" y="{}" width="{HUD_VALUE_PX}" height="{font_px}" rx="4" {bar_fill}/>"#,
                cy - font_px / 2.0
            );
            let _ = write!(
                self.body,
                r##"<text x="{}" y="{cy}" font-family="{family}" font-size="{font_px}" font-weight="bold" fill="#000000" text-anchor="end" dominant-baseline="central">{}</text>"##,
                inner_right - 8.0,
                row.value
            );
        }
    }

    fn marker(&mut self, m: &MarkerGlyph, anchor: Point, rotation: f64) {
        let e = m.edge_px;
        let stroke = paint_attr("stroke", &m.color);
        let _ = write!(
            self.body,
            concat!(
                r#"<g transform="translate({} {}) rotate({rotation} {half} {half}) scale({k})">"#,
                r#"<path d="M50 5 A45 45 0 1 1 49.9 5" fill="none" {stroke} stroke-width="2" stroke-dasharray="8 4"/>"#,
                r#"<path d="M65 35 L50 45 L65 55" fill="none" {stroke} stroke-width="3"/>"#,
                "</g>"
            ),
            anchor.x - e / 2.0,
            anchor.y - e / 2.0,
            rotation = rotation,
            half = 50.0,
            k = e / 100.0,
            stroke = stroke
        );
    }

    fn frame(&mut self, f: &FrameLine, anchor: Point, rotation: f64) {
        let len = f.length_px;
        let _ = write!(
            self.body,
            r#"<g transform="translate({} {}) rotate({rotation}) translate({} 0)">"#,
            anchor.x,
            anchor.y,
            -len / 2.0
        );
        let stroke = paint_attr("stroke", &f.color);
        let _ = write!(
            self.body,
            r#"<line x1="0" y1="0" x2="{len}" y2="0" {stroke} stroke-width="{}"/>"#,
            f.thickness_px
        );
        if let Some(path) = &f.arrow_head {
            let fill = paint_attr("fill", &f.color);
            let _ = write!(self.body, r#"<path d="{path}" {fill}/>"#);
        }
        self.body.push_str("</g>");
    }

    fn corner(&mut self, c: &CornerGlyph, (right, bottom): (bool, bool), rotation: f64) {
        let s = self.canvas.size();
        let b = c.box_px;
        let x = if right { s.width - b } else { 0.0 };
        let y = if bottom { s.height - b } else { 0.0 };
        let (color, alpha) = split_color(&c.color);

        let h_bar = self.fade_def(&color, 90.0, b, 8.0);
        let v_bar = self.fade_def(&color, 180.0, 8.0, b);
        let size = c.size;
        let _ = write!(
            self.body,
            concat!(
                r#"<g transform="translate({x} {y}) rotate({rotation} {half} {half})">"#,
                r#"<rect x="0" y="0" width="{b}" height="8" {h_bar}/>"#,
                r#"<rect x="0" y="0" width="8" height="{b}" {v_bar}/>"#,
                r#"<rect x="0" y="0" width="{d1}" height="{d1}" transform="rotate(-45 {d1h} {d1h})" fill="none" stroke="{color}" stroke-opacity="{o1}" stroke-width="2"/>"#,
                r#"<circle cx="{c1}" cy="{c1}" r="{r1}" fill="{color}" fill-opacity="{alpha}"/>"#,
                r#"<circle cx="{c2}" cy="{c2}" r="{r2}" fill="{color}" fill-opacity="{o2}"/>"#,
                "</g>"
            ),
            x = x,
            y = y,
            rotation = rotation,
            half = b / 2.0,
            b = b,
            h_bar = h_bar,
            v_bar = v_bar,
            d1 = size * 1.3,
            d1h = size * 0.65,
            color = color,
            o1 = alpha * 0.3,
            c1 = size * 0.17 + size * 0.04,
            r1 = size * 0.04,
            c2 = size * 0.29 + size * 0.03,
            r2 = size * 0.03,
            o2 = alpha * 0.5,
            alpha = alpha
        );
    }

    /// Solid to 70 %, then fading out, along `angle_deg`.
    fn fade_def(&mut self, color: &str, angle_deg: f64, w: f64, h: f64) -> String {
        let g = Gradient {
            kind: GradientKind::Linear { angle_deg },
            stops: vec![
                GradientStop {
                    color: color.to_owned(),
                    offset: 0.0,
                },
                GradientStop {
                    color: color.to_owned(),
                    offset: 0.7,
                },
                GradientStop {
                    color: "transparent".to_owned(),
                    offset: 1.0,
                },
            ],
        };
        self.gradient_def(&g, w, h, 0.0, 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum GradientKind {
    Linear { angle_deg: f64 },
    Radial,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GradientStop {
    pub color: String,
    /// `[0, 1]`
    pub offset: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Gradient {
    pub kind: GradientKind,
    pub stops: Vec<GradientStop>,
}

/// Parse `linear-gradient(...)`, `repeating-linear-gradient(...)` or `radial-gradient(...)`.
///
/// Only the first gradient of a comma-separated layer list is used.
pub(crate) fn parse_gradient(css: &str) -> Option<Gradient> {
    let css = css.trim();
    let (kind, inner) = if let Some(rest) = css
        .strip_prefix("linear-gradient(")
        .or_else(|| css.strip_prefix("repeating-linear-gradient("))
    {
        (GradientKind::Linear { angle_deg: 180.0 }, rest)
    } else if let Some(rest) = css
        .strip_prefix("radial-gradient(")
        .or_else(|| css.strip_prefix("repeating-radial-gradient("))
    {
        (GradientKind::Radial, rest)
    } else {
        return None;
    };

    let args = split_top_level(inner_until_close(inner)?);
    let mut args = args.into_iter().peekable();
    let mut kind = kind;

    if let Some(first) = args.peek() {
        let first = first.trim();
        match kind {
            GradientKind::Linear { .. } => {
                if let Some(angle) = parse_angle(first) {
                    kind = GradientKind::Linear { angle_deg: angle };
                    args.next();
                }
            }
            GradientKind::Radial => {
                if first.starts_with("circle") || first.starts_with("ellipse") || first.starts_with("at ") {
                    args.next();
                }
            }
        }
    }

    let raw: Vec<(String, Option<f64>)> = args.map(|a| split_stop(a.trim())).collect();
    if raw.is_empty() {
        return None;
    }
    let n = raw.len();
    let stops = raw
        .into_iter()
        .enumerate()
        .map(|(i, (color, pos))| GradientStop {
            color,
            offset: pos.unwrap_or(if n == 1 { 0.0 } else { i as f64 / (n - 1) as f64 }),
        })
        .collect();
    Some(Gradient { kind, stops })
}

fn inner_until_close(s: &str) -> Option<&str> {
    let mut depth = 0usize;
    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' if depth == 0 => return Some(&s[..i]),
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}

fn split_top_level(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                out.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    out.push(&s[start..]);
    out
}

fn parse_angle(s: &str) -> Option<f64> {
    if let Some(v) = s.strip_suffix("deg") {
        return v.trim().parse().ok();
    }
    match s {
        "to top" => Some(0.0),
        "to right" => Some(90.0),
        "to bottom" => Some(180.0),
        "to left" => Some(270.0),
        "to top right" | "to right top" => Some(45.0),
        "to bottom right" | "to right bottom" => Some(135.0),
        "to bottom left" | "to left bottom" => Some(225.0),
        "to top left" | "to left top" => Some(315.0),
        _ => None,
    }
}

/// `"<color> [<pos>%]"`; only percentage positions are honoured.
fn split_stop(s: &str) -> (String, Option<f64>) {
    let split_at = match s.rfind(')') {
        Some(close) => s[close..].find(' ').map(|i| close + i),
        None => s.find(' '),
    };
    let Some(i) = split_at else {
        return (s.to_owned(), None);
    };
    let (color, pos) = (s[..i].trim(), s[i..].trim());
    let pos = pos.split_whitespace().next().unwrap_or("");
    let offset = pos
        .strip_suffix('%')
        .and_then(|v| v.parse::<f64>().ok())
        .map(|v| (v / 100.0).clamp(0.0, 1.0));
    (color.to_owned(), offset)
}

fn parse_pattern_size(s: &str) -> Option<(f64, f64)> {
    let mut parts = s.split_whitespace().map(parse_px);
    let w = parts.next()??;
    let h = parts.next().flatten().unwrap_or(w);
    (w > 0.0 && h > 0.0).then_some((w, h))
}

/// `"48px"` or `"48"` to `48.0`.
pub(crate) fn parse_px(s: &str) -> Option<f64> {
    let s = s.trim();
    s.strip_suffix("px").unwrap_or(s).trim().parse().ok()
}

fn line_height_px(s: &str, font_px: f64) -> Option<f64> {
    let s = s.trim();
    if s.ends_with("px") {
        return parse_px(s);
    }
    s.parse::<f64>().ok().map(|k| k * font_px)
}

/// Split a colour into an opaque SVG colour plus its alpha, so `#rrggbbaa` and `rgba()` render
/// everywhere.
fn split_color(color: &str) -> (String, f64) {
    let color = color.trim();
    if color == "transparent" {
        return ("#000000".to_owned(), 0.0);
    }
    if let Some(inner) = color
        .strip_prefix("rgba(")
        .or_else(|| color.strip_prefix("rgb("))
        .and_then(|s| s.strip_suffix(')'))
    {
        let parts: Vec<f64> = inner
            .split(',')
            .filter_map(|p| p.trim().parse().ok())
            .collect();
        if let [r, g, b, rest @ ..] = parts.as_slice() {
            let to_u8 = |v: f64| v.round().clamp(0.0, 255.0) as u8;
            let rgb = crate::foundation::core::Rgba8::rgb(to_u8(*r), to_u8(*g), to_u8(*b));
            let a = rest.first().copied().unwrap_or(1.0).clamp(0.0, 1.0);
            return (crate::style::color::to_hex(rgb), a);
        }
    }
    match crate::style::color::parse_hex(color) {
        Ok(c) => (
            crate::style::color::to_hex(c.with_alpha(255)),
            f64::from(c.a) / 255.0,
        ),
        Err(_) => (escape(color), 1.0),
    }
}

fn paint_attr(attr: &str, color: &str) -> String {
    let (c, a) = split_color(color);
    if a < 1.0 {
        format!(r#"{attr}="{c}" {attr}-opacity="{a}""#)
    } else {
        format!(r#"{attr}="{c}""#)
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
