use crate::foundation::core::Rgba8;
use crate::foundation::error::{ThumbcraftError, ThumbcraftResult};
use crate::foundation::math::alpha_hex;

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (case-insensitive, `#` optional).
pub fn parse_hex(s: &str) -> ThumbcraftResult<Rgba8> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> ThumbcraftResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| ThumbcraftError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    if !s.is_ascii() {
        return Err(ThumbcraftError::validation("hex color must be ASCII"));
    }

    match s.len() {
        3 => {
            let mut ch = [0u8; 3];
            for (i, c) in s.chars().enumerate() {
                let v = hex_byte(&c.to_string())?;
                ch[i] = v * 17;
            }
            Ok(Rgba8::rgb(ch[0], ch[1], ch[2]))
        }
        6 => Ok(Rgba8::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Rgba8::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err(ThumbcraftError::validation(
            "hex color must be #RGB, #RRGGBB or #RRGGBBAA",
        )),
    }
}

/// `#rrggbb` (opaque) or `#rrggbbaa` form of a colour.
pub fn to_hex(c: Rgba8) -> String {
    if c.a == 255 {
        format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
    }
}

/// Declared colour followed by the two-digit alpha of `opacity`.
///
/// This is plain concatenation, so `("#000000", 80)` becomes `"#000000cc"`.
pub fn with_alpha_suffix(color: &str, opacity: f64) -> String {
    format!("{color}{}", alpha_hex(opacity))
}

/// Resolve a declared colour plus opacity into RGBA, ignoring any alpha already in `color`.
pub fn resolve_with_opacity(color: &str, opacity: f64) -> ThumbcraftResult<Rgba8> {
    let base = parse_hex(color)?;
    Ok(base.with_alpha(crate::foundation::math::opacity_to_alpha(opacity)))
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
