/// Clamp a percentage into `[0, 100]`; NaN collapses to `0`.
pub fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 100.0)
}

/// 8-bit alpha for a `0..=100` opacity using `round(opacity * 2.55)`.
pub fn opacity_to_alpha(opacity: f64) -> u8 {
    let o = clamp_percent(opacity);
    (o * 2.55).round().clamp(0.0, 255.0) as u8
}

/// Two lowercase hex digits of [`opacity_to_alpha`], zero padded.
///
/// `0 -> "00"`, `80 -> "cc"`, `100 -> "ff"`.
pub fn alpha_hex(opacity: f64) -> String {
    format!("{:02x}", opacity_to_alpha(opacity))
}

/// Reduce a rotation modulo 360 degrees, keeping the sign of the input.
///
/// Zero, negative zero and non-finite results normalize to `0.0`.
pub fn normalize_rotation(deg: f64) -> f64 {
    let r = deg % 360.0;
    if !r.is_finite() || r == 0.0 {
        return 0.0;
    }
    r
}

/// Angle in degrees of `(dx, dy)`, measured like `atan2(dy, dx)`.
pub fn angle_deg(dx: f64, dy: f64) -> f64 {
    dy.atan2(dx).to_degrees()
}

/// Opacity percentage mapped to `[0, 1]`.
pub fn unit_opacity(opacity: f64) -> f64 {
    clamp_percent(opacity) / 100.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
