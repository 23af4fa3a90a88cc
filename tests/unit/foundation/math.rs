use super::*;

#[test]
fn alpha_hex_boundaries() {
    assert_eq!(alpha_hex(0.0), "00");
    assert_eq!(alpha_hex(80.0), "cc");
    assert_eq!(alpha_hex(100.0), "ff");
    assert_eq!(alpha_hex(17.0), "2b");
    assert_eq!(alpha_hex(79.0), "c9");
}

#[test]
fn alpha_hex_matches_rounding_rule_for_every_integer_opacity() {
    for o in 0..=100u32 {
        let expected = (f64::from(o) * 2.55).round() as u32;
        let hex = alpha_hex(f64::from(o));
        assert_eq!(hex.len(), 2, "opacity {o}");
        assert_eq!(u32::from_str_radix(&hex, 16).unwrap(), expected, "opacity {o}");
        assert_eq!(hex, hex.to_lowercase());
    }
}

#[test]
fn alpha_hex_clamps_out_of_range() {
    assert_eq!(alpha_hex(-5.0), "00");
    assert_eq!(alpha_hex(250.0), "ff");
    assert_eq!(alpha_hex(f64::NAN), "00");
}

#[test]
fn normalize_rotation_keeps_sign_and_kills_nan() {
    assert_eq!(normalize_rotation(370.0), 10.0);
    assert_eq!(normalize_rotation(-33.0), -33.0);
    assert_eq!(normalize_rotation(-720.0), 0.0);
    assert_eq!(normalize_rotation(360.0), 0.0);
    assert_eq!(normalize_rotation(f64::NAN), 0.0);
    assert_eq!(normalize_rotation(f64::INFINITY), 0.0);
    assert!(normalize_rotation(-0.0).is_sign_positive());
}

#[test]
fn angle_deg_follows_atan2_convention() {
    assert!((angle_deg(1.0, 0.0) - 0.0).abs() < 1e-9);
    assert!((angle_deg(0.0, 1.0) - 90.0).abs() < 1e-9);
    assert!((angle_deg(-1.0, 0.0) - 180.0).abs() < 1e-9);
}

#[test]
fn clamp_percent_handles_nan() {
    assert_eq!(clamp_percent(f64::NAN), 0.0);
    assert_eq!(clamp_percent(101.0), 100.0);
}
