use super::*;

#[test]
fn parses_short_long_and_alpha_forms() {
    assert_eq!(parse_hex("#fff").unwrap(), Rgba8::rgb(255, 255, 255));
    assert_eq!(parse_hex("#FFB81C").unwrap(), Rgba8::rgb(0xff, 0xb8, 0x1c));
    assert_eq!(parse_hex("4ade80").unwrap(), Rgba8::rgb(0x4a, 0xde, 0x80));
    assert_eq!(
        parse_hex("#000000cc").unwrap(),
        Rgba8::rgba(0, 0, 0, 0xcc)
    );
}

#[test]
fn rejects_malformed_colors() {
    assert!(parse_hex("#12345").is_err());
    assert!(parse_hex("#gg0000").is_err());
    assert!(parse_hex("red").is_err());
    assert!(parse_hex("#ééé").is_err());
}

#[test]
fn to_hex_omits_opaque_alpha() {
    assert_eq!(to_hex(Rgba8::rgb(255, 0, 16)), "#ff0010");
    assert_eq!(to_hex(Rgba8::rgba(255, 0, 16, 0x80)), "#ff001080");
}

#[test]
fn alpha_suffix_is_plain_concatenation() {
    assert_eq!(with_alpha_suffix("#000000", 80.0), "#000000cc");
    assert_eq!(with_alpha_suffix("#000000", 0.0), "#00000000");
    assert_eq!(with_alpha_suffix("#ffffff", 100.0), "#ffffffff");
}

#[test]
fn resolve_with_opacity_replaces_alpha() {
    let c = resolve_with_opacity("#11223344", 100.0).unwrap();
    assert_eq!(c, Rgba8::rgba(0x11, 0x22, 0x33, 0xff));
}
