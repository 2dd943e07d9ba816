use super::*;
use serde_json::json;

#[test]
fn parses_hex_variants() {
    assert_eq!(parse_color("#f00").unwrap(), Rgba8::opaque(255, 0, 0));
    assert_eq!(parse_color("#f008").unwrap(), Rgba8::new(255, 0, 0, 0x88));
    assert_eq!(parse_color("#015AFF").unwrap(), Rgba8::opaque(0x01, 0x5A, 0xFF));
    assert_eq!(
        parse_color(" #0000ff80 ").unwrap(),
        Rgba8::new(0, 0, 255, 0x80)
    );
    assert!(parse_color("#12345").is_err());
    assert!(parse_color("#gg0000").is_err());
}

#[test]
fn parses_functional_notation() {
    assert_eq!(
        parse_color("rgba(0,0,0,0.3)").unwrap(),
        Rgba8::new(0, 0, 0, 77)
    );
    assert_eq!(
        parse_color("RGB(10, 20, 30)").unwrap(),
        Rgba8::opaque(10, 20, 30)
    );
    assert_eq!(
        parse_color("rgb(100% 50% 0% / 50%)").unwrap(),
        Rgba8::new(255, 128, 0, 128)
    );
    assert!(parse_color("rgb(1, 2)").is_err());
    assert!(parse_color("rgb(1, 2, x)").is_err());
}

#[test]
fn parses_named_colors() {
    assert_eq!(parse_color("red").unwrap(), Rgba8::opaque(255, 0, 0));
    assert_eq!(
        parse_color("RebeccaPurple").unwrap(),
        Rgba8::opaque(0x66, 0x33, 0x99)
    );
    assert_eq!(parse_color("transparent").unwrap(), Rgba8::TRANSPARENT);
    assert_eq!(
        parse_color("notacolor"),
        Err(ParseError::InvalidColor("notacolor".to_string()))
    );
}

#[test]
fn named_table_is_sorted() {
    assert!(NAMED_COLORS.windows(2).all(|w| w[0].0 < w[1].0));
}

#[test]
fn color_def_accepts_string_object_and_array() {
    let c: ColorDef = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c.0, Rgba8::opaque(255, 0, 0));

    let c: ColorDef = serde_json::from_value(json!({"r": 0.0, "g": 0.5, "b": 1.0})).unwrap();
    assert_eq!(c.0, Rgba8::opaque(0, 128, 255));

    let c: ColorDef = serde_json::from_value(json!([1.0, 1.0, 1.0, 0.0])).unwrap();
    assert_eq!(c.0, Rgba8::new(255, 255, 255, 0));

    assert!(serde_json::from_value::<ColorDef>(json!([1.0])).is_err());
}
