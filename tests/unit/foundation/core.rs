use super::*;

#[test]
fn canvas_rejects_zero_sides() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert_eq!(Canvas::square(64).unwrap().height, 64);
    assert_eq!(Canvas::default(), Canvas::new(256, 256).unwrap());
}

#[test]
fn num_trims_trailing_zeros() {
    assert_eq!(Num(128.0).to_string(), "128");
    assert_eq!(Num(12.5).to_string(), "12.5");
    assert_eq!(Num(1.0 / 3.0).to_string(), "0.33");
    assert_eq!(Num(-0.001).to_string(), "0");
    assert_eq!(Num(-7.256).to_string(), "-7.26");
    assert_eq!(Num(f64::NAN).to_string(), "0");
}

#[test]
fn hsl_primaries() {
    assert_eq!(Color::from_hsl(0.0, 1.0, 0.5).as_str(), "#FF0000");
    assert_eq!(Color::from_hsl(120.0, 1.0, 0.5).as_str(), "#00FF00");
    assert_eq!(Color::from_hsl(240.0, 1.0, 0.5).as_str(), "#0000FF");
    // Negative hue wraps.
    assert_eq!(Color::from_hsl(-120.0, 1.0, 0.5).as_str(), "#0000FF");
    assert_eq!(Color::from_hsl(42.0, 0.0, 1.0).as_str(), "#FFFFFF");
}

#[test]
fn color_is_transparent_in_json() {
    let c: Color = serde_json::from_str("\"#FFDBAC\"").unwrap();
    assert_eq!(c, Color::new("#FFDBAC"));
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#FFDBAC\"");
}
