use super::*;
use crate::foundation::core::Point;

const DOC: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"512\" height=\"512\" viewBox=\"0 0 256 256\">\n  <rect width=\"100%\" height=\"100%\" fill=\"#F0F8FF\"/>\n  <rect x=\"83\" y=\"83\" width=\"90\" height=\"90\" rx=\"15\" ry=\"15\" fill=\"#FFDBAC\"/>\n</svg>";

fn body(markup: &str) -> &str {
    let start = markup.find("viewBox=\"0 0 256 256\">").unwrap() + "viewBox=\"0 0 256 256\">".len();
    let end = markup.rfind("</svg>").unwrap();
    &markup[start..end]
}

#[test]
fn noop_spec_is_byte_identical() {
    let out = apply_transforms(DOC, &TransformSpec::default()).unwrap();
    assert_eq!(out, DOC);
    // Even garbage passes through untouched: no parsing happens for a no-op.
    assert_eq!(
        apply_transforms("not svg", &TransformSpec::default()).unwrap(),
        "not svg"
    );
}

#[test]
fn full_rotation_is_not_geometry() {
    let spec = TransformSpec {
        rotate_degrees: 360.0,
        ..TransformSpec::default()
    };
    assert!(spec.is_noop());
}

#[test]
fn transform_list_order_is_translate_rotate_scale_flip() {
    let spec = TransformSpec {
        flip: true,
        rotate_degrees: 45.0,
        scale_percent: 150.0,
        translate_x: 10.0,
        translate_y: -5.0,
        ..TransformSpec::default()
    };
    assert_eq!(
        transform_list(&spec, 256.0, 256.0),
        "translate(10 -5) rotate(45 128 128) matrix(1.5 0 0 1.5 -64 -64) matrix(-1 0 0 1 256 0)"
    );
}

#[test]
fn transform_group_wraps_original_body() {
    let spec = TransformSpec {
        rotate_degrees: 30.0,
        ..TransformSpec::default()
    };
    let out = apply_transforms(DOC, &spec).unwrap();
    assert!(out.contains("<g transform=\"rotate(30 128 128)\">"));
    assert!(out.contains(body(DOC)));
    assert!(out.ends_with("</g>\n</svg>"));
    roxmltree::Document::parse(&out).unwrap();
}

#[test]
fn corner_radius_patches_background_only() {
    let spec = TransformSpec {
        corner_radius: 24.0,
        ..TransformSpec::default()
    };
    let out = apply_transforms(DOC, &spec).unwrap();
    assert!(out.contains("<rect rx=\"24\" ry=\"24\" width=\"100%\" height=\"100%\""));
    assert_eq!(out.matches("rx=").count(), 2);
    assert!(out.contains("rx=\"15\" ry=\"15\""));
    assert!(!out.contains("<g"));
}

#[test]
fn corner_radius_without_background_is_harmless() {
    let doc = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"100\"><circle cx=\"50\" cy=\"50\" r=\"40\"/></svg>";
    let spec = TransformSpec {
        corner_radius: 10.0,
        ..TransformSpec::default()
    };
    assert_eq!(apply_transforms(doc, &spec).unwrap(), doc);
}

#[test]
fn corner_radius_lands_after_prefixed_tag_name() {
    let doc = "<svg:svg xmlns:svg=\"http://www.w3.org/2000/svg\" width=\"64\" height=\"64\"><svg:rect width=\"100%\" height=\"100%\" fill=\"#fff\"/></svg:svg>";
    let spec = TransformSpec {
        corner_radius: 3.0,
        ..TransformSpec::default()
    };
    let out = apply_transforms(doc, &spec).unwrap();
    assert!(out.contains("<svg:rect rx=\"3\" ry=\"3\" width=\"100%\""));
    let parsed = roxmltree::Document::parse(&out).unwrap();
    let rect = parsed
        .descendants()
        .find(|n| n.tag_name().name() == "rect")
        .unwrap();
    assert_eq!(rect.attribute("rx"), Some("3"));
}

#[test]
fn clip_wraps_outside_transform_group() {
    let spec = TransformSpec {
        flip: true,
        clip_to_circle: true,
        ..TransformSpec::default()
    };
    let out = apply_transforms(DOC, &spec).unwrap();
    let clip_at = out.find("<g clip-path=\"url(#avatar-clip)\">").unwrap();
    let xform_at = out.find("<g transform=").unwrap();
    assert!(clip_at < xform_at);
    assert!(out.contains("<circle cx=\"128\" cy=\"128\" r=\"126\"/>"));
    assert!(out.contains("<clipPath id=\"avatar-clip\">"));
    roxmltree::Document::parse(&out).unwrap();
}

#[test]
fn size_falls_back_to_width_and_height() {
    let doc = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100px\" height=\"80\"><rect width=\"100\" height=\"80\"/></svg>";
    let spec = TransformSpec {
        rotate_degrees: 90.0,
        corner_radius: 4.0,
        ..TransformSpec::default()
    };
    let out = apply_transforms(doc, &spec).unwrap();
    assert!(out.contains("rotate(90 50 40)"));
    assert!(out.contains("<rect rx=\"4\" ry=\"4\" width=\"100\""));
}

#[test]
fn malformed_inputs_are_invalid_parameters() {
    let spec = TransformSpec {
        flip: true,
        ..TransformSpec::default()
    };
    for bad in [
        "not xml at all",
        "<html><body/></html>",
        "<svg xmlns=\"http://www.w3.org/2000/svg\"><rect/></svg>",
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\" height=\"10\"/>",
    ] {
        assert!(
            matches!(
                apply_transforms(bad, &spec),
                Err(AvatarError::InvalidParameter(_))
            ),
            "{bad}"
        );
    }
}

#[test]
fn invalid_spec_values_are_rejected() {
    for spec in [
        TransformSpec {
            scale_percent: 0.0,
            ..TransformSpec::default()
        },
        TransformSpec {
            rotate_degrees: f64::NAN,
            ..TransformSpec::default()
        },
        TransformSpec {
            corner_radius: -1.0,
            ..TransformSpec::default()
        },
    ] {
        assert!(apply_transforms(DOC, &spec).is_err());
    }
}

#[test]
fn affine_keeps_center_fixed_under_rotate_and_scale() {
    let spec = TransformSpec {
        rotate_degrees: 45.0,
        scale_percent: 150.0,
        ..TransformSpec::default()
    };
    let c = spec.affine(256.0, 256.0) * Point::new(128.0, 128.0);
    assert!((c.x - 128.0).abs() < 1e-9 && (c.y - 128.0).abs() < 1e-9);
}

#[test]
fn affine_flip_mirrors_across_canvas_width() {
    let spec = TransformSpec {
        flip: true,
        ..TransformSpec::default()
    };
    let p = spec.affine(256.0, 256.0) * Point::new(10.0, 20.0);
    assert!((p.x - 246.0).abs() < 1e-9);
    assert!((p.y - 20.0).abs() < 1e-9);

    let spec = TransformSpec {
        flip: true,
        translate_x: 5.0,
        ..TransformSpec::default()
    };
    let p = spec.affine(256.0, 256.0) * Point::new(10.0, 20.0);
    assert!((p.x - 251.0).abs() < 1e-9);
}

#[test]
fn spec_deserializes_with_defaults() {
    let spec: TransformSpec = serde_json::from_str(r#"{"rotate_degrees": 45, "flip": true}"#).unwrap();
    assert_eq!(spec.scale_percent, 100.0);
    assert!(spec.flip);
    assert!(serde_json::from_str::<TransformSpec>(r#"{"spin": 1}"#).is_err());
}
