use super::*;

#[test]
fn from_viewport_subtracts_bounds_offset() {
    let viewport = Affine::translate(Vec2::new(110.0, 70.0)) * Affine::scale(20.0);
    let d = GradientDescriptor::from_viewport(
        GradientFamily::Radial,
        vec![],
        viewport,
        Vec2::new(100.0, 50.0),
        None,
    );
    let center = d.transform * Point::ORIGIN;
    assert_eq!(center, Point::new(10.0, 20.0));
    assert_eq!(d.decomposed().scale_x, 20.0);
    assert_eq!(d.source_bounds_offset, Vec2::new(100.0, 50.0));
}

#[test]
fn fill_order_normalizes_to_bottom_first() {
    let red = Fill::solid(Rgba8::opaque(255, 0, 0));
    let blue = Fill::solid(Rgba8::opaque(0, 0, 255));
    let top_first = vec![red.clone(), blue.clone()];

    let fills = FillOrder::TopFirst.into_bottom_first(top_first.clone());
    assert_eq!(fills, vec![blue, red]);
    assert_eq!(FillOrder::BottomFirst.into_bottom_first(top_first.clone()), top_first);
}

#[test]
fn envelope_degeneracy() {
    assert!(ShapeEnvelope::new(0.0, 10.0, CornerRadii::default()).is_degenerate());
    assert!(ShapeEnvelope::new(10.0, f64::NAN, CornerRadii::default()).is_degenerate());
    let e = ShapeEnvelope::new(300.0, 50.0, CornerRadii::uniform(8.0));
    assert!(!e.is_degenerate());
    assert_eq!(e.center(), Point::new(150.0, 25.0));
    assert_eq!(e.max_dim(), 300.0);
}

#[test]
fn corner_offset_never_negative() {
    let r = CornerRadii::uniform(4.0).offset(-10.0);
    assert_eq!(r, CornerRadii::uniform(0.0));
}

#[test]
fn layer_updates_produce_new_values() {
    let layer = Layer {
        name: "button".to_string(),
        envelope: ShapeEnvelope::new(320.0, 64.0, CornerRadii::uniform(32.0)),
        fills: vec![Fill::solid(Rgba8::BLACK)],
        shadows: vec![],
        opacity: 1.0,
    };
    let faded = layer.with_opacity(0.5);
    assert_eq!(layer.opacity, 1.0);
    assert_eq!(faded.opacity, 0.5);
    assert!(layer.with_fills(vec![]).fills.is_empty());
    assert_eq!(layer.fills.len(), 1);
}

#[test]
fn validate_rejects_bad_sizes() {
    let mut layer = Layer {
        name: "bad".to_string(),
        envelope: ShapeEnvelope::new(-1.0, 10.0, CornerRadii::default()),
        fills: vec![],
        shadows: vec![],
        opacity: 1.0,
    };
    assert!(layer.validate().is_err());
    layer.envelope.width = 1.0;
    assert!(layer.validate().is_ok());
}

#[test]
fn gradient_rotation_keeps_center_and_axes() {
    let radial = GradientDescriptor {
        transform: affine::fold([
            Affine::translate(Vec2::new(160.0, 32.0)),
            affine::rotate_deg(10.0),
            Affine::scale_non_uniform(160.0, 32.0),
        ]),
        ..GradientDescriptor::identity(GradientFamily::Radial, vec![])
    };
    let sweep = GradientDescriptor::identity(GradientFamily::Angular, vec![]);
    let layer = Layer {
        name: "button".to_string(),
        envelope: ShapeEnvelope::new(320.0, 64.0, CornerRadii::uniform(32.0)),
        fills: vec![Fill::solid(Rgba8::BLACK), Fill::gradient(radial), Fill::gradient(sweep)],
        shadows: vec![],
        opacity: 1.0,
    };

    let turned = layer.with_gradient_rotation(1, 75.0).unwrap();
    let FillKind::Gradient(desc) = &turned.fills[1].kind else {
        panic!("expected gradient fill");
    };
    let d = desc.decomposed();
    assert!((d.rotation_deg - 75.0).abs() < 1e-9);
    assert!((d.scale_x - 160.0).abs() < 1e-9 && (d.scale_y - 32.0).abs() < 1e-9);
    assert!((d.translate - Vec2::new(160.0, 32.0)).hypot() < 1e-9);
    assert_eq!(desc.sweep_rotation_deg, None);
    let FillKind::Gradient(before) = &layer.fills[1].kind else {
        panic!("expected gradient fill");
    };
    assert!((before.decomposed().rotation_deg - 10.0).abs() < 1e-9);

    let FillKind::Gradient(desc) = &layer.with_gradient_rotation(2, 270.0).unwrap().fills[2].kind
    else {
        panic!("expected gradient fill");
    };
    assert_eq!(desc.sweep_rotation_deg, Some(-90.0));

    assert!(layer.with_gradient_rotation(0, 10.0).is_err());
    assert!(layer.with_gradient_rotation(9, 10.0).is_err());
    assert!(layer.with_gradient_rotation(1, f64::NAN).is_err());
}
