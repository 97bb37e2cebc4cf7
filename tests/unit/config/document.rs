use super::*;
use crate::foundation::core::Point;

const ROW: &str = r#"{
    "kind": "proportional",
    "axis": "horizontal",
    "alignment": "center",
    "bounds": { "width": 100, "height": 50 },
    "children": [
        { "label": "hello", "proportion": 0.25, "size": { "width": 30, "height": 10 } },
        { "label": "yessir", "proportion": 0.5, "size": { "width": 30, "height": 10 } },
        { "label": "gray", "size": { "width": 30, "height": 10 } },
        { "label": "light", "size": { "width": 30, "height": 10 } }
    ]
}"#;

#[test]
fn proportional_row_document_evaluates() {
    let doc = LayoutDocument::from_json(ROW).unwrap();
    assert_eq!(doc.spacing, DEFAULT_SPACING);
    assert!(doc.fit_to_view);

    let out = doc.evaluate().unwrap();
    assert_eq!(out.size, Size::new(100.0, 50.0));
    let xs: Vec<f64> = out
        .placements
        .iter()
        .map(|p| p.placement.position.x)
        .collect();
    assert_eq!(xs, vec![12.5, 50.0, 81.25, 93.75]);
    assert_eq!(out.placements[2].label.as_deref(), Some("gray"));
}

#[test]
fn zero_proportion_in_document_shares_leftover() {
    let json = ROW
        .replace(r#""label": "gray","#, r#""label": "gray", "proportion": 0,"#)
        .replace(r#""label": "light","#, r#""label": "light", "proportion": 0.0, "priority": 3,"#);
    let doc = LayoutDocument::from_json(&json).unwrap();
    assert_eq!(doc.children[2].proportion, Some(0.0));

    let out = doc.evaluate().unwrap();
    let widths: Vec<Option<f64>> = out
        .placements
        .iter()
        .map(|p| p.placement.proposal.width)
        .collect();
    assert_eq!(
        widths,
        vec![Some(25.0), Some(50.0), Some(12.5), Some(12.5)]
    );
}

#[test]
fn explicit_order_overrides_axis_default() {
    let json = r#"{
        "kind": "proportional",
        "axis": "horizontal",
        "order": "sequence",
        "bounds": { "width": 100, "height": 10 },
        "children": [
            { "proportion": 0.6, "priority": 1, "size": { "width": 1, "height": 1 } },
            { "proportion": 0.6, "priority": 2, "size": { "width": 1, "height": 1 } }
        ]
    }"#;
    let out = LayoutDocument::from_json(json).unwrap().evaluate().unwrap();
    assert_eq!(out.placements[0].placement.position, Point::new(30.0, 5.0));
    assert_eq!(out.placements[1].placement.position, Point::new(80.0, 5.0));
}

#[test]
fn equal_column_document_evaluates() {
    let json = r#"{
        "kind": "equal",
        "axis": "vertical",
        "spacing": 0,
        "bounds": { "x": 0, "y": 0, "width": 60, "height": 100 },
        "proposal": { "width": 60 },
        "children": [
            { "size": { "width": 20, "height": 10 } },
            { "size": { "width": 40, "height": 15 } }
        ]
    }"#;
    let out = LayoutDocument::from_json(json).unwrap().evaluate().unwrap();
    assert_eq!(out.size, Size::new(40.0, 30.0));
    assert_eq!(out.placements[1].placement.position, Point::new(30.0, 22.5));
}

#[test]
fn validation_rejects_bad_numbers() {
    let mut doc = LayoutDocument::from_json(ROW).unwrap();
    doc.children[0].proportion = Some(-0.5);
    assert!(matches!(
        doc.evaluate().unwrap_err(),
        LayoutError::InvalidProportion(_)
    ));

    let mut doc = LayoutDocument::from_json(ROW).unwrap();
    doc.bounds.width = f64::NAN;
    assert!(
        doc.validate()
            .unwrap_err()
            .to_string()
            .contains("bounds.width")
    );

    let mut doc = LayoutDocument::from_json(ROW).unwrap();
    doc.spacing = -1.0;
    assert!(doc.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = LayoutDocument::from_json("{ \"kind\": \"diagonal\" }").unwrap_err();
    assert!(matches!(err, LayoutError::Serde(_)));
}

#[test]
fn output_serializes_flat_placements() {
    let out = LayoutDocument::from_json(ROW).unwrap().evaluate().unwrap();
    let v = serde_json::to_value(&out).unwrap();
    assert_eq!(v["placements"][0]["label"], "hello");
    assert_eq!(v["placements"][0]["position"]["x"], 12.5);
    assert_eq!(v["placements"][0]["proposal"]["width"], 25.0);
}
