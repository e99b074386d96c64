use sheet_impose::*;

#[test]
fn test_defaults_are_business_cards() {
    let inputs = ImpositionInputs::default();
    assert_eq!(inputs.sheet, Size::new(12.0, 18.0));
    assert_eq!(inputs.document, Size::new(3.5, 2.0));
    assert_eq!(inputs.gutter, Gutter::uniform(0.125));
    assert_eq!(inputs.non_printable, PerSide::uniform(0.0625));
    assert_eq!(inputs.margins, PerSide::default());
    assert!(inputs.auto_margins);
    assert!(inputs.force_across.is_none());
    assert!(inputs.finishing.hole_plan.entries.is_empty());
}

#[test]
fn test_zero_forced_count_is_absent() {
    let inputs = ImpositionInputs {
        force_across: Some(0),
        force_down: Some(4),
        ..Default::default()
    };
    assert_eq!(inputs.forced_across(), None);
    assert_eq!(inputs.forced_down(), Some(4));
}

#[test]
fn test_in_units_converts_lengths_only() {
    let mut inputs = ImpositionInputs {
        sheet: Size::new(304.8, 457.2),
        document: Size::new(88.9, 50.8),
        gutter: Gutter::uniform(3.175),
        non_printable: PerSide::uniform(1.5875),
        force_across: Some(2),
        ..Default::default()
    };
    inputs.finishing.score_vertical = vec![0.5];
    inputs.finishing.hole_plan = HolePlan {
        diameter: 6.35,
        entries: vec![HoleEntry::new(Edge::Top, Align::Start, -12.7, 25.4)],
    };

    let converted = inputs.in_units(Unit::Millimeters);
    assert_eq!(converted.sheet, Size::new(12.0, 18.0));
    assert_eq!(converted.document, Size::new(3.5, 2.0));
    assert_eq!(converted.gutter, Gutter::uniform(0.125));
    assert_eq!(converted.non_printable, PerSide::uniform(0.0625));
    assert_eq!(converted.force_across, Some(2));
    assert_eq!(converted.finishing.score_vertical, vec![0.5]);
    assert_eq!(converted.finishing.hole_plan.diameter, 0.25);
    assert_eq!(converted.finishing.hole_plan.entries[0].axis_offset, -0.5);
    assert_eq!(converted.finishing.hole_plan.entries[0].offset, 1.0);
}

#[test]
fn test_in_inches_is_identity() {
    let inputs = ImpositionInputs::default();
    assert_eq!(inputs.clone().in_units(Unit::Inches), inputs);
}

#[cfg(feature = "serde")]
#[test]
fn test_parse_camel_case_job() {
    let json = r#"{
        "sheet": {"width": 12, "height": 18},
        "document": {"width": 3.5, "height": 2},
        "gutter": {"horizontal": 0.125, "vertical": 0.125},
        "nonPrintable": {"top": 0.0625, "right": 0.0625, "bottom": 0.0625, "left": 0.0625},
        "margins": {"top": 0, "right": 0, "bottom": 0, "left": 0},
        "autoMargins": true,
        "forceAcross": 2,
        "finishing": {
            "scoreHorizontal": [0.5],
            "holePlan": {
                "diameter": 0.25,
                "entries": [{"edge": "top", "align": "end", "axisOffset": 0.5, "offset": 0.25}]
            }
        }
    }"#;
    let inputs = ImpositionInputs::from_json(json).unwrap();

    assert_eq!(inputs.force_across, Some(2));
    assert_eq!(inputs.force_down, None);
    assert_eq!(inputs.finishing.score_horizontal, vec![0.5]);
    assert!(inputs.finishing.score_vertical.is_empty());
    let entry = inputs.finishing.hole_plan.entries[0];
    assert_eq!(entry.edge, Edge::Top);
    assert_eq!(entry.align, Align::End);
    assert_eq!(entry.axis_offset, 0.5);
}

#[cfg(feature = "serde")]
#[test]
fn test_missing_fields_default() {
    let inputs = ImpositionInputs::from_json(r#"{"sheet": {"width": 10}}"#).unwrap();
    assert_eq!(inputs.sheet, Size::new(10.0, 0.0));
    assert_eq!(inputs.document, Size::new(3.5, 2.0));

    let result = compute(&inputs);
    assert_eq!(result.layout.counts.down, 0);
    assert!(result.finishing.cuts.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn test_null_numbers_read_as_zero() {
    let json = r#"{
        "sheet": {"width": null, "height": 18},
        "gutter": null,
        "margins": {"top": null},
        "autoMargins": false,
        "finishing": {
            "scoreVertical": [0.5, null],
            "perforationHorizontal": null,
            "holePlan": {"diameter": null, "entries": [{"edge": "top", "offset": null}]}
        }
    }"#;
    let inputs = ImpositionInputs::from_json(json).unwrap();

    assert_eq!(inputs.sheet, Size::new(0.0, 18.0));
    assert_eq!(inputs.gutter, Gutter::default());
    assert_eq!(inputs.margins.top, 0.0);
    assert_eq!(inputs.finishing.score_vertical, vec![0.5]);
    assert!(inputs.finishing.perforation_horizontal.is_empty());
    assert_eq!(inputs.finishing.hole_plan.diameter, 0.0);
    assert_eq!(inputs.finishing.hole_plan.entries[0].offset, 0.0);

    // A zero-width sheet still computes, with nothing across
    let result = compute(&inputs);
    assert_eq!(result.layout.counts.across, 0);
    assert!(result.finishing.slits.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn test_unknown_tags_fall_back_to_defaults() {
    let json = r#"{"finishing": {"holePlan": {"diameter": 0.25, "entries": [
        {"edge": "diagonal", "align": null, "offset": 0.25},
        {"edge": "RIGHT", "align": 7}
    ]}}}"#;
    let inputs = ImpositionInputs::from_json(json).unwrap();
    let entries = &inputs.finishing.hole_plan.entries;

    assert_eq!(entries[0].edge, Edge::Left);
    assert_eq!(entries[0].align, Align::Center);
    assert_eq!(entries[1].edge, Edge::Right);
    assert_eq!(entries[1].align, Align::Center);
}

#[cfg(feature = "serde")]
#[test]
fn test_legacy_finishing_key() {
    let json = r#"{"finishingOptions": {"perforationVertical": [0.25]}}"#;
    let inputs = ImpositionInputs::from_json(json).unwrap();
    assert_eq!(inputs.finishing.perforation_vertical, vec![0.25]);
}

#[cfg(feature = "serde")]
#[test]
fn test_malformed_json_is_config_error() {
    let result = ImpositionInputs::from_json("{ not json");
    match result {
        Err(ImposeError::Config(msg)) => {
            assert!(msg.contains("Failed to parse job"));
        }
        _ => panic!("Expected Config error"),
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_inputs() {
    use tempfile::NamedTempFile;

    let mut inputs = ImpositionInputs::default();
    inputs.force_down = Some(4);
    inputs.auto_margins = false;
    inputs.margins = PerSide::uniform(0.25);
    inputs.finishing.score_horizontal = vec![0.5];
    inputs.finishing.hole_plan = HolePlan::three_hole_letter();

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    // Save
    inputs.save(path).await.unwrap();

    // Load
    let loaded = ImpositionInputs::load(path).await.unwrap();

    assert_eq!(loaded, inputs);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ImpositionInputs::load(dir.path().join("missing.json")).await;
    assert!(matches!(result, Err(ImposeError::Io(_))));
}
