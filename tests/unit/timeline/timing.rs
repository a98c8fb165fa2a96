use super::*;

#[test]
fn builtin_table_is_valid_and_ordered() {
    let table = SceneTable::builtin();
    table.validate().unwrap();
    let order: Vec<_> = table.entries().iter().map(|e| e.scene).collect();
    assert_eq!(order, SceneId::ALL.to_vec());
    assert_eq!(table.end_secs(), 30.0);
    assert_eq!(
        table.get(SceneId::TerminalTyping),
        Some(SceneTiming::new(6.0, 2.5))
    );
}

#[test]
fn rejects_negative_and_non_finite() {
    let bad = |start: f64, duration: f64| {
        SceneTable::new(vec![SceneEntry::new(SceneId::Intro, start, duration)])
    };
    assert!(bad(-1.0, 2.0).is_err());
    assert!(bad(0.0, -2.0).is_err());
    assert!(bad(f64::NAN, 2.0).is_err());
    assert!(bad(0.0, f64::INFINITY).is_err());
    assert!(bad(0.0, 0.0).is_ok());
}

#[test]
fn rejects_duplicates_and_empty() {
    let entry = SceneEntry::new(SceneId::Stats, 0.0, 1.0);
    let err = SceneTable::new(vec![entry, entry]).unwrap_err();
    assert!(err.to_string().contains("more than once"));
    assert!(SceneTable::new(vec![]).is_err());
}

#[test]
fn json_shape_is_flat_rows() {
    let json = serde_json::json!([
        { "scene": "intro", "start": 0.0, "duration": 1.5 },
        { "scene": "call_to_action", "start": 1.5, "duration": 2.0 }
    ]);
    let table: SceneTable = serde_json::from_value(json).unwrap();
    assert_eq!(table.entries().len(), 2);
    assert_eq!(table.entries()[1].scene, SceneId::CallToAction);
    assert_eq!(table.end_secs(), 3.5);

    let back = serde_json::to_value(&table).unwrap();
    assert_eq!(back[0]["scene"], "intro");
    assert_eq!(back[0]["duration"], 1.5);
}

#[test]
fn rows_reject_unknown_keys() {
    let json = serde_json::json!([
        { "scene": "intro", "start": 0.0, "duration": 4.0, "premount_secs": 9.0 }
    ]);
    let err = serde_json::from_value::<SceneTable>(json).unwrap_err();
    assert!(err.to_string().contains("premount_secs"), "{err}");
}

#[test]
fn scene_names_match_serde() {
    for id in SceneId::ALL {
        let v = serde_json::to_value(id).unwrap();
        assert_eq!(v, serde_json::Value::String(id.as_str().to_string()));
    }
}
