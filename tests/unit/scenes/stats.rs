use super::*;
use crate::foundation::core::Fps;

fn render(frame: f64) -> Node {
    Stats
        .render(&SceneCtx::new(frame, Fps::default(), 60))
        .remove(0)
}

#[test]
fn items_stay_hidden_until_start_delay() {
    for frame in 0..=5 {
        let root = render(frame as f64);
        for key in ["skills", "categories", "agents"] {
            let item = root.find(key).unwrap();
            assert_eq!(item.opacity, 0.0, "{key} at {frame}");
            assert_eq!(item.transform.translate.y, 30.0);
        }
    }
}

#[test]
fn scene_fades_in_over_nine_frames() {
    assert_eq!(render(0.0).opacity, 0.0);
    assert!((render(4.5).opacity - 0.5).abs() < 1e-9);
    assert_eq!(render(9.0).opacity, 1.0);
    assert_eq!(render(40.0).opacity, 1.0);
}

#[test]
fn items_are_staggered() {
    // Items start at frames 5, 9.5 and 14.
    let root = render(15.0);
    let first = root.find("skills").unwrap().opacity;
    let second = root.find("categories").unwrap().opacity;
    let third = root.find("agents").unwrap().opacity;
    assert!(first > second);
    assert!(second > third);
    assert!(third > 0.0);
}

#[test]
fn shows_totals_with_labels() {
    let root = render(59.0);
    assert_eq!(root.collect_text(), "82Skills20Categories5Agents");
    let value = root.find("skills.value").unwrap();
    match &value.content {
        crate::scenes::node::Content::Text { style, .. } => {
            assert_eq!(style.color, theme::CYAN);
            assert_eq!(style.size_px, 64.0);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(root.find("skills").unwrap().opacity > 0.9);
}
