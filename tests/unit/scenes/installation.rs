use super::*;
use crate::foundation::core::Fps;

fn ctx(frame: f64) -> SceneCtx {
    SceneCtx::new(frame, Fps::default(), 150)
}

fn render(frame: f64) -> Node {
    Installation.render(&ctx(frame)).remove(0)
}

#[test]
fn starts_empty() {
    let root = render(0.0);
    assert_eq!(root.find("bar.percent").unwrap().collect_text(), "  0%");
    assert_eq!(root.find("installed").unwrap().collect_text(), "Installed 0/82 skills");
    assert_eq!(
        root.find("status").unwrap().collect_text(),
        "Installing grpo-rl-training..."
    );
    for i in 0..8 {
        assert_eq!(root.find(&format!("done.{i}")).unwrap().opacity, 0.0);
    }
}

#[test]
fn progress_is_monotonic_and_eased() {
    let mut prev = 0.0;
    for frame in 0..150 {
        let p = Installation::progress(&ctx(frame as f64));
        assert!(p >= prev);
        prev = p;
    }
    // In-out cubic is exactly half way at the midpoint.
    assert!((Installation::progress(&ctx(69.0)) - 0.5).abs() < 1e-9);
}

#[test]
fn finishes_at_one_hundred_percent() {
    let root = render(149.0);
    assert_eq!(root.find("bar.percent").unwrap().collect_text(), "100%");
    assert_eq!(root.find("installed").unwrap().collect_text(), "Installed 82/82 skills");
    assert_eq!(
        root.find("status").unwrap().collect_text(),
        "Linking skills into 5 agents..."
    );
    for i in 0..8 {
        assert_eq!(root.find(&format!("done.{i}")).unwrap().opacity, 1.0);
    }
}

#[test]
fn categories_complete_in_order() {
    let root = render(80.0);
    let opacities: Vec<f64> = (0..8)
        .map(|i| root.find(&format!("done.{i}")).unwrap().opacity)
        .collect();
    assert!(opacities.windows(2).all(|w| w[0] >= w[1]), "{opacities:?}");
    assert_eq!(opacities[0], 1.0);
    assert_eq!(opacities[7], 0.0);
}
