use super::*;
use crate::foundation::core::Fps;
use crate::scenes::node::Content;

fn render(frame: f64) -> Node {
    let mut nodes = Intro.render(&SceneCtx::new(frame, Fps::default(), 120));
    assert_eq!(nodes.len(), 1);
    nodes.remove(0)
}

#[test]
fn starts_hidden_and_small() {
    let root = render(0.0);
    let logo = root.find("logo").unwrap();
    assert_eq!(logo.opacity, 0.0);
    assert_eq!(logo.transform.scale.x, 0.6);
    assert_eq!(root.find("wordmark").unwrap().opacity, 0.0);
    assert_eq!(root.find("wordmark").unwrap().transform.translate.y, 20.0);
    assert_eq!(root.find("subtitle").unwrap().opacity, 0.0);
}

#[test]
fn text_waits_for_its_delay() {
    let root = render(12.0);
    assert!(root.find("logo").unwrap().opacity > 0.0);
    assert_eq!(root.find("wordmark").unwrap().opacity, 0.0);
    assert_eq!(root.find("subtitle").unwrap().opacity, 0.0);

    let root = render(30.0);
    assert!(root.find("wordmark").unwrap().opacity > 0.0);
    assert!(root.find("subtitle").unwrap().opacity > 0.0);
}

#[test]
fn settles_by_the_end() {
    let root = render(119.0);
    let logo = root.find("logo").unwrap();
    assert!(logo.opacity > 0.99);
    assert!((logo.transform.scale.x - 1.0).abs() < 1e-3);
    assert!(root.find("subtitle").unwrap().opacity > 0.99);
    assert_eq!(root.collect_text(), "Orchestra ResearchAI Research Skills");
}

#[test]
fn glow_pulses_between_bounds() {
    let mut seen_low = false;
    let mut seen_high = false;
    for frame in 0..120 {
        let root = render(frame as f64);
        let Content::Logo { glow } = root.find("logo").unwrap().content else {
            panic!("logo node has wrong content");
        };
        assert!((0.4 - 1e-9..=0.8 + 1e-9).contains(&glow), "{glow}");
        seen_low |= glow < 0.45;
        seen_high |= glow > 0.75;
    }
    assert!(seen_low && seen_high);
}
