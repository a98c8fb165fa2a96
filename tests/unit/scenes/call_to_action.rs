use super::*;
use crate::foundation::core::Fps;
use crate::scenes::node::Content;

const DURATION: u64 = 135;

fn render(frame: f64) -> Node {
    CallToAction
        .render(&SceneCtx::new(frame, Fps::default(), DURATION))
        .remove(0)
}

#[test]
fn fades_out_over_last_half_second() {
    assert_eq!(render(60.0).opacity, 1.0);
    assert_eq!(render(120.0).opacity, 1.0);
    assert!((render(127.5).opacity - 0.5).abs() < 1e-9);
    assert!((render(134.0).opacity - 1.0 / 15.0).abs() < 1e-9);
}

#[test]
fn elements_arrive_in_sequence() {
    let root = render(12.0);
    assert!(root.find("headline").unwrap().opacity > 0.0);
    assert_eq!(root.find("command").unwrap().opacity, 0.0);
    assert_eq!(root.find("command").unwrap().transform.translate.y, 20.0);
    assert_eq!(root.find("url").unwrap().opacity, 0.0);

    let root = render(27.0);
    assert_eq!(root.find("url").unwrap().opacity, 0.0);
    assert!(root.find("command").unwrap().opacity > 0.0);
}

#[test]
fn command_box_shows_install_command() {
    let root = render(100.0);
    assert_eq!(
        root.find("command").unwrap().collect_text(),
        format!("$ {}", theme::INSTALL_COMMAND)
    );
    assert_eq!(root.find("url").unwrap().text_content(), Some(theme::REPO_URL));
}

#[test]
fn border_pulses_between_cyan_and_green() {
    let border = |frame: f64| match render(frame).find("command").unwrap().content {
        Content::Panel { border, .. } => border,
        ref other => panic!("unexpected {other:?}"),
    };
    // Pulse period is 45 frames: mid-point at 0, peak at 11.25, trough at 33.75.
    assert_ne!(border(0.0), border(11.0));
    for frame in 0..DURATION {
        let c = border(frame as f64);
        assert!(c.r >= theme::GREEN.r && c.r <= theme::CYAN.r);
        assert!(c.b >= theme::GREEN.b && c.b <= theme::CYAN.b);
    }
}
