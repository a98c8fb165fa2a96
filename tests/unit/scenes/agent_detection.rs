use super::*;
use crate::foundation::core::Fps;

fn render(frame: f64) -> Node {
    AgentDetection
        .render(&SceneCtx::new(frame, Fps::default(), 120))
        .remove(0)
}

#[test]
fn header_fades_in_first() {
    assert_eq!(render(0.0).find("header").unwrap().opacity, 0.0);
    assert_eq!(render(9.0).find("header").unwrap().opacity, 1.0);
}

#[test]
fn rows_appear_in_order() {
    let root = render(15.0);
    for i in 0..5 {
        let row = root.find(&format!("agent.{i}")).unwrap();
        assert_eq!(row.opacity, 0.0);
        assert_eq!(row.transform.translate.x, 20.0);
    }

    let root = render(40.0);
    let opacities: Vec<f64> = (0..5)
        .map(|i| root.find(&format!("agent.{i}")).unwrap().opacity)
        .collect();
    assert!(opacities[0] > 0.9, "{opacities:?}");
    assert!(opacities[2] > 0.0 && opacities[2] < 0.9, "{opacities:?}");
    assert_eq!(opacities[3], 0.0);
    assert_eq!(opacities[4], 0.0);
}

#[test]
fn footer_follows_last_row() {
    assert_eq!(render(69.0).find("footer").unwrap().opacity, 0.0);
    assert!(render(119.0).find("footer").unwrap().opacity > 0.99);
    assert_eq!(render(119.0).find("footer").unwrap().collect_text(), "Found 5 agents");
}

#[test]
fn rows_list_agent_paths() {
    let root = render(119.0);
    assert_eq!(
        root.find("agent.0").unwrap().collect_text(),
        "✓ Claude Code  ~/.claude/skills"
    );
    assert_eq!(
        root.find("agent.4").unwrap().collect_text(),
        "✓ Windsurf  ~/.windsurf/skills"
    );
}
