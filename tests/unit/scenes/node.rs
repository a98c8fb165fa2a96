use super::*;

fn white() -> TextStyle {
    TextStyle::mono(16.0, Rgba8::rgb(255, 255, 255))
}

#[test]
fn opacity_is_clamped() {
    assert_eq!(Node::text("a", "x", white()).opacity(1.03).opacity, 1.0);
    assert_eq!(Node::text("a", "x", white()).opacity(-0.2).opacity, 0.0);
    assert_eq!(Node::text("a", "x", white()).opacity(f64::NAN).opacity, 0.0);
    assert_eq!(Node::text("a", "x", white()).opacity(0.25).opacity, 0.25);
}

#[test]
fn find_and_collect_text_walk_depth_first() {
    let tree = Node::group("root", Direction::Column, 8.0)
        .child(Node::text("a", "Hello", white()))
        .child(
            Node::group("row", Direction::Row, 4.0)
                .children([Node::text("b", ", ", white()), Node::text("c", "world", white())]),
        );
    assert_eq!(tree.collect_text(), "Hello, world");
    assert_eq!(tree.find("c").and_then(Node::text_content), Some("world"));
    assert!(tree.find("missing").is_none());
}

#[test]
fn serializes_with_kind_tag_and_skips_defaults() {
    let n = Node::text("t", "hi", TextStyle::sans(20.0, 700, Rgba8::rgb(0, 0, 0)).caps(2.0));
    let v = serde_json::to_value(&n).unwrap();
    assert_eq!(v["content"]["kind"], "text");
    assert_eq!(v["content"]["style"]["font"], "sans");
    assert_eq!(v["content"]["style"]["uppercase"], true);
    assert_eq!(v["content"]["style"]["color"], "#000000");
    assert!(v.get("transform").is_none());
    assert!(v.get("children").is_none());

    let moved = serde_json::to_value(n.translate(0.0, 30.0)).unwrap();
    assert_eq!(moved["transform"]["translate"]["y"], 30.0);
}
