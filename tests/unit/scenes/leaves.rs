use super::*;

#[test]
fn cursor_blinks_at_one_hertz() {
    let fps = 30.0;
    assert_eq!(cursor("c", 0.0, fps).opacity, 1.0);
    assert_eq!(cursor("c", 14.0, fps).opacity, 1.0);
    assert_eq!(cursor("c", 15.0, fps).opacity, 0.0);
    assert_eq!(cursor("c", 29.0, fps).opacity, 0.0);
    assert_eq!(cursor("c", 30.0, fps).opacity, 1.0);
}

#[test]
fn prompt_renders_dollar_and_command() {
    let p = prompt("line", "npx foo", None);
    assert_eq!(p.collect_text(), "$ npx foo");
    assert!(p.find("line.cursor").is_none());

    let p = prompt("line", "npx", Some((0.0, 30.0)));
    assert!(p.find("line.cursor").is_some());
}

#[test]
fn check_line_includes_detail() {
    let n = check_line("row", "Cursor", Some("~/.cursor/skills"));
    assert_eq!(n.collect_text(), "✓ Cursor  ~/.cursor/skills");
    assert_eq!(check_line("row", "Done", None).collect_text(), "✓ Done");
}

#[test]
fn terminal_wraps_body() {
    let t = terminal("Terminal — zsh", [term_text("a", "hi", theme::TEXT)]);
    assert_eq!(
        t.content,
        Content::Terminal {
            title: "Terminal — zsh".to_string()
        }
    );
    assert_eq!(t.find("terminal.body").unwrap().children.len(), 1);
}

#[test]
fn progress_and_logo_are_clamped() {
    match progress_bar("p", 1.7).content {
        Content::ProgressBar { progress, .. } => assert_eq!(progress, 1.0),
        other => panic!("unexpected {other:?}"),
    }
    match logo(-0.3).content {
        Content::Logo { glow } => assert_eq!(glow, 0.0),
        other => panic!("unexpected {other:?}"),
    }
}
