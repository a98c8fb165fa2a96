//! Presentational building blocks shared by scenes. No animation state lives here; callers
//! pass in already-computed progress values.

use crate::{
    foundation::color::Rgba8,
    scenes::node::{Content, Direction, Node, TextStyle},
    scenes::theme,
};

/// Monospace size used inside terminal bodies.
pub(crate) const TERMINAL_FONT_PX: f64 = 22.0;

/// Terminal window with `body` laid out as a column.
pub(crate) fn terminal(title: &str, body: impl IntoIterator<Item = Node>) -> Node {
    Node::new(
        "terminal",
        Content::Terminal {
            title: title.to_owned(),
        },
    )
    .child(Node::group("terminal.body", Direction::Column, 12.0).children(body))
}

/// Terminal text in the body font.
pub(crate) fn term_text(key: impl Into<String>, text: impl Into<String>, color: Rgba8) -> Node {
    Node::text(key, text, TextStyle::mono(TERMINAL_FONT_PX, color))
}

/// Row of differently colored text spans, keyed `{key}.{i}`.
pub(crate) fn spans(key: &str, parts: &[(&str, Rgba8)]) -> Node {
    Node::group(key, Direction::Row, 0.0).children(
        parts
            .iter()
            .enumerate()
            .map(|(i, (text, color))| term_text(format!("{key}.{i}"), *text, *color)),
    )
}

/// Blinking block cursor. Visible for the first half of every second.
pub(crate) fn cursor(key: impl Into<String>, frame: f64, fps: f64) -> Node {
    let half = (fps / 2.0).max(1.0);
    let on = (frame.max(0.0) / half).floor() as u64 % 2 == 0;
    Node::new(key, Content::Cursor { color: theme::TEXT }).opacity(if on { 1.0 } else { 0.0 })
}

/// `$ command` prompt line, with an optional trailing cursor.
pub(crate) fn prompt(key: &str, command: &str, cursor_at: Option<(f64, f64)>) -> Node {
    let mut row = spans(key, &[("$ ", theme::GREEN), (command, theme::TEXT)]);
    if let Some((frame, fps)) = cursor_at {
        row = row.child(cursor(format!("{key}.cursor"), frame, fps));
    }
    row
}

/// Green tick followed by a label and optional dim detail.
pub(crate) fn check_line(key: &str, label: &str, detail: Option<&str>) -> Node {
    let mut parts = vec![("✓ ", theme::GREEN), (label, theme::TEXT)];
    if let Some(detail) = detail {
        parts.push(("  ", theme::DIM));
        parts.push((detail, theme::DIM));
    }
    spans(key, &parts)
}

/// Orchestra logo mark.
pub(crate) fn logo(glow: f64) -> Node {
    Node::new(
        "logo",
        Content::Logo {
            glow: glow.clamp(0.0, 1.0),
        },
    )
}

/// Checkbox in the selection list.
pub(crate) fn checkbox(key: impl Into<String>, checked: bool) -> Node {
    let color = if checked { theme::GREEN } else { theme::DIM };
    Node::new(key, Content::Checkbox { checked, color })
}

/// Progress bar with green fill.
pub(crate) fn progress_bar(key: impl Into<String>, progress: f64) -> Node {
    Node::new(
        key,
        Content::ProgressBar {
            progress: progress.clamp(0.0, 1.0),
            track: theme::BORDER,
            fill: theme::GREEN,
        },
    )
}

/// Rounded panel with the given border color.
pub(crate) fn panel(key: impl Into<String>, border: Rgba8) -> Node {
    Node::new(
        key,
        Content::Panel {
            fill: theme::BG_PANEL,
            border,
            radius_px: 12.0,
        },
    )
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/leaves.rs"]
mod tests;
