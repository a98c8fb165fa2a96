use crate::{
    animation::ease::Ease,
    animation::interpolate::{InterpolateOpts, interpolate, interpolate_color},
    scenes::leaves,
    scenes::node::{Direction, Node},
    scenes::theme,
    scenes::{Scene, SceneCtx},
    timeline::timing::SceneId,
};

const START_DELAY_FRAMES: f64 = 0.0;
const SWEEP_START_SECS: f64 = 0.4;
const SWEEP_END_SECS: f64 = 3.0;
const ENTER_HINT_SECS: f64 = 3.2;
const HIGHLIGHT_RAMP: f64 = 0.35;

/// Category rows plus the trailing "select all" row.
const ROWS: usize = theme::CATEGORIES.len() + 1;

/// Installer category picker with a cursor sweeping down and ticking each row.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct CategorySelection;

/// Position of the highlight cursor: whole rows passed and progress into the current one.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Sweep {
    row: usize,
    fract: f64,
}

impl Sweep {
    fn at(ctx: &SceneCtx) -> Self {
        let pos = interpolate(
            ctx.adjusted(START_DELAY_FRAMES),
            &[ctx.secs(SWEEP_START_SECS), ctx.secs(SWEEP_END_SECS)],
            &[0.0, ROWS as f64],
            InterpolateOpts::CLAMP,
        );
        let row = pos.floor();
        Self {
            row: row as usize,
            fract: pos - row,
        }
    }

    fn is_checked(self, index: usize) -> bool {
        index < self.row
    }

    fn is_active(self, index: usize) -> bool {
        index == self.row
    }

    fn selected_skills(self) -> u32 {
        if self.is_checked(ROWS - 1) {
            return theme::TOTAL_SKILLS;
        }
        theme::CATEGORIES
            .iter()
            .enumerate()
            .filter(|(i, _)| self.is_checked(*i))
            .map(|(_, (_, n))| n)
            .sum()
    }
}

fn row(key: String, label: &str, checked: bool, active: bool, highlight: f64) -> Node {
    let label_color = if active {
        interpolate_color(
            highlight,
            &[0.0, HIGHLIGHT_RAMP],
            &[theme::DIM, theme::CYAN],
            Ease::OutQuad,
        )
    } else if checked {
        theme::TEXT
    } else {
        theme::DIM
    };
    let pointer = if active { "❯ " } else { "  " };
    Node::group(key.clone(), Direction::Row, 12.0).children([
        leaves::term_text(format!("{key}.pointer"), pointer, theme::CYAN),
        leaves::checkbox(format!("{key}.box"), checked),
        leaves::term_text(format!("{key}.label"), label, label_color),
    ])
}

impl Scene for CategorySelection {
    fn id(&self) -> SceneId {
        SceneId::CategorySelection
    }

    fn render(&self, ctx: &SceneCtx) -> Vec<Node> {
        let sweep = Sweep::at(ctx);

        let mut body = vec![leaves::term_text(
            "prompt",
            "Which skill categories would you like to install?",
            theme::TEXT,
        )];

        for (i, (name, skills)) in theme::CATEGORIES.iter().enumerate() {
            let key = format!("category.{i}");
            let detail = format!(" ({skills})");
            body.push(
                row(key.clone(), name, sweep.is_checked(i), sweep.is_active(i), sweep.fract)
                    .child(leaves::term_text(format!("{key}.count"), detail, theme::DIM)),
            );
        }

        let all = ROWS - 1;
        let all_label = format!(
            "Select all ({} categories, {} skills)",
            theme::TOTAL_CATEGORIES,
            theme::TOTAL_SKILLS
        );
        body.push(row(
            "select_all".to_string(),
            &all_label,
            sweep.is_checked(all),
            sweep.is_active(all),
            sweep.fract,
        ));

        let selected = sweep.selected_skills().to_string();
        body.push(leaves::spans(
            "footer",
            &[
                ("Selected: ", theme::DIM),
                (selected.as_str(), theme::CYAN),
                (" skills", theme::DIM),
            ],
        ));

        let hint_at = ctx.secs(ENTER_HINT_SECS);
        body.push(
            leaves::term_text("hint", "Press Enter to install", theme::GREEN).opacity(interpolate(
                ctx.adjusted(START_DELAY_FRAMES),
                &[hint_at, hint_at + ctx.secs(0.3)],
                &[0.0, 1.0],
                InterpolateOpts::CLAMP,
            )),
        );

        vec![leaves::terminal("AI Research Skills — Select Skills", body)]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/category_selection.rs"]
mod tests;
