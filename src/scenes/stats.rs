use crate::{
    animation::interpolate::{InterpolateOpts, interpolate},
    animation::spring::SpringConfig,
    foundation::color::Rgba8,
    scenes::node::{Direction, Node, TextStyle},
    scenes::theme,
    scenes::{Scene, SceneCtx},
    timeline::timing::SceneId,
};

const START_DELAY_FRAMES: f64 = 5.0;
const STAGGER_SECS: f64 = 0.15;

/// Three counters rising into place one after another.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Stats;

impl Stats {
    fn items() -> [(u32, &'static str, Rgba8); 3] {
        [
            (theme::TOTAL_SKILLS, "Skills", theme::CYAN),
            (theme::TOTAL_CATEGORIES, "Categories", theme::GREEN),
            (theme::TOTAL_AGENTS, "Agents", theme::YELLOW),
        ]
    }
}

impl Scene for Stats {
    fn id(&self) -> SceneId {
        SceneId::Stats
    }

    fn render(&self, ctx: &SceneCtx) -> Vec<Node> {
        let fade = interpolate(
            ctx.frame,
            &[0.0, ctx.secs(0.3)],
            &[0.0, 1.0],
            InterpolateOpts::CLAMP_RIGHT,
        );

        let stagger = ctx.secs(STAGGER_SECS);
        let items = Self::items().into_iter().enumerate().map(|(i, (value, label, color))| {
            let p = ctx.spring(
                START_DELAY_FRAMES + i as f64 * stagger,
                SpringConfig::new(15.0, 100.0),
            );
            let key = label.to_ascii_lowercase();
            Node::group(key.clone(), Direction::Column, 8.0)
                .child(Node::text(
                    format!("{key}.value"),
                    value.to_string(),
                    TextStyle::sans(64.0, 700, color),
                ))
                .child(Node::text(
                    format!("{key}.label"),
                    label,
                    TextStyle::sans(20.0, 400, theme::DIM).caps(2.0),
                ))
                .opacity(p)
                .translate(0.0, interpolate(p, &[0.0, 1.0], &[30.0, 0.0], InterpolateOpts::EXTEND))
        });

        vec![
            Node::group("stats", Direction::Row, 120.0)
                .children(items)
                .opacity(fade),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/stats.rs"]
mod tests;
