use crate::{
    animation::ease::Ease,
    animation::interpolate::{InterpolateOpts, interpolate},
    scenes::leaves,
    scenes::node::{Direction, Node},
    scenes::theme,
    scenes::{Scene, SceneCtx},
    timeline::timing::SceneId,
};

const START_DELAY_FRAMES: f64 = 0.0;
const PROGRESS_START_SECS: f64 = 0.3;
const PROGRESS_END_SECS: f64 = 4.3;

const SKILL_NAMES: [&str; 12] = [
    "grpo-rl-training",
    "verl",
    "vllm",
    "sglang",
    "megatron-core",
    "deepspeed",
    "lm-evaluation-harness",
    "nemo-curator",
    "transformer-lens",
    "llava",
    "ml-paper-writing",
    "neurips-templates",
];

/// Installer progress bar with completed categories ticking off underneath.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Installation;

impl Installation {
    fn progress(ctx: &SceneCtx) -> f64 {
        interpolate(
            ctx.adjusted(START_DELAY_FRAMES),
            &[ctx.secs(PROGRESS_START_SECS), ctx.secs(PROGRESS_END_SECS)],
            &[0.0, 1.0],
            InterpolateOpts::CLAMP.with_ease(Ease::InOutCubic),
        )
    }

    fn status_line(progress: f64) -> String {
        if progress >= 1.0 {
            return format!("Linking skills into {} agents...", theme::TOTAL_AGENTS);
        }
        let last = SKILL_NAMES.len() - 1;
        let i = ((progress * SKILL_NAMES.len() as f64).floor() as usize).min(last);
        format!("Installing {}...", SKILL_NAMES[i])
    }
}

impl Scene for Installation {
    fn id(&self) -> SceneId {
        SceneId::Installation
    }

    fn render(&self, ctx: &SceneCtx) -> Vec<Node> {
        let progress = Self::progress(ctx);
        let installed = (progress * f64::from(theme::TOTAL_SKILLS)).round() as u32;
        let percent = format!("{:>3}%", (progress * 100.0).round() as u32);

        let bar = Node::group("bar", Direction::Row, 16.0).children([
            leaves::progress_bar("bar.track", progress),
            leaves::term_text("bar.percent", percent, theme::TEXT),
        ]);

        let count = format!("{installed}/{}", theme::TOTAL_SKILLS);
        let mut body = vec![
            bar,
            leaves::spans(
                "installed",
                &[
                    ("Installed ", theme::DIM),
                    (count.as_str(), theme::CYAN),
                    (" skills", theme::DIM),
                ],
            ),
            leaves::term_text("status", Self::status_line(progress), theme::DIM),
        ];

        let done_categories = progress * theme::CATEGORIES.len() as f64;
        for (i, (name, skills)) in theme::CATEGORIES.iter().enumerate() {
            let at = i as f64;
            let detail = format!("{skills} skills");
            let fade = interpolate(
                done_categories,
                &[at, at + 0.5],
                &[0.0, 1.0],
                InterpolateOpts::CLAMP,
            );
            body.push(
                leaves::check_line(&format!("done.{i}"), name, Some(detail.as_str())).opacity(fade),
            );
        }

        vec![leaves::terminal("AI Research Skills — Installing", body)]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/installation.rs"]
mod tests;
