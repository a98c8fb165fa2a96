use crate::{
    animation::interpolate::{InterpolateOpts, interpolate},
    animation::spring::SpringConfig,
    scenes::leaves,
    scenes::node::Node,
    scenes::theme,
    scenes::{Scene, SceneCtx},
    timeline::timing::SceneId,
};

const START_DELAY_FRAMES: f64 = 0.0;
const FIRST_ROW_SECS: f64 = 0.5;
const STAGGER_SECS: f64 = 0.35;
const FOOTER_GAP_SECS: f64 = 0.4;

const AGENTS: [(&str, &str); 5] = [
    ("Claude Code", "~/.claude/skills"),
    ("Cursor", "~/.cursor/skills"),
    ("Codex CLI", "~/.codex/skills"),
    ("Gemini CLI", "~/.gemini/skills"),
    ("Windsurf", "~/.windsurf/skills"),
];

/// Installer probing for coding agents, one row at a time.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct AgentDetection;

impl AgentDetection {
    fn row_delay(ctx: &SceneCtx, index: usize) -> f64 {
        START_DELAY_FRAMES + ctx.secs(FIRST_ROW_SECS) + index as f64 * ctx.secs(STAGGER_SECS)
    }
}

impl Scene for AgentDetection {
    fn id(&self) -> SceneId {
        SceneId::AgentDetection
    }

    fn render(&self, ctx: &SceneCtx) -> Vec<Node> {
        let adjusted = ctx.adjusted(START_DELAY_FRAMES);
        let header = leaves::term_text("header", "Detecting installed coding agents...", theme::DIM)
            .opacity(interpolate(
                adjusted,
                &[0.0, ctx.secs(0.3)],
                &[0.0, 1.0],
                InterpolateOpts::CLAMP,
            ));

        let mut body = vec![header];
        for (i, (name, path)) in AGENTS.iter().enumerate() {
            let p = ctx.spring(Self::row_delay(ctx, i), SpringConfig::new(20.0, 150.0));
            let shift = interpolate(p, &[0.0, 1.0], &[20.0, 0.0], InterpolateOpts::EXTEND);
            body.push(
                leaves::check_line(&format!("agent.{i}"), name, Some(*path))
                    .opacity(p)
                    .translate(shift, 0.0),
            );
        }

        let footer_delay = Self::row_delay(ctx, AGENTS.len() - 1) + ctx.secs(FOOTER_GAP_SECS);
        let count = theme::TOTAL_AGENTS.to_string();
        let footer = leaves::spans(
            "footer",
            &[
                ("Found ", theme::TEXT),
                (count.as_str(), theme::CYAN),
                (" agents", theme::TEXT),
            ],
        )
        .opacity(ctx.spring(footer_delay, SpringConfig::with_damping(200.0)));
        body.push(footer);

        vec![leaves::terminal("AI Research Skills — Agent Detection", body)]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/agent_detection.rs"]
mod tests;
