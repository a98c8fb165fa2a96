use crate::{
    animation::interpolate::{InterpolateOpts, interpolate},
    animation::spring::SpringConfig,
    scenes::node::{Direction, Node, TextStyle},
    scenes::theme,
    scenes::{Scene, SceneCtx},
    timeline::timing::SceneId,
};

const START_DELAY_FRAMES: f64 = 0.0;
const DETAILS_SECS: f64 = 0.5;
const PROMPTS_SECS: f64 = 1.0;
const STAGGER_SECS: f64 = 0.2;

const EXAMPLE_PROMPTS: [&str; 3] = [
    "\"Help me set up GRPO training with verl\"",
    "\"How do I serve a model with vLLM?\"",
    "\"Write a NeurIPS paper introduction\"",
];

/// Completion banner followed by example prompts to try.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Success;

impl Scene for Success {
    fn id(&self) -> SceneId {
        SceneId::Success
    }

    fn render(&self, ctx: &SceneCtx) -> Vec<Node> {
        let title = ctx.spring(START_DELAY_FRAMES, SpringConfig::new(15.0, 100.0));
        let skills = theme::TOTAL_SKILLS.to_string();
        let agents = theme::TOTAL_AGENTS.to_string();
        let mono = TextStyle::mono(24.0, theme::TEXT);
        let summary = Node::group("summary", Direction::Row, 0.0).children(
            [
                ("Installed ", theme::TEXT),
                (skills.as_str(), theme::CYAN),
                (" skills to ", theme::TEXT),
                (agents.as_str(), theme::CYAN),
                (" agents", theme::TEXT),
            ]
            .into_iter()
            .enumerate()
            .map(|(i, (text, color))| Node::text(format!("summary.{i}"), text, mono.color(color))),
        );
        let banner = Node::group("banner", Direction::Column, 16.0)
            .child(Node::text(
                "title",
                "✓ Installation Complete",
                TextStyle::sans(48.0, 700, theme::GREEN),
            ))
            .child(summary)
            .opacity(title)
            .scale(interpolate(title, &[0.0, 1.0], &[0.8, 1.0], InterpolateOpts::EXTEND));

        let details = interpolate(
            ctx.spring(
                START_DELAY_FRAMES + ctx.secs(DETAILS_SECS),
                SpringConfig::with_damping(200.0),
            ),
            &[0.0, 1.0],
            &[0.0, 1.0],
            InterpolateOpts::CLAMP,
        );
        let description = Node::text(
            "description",
            "Your skills are now active and will appear when relevant.",
            TextStyle::mono(18.0, theme::DIM),
        )
        .opacity(details);

        let try_asking = Node::text("try", "Try asking:", TextStyle::sans(20.0, 400, theme::TEXT));
        let mut examples = vec![try_asking.opacity(details)];
        for (i, prompt) in EXAMPLE_PROMPTS.iter().enumerate() {
            let delay =
                START_DELAY_FRAMES + ctx.secs(PROMPTS_SECS) + i as f64 * ctx.secs(STAGGER_SECS);
            let p = ctx.spring(delay, SpringConfig::new(20.0, 150.0));
            let key = format!("prompt.{i}");
            let style = TextStyle::mono(16.0, theme::TEXT);
            examples.push(
                Node::group(key.clone(), Direction::Row, 12.0)
                    .child(Node::text(format!("{key}.arrow"), "→", style.color(theme::CYAN)))
                    .child(Node::text(format!("{key}.text"), *prompt, style))
                    .opacity(interpolate(p, &[0.0, 1.0], &[0.0, 1.0], InterpolateOpts::CLAMP))
                    .translate(
                        interpolate(p, &[0.0, 1.0], &[20.0, 0.0], InterpolateOpts::CLAMP),
                        0.0,
                    ),
            );
        }

        vec![Node::group("success", Direction::Column, 48.0).children([
            banner,
            description,
            Node::group("examples", Direction::Column, 16.0).children(examples),
        ])]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/success.rs"]
mod tests;
