use std::f64::consts::TAU;

use crate::{
    animation::ease::Ease,
    animation::interpolate::{InterpolateOpts, interpolate, interpolate_color},
    animation::spring::SpringConfig,
    scenes::leaves,
    scenes::node::{Direction, Node, TextStyle},
    scenes::theme,
    scenes::{Scene, SceneCtx},
    timeline::timing::SceneId,
};

const START_DELAY_FRAMES: f64 = 0.0;
const COMMAND_SECS: f64 = 0.4;
const URL_SECS: f64 = 0.9;
const PULSE_PERIOD_SECS: f64 = 1.5;
const FADE_OUT_SECS: f64 = 0.5;

/// Closing headline, install command and repository link, fading out at the end.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct CallToAction;

impl Scene for CallToAction {
    fn id(&self) -> SceneId {
        SceneId::CallToAction
    }

    fn render(&self, ctx: &SceneCtx) -> Vec<Node> {
        let dur = ctx.duration();
        let fade_out = interpolate(
            ctx.frame,
            &[dur - ctx.secs(FADE_OUT_SECS), dur],
            &[1.0, 0.0],
            InterpolateOpts::CLAMP,
        );

        let head = ctx.spring(START_DELAY_FRAMES, SpringConfig::new(15.0, 100.0));
        let headline = Node::text(
            "headline",
            "Give your agent research superpowers",
            TextStyle::sans(56.0, 700, theme::TEXT),
        )
        .opacity(head)
        .scale(interpolate(head, &[0.0, 1.0], &[0.9, 1.0], InterpolateOpts::EXTEND));

        let cmd = ctx.spring(
            START_DELAY_FRAMES + ctx.secs(COMMAND_SECS),
            SpringConfig::with_damping(200.0),
        );
        let pulse = 0.5 + 0.5 * (TAU * ctx.frame / ctx.secs(PULSE_PERIOD_SECS)).sin();
        let border =
            interpolate_color(pulse, &[0.0, 1.0], &[theme::CYAN, theme::GREEN], Ease::Linear);
        let command = leaves::panel("command", border)
            .child(leaves::prompt("command.line", theme::INSTALL_COMMAND, None))
            .opacity(cmd)
            .translate(0.0, interpolate(cmd, &[0.0, 1.0], &[20.0, 0.0], InterpolateOpts::EXTEND));

        let url = Node::text("url", theme::REPO_URL, TextStyle::mono(22.0, theme::DIM)).opacity(
            ctx.spring(
                START_DELAY_FRAMES + ctx.secs(URL_SECS),
                SpringConfig::with_damping(200.0),
            ),
        );

        vec![
            Node::group("call_to_action", Direction::Column, 40.0)
                .children([headline, command, url])
                .opacity(fade_out),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/call_to_action.rs"]
mod tests;
