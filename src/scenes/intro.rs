use std::f64::consts::TAU;

use crate::{
    animation::interpolate::{InterpolateOpts, interpolate},
    animation::spring::SpringConfig,
    scenes::leaves,
    scenes::node::{Direction, Node, TextStyle},
    scenes::theme,
    scenes::{Scene, SceneCtx},
    timeline::timing::SceneId,
};

const GLOW_PERIOD_SECS: f64 = 2.0;

/// Logo mark, wordmark and subtitle springing in over a pulsing glow.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Intro;

impl Scene for Intro {
    fn id(&self) -> SceneId {
        SceneId::Intro
    }

    fn render(&self, ctx: &SceneCtx) -> Vec<Node> {
        let t = ctx.frame / ctx.fps_f64();
        let glow = interpolate(
            (TAU * t / GLOW_PERIOD_SECS).sin(),
            &[-1.0, 1.0],
            &[0.4, 0.8],
            InterpolateOpts::EXTEND,
        );

        let mark = ctx.spring(0.0, SpringConfig::new(12.0, 100.0));
        let logo = leaves::logo(glow)
            .opacity(mark)
            .scale(interpolate(mark, &[0.0, 1.0], &[0.6, 1.0], InterpolateOpts::EXTEND));

        let word = ctx.spring(ctx.secs(0.4), SpringConfig::with_damping(200.0));
        let wordmark = Node::text(
            "wordmark",
            "Orchestra Research",
            TextStyle::sans(72.0, 700, theme::TEXT),
        )
        .opacity(word)
        .translate(0.0, interpolate(word, &[0.0, 1.0], &[20.0, 0.0], InterpolateOpts::EXTEND));

        let sub = ctx.spring(ctx.secs(0.8), SpringConfig::with_damping(200.0));
        let subtitle = Node::text(
            "subtitle",
            "AI Research Skills",
            TextStyle::sans(32.0, 500, theme::PURPLE).caps(4.0),
        )
        .opacity(sub);

        vec![Node::group("intro", Direction::Column, 24.0).children([logo, wordmark, subtitle])]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/intro.rs"]
mod tests;
