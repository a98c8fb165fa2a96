use crate::{
    animation::interpolate::{InterpolateOpts, interpolate},
    animation::typewriter::Typewriter,
    scenes::leaves,
    scenes::node::Node,
    scenes::theme,
    scenes::{Scene, SceneCtx},
    timeline::timing::SceneId,
};

const CHARS_PER_FRAME: f64 = 0.8;
const RUNNING_FADE_FRAMES: f64 = 15.0;

/// The install command typed into a shell.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct TerminalTyping;

impl Scene for TerminalTyping {
    fn id(&self) -> SceneId {
        SceneId::TerminalTyping
    }

    fn render(&self, ctx: &SceneCtx) -> Vec<Node> {
        let typer = Typewriter::new(theme::INSTALL_COMMAND, CHARS_PER_FRAME);
        let done = typer.is_complete(ctx.frame);

        let cursor = (!done).then_some((ctx.frame, ctx.fps_f64()));
        let mut body = vec![leaves::prompt("command", typer.visible(ctx.frame), cursor)];

        if done {
            let fade = interpolate(
                ctx.frame - typer.completion_frame(),
                &[0.0, RUNNING_FADE_FRAMES],
                &[0.0, 1.0],
                InterpolateOpts::CLAMP_RIGHT,
            );
            body.push(
                leaves::term_text("running", "Running installation...", theme::DIM).opacity(fade),
            );
        }

        vec![leaves::terminal("Terminal — zsh", body)]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/terminal_typing.rs"]
mod tests;
