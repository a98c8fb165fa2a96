//! Scene components.
//!
//! Every scene is a pure function of its local frame: it reads a [`SceneCtx`], derives
//! per-element progress from springs and interpolation, and returns the visible node tree.

use std::fmt;

use crate::{
    animation::spring::{SpringConfig, spring},
    foundation::core::{Canvas, Fps},
    timeline::timing::SceneId,
};

pub(crate) mod leaves;
pub(crate) mod node;
pub mod theme;

mod agent_detection;
mod call_to_action;
mod category_selection;
mod installation;
mod intro;
mod stats;
mod success;
mod terminal_typing;

use node::Node;

/// Per-frame input handed to a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneCtx {
    /// Frame relative to the scene start. Never negative.
    pub frame: f64,
    /// Composition frame rate.
    pub fps: Fps,
    /// Visible length of the scene in frames.
    pub duration_frames: u64,
    /// Output canvas.
    pub canvas: Canvas,
}

impl SceneCtx {
    /// Context at local `frame` with the default canvas.
    pub fn new(frame: f64, fps: Fps, duration_frames: u64) -> Self {
        Self {
            frame: frame.max(0.0),
            fps,
            duration_frames,
            canvas: Canvas::default(),
        }
    }

    /// Replace the canvas.
    pub fn with_canvas(self, canvas: Canvas) -> Self {
        Self { canvas, ..self }
    }

    /// Frames per second as a float.
    pub fn fps_f64(&self) -> f64 {
        self.fps.as_f64()
    }

    /// `secs` expressed in (fractional) frames.
    pub fn secs(&self, secs: f64) -> f64 {
        self.fps.secs_to_frames(secs)
    }

    /// Frames elapsed since `delay`, clamped at zero.
    pub fn adjusted(&self, delay_frames: f64) -> f64 {
        (self.frame - delay_frames).max(0.0)
    }

    /// Spring progress triggered `delay_frames` into the scene.
    pub fn spring(&self, delay_frames: f64, config: SpringConfig) -> f64 {
        spring(self.adjusted(delay_frames), self.fps, config)
    }

    /// Scene length in frames as a float.
    pub fn duration(&self) -> f64 {
        self.duration_frames as f64
    }
}

/// A renderer for one scheduled scene.
pub trait Scene: fmt::Debug {
    /// Which scene this renders.
    fn id(&self) -> SceneId;

    /// Visible nodes at `ctx.frame`.
    fn render(&self, ctx: &SceneCtx) -> Vec<Node>;
}

/// Renderer for `id`.
pub fn build_scene(id: SceneId) -> Box<dyn Scene> {
    match id {
        SceneId::Intro => Box::new(intro::Intro),
        SceneId::Stats => Box::new(stats::Stats),
        SceneId::TerminalTyping => Box::new(terminal_typing::TerminalTyping),
        SceneId::AgentDetection => Box::new(agent_detection::AgentDetection),
        SceneId::CategorySelection => Box::new(category_selection::CategorySelection),
        SceneId::Installation => Box::new(installation::Installation),
        SceneId::Success => Box::new(success::Success),
        SceneId::CallToAction => Box::new(call_to_action::CallToAction),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scenes/mod.rs"]
mod tests;
