use crate::{
    animation::interpolate::{InterpolateOpts, interpolate},
    config::promo::PromoConfig,
    foundation::color::Rgba8,
    foundation::core::{Canvas, Fps, FrameIndex, FrameRange},
    foundation::error::{PromoError, PromoResult},
    scenes::node::Node,
    scenes::theme,
    scenes::{Scene, SceneCtx, build_scene},
    timeline::schedule::{MountState, Schedule, SceneWindow},
    timeline::timing::SceneId,
};

/// Validated promo ready for evaluation: config, frame schedule and one renderer per window.
#[derive(Debug)]
pub struct Promo {
    config: PromoConfig,
    schedule: Schedule,
    scenes: Vec<Box<dyn Scene>>,
    duration: FrameIndex,
}

impl Promo {
    /// Validate `config` and instantiate every scheduled scene.
    pub fn new(config: PromoConfig) -> PromoResult<Self> {
        config.validate()?;
        let schedule = config.schedule();
        let scenes = schedule
            .windows()
            .iter()
            .map(|w| build_scene(w.scene))
            .collect();
        let duration = config.duration();
        tracing::debug!(frames = duration.0, "promo ready");
        Ok(Self {
            config,
            schedule,
            scenes,
            duration,
        })
    }

    /// The built-in 30-second promo.
    pub fn builtin() -> PromoResult<Self> {
        Self::new(PromoConfig::default())
    }

    /// Source configuration.
    pub fn config(&self) -> &PromoConfig {
        &self.config
    }

    /// Frame schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Total length; valid frames are `[0, duration)`.
    pub fn duration(&self) -> FrameIndex {
        self.duration
    }

    /// Every valid frame.
    pub fn frames(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: self.duration,
        }
    }

    /// Output frame rate.
    pub fn fps(&self) -> Fps {
        self.config.fps
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        self.config.canvas
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything visible at one global frame.
pub struct EvaluatedFrame {
    /// Evaluated frame index.
    pub frame: FrameIndex,
    /// Presentation time of the frame.
    pub time_secs: f64,
    /// Full-canvas backdrop.
    pub background: Background,
    /// Mounted scenes in paint order.
    pub scenes: Vec<EvaluatedScene>,
}

impl EvaluatedFrame {
    /// Scenes that are actually visible, skipping pre-mounted ones.
    pub fn active(&self) -> impl Iterator<Item = &EvaluatedScene> {
        self.scenes
            .iter()
            .filter(|s| s.state == MountState::Active)
    }

    /// Evaluated scene for `id`, if mounted.
    pub fn scene(&self, id: SceneId) -> Option<&EvaluatedScene> {
        self.scenes.iter().find(|s| s.scene == id)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One mounted scene at one frame.
pub struct EvaluatedScene {
    /// Which scene.
    pub scene: SceneId,
    /// Visible or only pre-mounted.
    pub state: MountState,
    /// Frame relative to the scene start; negative while pre-mounted.
    pub local_frame: i64,
    /// Scene output. Pre-mounted scenes hold their first frame.
    pub nodes: Vec<Node>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Slowly drifting gradient behind every scene.
pub struct Background {
    /// Hue rotation applied to the gradient, one full turn over the promo.
    pub hue_shift_deg: f64,
    /// Vertical gradient stops, top to bottom.
    pub gradient: [Rgba8; 3],
    /// Radial glow at the top center.
    pub top_glow: Rgba8,
    /// Radial glow at the bottom right.
    pub corner_glow: Rgba8,
}

impl Background {
    fn at(frame: FrameIndex, duration: FrameIndex) -> Self {
        Self {
            hue_shift_deg: interpolate(
                frame.0 as f64,
                &[0.0, duration.0 as f64],
                &[0.0, 360.0],
                InterpolateOpts::EXTEND,
            ),
            gradient: [theme::BG_DEEP, theme::BG_PANEL, theme::BG_DEEP],
            top_glow: theme::CYAN.with_alpha(0.1),
            corner_glow: theme::GREEN.with_alpha(0.05),
        }
    }
}

/// Stateless evaluator from the promo timeline to per-frame node graphs.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(promo))]
    /// Evaluate one frame.
    pub fn eval_frame(promo: &Promo, frame: FrameIndex) -> PromoResult<EvaluatedFrame> {
        if frame.0 >= promo.duration.0 {
            return Err(PromoError::evaluation("frame is out of bounds"));
        }

        let scenes = promo
            .schedule
            .windows()
            .iter()
            .zip(&promo.scenes)
            .filter_map(|(window, scene)| {
                let state = window.mount_state(frame)?;
                Some(eval_scene(promo, window, scene.as_ref(), frame, state))
            })
            .collect::<Vec<_>>();
        tracing::trace!(mounted = scenes.len(), "evaluated frame");

        Ok(EvaluatedFrame {
            frame,
            time_secs: promo.fps().frames_to_secs(frame.0),
            background: Background::at(frame, promo.duration),
            scenes,
        })
    }

    #[tracing::instrument(skip(promo))]
    /// Evaluate every frame of `range`, in order.
    pub fn eval_range(promo: &Promo, range: FrameRange) -> PromoResult<Vec<EvaluatedFrame>> {
        if range.end.0 > promo.duration.0 {
            return Err(PromoError::evaluation("frame range extends past the end"));
        }
        range.frames().map(|f| Self::eval_frame(promo, f)).collect()
    }
}

fn eval_scene(
    promo: &Promo,
    window: &SceneWindow,
    scene: &dyn Scene,
    frame: FrameIndex,
    state: MountState,
) -> EvaluatedScene {
    let local_frame = window.local_frame(frame);
    let ctx = SceneCtx::new(local_frame.max(0) as f64, promo.fps(), window.duration_frames())
        .with_canvas(promo.canvas());
    EvaluatedScene {
        scene: window.scene,
        state,
        local_frame,
        nodes: scene.render(&ctx),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
