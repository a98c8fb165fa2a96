//! skills-promo describes the AI Research Skills promo video as data.
//!
//! The video is eight timed scenes: a logo intro, stat counters, a simulated installer
//! session in a terminal, and a closing call-to-action. Every visual property is a pure
//! function of the frame number, built from two primitives: piecewise-linear
//! [`interpolate`] and the damped [`spring`].
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`PromoConfig`] holds frame rate, canvas and the [`SceneTable`].
//! 2. **Schedule**: the table becomes frame [`SceneWindow`]s with a pre-mount buffer.
//! 3. **Evaluate**: `Promo + FrameIndex -> EvaluatedFrame`, one [`Node`] tree per mounted scene.
//!
//! Rasterizing and encoding the node trees is left to the host.
//!
//! # Example
//!
//! ```
//! use skills_promo::{Evaluator, FrameIndex, Promo, SceneId};
//!
//! let promo = Promo::builtin()?;
//! let frame = Evaluator::eval_frame(&promo, FrameIndex(190))?;
//! let typing = frame.scene(SceneId::TerminalTyping).expect("mounted");
//! assert_eq!(typing.nodes[0].collect_text(), "$ npx @orc");
//! # Ok::<(), skills_promo::PromoError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod eval;
mod foundation;
mod scenes;
mod timeline;

pub use animation::ease::Ease;
pub use animation::interpolate::{
    Extrapolate, InterpolateOpts, interpolate, interpolate_color, try_interpolate,
    validate_breakpoints,
};
pub use animation::spring::{
    DEFAULT_SETTLE_THRESHOLD, Spring, SpringConfig, measure_spring, spring,
};
pub use animation::typewriter::Typewriter;
pub use config::promo::PromoConfig;
pub use eval::evaluator::{Background, EvaluatedFrame, EvaluatedScene, Evaluator, Promo};
pub use foundation::color::Rgba8;
pub use foundation::core::{Affine, Canvas, Fps, FrameIndex, FrameRange, Transform2D, Vec2};
pub use foundation::error::{PromoError, PromoResult};
pub use scenes::node::{Content, Direction, Font, Node, TextStyle};
pub use scenes::theme;
pub use scenes::{Scene, SceneCtx, build_scene};
pub use timeline::schedule::{MountState, SceneWindow, Schedule};
pub use timeline::timing::{SceneEntry, SceneId, SceneTable, SceneTiming};
