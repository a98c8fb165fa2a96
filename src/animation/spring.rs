//! Damped-spring progress curves.
//!
//! The spring is simulated from rest at 0 toward 1, one step per frame, using the closed-form
//! solution of a damped harmonic oscillator for each step. Because every step restarts the
//! closed form from the current position/velocity, the result only depends on
//! `(frame, fps, config)` and can be recomputed for any frame in any order.

use crate::{
    animation::interpolate::{InterpolateOpts, interpolate},
    foundation::core::Fps,
    foundation::error::{PromoError, PromoResult},
};

/// Longest simulated step, in milliseconds. Low frame rates are sub-stepped by this cap.
const MAX_STEP_MS: f64 = 64.0;

/// Frames a spring must stay inside the threshold before it counts as settled.
const SETTLE_WINDOW_FRAMES: u64 = 20;

/// Default threshold used to measure a spring's natural duration.
pub const DEFAULT_SETTLE_THRESHOLD: f64 = 0.005;

/// Physical parameters of a spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Mass of the simulated body.
    pub mass: f64,
    /// Damping coefficient.
    pub damping: f64,
    /// Spring stiffness.
    pub stiffness: f64,
    /// Never let the value pass the target.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            damping: 10.0,
            stiffness: 100.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Config with the given damping and stiffness, unit mass.
    pub fn new(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            ..Self::default()
        }
    }

    /// Default config with damping replaced.
    pub fn with_damping(damping: f64) -> Self {
        Self {
            damping,
            ..Self::default()
        }
    }

    /// Same config with overshoot clamping toggled.
    pub fn overshoot_clamping(self, on: bool) -> Self {
        Self {
            overshoot_clamping: on,
            ..self
        }
    }

    /// Check that the physical parameters describe a real spring.
    ///
    /// Mass and stiffness must be finite and positive. Damping must be finite and
    /// non-negative.
    pub fn validate(&self) -> PromoResult<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(PromoError::animation(format!(
                "spring mass must be finite and > 0, got {}",
                self.mass
            )));
        }
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(PromoError::animation(format!(
                "spring stiffness must be finite and > 0, got {}",
                self.stiffness
            )));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(PromoError::animation(format!(
                "spring damping must be finite and >= 0, got {}",
                self.damping
            )));
        }
        Ok(())
    }

    /// Damping ratio ζ. Below 1 the spring oscillates around its target.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// True when the spring overshoots and oscillates.
    pub fn is_underdamped(&self) -> bool {
        self.damping_ratio() < 1.0
    }
}

#[derive(Clone, Copy, Debug)]
struct SpringState {
    current: f64,
    velocity: f64,
    last_ms: f64,
}

impl SpringState {
    const REST: Self = Self {
        current: 0.0,
        velocity: 0.0,
        last_ms: 0.0,
    };

    fn advance(self, now_ms: f64, config: &SpringConfig) -> Self {
        let mut state = self;
        // Sub-step so no single step exceeds the cap.
        while now_ms - state.last_ms > MAX_STEP_MS {
            let next = state.last_ms + MAX_STEP_MS;
            state = state.step(next, config);
        }
        state.step(now_ms, config)
    }

    fn step(self, now_ms: f64, config: &SpringConfig) -> Self {
        let dt = (now_ms - self.last_ms).max(0.0) / 1000.0;

        let k = config.stiffness.max(0.0);
        let m = config.mass.max(1e-9);
        let c = config.damping.max(0.0);

        let to = 1.0;
        let v0 = -self.velocity;
        let x0 = to - self.current;

        let omega0 = (k / m).sqrt();
        let zeta = c / (2.0 * (k * m).sqrt()).max(1e-9);

        let (current, velocity) = if zeta < 1.0 {
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * dt).exp();
            let (sin1, cos1) = (omega1 * dt).sin_cos();
            let frag = envelope * (sin1 * ((v0 + zeta * omega0 * x0) / omega1) + x0 * cos1);
            let position = to - frag;
            let velocity = zeta * omega0 * frag
                - envelope * (cos1 * (v0 + zeta * omega0 * x0) - omega1 * x0 * sin1);
            (position, velocity)
        } else {
            let envelope = (-omega0 * dt).exp();
            let position = to - envelope * (x0 + (v0 + omega0 * x0) * dt);
            let velocity = envelope * (v0 * (dt * omega0 - 1.0) + dt * x0 * omega0 * omega0);
            (position, velocity)
        };

        Self {
            current,
            velocity,
            last_ms: now_ms,
        }
    }
}

/// Raw 0→1 simulation at a possibly fractional `frame`. Frames `<= 0` are at rest.
fn simulate(frame: f64, fps: Fps, config: &SpringConfig) -> SpringState {
    let frame = if frame.is_finite() { frame.max(0.0) } else { 0.0 };
    let whole = frame.floor() as u64;
    let rest = frame - frame.floor();
    let ms_per_frame = 1000.0 / fps.as_f64();

    let mut state = SpringState::REST;
    for f in 0..=whole {
        let t = if f == whole {
            f as f64 + rest
        } else {
            f as f64
        };
        state = state.advance(t * ms_per_frame, config);
    }
    state
}

fn clamp_overshoot(value: f64, config: &SpringConfig) -> f64 {
    if config.overshoot_clamping {
        value.min(1.0)
    } else {
        value
    }
}

/// Spring progress from 0 toward 1 at `frame` frames after the trigger.
///
/// Returns exactly 0 for `frame <= 0`. Underdamped configs overshoot 1 before settling unless
/// `overshoot_clamping` is set.
pub fn spring(frame: f64, fps: Fps, config: SpringConfig) -> f64 {
    clamp_overshoot(simulate(frame, fps, &config).current, &config)
}

/// Number of frames until the spring stays within `threshold` of its target.
///
/// The returned frame is followed by at least 20 frames that never leave the threshold.
/// Springs that do not settle within ten minutes of frames are rejected.
pub fn measure_spring(fps: Fps, config: SpringConfig, threshold: f64) -> PromoResult<u64> {
    if !(threshold.is_finite() && threshold > 0.0) {
        return Err(PromoError::animation("spring threshold must be > 0"));
    }
    config.validate()?;
    let limit = fps.secs_to_frames_round(600.0);
    let ms_per_frame = 1000.0 / fps.as_f64();

    let mut state = SpringState::REST.advance(0.0, &config);
    let mut frame = 0u64;
    let mut settled_at = 0u64;
    let mut quiet = 0u64;

    loop {
        let diff = (1.0 - clamp_overshoot(state.current, &config)).abs();
        if diff >= threshold {
            settled_at = frame + 1;
            quiet = 0;
        } else {
            quiet += 1;
            if quiet > SETTLE_WINDOW_FRAMES {
                return Ok(settled_at);
            }
        }

        frame += 1;
        if frame > limit {
            return Err(PromoError::animation(format!(
                "spring (damping {}, stiffness {}, mass {}) does not settle within {limit} frames",
                config.damping, config.stiffness, config.mass
            )));
        }
        state = state.advance(frame as f64 * ms_per_frame, &config);
    }
}

/// A spring with remapped range, start delay and optional stretched duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    /// Physical parameters.
    pub config: SpringConfig,
    /// Value at rest before the trigger.
    pub from: f64,
    /// Value the spring settles on.
    pub to: f64,
    /// Frames to wait before the spring starts.
    pub delay_frames: f64,
    /// Stretch the natural settle time to this many frames.
    pub duration_frames: Option<f64>,
}

impl Spring {
    /// A 0→1 spring with no delay.
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            from: 0.0,
            to: 1.0,
            delay_frames: 0.0,
            duration_frames: None,
        }
    }

    /// Remap the output range.
    pub fn range(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Start the spring `frames` later.
    pub fn delay(mut self, frames: f64) -> Self {
        self.delay_frames = frames;
        self
    }

    /// Stretch or squash the spring so it settles after `frames`.
    pub fn duration(mut self, frames: f64) -> Self {
        self.duration_frames = Some(frames);
        self
    }

    /// Sample the spring at a local `frame`.
    pub fn sample(&self, frame: f64, fps: Fps) -> PromoResult<f64> {
        self.config.validate()?;
        let mut local = frame - self.delay_frames;
        if let Some(duration) = self.duration_frames {
            if !(duration.is_finite() && duration > 0.0) {
                return Err(PromoError::animation("spring duration must be > 0 frames"));
            }
            let natural = measure_spring(fps, self.config, DEFAULT_SETTLE_THRESHOLD)?;
            if natural > 0 {
                local *= natural as f64 / duration;
            }
        }

        let progress = spring(local, fps, self.config);
        if self.from == 0.0 && self.to == 1.0 {
            return Ok(progress);
        }
        Ok(interpolate(
            progress,
            &[0.0, 1.0],
            &[self.from, self.to],
            InterpolateOpts::EXTEND,
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
