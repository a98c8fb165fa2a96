use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    foundation::core::{Canvas, Fps, FrameIndex},
    foundation::error::{PromoError, PromoResult},
    timeline::schedule::Schedule,
    timeline::timing::SceneTable,
};

/// Top-level promo configuration.
///
/// This is the JSON-facing, human-edited description of the video: frame rate, canvas, and the
/// scene timing table. Every field is optional in JSON and defaults to the built-in promo.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromoConfig {
    /// Output frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
    /// Seconds each scene is mounted before it becomes visible.
    pub premount_secs: f64,
    /// Explicit composition length; defaults to the end of the last scene.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
    /// Scene timing table, in paint order.
    pub scenes: SceneTable,
}

impl Default for PromoConfig {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            canvas: Canvas::default(),
            premount_secs: 1.0,
            duration_secs: None,
            scenes: SceneTable::builtin(),
        }
    }
}

impl PromoConfig {
    /// Parse a config from a JSON reader. Does not validate.
    pub fn from_reader<R: std::io::Read>(r: R) -> PromoResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PromoError::serde(format!("parse promo config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk. Does not validate.
    pub fn from_path(path: impl AsRef<Path>) -> PromoResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PromoError::validation(format!("open promo config '{}': {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "loading promo config");
        Self::from_reader(BufReader::new(f))
    }

    /// Check frame rate, canvas, premount buffer, duration and scene table.
    pub fn validate(&self) -> PromoResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(PromoError::validation("canvas width/height must be > 0"));
        }
        if !(self.premount_secs.is_finite() && self.premount_secs >= 0.0) {
            return Err(PromoError::validation("premount_secs must be >= 0"));
        }
        if let Some(d) = self.duration_secs
            && !(d.is_finite() && d > 0.0)
        {
            return Err(PromoError::validation("duration_secs must be > 0"));
        }
        self.scenes.validate()?;
        if self.duration_frames() == 0 {
            return Err(PromoError::validation("composition must be at least one frame long"));
        }
        Ok(())
    }

    /// Build the frame schedule for this config.
    pub fn schedule(&self) -> Schedule {
        Schedule::new(&self.scenes, self.fps, self.premount_secs)
    }

    /// Total composition length in frames.
    pub fn duration_frames(&self) -> u64 {
        match self.duration_secs {
            Some(secs) => self.fps.secs_to_frames_round(secs),
            None => self.schedule().end().0,
        }
    }

    /// Total composition length as a frame index (exclusive).
    pub fn duration(&self) -> FrameIndex {
        FrameIndex(self.duration_frames())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/promo.rs"]
mod tests;
