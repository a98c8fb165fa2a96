use std::fmt;

use crate::foundation::error::{PromoError, PromoResult};

/// Identifies one of the promo's scenes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SceneId {
    /// Orchestra logo intro.
    Intro,
    /// Skill/category/agent counters.
    Stats,
    /// Terminal with the install command being typed.
    TerminalTyping,
    /// Installer detecting coding agents.
    AgentDetection,
    /// Installer category picker.
    CategorySelection,
    /// Installer progress bar.
    Installation,
    /// Installation summary and example prompts.
    Success,
    /// Closing call-to-action.
    CallToAction,
}

impl SceneId {
    /// Every scene in playback order.
    pub const ALL: [SceneId; 8] = [
        SceneId::Intro,
        SceneId::Stats,
        SceneId::TerminalTyping,
        SceneId::AgentDetection,
        SceneId::CategorySelection,
        SceneId::Installation,
        SceneId::Success,
        SceneId::CallToAction,
    ];

    /// Stable snake_case name, as used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Stats => "stats",
            Self::TerminalTyping => "terminal_typing",
            Self::AgentDetection => "agent_detection",
            Self::CategorySelection => "category_selection",
            Self::Installation => "installation",
            Self::Success => "success",
            Self::CallToAction => "call_to_action",
        }
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement of a scene on the timeline, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneTiming {
    /// Offset from the start of the video.
    pub start: f64,
    /// Length of the scene.
    pub duration: f64,
}

impl SceneTiming {
    /// Timing from start and duration in seconds.
    pub const fn new(start: f64, duration: f64) -> Self {
        Self { start, duration }
    }

    /// End of the scene in seconds.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// One row of a [`SceneTable`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneEntry {
    /// Which scene.
    pub scene: SceneId,
    /// Offset from the start of the video, in seconds.
    pub start: f64,
    /// Length of the scene, in seconds.
    pub duration: f64,
}

impl SceneEntry {
    /// Row placing `scene` at `start` for `duration` seconds.
    pub const fn new(scene: SceneId, start: f64, duration: f64) -> Self {
        Self {
            scene,
            start,
            duration,
        }
    }

    /// Where the row sits on the timeline.
    pub fn timing(&self) -> SceneTiming {
        SceneTiming::new(self.start, self.duration)
    }
}

/// Ordered scene timing table. Order is paint order: later entries draw on top.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SceneTable {
    entries: Vec<SceneEntry>,
}

impl Default for SceneTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SceneTable {
    /// Build a validated table.
    pub fn new(entries: Vec<SceneEntry>) -> PromoResult<Self> {
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    /// The promo's own schedule: 30 seconds, eight scenes back to back.
    pub fn builtin() -> Self {
        const BUILTIN: [(SceneId, f64, f64); 8] = [
            (SceneId::Intro, 0.0, 4.0),
            (SceneId::Stats, 4.0, 2.0),
            (SceneId::TerminalTyping, 6.0, 2.5),
            (SceneId::AgentDetection, 8.5, 4.0),
            (SceneId::CategorySelection, 12.5, 4.0),
            (SceneId::Installation, 16.5, 5.0),
            (SceneId::Success, 21.5, 4.0),
            (SceneId::CallToAction, 25.5, 4.5),
        ];

        Self {
            entries: BUILTIN
                .iter()
                .map(|&(scene, start, duration)| SceneEntry::new(scene, start, duration))
                .collect(),
        }
    }

    /// Reject empty tables, duplicate scenes and negative or non-finite timings.
    pub fn validate(&self) -> PromoResult<()> {
        if self.entries.is_empty() {
            return Err(PromoError::validation("scene table must not be empty"));
        }

        let mut seen = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let SceneEntry { start, duration, .. } = *entry;
            if !(start.is_finite() && duration.is_finite()) {
                return Err(PromoError::validation(format!(
                    "scene '{}' timing must be finite",
                    entry.scene
                )));
            }
            if start < 0.0 || duration < 0.0 {
                return Err(PromoError::validation(format!(
                    "scene '{}' start and duration must be >= 0 (got start={start}, duration={duration})",
                    entry.scene
                )));
            }
            if seen.contains(&entry.scene) {
                return Err(PromoError::validation(format!(
                    "scene '{}' appears more than once",
                    entry.scene
                )));
            }
            seen.push(entry.scene);
        }
        Ok(())
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[SceneEntry] {
        &self.entries
    }

    /// Timing of `scene`, if scheduled.
    pub fn get(&self, scene: SceneId) -> Option<SceneTiming> {
        self.entries
            .iter()
            .find(|e| e.scene == scene)
            .map(SceneEntry::timing)
    }

    /// Latest scene end in seconds.
    pub fn end_secs(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.timing().end())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/timing.rs"]
mod tests;
