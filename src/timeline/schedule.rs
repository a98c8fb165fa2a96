use crate::{
    foundation::core::{Fps, FrameIndex, FrameRange},
    timeline::timing::{SceneId, SceneTable},
};

/// How a window relates to a given frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MountState {
    /// Inside the pre-mount buffer: evaluated but not shown.
    Premounted,
    /// Inside the scene's own range: visible.
    Active,
}

/// Frame-indexed placement of one scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SceneWindow {
    /// Scheduled scene.
    pub scene: SceneId,
    /// Visible frames `[start, end)`.
    pub range: FrameRange,
    /// Frames before `range.start` during which the scene is pre-mounted.
    pub premount_frames: u64,
}

impl SceneWindow {
    /// Mount state at `frame`, or `None` if the scene is not mounted.
    pub fn mount_state(&self, frame: FrameIndex) -> Option<MountState> {
        if self.range.contains(frame) {
            return Some(MountState::Active);
        }
        let premount_start = self.range.start.0.saturating_sub(self.premount_frames);
        if !self.range.is_empty() && premount_start <= frame.0 && frame.0 < self.range.start.0 {
            return Some(MountState::Premounted);
        }
        None
    }

    /// Frame relative to the window start; negative while pre-mounted.
    pub fn local_frame(&self, frame: FrameIndex) -> i64 {
        frame.0 as i64 - self.range.start.0 as i64
    }

    /// Visible length in frames.
    pub fn duration_frames(&self) -> u64 {
        self.range.len_frames()
    }
}

/// Scene windows for a timing table at a fixed frame rate.
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule {
    fps: Fps,
    windows: Vec<SceneWindow>,
}

impl Schedule {
    /// Convert every entry of `table` into a window. Seconds are rounded to whole frames.
    pub fn new(table: &SceneTable, fps: Fps, premount_secs: f64) -> Self {
        let premount_frames = fps.secs_to_frames_round(premount_secs);
        let windows = table
            .entries()
            .iter()
            .map(|entry| {
                let start = fps.secs_to_frames_round(entry.start);
                let duration = fps.secs_to_frames_round(entry.duration);
                SceneWindow {
                    scene: entry.scene,
                    range: FrameRange {
                        start: FrameIndex(start),
                        end: FrameIndex(start.saturating_add(duration)),
                    },
                    premount_frames,
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            scenes = windows.len(),
            premount_frames,
            fps = fps.as_f64(),
            "built scene schedule"
        );

        Self { fps, windows }
    }

    /// Frame rate the schedule was built for.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Windows in table (paint) order.
    pub fn windows(&self) -> &[SceneWindow] {
        &self.windows
    }

    /// Window of `scene`, if scheduled.
    pub fn window(&self, scene: SceneId) -> Option<&SceneWindow> {
        self.windows.iter().find(|w| w.scene == scene)
    }

    /// One past the last visible frame of any scene.
    pub fn end(&self) -> FrameIndex {
        FrameIndex(
            self.windows
                .iter()
                .map(|w| w.range.end.0)
                .max()
                .unwrap_or(0),
        )
    }

    /// Windows mounted at `frame`, in paint order.
    pub fn mounted_at(
        &self,
        frame: FrameIndex,
    ) -> impl Iterator<Item = (&SceneWindow, MountState)> + '_ {
        self.windows
            .iter()
            .filter_map(move |w| w.mount_state(frame).map(|state| (w, state)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/schedule.rs"]
mod tests;
