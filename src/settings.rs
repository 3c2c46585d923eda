//! Audio/Display Settings Snapshot
//!
//! In-memory only; the Non-goals exclude persistence. "Apply" is a
//! boundary call: the snapshot is serialized and logged in place of a
//! real audio/display backend.

use serde::Serialize;

/// The mutable settings the options screen edits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    /// Volumes are normalized to [0, 1].
    pub master_volume: f32,
    pub sfx_volume: f32,
    pub music_volume: f32,
    pub fullscreen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            master_volume: 0.7,
            sfx_volume: 0.8,
            music_volume: 0.6,
            fullscreen: false,
        }
    }
}

impl Settings {
    /// Commits the snapshot to the (stubbed) audio/display boundary.
    ///
    /// A real backend would set mixer volumes and toggle the window mode
    /// here; this build logs the committed values instead.
    pub fn apply(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => println!("Settings applied: {}", json),
            Err(e) => eprintln!("Failed to serialize settings: {}", e),
        }
    }
}
