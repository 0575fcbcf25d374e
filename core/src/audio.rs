//! Audio-cue collaborator — fire-and-forget, never blocks game logic.

use serde::{Deserialize, Serialize};

/// Coarse cue kinds the UI's audio layer distinguishes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AudioCue {
    /// Generic control press: play/pause, speed, save, reset.
    Button,
    /// Room navigation.
    Navigation,
    /// An action resolved successfully.
    ConsequenceSuccess,
}

/// Receives cues as side notifications. Implementations must not fail;
/// there is no return channel back into the simulation.
pub trait AudioSink: Send {
    fn cue(&mut self, cue: AudioCue);
}

/// Default sink that swallows every cue.
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn cue(&mut self, _cue: AudioCue) {}
}
