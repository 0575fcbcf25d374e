//! Event vocabulary — everything the engine reports to its observers.
//!
//! Events are returned from engine operations rather than pushed; the
//! caller (runner, UI bridge, tests) decides what to do with them.
//! Variants are added over time, never removed or reordered.

use crate::action::Verb;
use crate::clock::GameSpeed;
use crate::state::Room;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    /// One clock tick ran: time advanced and passive drift was applied.
    TickCompleted {
        day: u32,
        hour: u8,
        minute: u8,
    },
    ActionPerformed {
        verb: Verb,
        target: String,
        /// False when the dedupe key was already in `completed_actions`.
        first_time: bool,
        score_awarded: u64,
    },
    AchievementUnlocked {
        title: String,
    },
    /// The transient activity window expired and the character returned
    /// to idle.
    ActivityIdle,
    RoomChanged {
        room: Room,
    },
    SpeedChanged {
        speed: GameSpeed,
    },
    PlaybackToggled {
        playing: bool,
    },
    GameReset,
    GameSaved {
        slot: String,
    },
}
