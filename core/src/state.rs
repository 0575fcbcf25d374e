//! Game state — the single snapshot owned by the engine.
//!
//! RULES:
//!   - All mutation goes through the engine; renderers hold `&GameState`.
//!   - Every meter write passes through [`clamp_add`].
//!   - Rooms, moods, and activities are closed enums. An invalid value
//!     is a compile error, not a silent no-op.

use crate::clock::GameClock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The Stat Model in one function: merge a signed delta into a meter,
/// saturating at the [0, 100] bounds. Deltas never interact across meters.
pub fn clamp_add(value: f64, delta: f64) -> f64 {
    (value + delta).clamp(0.0, 100.0)
}

/// The four well-being meters, each held in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meters {
    pub energy: f64,
    pub social: f64,
    pub health: f64,
    pub productivity: f64,
}

impl Default for Meters {
    fn default() -> Self {
        Self {
            energy: 80.0,
            social: 70.0,
            health: 85.0,
            productivity: 75.0,
        }
    }
}

impl Meters {
    /// Apply a delta set, clamping each meter independently.
    pub fn apply(&mut self, deltas: &MeterDeltas) {
        self.energy = clamp_add(self.energy, deltas.energy);
        self.social = clamp_add(self.social, deltas.social);
        self.health = clamp_add(self.health, deltas.health);
        self.productivity = clamp_add(self.productivity, deltas.productivity);
    }

    pub fn all_in_bounds(&self) -> bool {
        [self.energy, self.social, self.health, self.productivity]
            .iter()
            .all(|m| (0.0..=100.0).contains(m))
    }
}

/// Signed per-meter deltas from one event (a passive tick or an action).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeterDeltas {
    pub energy: f64,
    pub social: f64,
    pub health: f64,
    pub productivity: f64,
}

/// The five rooms, in their fixed cyclic navigation order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Room {
    Bedroom,
    Living,
    Kitchen,
    Gym,
    Bathroom,
}

impl Room {
    pub const ALL: [Room; 5] = [
        Room::Bedroom,
        Room::Living,
        Room::Kitchen,
        Room::Gym,
        Room::Bathroom,
    ];

    fn index(self) -> usize {
        Room::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    /// Next room in navigation order, wrapping from the last to the first.
    pub fn next(self) -> Room {
        Room::ALL[(self.index() + 1) % Room::ALL.len()]
    }

    /// Previous room in navigation order, wrapping from the first to the last.
    pub fn previous(self) -> Room {
        Room::ALL[(self.index() + Room::ALL.len() - 1) % Room::ALL.len()]
    }

    /// Display label as the UI shows it.
    pub fn label(self) -> &'static str {
        match self {
            Room::Bedroom => "Quarto",
            Room::Living => "Sala",
            Room::Kitchen => "Cozinha",
            Room::Gym => "Academia",
            Room::Bathroom => "Banheiro",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Tired,
    Energetic,
    Relaxed,
    Stressed,
}

/// What the character is visibly doing. Action verbs map onto these;
/// the engine schedules a return to `Idle` after the transient window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Activity {
    Idle,
    Sleep,
    Eat,
    Exercise,
    Relax,
    DrinkWater,
    Shower,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Character {
    pub name: String,
    pub mood: Mood,
    pub activity: Activity,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            name: "Alex".to_string(),
            mood: Mood::Happy,
            activity: Activity::Idle,
        }
    }
}

/// The full simulation snapshot. Serializable as-is for save slots.
///
/// Note: there is no schema-version field yet; adding one is the known
/// migration gap for future field additions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub clock: GameClock,
    pub meters: Meters,
    pub current_room: Room,
    /// Dedupe keys `"<verb>-<target>"`, one per distinct completed action.
    pub completed_actions: BTreeSet<String>,
    pub character: Character,
    /// Unlock titles in unlock order. Append-only, no duplicates.
    pub achievements: Vec<String>,
    pub total_score: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            clock: GameClock::default(),
            meters: Meters::default(),
            current_room: Room::Bedroom,
            completed_actions: BTreeSet::new(),
            character: Character::default(),
            achievements: Vec::new(),
            total_score: 0,
        }
    }
}
