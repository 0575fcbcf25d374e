//! Action vocabulary — verbs, their fixed effect table, and dedupe keys.
//!
//! Verbs are a closed enum: an unknown verb cannot reach the resolver.
//! String parsing (for the runner's command loop and for dedupe keys)
//! uses the camelCase wire names the UI sends, e.g. `drinkWater`.

use crate::state::{Activity, MeterDeltas, Mood};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Score awarded by any verb without a per-verb override.
pub const DEFAULT_SCORE: u64 = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Verb {
    Sleep,
    Eat,
    Exercise,
    Relax,
    DrinkWater,
    Shower,
}

/// Everything one verb does: meter deltas, mood and activity transitions,
/// and the score increment. `mood: None` leaves the current mood alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionEffect {
    pub deltas: MeterDeltas,
    pub mood: Option<Mood>,
    pub activity: Activity,
    pub score: u64,
}

impl Verb {
    /// The fixed verb effect table. Unlisted deltas are zero.
    pub fn effect(self) -> ActionEffect {
        match self {
            Verb::Sleep => ActionEffect {
                deltas: MeterDeltas {
                    energy: 30.0,
                    health: 10.0,
                    productivity: 25.0,
                    ..MeterDeltas::default()
                },
                mood: Some(Mood::Relaxed),
                activity: Activity::Sleep,
                score: 20,
            },
            Verb::Eat => ActionEffect {
                deltas: MeterDeltas {
                    energy: 15.0,
                    social: 5.0,
                    productivity: 10.0,
                    ..MeterDeltas::default()
                },
                mood: Some(Mood::Happy),
                activity: Activity::Eat,
                score: DEFAULT_SCORE,
            },
            Verb::Exercise => ActionEffect {
                deltas: MeterDeltas {
                    energy: -10.0,
                    social: 10.0,
                    health: 20.0,
                    productivity: 15.0,
                },
                mood: Some(Mood::Energetic),
                activity: Activity::Exercise,
                score: 25,
            },
            Verb::Relax => ActionEffect {
                deltas: MeterDeltas {
                    social: 15.0,
                    productivity: -5.0,
                    ..MeterDeltas::default()
                },
                mood: Some(Mood::Relaxed),
                activity: Activity::Relax,
                score: DEFAULT_SCORE,
            },
            Verb::DrinkWater => ActionEffect {
                deltas: MeterDeltas {
                    energy: 5.0,
                    health: 5.0,
                    productivity: 5.0,
                    ..MeterDeltas::default()
                },
                mood: None,
                activity: Activity::DrinkWater,
                score: DEFAULT_SCORE,
            },
            Verb::Shower => ActionEffect {
                deltas: MeterDeltas {
                    social: 15.0,
                    health: 5.0,
                    productivity: 10.0,
                    ..MeterDeltas::default()
                },
                mood: Some(Mood::Happy),
                activity: Activity::Shower,
                score: DEFAULT_SCORE,
            },
        }
    }

    /// Wire name, identical to the serde form.
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Sleep => "sleep",
            Verb::Eat => "eat",
            Verb::Exercise => "exercise",
            Verb::Relax => "relax",
            Verb::DrinkWater => "drinkWater",
            Verb::Shower => "shower",
        }
    }

    /// Dedupe key for this verb against a target object,
    /// e.g. `eat-fridge`.
    pub fn completion_key(self, target: &str) -> String {
        format!("{}-{}", self.as_str(), target)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = UnknownVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sleep" => Ok(Verb::Sleep),
            "eat" => Ok(Verb::Eat),
            "exercise" => Ok(Verb::Exercise),
            "relax" => Ok(Verb::Relax),
            "drinkWater" => Ok(Verb::DrinkWater),
            "shower" => Ok(Verb::Shower),
            _ => Err(UnknownVerb(s.to_string())),
        }
    }
}

/// Raised only at the string boundary (runner commands); inside the
/// engine the verb enum makes this state unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVerb(pub String);

impl fmt::Display for UnknownVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown verb '{}'", self.0)
    }
}

impl std::error::Error for UnknownVerb {}
