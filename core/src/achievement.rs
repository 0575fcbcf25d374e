//! Achievement rules, evaluated only when an action's dedupe key is new.

use std::collections::BTreeSet;

/// Unlocked by the very first completed action of a session.
pub const FIRST_ACTION: &str = "Primeira Ação";

/// Unlocked by the newly-seen action that follows exactly two distinct
/// prior `exercise-*` completions.
pub const NOVICE_ATHLETE: &str = "Atleta Iniciante";

const EXERCISE_PREFIX: &str = "exercise-";

/// Titles unlocked by a newly-seen action, given the completion set as it
/// stood BEFORE the current action's key is added. Deduplication against
/// already-unlocked titles is the caller's job (unlocks are append-once).
pub fn unlocks(prior_completed: &BTreeSet<String>) -> Vec<&'static str> {
    let mut titles = Vec::new();

    if prior_completed.is_empty() {
        titles.push(FIRST_ACTION);
    }

    let prior_exercise = prior_completed
        .iter()
        .filter(|key| key.starts_with(EXERCISE_PREFIX))
        .count();
    if prior_exercise == 2 {
        titles.push(NOVICE_ATHLETE);
    }

    titles
}
