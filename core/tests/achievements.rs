//! Achievement unlock tests — first action, exercise streak, and
//! append-once semantics.

use dreamstory_core::{
    achievement::{FIRST_ACTION, NOVICE_ATHLETE},
    action::Verb,
    engine::SimEngine,
};
use std::time::Instant;

fn now() -> Instant {
    Instant::now()
}

#[test]
fn first_ever_action_unlocks_once() {
    let mut engine = SimEngine::new();
    engine.perform_action(Verb::Eat, "fridge", now());
    assert_eq!(engine.state().achievements, vec![FIRST_ACTION]);

    // Repeats and new actions never grant it again.
    engine.perform_action(Verb::Eat, "fridge", now());
    engine.perform_action(Verb::Shower, "shower", now());
    assert_eq!(
        engine
            .state()
            .achievements
            .iter()
            .filter(|t| t.as_str() == FIRST_ACTION)
            .count(),
        1
    );
}

#[test]
fn third_distinct_exercise_unlocks_novice_athlete() {
    let mut engine = SimEngine::new();
    engine.perform_action(Verb::Exercise, "mat", now());
    engine.perform_action(Verb::Exercise, "treadmill", now());
    assert!(!engine.state().achievements.iter().any(|t| t == NOVICE_ATHLETE));

    engine.perform_action(Verb::Exercise, "bike", now());
    assert!(engine.state().achievements.iter().any(|t| t == NOVICE_ATHLETE));

    // A fourth exercise does not duplicate it.
    engine.perform_action(Verb::Exercise, "weights", now());
    assert_eq!(
        engine
            .state()
            .achievements
            .iter()
            .filter(|t| t.as_str() == NOVICE_ATHLETE)
            .count(),
        1
    );
}

#[test]
fn repeated_exercise_target_does_not_advance_the_streak() {
    let mut engine = SimEngine::new();
    engine.perform_action(Verb::Exercise, "mat", now());
    engine.perform_action(Verb::Exercise, "mat", now());
    engine.perform_action(Verb::Exercise, "mat", now());
    // Still only one distinct completion, so no athlete unlock.
    assert!(!engine.state().achievements.iter().any(|t| t == NOVICE_ATHLETE));
}

#[test]
fn any_new_action_after_two_exercises_triggers_the_unlock() {
    // The rule counts prior exercise completions; the triggering action
    // itself does not have to be an exercise.
    let mut engine = SimEngine::new();
    engine.perform_action(Verb::Exercise, "mat", now());
    engine.perform_action(Verb::Exercise, "treadmill", now());
    engine.perform_action(Verb::Eat, "fridge", now());
    assert!(engine.state().achievements.iter().any(|t| t == NOVICE_ATHLETE));
}

#[test]
fn unlock_order_is_insertion_order() {
    let mut engine = SimEngine::new();
    engine.perform_action(Verb::Exercise, "mat", now());
    engine.perform_action(Verb::Exercise, "treadmill", now());
    engine.perform_action(Verb::Exercise, "bike", now());
    assert_eq!(
        engine.state().achievements,
        vec![FIRST_ACTION, NOVICE_ATHLETE]
    );
}
