//! Activity window tests — the deferred return to idle and its
//! generation-guarded supersede semantics.

use dreamstory_core::{
    action::Verb,
    engine::{SimEngine, ACTIVITY_WINDOW},
    event::SimEvent,
    state::Activity,
};
use std::time::{Duration, Instant};

#[test]
fn activity_returns_to_idle_after_the_window() {
    let mut engine = SimEngine::new();
    let t0 = Instant::now();

    engine.perform_action(Verb::Shower, "shower", t0);
    assert_eq!(engine.state().character.activity, Activity::Shower);

    // Just before the deadline: still showering.
    assert_eq!(
        engine.expire_activity(t0 + ACTIVITY_WINDOW - Duration::from_millis(1)),
        None
    );
    assert_eq!(engine.state().character.activity, Activity::Shower);

    // At the deadline: idle.
    assert_eq!(
        engine.expire_activity(t0 + ACTIVITY_WINDOW),
        Some(SimEvent::ActivityIdle)
    );
    assert_eq!(engine.state().character.activity, Activity::Idle);
}

#[test]
fn newer_action_supersedes_a_stale_window() {
    let mut engine = SimEngine::new();
    let t0 = Instant::now();

    engine.perform_action(Verb::Shower, "shower", t0);
    // 2 s later a new action opens a fresh window.
    engine.perform_action(Verb::Eat, "fridge", t0 + Duration::from_secs(2));
    assert_eq!(engine.state().character.activity, Activity::Eat);

    // 3.5 s after the first action, its window would have expired, but
    // the newer window is still open and must win.
    assert_eq!(
        engine.expire_activity(t0 + Duration::from_millis(3500)),
        None
    );
    assert_eq!(engine.state().character.activity, Activity::Eat);

    // Once the newer window elapses, activity goes idle.
    assert_eq!(
        engine.expire_activity(t0 + Duration::from_secs(2) + ACTIVITY_WINDOW),
        Some(SimEvent::ActivityIdle)
    );
    assert_eq!(engine.state().character.activity, Activity::Idle);
}

#[test]
fn expiry_fires_at_most_once_per_window() {
    let mut engine = SimEngine::new();
    let t0 = Instant::now();

    engine.perform_action(Verb::Relax, "sofa", t0);
    let late = t0 + ACTIVITY_WINDOW + Duration::from_secs(1);
    assert_eq!(engine.expire_activity(late), Some(SimEvent::ActivityIdle));
    assert_eq!(engine.expire_activity(late), None);
}
