//! The simulation engine — the heart of Dream Story.
//!
//! TICK ORDER (fixed, documented, never reordered):
//!   1. Clock advances by 15 simulated minutes (carries propagate).
//!   2. Passive drift for the NEW hour merges into the meters.
//!
//! RULES:
//!   - The engine is the only writer of [`GameState`]; renderers read
//!     through [`SimEngine::state`].
//!   - Every meter write passes through the clamp in `state.rs`.
//!   - `tick()` must never run while paused — pacing is the driver
//!     loop's job, and pausing means no tick is scheduled at all.
//!   - Real-time concerns (the tick cadence, the 3 s activity window)
//!     take `Instant` values from the caller, so tests control time.

use crate::{
    achievement,
    action::Verb,
    audio::{AudioCue, AudioSink, NullAudio},
    clock::{energy_drift, GameSpeed},
    error::SimResult,
    event::SimEvent,
    state::{Activity, GameState, MeterDeltas},
    store::SaveStore,
    types::{SessionId, Tick},
};
use std::time::{Duration, Instant};

/// How long an action's transient activity is shown before the
/// character returns to idle.
pub const ACTIVITY_WINDOW: Duration = Duration::from_millis(3000);

/// A scheduled return to idle. Only the reset matching the newest
/// generation may commit, so a stale window never stomps the activity
/// of an action performed later.
#[derive(Debug, Clone, Copy)]
struct PendingIdle {
    generation: u64,
    due: Instant,
}

pub struct SimEngine {
    pub session_id: SessionId,
    state: GameState,
    ticks_run: Tick,
    activity_generation: u64,
    pending_idle: Option<PendingIdle>,
    audio: Box<dyn AudioSink>,
}

impl SimEngine {
    /// Fresh session with the default snapshot (day 1, 07:00, paused).
    pub fn new() -> Self {
        Self::from_state(GameState::default())
    }

    /// Resume a session from a saved snapshot, e.g. one read back from
    /// [`SaveStore::load_slot`].
    pub fn from_state(state: GameState) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            state,
            ticks_run: 0,
            activity_generation: 0,
            pending_idle: None,
            audio: Box::new(NullAudio),
        }
    }

    /// Install the audio collaborator. Cues are fire-and-forget; the
    /// default sink discards them.
    pub fn set_audio_sink(&mut self, sink: Box<dyn AudioSink>) {
        self.audio = sink;
    }

    /// Read-only view for renderers.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Ticks run since this engine was constructed.
    pub fn ticks_run(&self) -> Tick {
        self.ticks_run
    }

    // ── Clock driver ───────────────────────────────────────────

    /// Advance one tick: 15 simulated minutes plus passive drift for
    /// the hour the clock lands on.
    ///
    /// Panics if called while paused — callers must check.
    pub fn tick(&mut self) -> SimEvent {
        assert!(self.state.clock.playing, "tick() called on paused engine");

        self.ticks_run += 1;
        let new_hour = self.state.clock.advance();
        self.state.meters.apply(&MeterDeltas {
            energy: energy_drift(new_hour),
            ..MeterDeltas::default()
        });

        log::debug!(
            "tick={} day={} {} energy={:.1}",
            self.ticks_run,
            self.state.clock.day,
            self.state.clock.formatted(),
            self.state.meters.energy,
        );

        SimEvent::TickCompleted {
            day: self.state.clock.day,
            hour: self.state.clock.hour,
            minute: self.state.clock.minute,
        }
    }

    /// Run n ticks in a loop. Used for testing and fast-forward;
    /// real-time pacing lives in the driver loop, which calls [`tick`]
    /// once per cadence interval.
    ///
    /// The playing flag belongs to [`toggle_play_pause`]; this helper
    /// resumes around the loop and then restores whatever the user had
    /// set.
    ///
    /// [`tick`]: SimEngine::tick
    /// [`toggle_play_pause`]: SimEngine::toggle_play_pause
    pub fn run_ticks(&mut self, n: u64) -> Vec<SimEvent> {
        let was_playing = self.state.clock.playing;
        self.state.clock.resume();
        let events = (0..n).map(|_| self.tick()).collect();
        self.state.clock.playing = was_playing;
        events
    }

    // ── Action resolver ────────────────────────────────────────

    /// Resolve a (verb, target) action: apply the verb's effect table,
    /// evaluate achievements, record the completion, accrue score, and
    /// open a fresh activity window ending `ACTIVITY_WINDOW` after `now`.
    pub fn perform_action(&mut self, verb: Verb, target: &str, now: Instant) -> Vec<SimEvent> {
        self.audio.cue(AudioCue::ConsequenceSuccess);

        let effect = verb.effect();
        self.state.meters.apply(&effect.deltas);
        if let Some(mood) = effect.mood {
            self.state.character.mood = mood;
        }
        self.state.character.activity = effect.activity;

        let key = verb.completion_key(target);
        let first_time = !self.state.completed_actions.contains(&key);

        let mut events = Vec::new();
        if first_time {
            // Achievements look at the completion set as it stood
            // before this action.
            for title in achievement::unlocks(&self.state.completed_actions) {
                if self.unlock(title) {
                    events.push(SimEvent::AchievementUnlocked {
                        title: title.to_string(),
                    });
                }
            }
            self.state.completed_actions.insert(key);
        }

        // Score accrual is not gated by dedupe.
        self.state.total_score += effect.score;

        self.activity_generation += 1;
        self.pending_idle = Some(PendingIdle {
            generation: self.activity_generation,
            due: now + ACTIVITY_WINDOW,
        });

        events.push(SimEvent::ActionPerformed {
            verb,
            target: target.to_string(),
            first_time,
            score_awarded: effect.score,
        });
        events
    }

    /// Commit the scheduled return to idle if its window has elapsed.
    /// Called by the driver loop every iteration; a no-op while the
    /// newest window is still open.
    pub fn expire_activity(&mut self, now: Instant) -> Option<SimEvent> {
        let pending = self.pending_idle?;
        if now < pending.due || pending.generation != self.activity_generation {
            return None;
        }
        self.pending_idle = None;
        self.state.character.activity = Activity::Idle;
        Some(SimEvent::ActivityIdle)
    }

    fn unlock(&mut self, title: &str) -> bool {
        if self.state.achievements.iter().any(|t| t == title) {
            return false;
        }
        log::info!("achievement unlocked: {title}");
        self.state.achievements.push(title.to_string());
        true
    }

    // ── Session controls ───────────────────────────────────────

    pub fn toggle_play_pause(&mut self) -> SimEvent {
        self.audio.cue(AudioCue::Button);
        self.state.clock.playing = !self.state.clock.playing;
        SimEvent::PlaybackToggled {
            playing: self.state.clock.playing,
        }
    }

    /// Change the tick cadence. Takes effect from the next tick; the
    /// driver loop restarts its deadline when it sees this event.
    pub fn set_speed(&mut self, speed: GameSpeed) -> SimEvent {
        self.audio.cue(AudioCue::Button);
        self.state.clock.set_speed(speed);
        SimEvent::SpeedChanged { speed }
    }

    pub fn next_room(&mut self) -> SimEvent {
        self.audio.cue(AudioCue::Navigation);
        self.state.current_room = self.state.current_room.next();
        SimEvent::RoomChanged {
            room: self.state.current_room,
        }
    }

    pub fn previous_room(&mut self) -> SimEvent {
        self.audio.cue(AudioCue::Navigation);
        self.state.current_room = self.state.current_room.previous();
        SimEvent::RoomChanged {
            room: self.state.current_room,
        }
    }

    /// Restore the default snapshot wholesale, dropping completions,
    /// achievements, score, and any pending activity window.
    pub fn reset(&mut self) -> SimEvent {
        self.audio.cue(AudioCue::Button);
        self.state = GameState::default();
        self.pending_idle = None;
        self.activity_generation += 1;
        SimEvent::GameReset
    }

    /// Hand the current snapshot to the persistence collaborator.
    pub fn save(&mut self, store: &SaveStore, slot: &str) -> SimResult<SimEvent> {
        self.audio.cue(AudioCue::Button);
        store.save_slot(slot, &self.session_id, &self.state)?;
        log::info!("session {} saved to slot '{slot}'", self.session_id);
        Ok(SimEvent::GameSaved {
            slot: slot.to_string(),
        })
    }
}

impl Default for SimEngine {
    fn default() -> Self {
        Self::new()
    }
}
