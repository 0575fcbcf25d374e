//! Dream Story simulation engine.
//!
//! A casual life-sim core: one character, rotating rooms, a simulated
//! clock, and four well-being meters moved by passive time-of-day drift
//! and tap-driven actions. Three cooperating parts:
//!
//!   - **Clock driver** (`clock`, [`engine::SimEngine::tick`]): while
//!     playing, one tick per `1000 / speed` ms of real time advances
//!     game time by 15 minutes and drifts the meters.
//!   - **Stat model** (`state`): four meters clamped to [0, 100] after
//!     every mutation.
//!   - **Action resolver** ([`engine::SimEngine::perform_action`]): a
//!     fixed verb table of meter deltas, mood/activity transitions,
//!     score, and achievement unlocks.
//!
//! Rendering, styling, and audio synthesis live elsewhere: the UI gets
//! a read-only [`state::GameState`] view plus the control methods, the
//! audio layer implements [`audio::AudioSink`], and saves go through
//! the [`store::SaveStore`] collaborator.

pub mod achievement;
pub mod action;
pub mod audio;
pub mod clock;
pub mod engine;
pub mod error;
pub mod event;
pub mod state;
pub mod store;
pub mod types;
