//! Shared primitive types used across the entire simulation.

/// A simulation tick. One tick = 15 simulated minutes.
pub type Tick = u64;

/// The canonical identifier for one engine session.
pub type SessionId = String;
