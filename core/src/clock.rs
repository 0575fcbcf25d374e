//! Simulated wall clock — owns game time, speed control, and pause.
//!
//! One tick advances game time by exactly [`MINUTES_PER_TICK`] minutes.
//! Real-time cadence is `1000 / speed` milliseconds per tick; the driver
//! loop is expected to tear down and restart its deadline whenever speed
//! or the playing flag changes, with no partial-tick carry-over and no
//! catch-up for time spent paused.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simulated minutes added per tick.
pub const MINUTES_PER_TICK: u8 = 15;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameClock {
    /// In-game day, starting at 1.
    pub day: u32,
    /// Hour of day, 0..=23.
    pub hour: u8,
    /// Minute of hour, 0..=59.
    pub minute: u8,
    pub speed: GameSpeed,
    /// Whether the tick cadence is active. No ticks run while false.
    pub playing: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        // Sessions start on day 1 at 07:00, paused.
        Self {
            day: 1,
            hour: 7,
            minute: 0,
            speed: GameSpeed::Normal,
            playing: false,
        }
    }
}

impl GameClock {
    /// Advance game time by one tick. Minute overflow carries into the
    /// hour, hour overflow carries into the day. Returns the new hour,
    /// which is what passive drift is computed from.
    pub fn advance(&mut self) -> u8 {
        let mut minute = u32::from(self.minute) + u32::from(MINUTES_PER_TICK);
        let mut hour = u32::from(self.hour) + minute / 60;
        minute %= 60;
        self.day += hour / 24;
        hour %= 24;
        self.minute = minute as u8;
        self.hour = hour as u8;
        self.hour
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        self.playing = true;
    }

    pub fn set_speed(&mut self, speed: GameSpeed) {
        self.speed = speed;
    }

    /// Real time between ticks at the current speed.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.speed.multiplier()))
    }

    /// 12-hour display string, e.g. "07:15 AM". Hour 0 renders as 12 AM.
    pub fn formatted(&self) -> String {
        let period = if self.hour >= 12 { "PM" } else { "AM" };
        let display_hour = match self.hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };
        format!("{:02}:{:02} {}", display_hour, self.minute, period)
    }

    /// Day-of-week name on a 7-day cycle; day 1 is Sunday.
    pub fn day_of_week(&self) -> &'static str {
        const DAYS: [&str; 7] = [
            "Domingo", "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado",
        ];
        DAYS[((self.day - 1) % 7) as usize]
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameSpeed {
    Normal,    // 1 tick/second
    Double,    // 2 ticks/second
    Quadruple, // 4 ticks/second
}

impl GameSpeed {
    pub fn multiplier(self) -> u32 {
        match self {
            GameSpeed::Normal => 1,
            GameSpeed::Double => 2,
            GameSpeed::Quadruple => 4,
        }
    }
}

/// Passive energy drift applied each tick, keyed by the hour the tick
/// lands on. Morning recovers energy; the small hours burn it fastest.
pub fn energy_drift(hour: u8) -> f64 {
    match hour {
        6..=12 => 0.1,
        13..=18 => -0.05,
        19..=23 => -0.2,
        _ => -0.3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_carries_minutes_and_hours() {
        let mut clock = GameClock {
            day: 3,
            hour: 23,
            minute: 50,
            ..GameClock::default()
        };
        let new_hour = clock.advance();
        assert_eq!(new_hour, 0);
        assert_eq!((clock.day, clock.hour, clock.minute), (4, 0, 5));
    }

    #[test]
    fn formatted_handles_midnight_and_noon() {
        let mut clock = GameClock::default();
        clock.hour = 0;
        clock.minute = 5;
        assert_eq!(clock.formatted(), "12:05 AM");
        clock.hour = 12;
        assert_eq!(clock.formatted(), "12:05 PM");
        clock.hour = 19;
        assert_eq!(clock.formatted(), "07:05 PM");
    }

    #[test]
    fn week_wraps_after_seven_days() {
        let mut clock = GameClock::default();
        assert_eq!(clock.day_of_week(), "Domingo");
        clock.day = 8;
        assert_eq!(clock.day_of_week(), "Domingo");
        clock.day = 7;
        assert_eq!(clock.day_of_week(), "Sábado");
    }
}
