//! Booking slot scheduling configuration.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Business-hours and slot-generation configuration for the availability
/// engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// First bookable hour of the day (24h clock).
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,
    /// Hour at which the last slot must end (24h clock, exclusive).
    #[serde(default = "default_close_hour")]
    pub close_hour: u32,
    /// Slot length in minutes.
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,
    /// Days of the week with no bookable slots (lowercase names).
    #[serde(default = "default_weekend_days")]
    pub weekend_days: Vec<String>,
}

impl SchedulingConfig {
    /// Whether the given weekday is configured as closed.
    pub fn is_weekend(&self, day: Weekday) -> bool {
        let name = weekday_name(day);
        self.weekend_days.iter().any(|d| d.eq_ignore_ascii_case(name))
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            open_hour: default_open_hour(),
            close_hour: default_close_hour(),
            slot_minutes: default_slot_minutes(),
            weekend_days: default_weekend_days(),
        }
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

fn default_open_hour() -> u32 {
    9
}

fn default_close_hour() -> u32 {
    18
}

fn default_slot_minutes() -> u32 {
    60
}

fn default_weekend_days() -> Vec<String> {
    vec!["saturday".to_string(), "sunday".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weekend() {
        let config = SchedulingConfig::default();
        assert!(config.is_weekend(Weekday::Sat));
        assert!(config.is_weekend(Weekday::Sun));
        assert!(!config.is_weekend(Weekday::Mon));
    }

    #[test]
    fn test_custom_weekend() {
        let config = SchedulingConfig {
            weekend_days: vec!["Monday".to_string()],
            ..SchedulingConfig::default()
        };
        assert!(config.is_weekend(Weekday::Mon));
        assert!(!config.is_weekend(Weekday::Sat));
    }
}
