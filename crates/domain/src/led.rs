//! LED state — the point-in-time on/off state of the three dashboard LEDs.
//!
//! Unlike sensor readings, LED records model *full state*: every toggle
//! copies the previous record forward and flips a single field, so the last
//! element of the LED log is always a complete three-LED snapshot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier of one of the three controllable LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedName {
    Led1,
    Led2,
    Led3,
}

impl FromStr for LedName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "led1" => Ok(Self::Led1),
            "led2" => Ok(Self::Led2),
            "led3" => Ok(Self::Led3),
            _ => Err(ValidationError::InvalidLedName),
        }
    }
}

impl fmt::Display for LedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Led1 => "led1",
            Self::Led2 => "led2",
            Self::Led3 => "led3",
        })
    }
}

/// One record of the LED log: full three-LED state plus its write timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedState {
    pub led1: bool,
    pub led2: bool,
    pub led3: bool,
    /// Local wall-clock string, see [`crate::time::TIMESTAMP_FORMAT`].
    pub timestamp: String,
}

impl LedState {
    /// All-off state stamped with the given timestamp. Used both as the
    /// startup seed and as the default when the log is empty.
    #[must_use]
    pub fn all_off(timestamp: String) -> Self {
        Self {
            led1: false,
            led2: false,
            led3: false,
            timestamp,
        }
    }

    /// Set a single LED, leaving the others untouched.
    pub fn set(&mut self, led: LedName, on: bool) {
        match led {
            LedName::Led1 => self.led1 = on,
            LedName::Led2 => self.led2 = on,
            LedName::Led3 => self.led3 = on,
        }
    }

    /// Read a single LED.
    #[must_use]
    pub fn get(&self, led: LedName) -> bool {
        match led {
            LedName::Led1 => self.led1,
            LedName::Led2 => self.led2,
            LedName::Led3 => self.led3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_led_names() {
        assert_eq!("led1".parse::<LedName>().unwrap(), LedName::Led1);
        assert_eq!("led2".parse::<LedName>().unwrap(), LedName::Led2);
        assert_eq!("led3".parse::<LedName>().unwrap(), LedName::Led3);
    }

    #[test]
    fn should_reject_unknown_led_name() {
        assert_eq!(
            "led9".parse::<LedName>().unwrap_err(),
            ValidationError::InvalidLedName
        );
        assert_eq!(
            "LED1".parse::<LedName>().unwrap_err(),
            ValidationError::InvalidLedName
        );
    }

    #[test]
    fn should_set_only_the_named_led() {
        let mut state = LedState::all_off("2024-03-09 14:05:07".to_string());
        state.set(LedName::Led2, true);
        assert!(!state.led1);
        assert!(state.led2);
        assert!(!state.led3);
    }

    #[test]
    fn should_round_trip_through_json() {
        let state = LedState {
            led1: true,
            led2: false,
            led3: true,
            timestamp: "2024-03-09 14:05:07".to_string(),
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: LedState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn should_use_flat_field_names_in_json() {
        let state = LedState::all_off("N/A".to_string());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["led1"], false);
        assert_eq!(json["timestamp"], "N/A");
    }
}
