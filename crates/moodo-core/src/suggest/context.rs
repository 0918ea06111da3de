//! Time-of-day and energy context for suggestion scoring.

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

/// Bucketed time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Bucket for an hour of day (0-23).
    ///
    /// Morning [6,12), afternoon [12,17), evening [17,22), night otherwise.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    /// Bucket for the current local wall-clock hour.
    pub fn current() -> Self {
        Self::from_hour(Local::now().hour())
    }

    /// Stable lowercase name, used for storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }

    /// Parse a stored name; unknown text maps to night.
    pub fn parse(text: &str) -> Self {
        match text {
            "morning" => TimeOfDay::Morning,
            "afternoon" => TimeOfDay::Afternoon,
            "evening" => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse energy tier derived from the mood value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyTier {
    Low,
    Medium,
    High,
}

impl EnergyTier {
    /// Tier for a mood value: 1-3 low, 4-6 medium, 7-10 high.
    ///
    /// Values outside the mood scale fall back to medium.
    pub fn from_mood(mood_value: u8) -> Self {
        match mood_value {
            1..=3 => EnergyTier::Low,
            4..=6 => EnergyTier::Medium,
            7..=10 => EnergyTier::High,
            _ => EnergyTier::Medium,
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            EnergyTier::Low => "low",
            EnergyTier::Medium => "medium",
            EnergyTier::High => "high",
        }
    }
}
