//! Threshold classification of monitored quantities.
//!
//! A measurement is checked against its warning/limit band in a fixed
//! order; the first matching rule wins. A `blocked` flag (set when
//! actuation was auto-disabled at a hard limit) forces an extreme status
//! regardless of the measured value. When `blocked` could satisfy both
//! extreme arms, the too-low arm is evaluated first and wins the tie; a
//! regression test pins that choice.

use rl_core::Bounds;
use serde::{Deserialize, Serialize};

/// Five-level safety status for a regulated quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i8)]
pub enum SafetyStatus {
    TooLow = -2,
    Low = -1,
    Nominal = 0,
    High = 1,
    TooHigh = 2,
}

impl SafetyStatus {
    /// Numeric code as reported on the operator panel.
    pub fn code(self) -> i8 {
        self as i8
    }

    /// True for the statuses that forbid reactor use.
    pub fn is_extreme(self) -> bool {
        matches!(self, SafetyStatus::TooLow | SafetyStatus::TooHigh)
    }

    /// Collapse to the three-level scale used for the fill level.
    pub fn level(self) -> LevelStatus {
        match self {
            SafetyStatus::TooLow | SafetyStatus::TooHigh => LevelStatus::Unusable,
            SafetyStatus::Low | SafetyStatus::High => LevelStatus::Caution,
            SafetyStatus::Nominal => LevelStatus::Normal,
        }
    }
}

/// Three-level status for the fill level.
///
/// The level has no "too low" versus "low" split in the operator output:
/// both hard-limit crossings render the vessel unusable, both warning
/// crossings are a caution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i8)]
pub enum LevelStatus {
    Unusable = -1,
    Caution = 0,
    Normal = 1,
}

impl LevelStatus {
    pub fn code(self) -> i8 {
        self as i8
    }
}

/// Classify `value` against `bounds`.
///
/// Rule order (first match wins):
/// 1. `value < limit_min` or `blocked` -> TooLow
/// 2. `value < warning_min`            -> Low
/// 3. `value > limit_max` or `blocked` -> TooHigh
/// 4. `value > warning_max`            -> High
/// 5. otherwise                        -> Nominal
pub fn classify(value: f64, bounds: &Bounds, blocked: bool) -> SafetyStatus {
    if value < bounds.limit_min || blocked {
        SafetyStatus::TooLow
    } else if value < bounds.warning_min {
        SafetyStatus::Low
    } else if value > bounds.limit_max || blocked {
        SafetyStatus::TooHigh
    } else if value > bounds.warning_max {
        SafetyStatus::High
    } else {
        SafetyStatus::Nominal
    }
}

/// Classify a fill percentage.
///
/// The level has no controller and therefore no blocked flag; it must
/// never be classified against one.
pub fn classify_level(fill_percent: f64, bounds: &Bounds) -> LevelStatus {
    classify(fill_percent, bounds, false).level()
}
