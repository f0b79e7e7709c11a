//! Validated warning/limit safety bands.
//!
//! Every monitored quantity (fill level, temperature, pressure) carries a
//! four-value band. Crossing a warning bound degrades the status; crossing
//! a limit bound makes the reactor unusable for that quantity.

use crate::error::{CoreError, CoreResult};

/// Warning/limit band for one monitored quantity.
///
/// Invariant: `limit_min < warning_min < warning_max < limit_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub limit_min: f64,
    pub warning_min: f64,
    pub warning_max: f64,
    pub limit_max: f64,
}

impl Bounds {
    pub fn new(
        limit_min: f64,
        warning_min: f64,
        warning_max: f64,
        limit_max: f64,
    ) -> CoreResult<Self> {
        let bounds = Self {
            limit_min,
            warning_min,
            warning_max,
            limit_max,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check the ordering invariant.
    pub fn validate(&self) -> CoreResult<()> {
        for v in [
            self.limit_min,
            self.warning_min,
            self.warning_max,
            self.limit_max,
        ] {
            if !v.is_finite() {
                return Err(CoreError::NonFinite {
                    what: "bound",
                    value: v,
                });
            }
        }
        if !(self.limit_min < self.warning_min) {
            return Err(CoreError::Invariant {
                what: "warning_min must exceed limit_min",
            });
        }
        if !(self.warning_min < self.warning_max) {
            return Err(CoreError::Invariant {
                what: "warning_max must exceed warning_min",
            });
        }
        if !(self.warning_max < self.limit_max) {
            return Err(CoreError::Invariant {
                what: "limit_max must exceed warning_max",
            });
        }
        Ok(())
    }
}
