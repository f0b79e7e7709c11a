use crate::CoreError;

/// Floating point type used throughout the simulator.
pub type Real = f64;

/// Tolerance used when checking conserved quantities (reagent volumes
/// must sum to the total within this bound).
pub const BALANCE_TOL: Real = 1e-6;

pub fn nearly_equal(a: Real, b: Real, tol: Real) -> bool {
    (a - b).abs() <= tol
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Share of `part` in `whole` as a percentage.
///
/// Defined as 0 when `whole` is not positive, so callers never divide by
/// an empty vessel.
pub fn percent_of(part: Real, whole: Real) -> Real {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}
