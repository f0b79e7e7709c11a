//! rl-core: stable foundation for reactorlab.
//!
//! Contains:
//! - units (uom SI types + reactor-domain constructors)
//! - numeric (Real + tolerances + float helpers)
//! - bounds (validated warning/limit safety bands)
//! - error (shared error types)

pub mod bounds;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use bounds::Bounds;
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
