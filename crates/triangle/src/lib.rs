//! Triangle classification.
//!
//! Given three side lengths, decide whether they form an equilateral,
//! isosceles, or scalene triangle, and reject triples that cannot form a
//! triangle at all (non-positive sides, or a failed strict triangle inequality).
//!
//! API Policy
//! - `classify` is a pure function; there is no global or cached state.
//! - Equality between sides is exact. See `classify` for the float caveat.

pub mod classify;
pub mod error;
pub mod rand;
pub mod side;

pub use classify::{classify, distinct_count, validate, Kind, ParseKindError, Sides};
pub use error::{InvalidTriangleError, Reason};
pub use side::Side;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::classify::{classify, validate, Kind, Sides};
    pub use crate::error::{InvalidTriangleError, Reason};
    pub use crate::rand::{draw_many, draw_sides, KindChoice, ReplayToken, SampleCfg};
    pub use crate::side::Side;
}

#[cfg(test)]
mod proptests;
