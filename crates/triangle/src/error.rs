//! The single error raised for side triples that cannot form a triangle.
//!
//! `Reason` says which check failed; callers that only care about validity can
//! ignore it.

use std::fmt;

/// Why a side triple was rejected.
///
/// `index` is 0, 1, or 2 for side a, b, or c.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reason {
    /// The side at `index` is zero, negative, or not a number.
    NonPositiveSide { index: usize },
    /// The side at `index` is at least the sum of the other two.
    Inequality { index: usize },
}

/// The three values cannot form a triangle.
///
/// One error type covers both causes; `reason` is informational.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InvalidTriangleError {
    pub reason: Reason,
}

impl InvalidTriangleError {
    #[inline]
    pub(crate) fn new(reason: Reason) -> Self {
        Self { reason }
    }
}

fn side_name(index: usize) -> char {
    match index {
        0 => 'a',
        1 => 'b',
        _ => 'c',
    }
}

impl fmt::Display for InvalidTriangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            Reason::NonPositiveSide { index } => write!(
                f,
                "invalid triangle: side {} must be positive",
                side_name(index)
            ),
            Reason::Inequality { index } => write!(
                f,
                "invalid triangle: side {} is not shorter than the sum of the other two",
                side_name(index)
            ),
        }
    }
}

impl std::error::Error for InvalidTriangleError {}
