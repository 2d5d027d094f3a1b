//! Validation and classification of side triples.
//!
//! - `validate`: positivity, then the strict triangle inequality.
//! - `classify`: `validate`, then count distinct side values.
//! - `Kind`: the three labels, with stable lowercase names.

use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidTriangleError, Reason};
use crate::side::Side;

/// Classification label of a valid triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    /// All three sides equal.
    Equilateral,
    /// Exactly two sides equal.
    Isosceles,
    /// No two sides equal.
    Scalene,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Equilateral, Kind::Isosceles, Kind::Scalene];

    /// Lowercase label, e.g. `"isosceles"`.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Kind::Equilateral => "equilateral",
            Kind::Isosceles => "isosceles",
            Kind::Scalene => "scalene",
        }
    }

    /// Kind with the given number of distinct side values (1..=3).
    #[inline]
    fn from_distinct(n: usize) -> Self {
        match n {
            1 => Kind::Equilateral,
            2 => Kind::Isosceles,
            _ => Kind::Scalene,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown classification label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseKindError {
    pub input: String,
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown triangle kind {:?} (expected equilateral, isosceles or scalene)",
            self.input
        )
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for Kind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|k| k.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseKindError {
                input: s.to_string(),
            })
    }
}

/// Check that `(a, b, c)` can form a triangle.
///
/// Sides are checked for positivity in order a, b, c; then the inequalities
/// `a+b > c`, `a+c > b`, `b+c > a`. The first failure is reported.
pub fn validate<T: Side>(a: T, b: T, c: T) -> Result<(), InvalidTriangleError> {
    for (index, side) in [a, b, c].into_iter().enumerate() {
        if !side.is_strictly_positive() {
            return Err(InvalidTriangleError::new(Reason::NonPositiveSide { index }));
        }
    }
    if !a.sum_exceeds(b, c) {
        return Err(InvalidTriangleError::new(Reason::Inequality { index: 2 }));
    }
    if !a.sum_exceeds(c, b) {
        return Err(InvalidTriangleError::new(Reason::Inequality { index: 1 }));
    }
    if !b.sum_exceeds(c, a) {
        return Err(InvalidTriangleError::new(Reason::Inequality { index: 0 }));
    }
    Ok(())
}

/// Number of distinct values among `{a, b, c}` under exact `==`.
#[inline]
pub fn distinct_count<T: PartialEq>(a: T, b: T, c: T) -> usize {
    1 + usize::from(b != a) + usize::from(c != a && c != b)
}

/// Classify the triangle with sides `(a, b, c)`.
///
/// Argument order does not affect the result. Equality is exact, with no
/// tolerance: floating-point sides that differ in the last bit are distinct,
/// so `(1.0, 1.0 + f64::EPSILON, 1.0 + 2.0 * f64::EPSILON)` is scalene.
///
/// ```
/// use triangle::{classify, Kind};
/// assert_eq!(classify(3, 4, 5), Ok(Kind::Scalene));
/// assert!(classify(2, 2, 4).is_err());
/// ```
pub fn classify<T: Side>(a: T, b: T, c: T) -> Result<Kind, InvalidTriangleError> {
    validate(a, b, c)?;
    Ok(Kind::from_distinct(distinct_count(a, b, c)))
}

/// A side triple `(a, b, c)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sides<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: Side> Sides<T> {
    #[inline]
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }
    #[inline]
    pub fn validate(&self) -> Result<(), InvalidTriangleError> {
        validate(self.a, self.b, self.c)
    }
    #[inline]
    pub fn classify(&self) -> Result<Kind, InvalidTriangleError> {
        classify(self.a, self.b, self.c)
    }
    #[inline]
    pub fn as_array(&self) -> [T; 3] {
        [self.a, self.b, self.c]
    }
}

impl<T> From<[T; 3]> for Sides<T> {
    fn from([a, b, c]: [T; 3]) -> Self {
        Self { a, b, c }
    }
}

impl<T> From<(T, T, T)> for Sides<T> {
    fn from((a, b, c): (T, T, T)) -> Self {
        Self { a, b, c }
    }
}
