//! Random valid triangles (seeded, with replay tokens).
//!
//! Purpose
//! - Deterministic inputs for benches, property tests, and the CLI `sample`
//!   command. Every returned triple is valid and classifies to the requested kind.
//!
//! Model
//! - Side lengths are uniform on `[min_side, max_side)`.
//! - Equilateral: one draw, repeated. Isosceles: a leg, then a base in
//!   `[min_side, min(max_side, 2·leg))`. Scalene: three independent draws.
//! - Each candidate is checked with `classify` and redrawn on mismatch
//!   (rounding can make a draw invalid or collapse two sides).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::classify::{classify, Kind, Sides};

/// Redraws allowed per triangle before giving up.
const MAX_ATTEMPTS: usize = 1000;

/// Which kind of triangle to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindChoice {
    /// Uniform over the three kinds.
    Any,
    Exactly(Kind),
}

impl KindChoice {
    fn sample<R: Rng>(&self, rng: &mut R) -> Kind {
        match *self {
            KindChoice::Any => Kind::ALL[rng.gen_range(0..Kind::ALL.len())],
            KindChoice::Exactly(k) => k,
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub kind: KindChoice,
    /// Inclusive lower bound on every side. Must be finite and > 0.
    pub min_side: f64,
    /// Exclusive upper bound on every side. Must be finite and > `min_side`.
    pub max_side: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            kind: KindChoice::Any,
            min_side: 1.0,
            max_side: 10.0,
        }
    }
}

impl SampleCfg {
    fn check(&self) -> Result<(), SampleError> {
        let ok = self.min_side.is_finite()
            && self.max_side.is_finite()
            && self.min_side > 0.0
            && self.max_side > self.min_side;
        if ok {
            Ok(())
        } else {
            Err(SampleError::InvalidBounds {
                min_side: self.min_side,
                max_side: self.max_side,
            })
        }
    }
}

/// Errors surfaced by the sampler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleError {
    /// Bounds are not finite, `min_side <= 0`, or `max_side <= min_side`.
    InvalidBounds { min_side: f64, max_side: f64 },
    /// No candidate of the requested kind survived `MAX_ATTEMPTS` redraws.
    Exhausted { kind: Kind, attempts: usize },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::InvalidBounds { min_side, max_side } => write!(
                f,
                "invalid side bounds [{min_side}, {max_side}): need 0 < min < max, both finite"
            ),
            SampleError::Exhausted { kind, attempts } => {
                write!(f, "no {kind} triangle found after {attempts} draws")
            }
        }
    }
}

impl std::error::Error for SampleError {}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one valid triangle for `cfg`, reproducibly from `tok`.
pub fn draw_sides(cfg: SampleCfg, tok: ReplayToken) -> Result<Sides<f64>, SampleError> {
    cfg.check()?;
    let mut rng = tok.to_std_rng();
    let kind = cfg.kind.sample(&mut rng);
    let (lo, hi) = (cfg.min_side, cfg.max_side);
    for _ in 0..MAX_ATTEMPTS {
        let candidate = match kind {
            Kind::Equilateral => {
                let s = rng.gen_range(lo..hi);
                Sides::new(s, s, s)
            }
            Kind::Isosceles => {
                let leg = rng.gen_range(lo..hi);
                // 2·leg > lo since leg >= lo > 0.
                let base = rng.gen_range(lo..hi.min(leg + leg));
                place_base(&mut rng, leg, base)
            }
            Kind::Scalene => Sides::new(
                rng.gen_range(lo..hi),
                rng.gen_range(lo..hi),
                rng.gen_range(lo..hi),
            ),
        };
        if classify(candidate.a, candidate.b, candidate.c) == Ok(kind) {
            return Ok(candidate);
        }
    }
    Err(SampleError::Exhausted {
        kind,
        attempts: MAX_ATTEMPTS,
    })
}

/// Draw `count` triangles with tokens `(seed, 0..count)`.
pub fn draw_many(cfg: SampleCfg, seed: u64, count: u64) -> Result<Vec<Sides<f64>>, SampleError> {
    (0..count)
        .map(|index| draw_sides(cfg, ReplayToken::new(seed, index)))
        .collect()
}

/// Put the odd side at a random position so callers see all argument orders.
fn place_base<R: Rng>(rng: &mut R, leg: f64, base: f64) -> Sides<f64> {
    match rng.gen_range(0..3) {
        0 => Sides::new(base, leg, leg),
        1 => Sides::new(leg, base, leg),
        _ => Sides::new(leg, leg, base),
    }
}
