//! The `{result, meta}` envelope returned by every algorithm run

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Deref;
use std::time::Instant;

/// Result of one algorithm run together with its run metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<R, E = NoExtra> {
    pub result: R,
    pub meta: RunMeta<E>,
}

/// Run metadata. `time_ms` is always present, `error` only when the input was outside
/// of the algorithm's domain, and the fields of `extra` are flattened next to them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunMeta<E> {
    pub time_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: E,
}

/// Placeholder for algorithms without diagnostic fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoExtra {}

impl<R, E> Outcome<R, E> {
    pub fn is_invalid(&self) -> bool {
        self.meta.error.is_some()
    }
}

/// A captured intermediate state, used by the frontend to animate an algorithm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame<P> {
    pub t: u64,
    pub payload: P,
}

impl<P> Frame<P> {
    pub fn new(t: u64, payload: P) -> Self {
        Frame { t, payload }
    }
}

/// Measures the wall time of a run and wraps up its outcome
pub struct Stopwatch(Instant);

impl Stopwatch {
    #[inline]
    pub fn start() -> Self {
        Stopwatch(Instant::now())
    }

    fn elapsed_ms(&self) -> f64 {
        self.0.elapsed().as_secs_f64() * 1000.
    }

    pub fn finish<R, E>(self, result: R, extra: E) -> Outcome<R, E> {
        Outcome {
            result,
            meta: RunMeta {
                time_ms: self.elapsed_ms(),
                error: None,
                extra,
            },
        }
    }

    /// Report an input outside of the algorithm's domain: a sentinel result plus an explanation
    pub fn reject<R, E: Default>(self, sentinel: R, reason: &str) -> Outcome<R, E> {
        Outcome {
            result: sentinel,
            meta: RunMeta {
                time_ms: self.elapsed_ms(),
                error: Some(reason.to_string()),
                extra: E::default(),
            },
        }
    }
}

/// Arbitrary precision integer in outcomes. It is written to JSON as a number when it fits
/// in 64 bits and as a decimal string otherwise.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigNum(pub BigUint);

impl Serialize for BigNum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.to_u64() {
            Some(v) => serializer.serialize_u64(v),
            None => serializer.collect_str(&self.0),
        }
    }
}

impl Deref for BigNum {
    type Target = BigUint;

    fn deref(&self) -> &BigUint {
        &self.0
    }
}

impl From<BigUint> for BigNum {
    fn from(v: BigUint) -> Self {
        BigNum(v)
    }
}

impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
