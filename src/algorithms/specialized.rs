//! Special forms of primes: Mersenne candidates and Sophie Germain primes

use crate::error::Result;
use crate::meta::{AlgorithmMeta, Category, Parameter, VisualizationHint, VisualizationMode};
use crate::nt_funcs::is_prime_basic;
use crate::outcome::{BigNum, Outcome, Stopwatch};
use crate::registry::Registry;
use crate::traits::Algorithm;
use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Deserialize)]
pub struct ExponentParams {
    pub p: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DigitCount {
    pub digits: usize,
}

/// Constructs the Mersenne number 2^p - 1 for a prime exponent p
pub struct MersenneCandidate;

impl Algorithm for MersenneCandidate {
    type Params = ExponentParams;
    type Output = Option<BigNum>;
    type Extra = Option<DigitCount>;
    const NAME: &'static str = "mersenne_candidate";
    const CATEGORY: Category = Category::Specialized;

    fn run(&self, params: &ExponentParams) -> Outcome<Option<BigNum>, Option<DigitCount>> {
        let watch = Stopwatch::start();
        if params.p <= 1 || !is_prime_basic(&params.p) {
            return watch.reject(None, "p must be prime");
        }

        let value = (BigUint::one() << params.p as usize) - 1u32;
        let digits = value.to_str_radix(10).len();
        watch.finish(Some(BigNum(value)), Some(DigitCount { digits }))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SophieGermainParams {
    pub p: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SafePrime {
    /// 2p + 1 when both p and 2p + 1 are prime
    pub safe_prime: Option<u128>,
}

/// Tests whether p and 2p + 1 are both prime
pub struct SophieGermainTest;

impl Algorithm for SophieGermainTest {
    type Params = SophieGermainParams;
    type Output = bool;
    type Extra = SafePrime;
    const NAME: &'static str = "sophie_germain_test";
    const CATEGORY: Category = Category::Specialized;

    fn run(&self, params: &SophieGermainParams) -> Outcome<bool, SafePrime> {
        let watch = Stopwatch::start();
        if !is_prime_basic(&params.p) {
            return watch.finish(false, SafePrime::default());
        }

        let q = 2 * params.p as u128 + 1;
        let safe_prime = if is_prime_basic(&q) { Some(q) } else { None };
        watch.finish(safe_prime.is_some(), SafePrime { safe_prime })
    }
}

pub(crate) fn register_mersenne(registry: &mut Registry) -> Result<()> {
    let meta = AlgorithmMeta::new(
        MersenneCandidate::NAME,
        MersenneCandidate::CATEGORY,
        "Constructs Mersenne number 2^p - 1 for prime exponent p.",
        "Produces Mersenne candidate numbers. Use Lucas–Lehmer test to confirm primality.",
        "O(1) plus big-int multiplication cost",
    )
    .param(Parameter::new(
        "p",
        "int",
        "Prime exponent for candidate 2^p - 1.",
    ))
    .visualization(
        VisualizationHint::new(VisualizationMode::Curve)
            .steps("Show exponential growth of 2^p - 1 as p increases.")
            .sample(json!({"p": 17})),
    );
    registry.register(MersenneCandidate, meta)
}

pub(crate) fn register_sophie_germain(registry: &mut Registry) -> Result<()> {
    let meta = AlgorithmMeta::new(
        SophieGermainTest::NAME,
        SophieGermainTest::CATEGORY,
        "Determines whether p is a Sophie Germain prime (p and 2p+1 both prime).",
        "Checks primality of p and its associated safe prime q = 2p+1. \
         Important for cryptography (safe primes).",
        "O(√(2p+1)) using basic primality checks",
    )
    .param(Parameter::new(
        "p",
        "int",
        "Candidate prime p for Sophie Germain property.",
    ))
    .visualization(
        VisualizationHint::new(VisualizationMode::Bars)
            .steps("Show both p and 2p+1 on a number line and indicate primality.")
            .sample(json!({"p": 23})),
    );
    registry.register(SophieGermainTest, meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;

    fn mersenne(p: i64) -> Outcome<Option<BigNum>, Option<DigitCount>> {
        MersenneCandidate.run(&ExponentParams { p })
    }

    #[test]
    fn mersenne_candidate_test() {
        let res = mersenne(17);
        assert_eq!(res.result.as_ref().and_then(|v| v.to_u64()), Some(131071));
        assert_eq!(res.meta.extra, Some(DigitCount { digits: 6 }));
        assert!(!res.is_invalid());

        // 2^11 - 1 = 2047 is composite, but still a valid candidate
        assert_eq!(mersenne(11).result.and_then(|v| v.to_u64()), Some(2047));

        let m127 = mersenne(127);
        assert_eq!(m127.result.unwrap().to_string(), "170141183460469231731687303715884105727");
        assert_eq!(m127.meta.extra.unwrap().digits, 39);

        for p in [-3, 0, 1, 4, 15] {
            let res = mersenne(p);
            assert!(res.result.is_none());
            assert!(res.meta.extra.is_none());
            assert_eq!(res.meta.error.as_deref(), Some("p must be prime"));
        }
    }

    #[test]
    fn sophie_germain_test() {
        // OEIS A005384
        let germain = [2, 3, 5, 11, 23, 29, 41, 53, 83, 89, 113, 131, 173, 179, 191];
        for p in 0..200 {
            let res = SophieGermainTest.run(&SophieGermainParams { p });
            assert_eq!(res.result, germain.contains(&p), "sophie germain on {}", p);
            let expected = if res.result { Some(2 * p as u128 + 1) } else { None };
            assert_eq!(res.meta.extra.safe_prime, expected);
        }

        // 7 is prime but 15 is not
        let res = SophieGermainTest.run(&SophieGermainParams { p: 7 });
        assert!(!res.result);
        assert_eq!(res.meta.extra.safe_prime, None);
        assert!(!SophieGermainTest.run(&SophieGermainParams { p: -11 }).result);
    }
}
