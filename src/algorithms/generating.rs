//! Prime generating sequences: Euclid-Mullin and Mills' formula

use crate::error::Result;
use crate::meta::{AlgorithmMeta, Category, Parameter, VisualizationHint, VisualizationMode};
use crate::nt_funcs::{is_prime_basic, smallest_prime_factor};
use crate::outcome::{BigNum, NoExtra, Outcome, Stopwatch};
use crate::registry::Registry;
use crate::traits::Algorithm;
use num_bigint::BigUint;
use num_traits::{FromPrimitive, One};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Request for the first k terms of a sequence
#[derive(Debug, Clone, Deserialize)]
pub struct SequenceParams {
    pub k: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceLength {
    pub length: u64,
}

/// Euclid-Mullin sequence: each term is the smallest prime factor of the product of all
/// previous terms plus one (OEIS A000945)
pub struct EuclidMullin;

impl Algorithm for EuclidMullin {
    type Params = SequenceParams;
    type Output = Vec<BigNum>;
    type Extra = Option<SequenceLength>;
    const NAME: &'static str = "euclid_mullin_sequence";
    const CATEGORY: Category = Category::Generating;

    fn run(&self, params: &SequenceParams) -> Outcome<Vec<BigNum>, Option<SequenceLength>> {
        let watch = Stopwatch::start();
        if params.k <= 0 {
            return watch.finish(Vec::new(), None);
        }

        let k = params.k as u64;
        let mut sequence = vec![BigNum(BigUint::from(2u32))];
        let mut product = BigUint::from(2u32);
        for _ in 1..k {
            let next = smallest_prime_factor(&(&product + 1u32));
            product *= &next;
            sequence.push(BigNum(next));
        }
        watch.finish(sequence, Some(SequenceLength { length: k }))
    }
}

/// Approximation of Mills' constant A, floor(A^(3^n)) is a prime for every n
pub const MILLS_CONSTANT: f64 = 1.3063778838630806904686144926;

/// Mills' formula with a floating point approximation of A. Each estimate is repaired by
/// searching forward to the next prime.
///
/// The f64 estimate is exact enough for k <= 4 (2, 11, 1361, 2521008887); the fifth term is
/// around 1.6e28, past both the precision of the constant and the reach of trial division.
pub struct MillsFormula;

impl Algorithm for MillsFormula {
    type Params = SequenceParams;
    type Output = Vec<BigNum>;
    type Extra = NoExtra;
    const NAME: &'static str = "mills_formula";
    const CATEGORY: Category = Category::Generating;

    fn run(&self, params: &SequenceParams) -> Outcome<Vec<BigNum>, NoExtra> {
        let watch = Stopwatch::start();
        let mut primes = Vec::new();
        if params.k <= 0 {
            return watch.finish(primes, NoExtra {});
        }

        let mut current = MILLS_CONSTANT.powi(3);
        for _ in 0..params.k {
            let mut candidate = match BigUint::from_f64((current + 1e-12).floor()) {
                Some(v) => v,
                None => {
                    // the estimate overflowed f64, report the terms found so far
                    let mut outcome = watch.finish(primes, NoExtra {});
                    outcome.meta.error = Some("estimate exceeds the floating point range".into());
                    return outcome;
                }
            };
            while !is_prime_basic(&candidate) {
                candidate += BigUint::one();
            }
            primes.push(BigNum(candidate));
            current = current.powi(3);
        }
        watch.finish(primes, NoExtra {})
    }
}

pub(crate) fn register_euclid_mullin(registry: &mut Registry) -> Result<()> {
    let meta = AlgorithmMeta::new(
        EuclidMullin::NAME,
        EuclidMullin::CATEGORY,
        "Generates Euclid–Mullin sequence: next term is smallest prime factor of product+1.",
        "Start at 2; multiply known terms, add 1, and take the smallest prime factor. \
         Sequence illustrates Euclid's proof idea for infinitude of primes.",
        "Super-exponential growth; practical for small k.",
    )
    .reference("OEIS A000945")
    .param(Parameter::new(
        "k",
        "int",
        "Number of terms to generate (k ≥ 1).",
    ))
    .visualization(
        VisualizationHint::new(VisualizationMode::Bars)
            .steps("Show cumulative product and factorization at each step.")
            .sample(json!({"k": 5})),
    );
    registry.register(EuclidMullin, meta)
}

pub(crate) fn register_mills(registry: &mut Registry) -> Result<()> {
    let meta = AlgorithmMeta::new(
        MillsFormula::NAME,
        MillsFormula::CATEGORY,
        "Generates primes using Mills' constant and repeated cubing.",
        "Mills proved that floor(A^(3^n)) is prime for some constant A (~1.30637788). \
         Using an approximation yields a rapidly growing sequence of primes.",
        "Dominated by primality checks for exponentially growing numbers.",
    )
    .reference("W. H. Mills, A prime-representing function, Bull. Amer. Math. Soc. 53 (1947)")
    .param(Parameter::new("k", "int", "Number of primes to generate."))
    .visualization(
        VisualizationHint::new(VisualizationMode::Curve)
            .steps("Plot values of floor(A^(3^n)) as n increases.")
            .sample(json!({"k": 4})),
    );
    registry.register(MillsFormula, meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;

    fn terms(values: &[BigNum]) -> Vec<u64> {
        values.iter().map(|v| v.to_u64().unwrap()).collect()
    }

    #[test]
    fn euclid_mullin_test() {
        let res = EuclidMullin.run(&SequenceParams { k: 5 });
        assert_eq!(terms(&res.result), [2, 3, 7, 43, 13]);
        assert_eq!(res.meta.extra, Some(SequenceLength { length: 5 }));

        // OEIS A000945
        let res = EuclidMullin.run(&SequenceParams { k: 8 });
        assert_eq!(terms(&res.result), [2, 3, 7, 43, 13, 53, 5, 6221671]);

        assert_eq!(terms(&EuclidMullin.run(&SequenceParams { k: 1 }).result), [2]);
        for k in [0, -3] {
            let res = EuclidMullin.run(&SequenceParams { k });
            assert!(res.result.is_empty());
            assert!(res.meta.extra.is_none());
        }
    }

    #[test]
    fn mills_formula_test() {
        let res = MillsFormula.run(&SequenceParams { k: 4 });
        assert_eq!(terms(&res.result), [2, 11, 1361, 2521008887]);
        assert!(res.meta.error.is_none());

        assert_eq!(terms(&MillsFormula.run(&SequenceParams { k: 2 }).result), [2, 11]);
        assert!(MillsFormula.run(&SequenceParams { k: 0 }).result.is_empty());
        assert!(MillsFormula.run(&SequenceParams { k: -1 }).result.is_empty());
    }
}
