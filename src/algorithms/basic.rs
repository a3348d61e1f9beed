//! Trial division and the sieves of Eratosthenes and Atkin

use crate::error::Result;
use crate::meta::{AlgorithmMeta, Category, Parameter, VisualizationHint, VisualizationMode};
use crate::nt_funcs::sieve;
use crate::outcome::{Frame, NoExtra, Outcome, Stopwatch};
use crate::registry::Registry;
use crate::traits::Algorithm;
use bitvec::prelude::*;
use num_integer::Integer;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Deserialize)]
pub struct TrialDivisionParams {
    pub n: i64,
    #[serde(default)]
    pub return_factors: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrialDivisionTrace {
    /// Number of divisors tried
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u64>,
    /// Present only when requested
    pub factors: Option<Vec<u64>>,
}

/// Deterministic primality test checking odd divisors up to √n
pub struct TrialDivision;

impl Algorithm for TrialDivision {
    type Params = TrialDivisionParams;
    type Output = bool;
    type Extra = TrialDivisionTrace;
    const NAME: &'static str = "trial_division";
    const CATEGORY: Category = Category::Basic;

    fn run(&self, params: &TrialDivisionParams) -> Outcome<bool, TrialDivisionTrace> {
        let watch = Stopwatch::start();
        let wanted = params.return_factors;
        if params.n < 2 {
            let factors = if wanted { Some(Vec::new()) } else { None };
            return watch.finish(false, TrialDivisionTrace { iterations: None, factors });
        }

        let n = params.n as u64;
        if n.is_even() {
            let factors = if wanted { Some(vec![2]) } else { None };
            return watch.finish(n == 2, TrialDivisionTrace { iterations: Some(1), factors });
        }

        let mut iterations = 0;
        for divisor in (3..=num_integer::sqrt(n)).step_by(2) {
            iterations += 1;
            if n % divisor == 0 {
                let factors = if wanted { Some(vec![divisor]) } else { None };
                return watch.finish(
                    false,
                    TrialDivisionTrace { iterations: Some(iterations), factors },
                );
            }
        }

        let factors = if wanted { Some(Vec::new()) } else { None };
        watch.finish(true, TrialDivisionTrace { iterations: Some(iterations), factors })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SieveParams {
    pub n: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrimeFound {
    pub prime: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SieveTrace {
    pub frames: Vec<Frame<PrimeFound>>,
}

/// Sieve of Eratosthenes, emitting a frame for each sieving prime
pub struct SieveEratosthenes;

impl Algorithm for SieveEratosthenes {
    type Params = SieveParams;
    type Output = Vec<u64>;
    type Extra = SieveTrace;
    const NAME: &'static str = "sieve_eratosthenes";
    const CATEGORY: Category = Category::Basic;

    fn run(&self, params: &SieveParams) -> Outcome<Vec<u64>, SieveTrace> {
        let watch = Stopwatch::start();
        if params.n < 2 {
            return watch.finish(Vec::new(), SieveTrace::default());
        }

        let mut frames = Vec::new();
        let flags = sieve(params.n as u64, |p| frames.push(Frame::new(p, PrimeFound { prime: p })));
        let primes = flags.iter_ones().map(|p| p as u64).collect();
        watch.finish(primes, SieveTrace { frames })
    }
}

/// Sieve of Atkin, based on toggling solutions of three quadratic forms
pub struct SieveAtkin;

impl SieveAtkin {
    fn toggle(flags: &mut BitVec, m: u64) {
        let idx = m as usize;
        let cur = flags[idx];
        flags.set(idx, !cur);
    }
}

impl Algorithm for SieveAtkin {
    type Params = SieveParams;
    type Output = Vec<u64>;
    type Extra = NoExtra;
    const NAME: &'static str = "sieve_atkin";
    const CATEGORY: Category = Category::Basic;

    fn run(&self, params: &SieveParams) -> Outcome<Vec<u64>, NoExtra> {
        let watch = Stopwatch::start();
        if params.n < 2 {
            return watch.finish(Vec::new(), NoExtra {});
        }

        let n = params.n as u64;
        let mut flags = bitvec![0; n as usize + 1];
        let bound = num_integer::sqrt(n) + 1;
        for x in 1..bound {
            for y in 1..bound {
                let m = 4 * x * x + y * y;
                if m <= n && (m % 12 == 1 || m % 12 == 5) {
                    Self::toggle(&mut flags, m);
                }
                let m = 3 * x * x + y * y;
                if m <= n && m % 12 == 7 {
                    Self::toggle(&mut flags, m);
                }
                if x > y {
                    let m = 3 * x * x - y * y;
                    if m <= n && m % 12 == 11 {
                        Self::toggle(&mut flags, m);
                    }
                }
            }
        }

        // eliminate numbers that are not square free
        for r in 5..bound {
            if flags[r as usize] {
                let square = r * r;
                for multi in (square..=n).step_by(square as usize) {
                    flags.set(multi as usize, false);
                }
            }
        }

        // 2 and 3 are not produced by the quadratic forms
        let mut primes: Vec<u64> = [2, 3].iter().copied().filter(|&p| p <= n).collect();
        primes.extend(flags.iter_ones().map(|p| p as u64).filter(|&p| p >= 5));
        watch.finish(primes, NoExtra {})
    }
}

fn upper_bound_param() -> Parameter {
    Parameter::new("n", "int", "Upper bound (inclusive) for prime generation.")
}

pub(crate) fn register_trial_division(registry: &mut Registry) -> Result<()> {
    let meta = AlgorithmMeta::new(
        TrialDivision::NAME,
        TrialDivision::CATEGORY,
        "Deterministic primality test by checking divisibility up to √n.",
        "Trial division is the most fundamental primality test. \
         It checks divisibility of n by every odd number up to √n.",
        "O(√n)",
    )
    .param(Parameter::new("n", "int", "Candidate integer to test for primality."))
    .param(
        Parameter::new(
            "return_factors",
            "bool",
            "Include found factors in metadata when composite.",
        )
        .default_value(false),
    )
    .visualization(
        VisualizationHint::new(VisualizationMode::Bars)
            .steps("Highlight each attempted divisor up to √n.")
            .sample(json!({"n": 221})),
    );
    registry.register(TrialDivision, meta)
}

pub(crate) fn register_sieve_eratosthenes(registry: &mut Registry) -> Result<()> {
    let meta = AlgorithmMeta::new(
        SieveEratosthenes::NAME,
        SieveEratosthenes::CATEGORY,
        "Generates all primes ≤ n by iteratively marking multiples.",
        "The sieve of Eratosthenes marks composites by iteratively striking multiples \
         of each discovered prime. Complexity O(n log log n).",
        "O(n log log n)",
    )
    .reference("Knuth, The Art of Computer Programming, Vol. 2, §4.5.4")
    .param(upper_bound_param())
    .visualization(
        VisualizationHint::new(VisualizationMode::Grid)
            .steps("Mark multiples of each prime starting from its square.")
            .sample(json!({"n": 50})),
    );
    registry.register(SieveEratosthenes, meta)
}

pub(crate) fn register_sieve_atkin(registry: &mut Registry) -> Result<()> {
    let meta = AlgorithmMeta::new(
        SieveAtkin::NAME,
        SieveAtkin::CATEGORY,
        "Generates primes ≤ n using quadratic residue filters and toggling.",
        "The sieve of Atkin is an optimized modern sieve using modular quadratic filters \
         to detect potential primes before removing higher powers.",
        "O(n)",
    )
    .reference("A. O. L. Atkin, D. J. Bernstein, Prime sieves using binary quadratic forms, Math. Comp. 73 (2004)")
    .param(upper_bound_param())
    .visualization(
        VisualizationHint::new(VisualizationMode::Grid)
            .steps("Toggle cells based on quadratic forms, then remove multiples of squares.")
            .sample(json!({"n": 60})),
    );
    registry.register(SieveAtkin, meta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial(n: i64, return_factors: bool) -> Outcome<bool, TrialDivisionTrace> {
        TrialDivision.run(&TrialDivisionParams { n, return_factors })
    }

    #[test]
    fn trial_division_test() {
        assert!(trial(29, false).result);
        assert_eq!(trial(29, false).meta.extra.factors, None);

        let res = trial(221, true);
        assert!(!res.result);
        assert_eq!(res.meta.extra.factors, Some(vec![13]));
        assert_eq!(res.meta.extra.iterations, Some(6)); // 3, 5, .., 13

        // even numbers short-circuit
        assert!(trial(2, false).result);
        let res = trial(100, true);
        assert!(!res.result);
        assert_eq!(res.meta.extra.factors, Some(vec![2]));
        assert_eq!(res.meta.extra.iterations, Some(1));

        for n in [-7, 0, 1] {
            let res = trial(n, true);
            assert!(!res.result);
            assert_eq!(res.meta.extra.factors, Some(vec![]));
            assert_eq!(res.meta.extra.iterations, None);
        }

        assert!(trial(3, false).result);
        assert!(!trial(9, false).result);
        assert!(trial(6469693333, false).result);
    }

    fn eratosthenes(n: i64) -> Outcome<Vec<u64>, SieveTrace> {
        SieveEratosthenes.run(&SieveParams { n })
    }

    fn atkin(n: i64) -> Vec<u64> {
        SieveAtkin.run(&SieveParams { n }).result
    }

    #[test]
    fn sieve_eratosthenes_test() {
        let res = eratosthenes(20);
        assert_eq!(res.result, [2, 3, 5, 7, 11, 13, 17, 19]);
        let frames: Vec<_> = res.meta.extra.frames.iter().map(|f| (f.t, f.payload.prime)).collect();
        assert_eq!(frames, [(2, 2), (3, 3)]);

        assert!(eratosthenes(1).result.is_empty());
        assert!(eratosthenes(-3).meta.extra.frames.is_empty());
        assert_eq!(eratosthenes(2).result, [2]);
        assert_eq!(eratosthenes(100).result.len(), 25);
    }

    #[test]
    fn sieve_atkin_test() {
        assert!(atkin(0).is_empty());
        assert!(atkin(1).is_empty());
        assert_eq!(atkin(2), [2]);
        assert_eq!(atkin(3), [2, 3]);
        assert_eq!(atkin(4), [2, 3]);
        assert_eq!(atkin(5), [2, 3, 5]);
        assert_eq!(atkin(60).len(), 17);

        // 25, 49 and 121 are toggled on by the forms and must be removed as non square free
        let primes = atkin(200);
        for square in [25, 49, 121, 169] {
            assert!(!primes.contains(&square));
        }
    }

    #[test]
    fn sieves_agree_test() {
        for n in 2..=2000 {
            assert_eq!(atkin(n), eratosthenes(n).result, "sieves disagree for n = {}", n);
        }
    }
}
