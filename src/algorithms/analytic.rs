use crate::error::Result;
use crate::meta::{AlgorithmMeta, Category, Parameter, VisualizationHint, VisualizationMode};
use crate::nt_funcs::primes_up_to;
use crate::outcome::{NoExtra, Outcome, Stopwatch};
use crate::registry::Registry;
use crate::traits::Algorithm;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Logarithmic integral approximation by the first terms of its asymptotic series,
/// li(x) ≈ x/ln x + x/(ln x)² + 2x/(ln x)³
pub fn li_approx(n: u64) -> f64 {
    if n < 2 {
        return 0.;
    }
    let x = n as f64;
    let inv = 1. / x.ln();
    x * (inv + inv.powi(2) + 2. * inv.powi(3))
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrimeCountParams {
    pub n: i64,
}

/// π(n) together with its analytic estimates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PrimeCount {
    pub actual: u64,
    /// n / ln n
    pub pnt: f64,
    pub li: f64,
}

/// Compares the prime counting function with the Prime Number Theorem estimates
pub struct PrimeNumberTheorem;

impl Algorithm for PrimeNumberTheorem {
    type Params = PrimeCountParams;
    type Output = PrimeCount;
    type Extra = NoExtra;
    const NAME: &'static str = "prime_number_theorem";
    const CATEGORY: Category = Category::Analytic;

    fn run(&self, params: &PrimeCountParams) -> Outcome<PrimeCount, NoExtra> {
        let watch = Stopwatch::start();
        if params.n < 2 {
            return watch.finish(PrimeCount::default(), NoExtra {});
        }

        let n = params.n as u64;
        let count = PrimeCount {
            actual: primes_up_to(n).len() as u64,
            pnt: n as f64 / (n as f64).ln(),
            li: li_approx(n),
        };
        watch.finish(count, NoExtra {})
    }
}

pub(crate) fn register_prime_number_theorem(registry: &mut Registry) -> Result<()> {
    let meta = AlgorithmMeta::new(
        PrimeNumberTheorem::NAME,
        PrimeNumberTheorem::CATEGORY,
        "Compares actual π(n) with Prime Number Theorem and logarithmic integral estimates.",
        "Counts primes ≤ n and returns approximations π(n) ≈ n/log n and Li(n). \
         Useful to visualize asymptotic accuracy of analytic estimates.",
        "O(n log log n) to count primes + constant-time approximations",
    )
    .param(Parameter::new("n", "int", "Upper bound for prime counting."))
    .visualization(
        VisualizationHint::new(VisualizationMode::Curve)
            .steps("Plot actual π(n) alongside n/log n and Li(n) approximations.")
            .sample(json!({"n": 1000})),
    );
    registry.register(PrimeNumberTheorem, meta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: i64) -> PrimeCount {
        PrimeNumberTheorem.run(&PrimeCountParams { n }).result
    }

    #[test]
    fn prime_count_test() {
        // OEIS A006880
        let pi = [(10, 4), (100, 25), (1000, 168), (10000, 1229), (100000, 9592)];
        for (n, actual) in pi {
            let c = count(n);
            assert_eq!(c.actual, actual);
            // n / ln n underestimates π(n) for n >= 17
            if n >= 17 {
                assert!(c.pnt < actual as f64, "pnt estimate at {}", n);
            }
            assert!(c.li > c.pnt);
        }

        let c = count(1000);
        assert!((c.pnt - 144.7648).abs() < 1e-3);
        assert!((li_approx(1000) - c.li).abs() < 1e-12);

        assert_eq!(count(1), PrimeCount::default());
        assert_eq!(count(-10), PrimeCount { actual: 0, pnt: 0., li: 0. });
        assert_eq!(count(2).actual, 1);
    }
}
