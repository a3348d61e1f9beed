//! Lucas-Lehmer test for Mersenne numbers and Wilson's theorem

use crate::error::Result;
use crate::meta::{AlgorithmMeta, Category, Parameter, VisualizationHint, VisualizationMode};
use crate::outcome::{BigNum, Frame, Outcome, Stopwatch};
use crate::registry::Registry;
use crate::traits::Algorithm;
use num_bigint::BigUint;
use num_modular::ModularCoreOps;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Deserialize)]
pub struct LucasLehmerParams {
    /// Exponent of the Mersenne number 2^p - 1
    pub p: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LucasState {
    pub s: BigNum,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LucasLehmerTrace {
    pub iterations: u64,
    /// s_0 = 4 followed by every s_i mod 2^p - 1
    pub frames: Vec<Frame<LucasState>>,
}

/// Lucas-Lehmer test: 2^p - 1 is prime iff s_(p-2) = 0 (mod 2^p - 1)
pub struct LucasLehmer;

impl Algorithm for LucasLehmer {
    type Params = LucasLehmerParams;
    type Output = bool;
    type Extra = Option<LucasLehmerTrace>;
    const NAME: &'static str = "lucas_lehmer";
    const CATEGORY: Category = Category::Deterministic;

    fn run(&self, params: &LucasLehmerParams) -> Outcome<bool, Option<LucasLehmerTrace>> {
        let watch = Stopwatch::start();
        if params.p == 2 {
            return watch.finish(true, None);
        }
        if params.p < 2 {
            return watch.finish(false, None);
        }

        let p = params.p as u64;
        let mersenne = (BigUint::one() << p as usize) - 1u32;
        let mut s = BigUint::from(4u32);
        let mut frames = vec![Frame::new(0, LucasState { s: BigNum(s.clone()) })];
        for i in 1..=(p - 2) {
            // s² - 2 may be negative for s < 2, so shift by the modulus before subtracting
            s = (&s * &s + &mersenne - 2u32) % &mersenne;
            frames.push(Frame::new(i, LucasState { s: BigNum(s.clone()) }));
        }

        let trace = LucasLehmerTrace {
            iterations: p - 2,
            frames,
        };
        watch.finish(s.is_zero(), Some(trace))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WilsonParams {
    pub n: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WilsonTrace {
    /// Length of the factor range 2..n, reported in full even when the product hits 0 early
    pub iterations: u64,
}

/// Wilson's theorem: n is prime iff (n-1)! = -1 (mod n)
pub struct WilsonTest;

impl Algorithm for WilsonTest {
    type Params = WilsonParams;
    type Output = bool;
    type Extra = Option<WilsonTrace>;
    const NAME: &'static str = "wilson_test";
    const CATEGORY: Category = Category::Deterministic;

    fn run(&self, params: &WilsonParams) -> Outcome<bool, Option<WilsonTrace>> {
        let watch = Stopwatch::start();
        if params.n < 2 {
            return watch.finish(false, None);
        }
        if params.n == 2 {
            return watch.finish(true, None);
        }

        let n = params.n as u64;
        let mut factorial = 1u64;
        for i in 2..n {
            factorial = factorial.mulm(i, &n);
            if factorial == 0 {
                break;
            }
        }

        let prime = (factorial + 1) % n == 0;
        watch.finish(prime, Some(WilsonTrace { iterations: n - 2 }))
    }
}

pub(crate) fn register_lucas_lehmer(registry: &mut Registry) -> Result<()> {
    let meta = AlgorithmMeta::new(
        LucasLehmer::NAME,
        LucasLehmer::CATEGORY,
        "Deterministic test for Mersenne primes with exponent p.",
        "Lucas–Lehmer test checks whether 2^p - 1 is prime. \
         Iteratively computes s_{i+1} = s_i^2 - 2 modulo M_p.",
        "O(p log^2 p)",
    )
    .reference("D. H. Lehmer, An extended theory of Lucas' functions, Ann. of Math. 31 (1930)")
    .param(Parameter::new(
        "p",
        "int",
        "Prime exponent for Mersenne number 2^p - 1.",
    ))
    .visualization(
        VisualizationHint::new(VisualizationMode::Curve)
            .steps("Plot sequence s_i modulo M_p; prime iff final state is 0.")
            .sample(json!({"p": 13})),
    );
    registry.register(LucasLehmer, meta)
}

pub(crate) fn register_wilson(registry: &mut Registry) -> Result<()> {
    let meta = AlgorithmMeta::new(
        WilsonTest::NAME,
        WilsonTest::CATEGORY,
        "Deterministic primality test using Wilson's theorem.",
        "Wilson's theorem states that n is prime iff (n-1)! ≡ -1 (mod n). \
         This implementation computes factorial modulo n.",
        "O(n)",
    )
    .param(Parameter::new(
        "n",
        "int",
        "Candidate integer to test for primality.",
    ))
    .visualization(
        VisualizationHint::new(VisualizationMode::Bars)
            .steps("Accumulate factorial modulo n and observe when it deviates.")
            .sample(json!({"n": 11})),
    );
    registry.register(WilsonTest, meta)
}
