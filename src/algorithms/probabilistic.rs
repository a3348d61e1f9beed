//! Fermat and Miller-Rabin probable prime tests

use crate::error::Result;
use crate::meta::{AlgorithmMeta, Category, Parameter, VisualizationHint, VisualizationMode};
use crate::outcome::{Outcome, Stopwatch};
use crate::registry::Registry;
use crate::traits::Algorithm;
use num_integer::Integer;
use num_modular::{ModularCoreOps, ModularPow};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

fn default_rounds() -> usize {
    5
}

/// Request of a randomized primality test
#[derive(Debug, Clone, Deserialize)]
pub struct ProbableParams {
    pub n: i64,
    /// Number of random bases drawn when `bases` is not given
    #[serde(default = "default_rounds")]
    pub rounds: usize,
    /// Explicit bases, overriding the random sampling when non-empty
    #[serde(default)]
    pub bases: Option<Vec<u64>>,
    /// Seed for reproducible base sampling
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ProbableParams {
    pub fn new(n: i64) -> Self {
        Self {
            n,
            rounds: default_rounds(),
            bases: None,
            seed: None,
        }
    }

    pub fn seeded(n: i64, rounds: usize, seed: u64) -> Self {
        Self {
            n,
            rounds,
            bases: None,
            seed: Some(seed),
        }
    }

    pub fn with_bases(n: i64, bases: &[u64]) -> Self {
        Self {
            n,
            rounds: bases.len(),
            bases: Some(bases.to_vec()),
            seed: None,
        }
    }

    /// Bases to test against odd n >= 5: the explicit list, or `rounds` bases drawn
    /// uniformly from [2, high]
    fn choose_bases(&self, high: u64) -> Vec<u64> {
        match &self.bases {
            Some(bases) if !bases.is_empty() => bases.clone(),
            _ => {
                let mut rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                (0..self.rounds).map(|_| rng.gen_range(2..=high)).collect()
            }
        }
    }
}

/// Answer for the inputs both tests settle without any base: n < 4 or n even
fn trivial_verdict(n: i64) -> Option<bool> {
    if n < 2 {
        Some(false)
    } else if n == 2 || n == 3 {
        Some(true)
    } else if n.is_even() {
        Some(false)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FermatTrace {
    pub rounds: usize,
    /// Whether a base proved n composite
    pub witness: bool,
    pub bases: Vec<u64>,
}

pub type FermatParams = ProbableParams;

/// Fermat probable prime test: a^(n-1) = 1 (mod n) for every base
pub struct FermatTest;

impl Algorithm for FermatTest {
    type Params = FermatParams;
    type Output = bool;
    type Extra = Option<FermatTrace>;
    const NAME: &'static str = "fermat_test";
    const CATEGORY: Category = Category::Probabilistic;

    fn run(&self, params: &FermatParams) -> Outcome<bool, Option<FermatTrace>> {
        let watch = Stopwatch::start();
        if let Some(verdict) = trivial_verdict(params.n) {
            return watch.finish(verdict, None);
        }

        let n = params.n as u64;
        let bases = params.choose_bases(n - 2);
        let witness = bases.iter().any(|&a| (a % n).powm(n - 1, &n) != 1);
        let trace = FermatTrace {
            rounds: bases.len(),
            witness,
            bases,
        };
        watch.finish(!witness, Some(trace))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MillerRabinTrace {
    pub rounds: usize,
    pub witness: bool,
    pub bases: Vec<u64>,
    /// Exponent of 2 in n-1
    pub s: u32,
    /// Odd part of n-1
    pub d: u64,
}

pub type MillerRabinParams = ProbableParams;

/// Miller-Rabin strong probable prime test
pub struct MillerRabin;

impl MillerRabin {
    /// Check whether odd n (n-1 = d·2^s) is a strong probable prime to base a
    fn is_sprp(n: u64, a: u64, d: u64, s: u32) -> bool {
        let nm1 = n - 1;
        let mut x = (a % n).powm(d, &n);
        if x == 1 || x == nm1 {
            return true;
        }
        for _ in 1..s {
            x = x.mulm(x, &n);
            if x == nm1 {
                return true;
            }
        }
        false
    }
}

impl Algorithm for MillerRabin {
    type Params = MillerRabinParams;
    type Output = bool;
    type Extra = Option<MillerRabinTrace>;
    const NAME: &'static str = "miller_rabin";
    const CATEGORY: Category = Category::Probabilistic;

    fn run(&self, params: &MillerRabinParams) -> Outcome<bool, Option<MillerRabinTrace>> {
        let watch = Stopwatch::start();
        if let Some(verdict) = trivial_verdict(params.n) {
            return watch.finish(verdict, None);
        }

        // find 2^s*d + 1 = n
        let n = params.n as u64;
        let s = (n - 1).trailing_zeros();
        let d = (n - 1) >> s;

        // random bases come from [2, n-3]
        let bases = params.choose_bases(n - 3);
        let witness = bases.iter().any(|&a| !Self::is_sprp(n, a, d, s));
        let trace = MillerRabinTrace {
            rounds: bases.len(),
            witness,
            bases,
            s,
            d,
        };
        watch.finish(!witness, Some(trace))
    }
}

fn sampling_params(bases_doc: &str) -> [Parameter; 4] {
    [
        Parameter::new("n", "int", "Candidate integer to test for primality."),
        Parameter::new("rounds", "int", "Number of random bases when 'bases' not provided.")
            .default_value(5),
        Parameter::new("bases", "Iterable[int]", bases_doc).default_value(Value::Null),
        Parameter::new("seed", "Optional[int]", "Seed for reproducible base sampling.")
            .default_value(Value::Null),
    ]
}

pub(crate) fn register_fermat(registry: &mut Registry) -> Result<()> {
    let mut meta = AlgorithmMeta::new(
        FermatTest::NAME,
        FermatTest::CATEGORY,
        "Probabilistic primality test using Fermat's little theorem.",
        "Chooses random bases a and checks whether a^(n-1) ≡ 1 (mod n). \
         A violation identifies a composite. Susceptible to Carmichael numbers.",
        "O(rounds * log^3 n) for modular exponentiation",
    );
    for param in sampling_params("Explicit bases; overrides random sampling when provided.") {
        meta = meta.param(param);
    }
    let meta = meta.visualization(
        VisualizationHint::new(VisualizationMode::Curve)
            .steps("Plot pow(a, n-1, n) for each base and flag witnesses.")
            .sample(json!({"n": 341, "rounds": 5, "seed": 42})),
    );
    registry.register(FermatTest, meta)
}

pub(crate) fn register_miller_rabin(registry: &mut Registry) -> Result<()> {
    let mut meta = AlgorithmMeta::new(
        MillerRabin::NAME,
        MillerRabin::CATEGORY,
        "Probabilistic primality test using Miller–Rabin strong pseudoprime rounds.",
        "Miller–Rabin writes n-1 = d·2^s and checks whether random bases witness compositeness. \
         If all rounds pass, n is probably prime with error ≤ 4^-rounds.",
        "O(rounds * log^3 n)",
    )
    .reference("M. O. Rabin, Probabilistic algorithm for testing primality, J. Number Theory 12 (1980)");
    for param in sampling_params("Optional explicit bases to test.") {
        meta = meta.param(param);
    }
    let meta = meta.visualization(
        VisualizationHint::new(VisualizationMode::Bars)
            .steps("Show modular exponentiation traces for each base; flag first witness.")
            .sample(json!({"n": 561, "rounds": 5, "seed": 7})),
    );
    registry.register(MillerRabin, meta)
}
