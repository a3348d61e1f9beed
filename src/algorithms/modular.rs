use crate::error::Result;
use crate::meta::{AlgorithmMeta, Category, Parameter, VisualizationHint, VisualizationMode};
use crate::nt_funcs::is_prime_basic;
use crate::outcome::{NoExtra, Outcome, Stopwatch};
use crate::registry::Registry;
use crate::traits::Algorithm;
use num_integer::Integer;
use serde::Deserialize;
use serde_json::json;

/// Calculate the Legendre symbol (a|p) for an odd prime p using quadratic reciprocity.
///
/// Reference: H. Cohen, "A Course in Computational Algebraic Number Theory", algorithm 1.4.10
pub fn legendre(a: i64, p: u64) -> i8 {
    let mut a = (a as i128).rem_euclid(p as i128) as u64;
    let mut p = p;

    // shortcuts
    if a == 0 {
        return 0;
    }
    if a == 1 {
        return 1;
    }
    if a == 2 {
        return if matches!(p % 8, 1 | 7) { 1 } else { -1 };
    }
    if a == p - 1 {
        return if p % 4 == 3 { -1 } else { 1 };
    }

    let mut symbol = 1;
    while a != 0 {
        // (2|p) = -1 iff p = 3, 5 mod 8
        while a.is_even() {
            a /= 2;
            if matches!(p % 8, 3 | 5) {
                symbol = -symbol;
            }
        }
        // reciprocity flips the sign iff both are 3 mod 4
        std::mem::swap(&mut a, &mut p);
        if a % 4 == 3 && p % 4 == 3 {
            symbol = -symbol;
        }
        a %= p;
    }

    // p ends as gcd(a, p), which is 1 unless p divides a
    if p == 1 {
        symbol
    } else {
        0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegendreParams {
    pub p: i64,
    pub a: i64,
}

/// Legendre symbol (a|p) for quadratic residue testing
pub struct LegendreSymbol;

impl Algorithm for LegendreSymbol {
    type Params = LegendreParams;
    type Output = Option<i8>;
    type Extra = NoExtra;
    const NAME: &'static str = "legendre_symbol";
    const CATEGORY: Category = Category::Modular;

    fn run(&self, params: &LegendreParams) -> Outcome<Option<i8>, NoExtra> {
        let watch = Stopwatch::start();
        if params.p <= 2 || !is_prime_basic(&params.p) {
            return watch.reject(None, "p must be an odd prime");
        }
        watch.finish(Some(legendre(params.a, params.p as u64)), NoExtra {})
    }
}

pub(crate) fn register_legendre(registry: &mut Registry) -> Result<()> {
    let meta = AlgorithmMeta::new(
        LegendreSymbol::NAME,
        LegendreSymbol::CATEGORY,
        "Computes the Legendre symbol (a|p) for quadratic residue testing.",
        "Uses quadratic reciprocity to determine whether a is a quadratic residue modulo p.",
        "O(log p)",
    )
    .param(Parameter::new("p", "int", "Odd prime modulus."))
    .param(Parameter::new("a", "int", "Residue to test."))
    .visualization(
        VisualizationHint::new(VisualizationMode::Graph)
            .steps("Display residues modulo p and highlight quadratic residues vs. non-residues.")
            .sample(json!({"p": 23, "a": 7})),
    );
    registry.register(LegendreSymbol, meta)
}
