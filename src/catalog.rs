//! The fixed, ordered list of catalog algorithms and its loader

use crate::algorithms::*;
use crate::error::Result;
use crate::registry::Registry;
use crate::traits::Algorithm;
use log::{debug, info};
use once_cell::sync::Lazy;

/// One catalog module: the algorithm name and the function registering it with its metadata
#[derive(Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub register: fn(&mut Registry) -> Result<()>,
}

/// All algorithms in listing order
pub const MODULES: [CatalogEntry; 13] = [
    // basic
    CatalogEntry { name: TrialDivision::NAME, register: basic::register_trial_division },
    CatalogEntry { name: SieveEratosthenes::NAME, register: basic::register_sieve_eratosthenes },
    CatalogEntry { name: SieveAtkin::NAME, register: basic::register_sieve_atkin },
    // probabilistic
    CatalogEntry { name: FermatTest::NAME, register: probabilistic::register_fermat },
    CatalogEntry { name: MillerRabin::NAME, register: probabilistic::register_miller_rabin },
    // deterministic
    CatalogEntry { name: LucasLehmer::NAME, register: deterministic::register_lucas_lehmer },
    CatalogEntry { name: WilsonTest::NAME, register: deterministic::register_wilson },
    // generating
    CatalogEntry { name: EuclidMullin::NAME, register: generating::register_euclid_mullin },
    CatalogEntry { name: MillsFormula::NAME, register: generating::register_mills },
    // specialized
    CatalogEntry { name: MersenneCandidate::NAME, register: specialized::register_mersenne },
    CatalogEntry { name: SophieGermainTest::NAME, register: specialized::register_sophie_germain },
    // modular
    CatalogEntry { name: LegendreSymbol::NAME, register: modular::register_legendre },
    // analytic
    CatalogEntry { name: PrimeNumberTheorem::NAME, register: analytic::register_prime_number_theorem },
];

/// Register every catalog algorithm that is not registered yet.
///
/// Loading is idempotent: entries already present are skipped, so calling this again never
/// produces a duplicate registration. Any other configuration error is returned as is.
pub fn load_all_algorithms(registry: &mut Registry) -> Result<()> {
    let mut loaded = 0;
    for entry in MODULES.iter() {
        if registry.contains(entry.name) {
            debug!("catalog entry {} already loaded", entry.name);
            continue;
        }
        (entry.register)(registry)?;
        loaded += 1;
    }
    info!("catalog loaded {} new algorithms, {} in total", loaded, registry.len());
    Ok(())
}

/// Convenience constructor for a registry holding the whole catalog
pub fn registry() -> Result<Registry> {
    let mut registry = Registry::new();
    load_all_algorithms(&mut registry)?;
    Ok(registry)
}

static SHARED: Lazy<Registry> = Lazy::new(|| match registry() {
    Ok(registry) => registry,
    // a broken catalog is a configuration error, there is nothing to recover
    Err(err) => panic!("failed to load the algorithm catalog: {}", err),
});

/// Process wide catalog, loaded exactly once on first use
pub fn shared() -> &'static Registry {
    &SHARED
}
