//! A catalog of prime number algorithms with metadata for visualization.
//!
//! Every algorithm implements [Algorithm] with a typed request and returns an [Outcome]
//! (`{result, meta}`). A [Registry] stores the algorithms by name together with their
//! [AlgorithmMeta], and [load_all_algorithms] fills a registry with the whole catalog.

pub mod algorithms;
mod catalog;
mod error;
pub mod export;
mod meta;
mod nt_funcs;
mod outcome;
mod registry;
mod traits;

pub use catalog::{load_all_algorithms, registry, shared, CatalogEntry, MODULES};
pub use error::{Error, Result};
pub use meta::{AlgorithmMeta, Category, Parameter, VisualizationHint, VisualizationMode};
pub use outcome::{BigNum, Frame, NoExtra, Outcome, RunMeta, Stopwatch};
pub use registry::Registry;
pub use traits::{Algorithm, DynAlgorithm};

pub mod detail {
    pub use super::nt_funcs::{is_prime_basic, primes_up_to, sieve, smallest_prime_factor};
}
