//! Implementations of the catalog algorithms, grouped by category.
//!
//! Every algorithm is a stateless unit struct implementing [crate::Algorithm] with its own
//! request type; the `register_*` functions attach the metadata and are driven by
//! [crate::catalog].

pub mod analytic;
pub mod basic;
pub mod deterministic;
pub mod generating;
pub mod modular;
pub mod probabilistic;
pub mod specialized;

pub use analytic::{PrimeCount, PrimeCountParams, PrimeNumberTheorem};
pub use basic::{SieveAtkin, SieveEratosthenes, SieveParams, TrialDivision, TrialDivisionParams};
pub use deterministic::{LucasLehmer, LucasLehmerParams, WilsonParams, WilsonTest};
pub use generating::{EuclidMullin, MillsFormula, SequenceParams};
pub use modular::{legendre, LegendreParams, LegendreSymbol};
pub use probabilistic::{FermatParams, FermatTest, MillerRabin, MillerRabinParams, ProbableParams};
pub use specialized::{ExponentParams, MersenneCandidate, SophieGermainParams, SophieGermainTest};
