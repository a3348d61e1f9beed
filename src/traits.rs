use crate::error::{Error, Result};
use crate::meta::Category;
use crate::outcome::Outcome;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// This trait describes a prime related algorithm with a typed request.
///
/// Implementors are stateless: all state of a run lives inside [Algorithm::run], so one
/// instance can serve concurrent callers.
pub trait Algorithm: Send + Sync + 'static {
    /// Request type, decoded from a JSON object at the untyped boundary
    type Params: DeserializeOwned;

    /// Algorithm specific result (boolean, integer, sequence, ..)
    type Output: Serialize;

    /// Diagnostic fields flattened into the run metadata
    type Extra: Serialize;

    /// Unique name, also used as the registry key
    const NAME: &'static str;

    const CATEGORY: Category;

    /// Execute the algorithm. Inputs outside of the domain produce a sentinel result
    /// instead of failing.
    fn run(&self, params: &Self::Params) -> Outcome<Self::Output, Self::Extra>;
}

/// Object safe view of an [Algorithm], used by the registry to store heterogeneous algorithms
pub trait DynAlgorithm: Send + Sync {
    fn name(&self) -> &'static str;

    fn category(&self) -> Category;

    /// Decode `params` (a JSON object of named parameters), run the algorithm and return
    /// the serialized `{result, meta}` outcome
    fn run_json(&self, params: &Value) -> Result<Value>;
}

impl<A: Algorithm> DynAlgorithm for A {
    #[inline]
    fn name(&self) -> &'static str {
        A::NAME
    }

    #[inline]
    fn category(&self) -> Category {
        A::CATEGORY
    }

    fn run_json(&self, params: &Value) -> Result<Value> {
        let params =
            <A::Params as Deserialize>::deserialize(params).map_err(|source| Error::InvalidParameters {
                algorithm: A::NAME.to_string(),
                source,
            })?;
        Ok(serde_json::to_value(self.run(&params))?)
    }
}
