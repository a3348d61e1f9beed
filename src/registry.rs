//! Name keyed store of algorithms and their metadata

use crate::error::{Error, Result};
use crate::meta::{AlgorithmMeta, Category};
use crate::traits::{Algorithm, DynAlgorithm};
use log::debug;
use serde_json::Value;
use std::collections::HashMap;

/// Registry mapping algorithm names to the executable algorithm and its metadata.
///
/// Both mappings share the same keys. Names are unique, listings follow registration order.
/// A registry is populated once (see [crate::catalog::load_all_algorithms]) and is read-only
/// afterwards, so it can be shared between threads without locking.
#[derive(Default)]
pub struct Registry {
    algorithms: HashMap<String, Box<dyn DynAlgorithm>>,
    metadata: HashMap<String, AlgorithmMeta>,
    order: Vec<String>,
}

impl Registry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an algorithm together with its metadata
    pub fn register<A: Algorithm>(&mut self, algorithm: A, meta: AlgorithmMeta) -> Result<()> {
        self.register_dyn(Box::new(algorithm), meta)
    }

    /// Register a type erased algorithm. Fails with a configuration error if the name is taken
    /// or if the metadata describes a different algorithm.
    pub fn register_dyn(
        &mut self,
        algorithm: Box<dyn DynAlgorithm>,
        meta: AlgorithmMeta,
    ) -> Result<()> {
        let name = algorithm.name();
        if meta.name != name {
            return Err(Error::MetadataMismatch {
                algorithm: name.to_string(),
                meta: meta.name,
            });
        }
        if self.algorithms.contains_key(name) {
            return Err(Error::DuplicateAlgorithm(name.to_string()));
        }

        debug!("registered algorithm {} ({})", name, algorithm.category());
        self.algorithms.insert(name.to_string(), algorithm);
        self.metadata.insert(name.to_string(), meta);
        self.order.push(name.to_string());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&dyn DynAlgorithm> {
        self.algorithms
            .get(name)
            .map(|a| a.as_ref())
            .ok_or_else(|| Error::UnknownAlgorithm(name.to_string()))
    }

    pub fn get_metadata(&self, name: &str) -> Result<&AlgorithmMeta> {
        self.metadata
            .get(name)
            .ok_or_else(|| Error::UnknownAlgorithm(name.to_string()))
    }

    /// Metadata of all algorithms, or of one category only, in registration order
    pub fn list_algorithms(&self, category: Option<Category>) -> Vec<&AlgorithmMeta> {
        self.order
            .iter()
            .filter_map(|name| self.metadata.get(name))
            .filter(|meta| category.map_or(true, |c| meta.category == c))
            .collect()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.algorithms.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Run the named algorithm with a JSON object of named parameters, returning
    /// `{"result": .., "meta": {"time_ms": .., ..}}`
    pub fn invoke(&self, name: &str, params: &Value) -> Result<Value> {
        self.get(name)?.run_json(params)
    }
}
