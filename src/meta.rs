//! Descriptive metadata attached to every registered algorithm.
//!
//! The records are purely informational: they feed documentation and the JSON export consumed
//! by the visualization frontend, and are never used to validate a call.

use crate::error::Error;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Family of an algorithm, used for grouping in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Basic,
    Probabilistic,
    Deterministic,
    Generating,
    Specialized,
    Modular,
    Analytic,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Basic,
        Category::Probabilistic,
        Category::Deterministic,
        Category::Generating,
        Category::Specialized,
        Category::Modular,
        Category::Analytic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Basic => "basic",
            Category::Probabilistic => "probabilistic",
            Category::Deterministic => "deterministic",
            Category::Generating => "generating",
            Category::Specialized => "specialized",
            Category::Modular => "modular",
            Category::Analytic => "analytic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Rendering style suggested to the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualizationMode {
    Bars,
    Grid,
    Graph,
    Curve,
    Custom,
}

/// A declared parameter. `ty` is a human readable type description, not a type check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
    pub default: Option<Value>,
}

impl Parameter {
    pub fn new(name: &str, ty: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            description: description.to_string(),
            default: None,
        }
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualizationHint {
    pub mode: VisualizationMode,
    pub steps: Option<String>,
    /// Parameters used to generate an example run, keyed by parameter name
    pub sample_input: Option<Map<String, Value>>,
}

impl VisualizationHint {
    pub fn new(mode: VisualizationMode) -> Self {
        Self {
            mode,
            steps: None,
            sample_input: None,
        }
    }

    pub fn steps(mut self, steps: &str) -> Self {
        self.steps = Some(steps.to_string());
        self
    }

    /// Set the sample input. Anything but a JSON object is ignored.
    pub fn sample(mut self, input: Value) -> Self {
        if let Value::Object(map) = input {
            self.sample_input = Some(map);
        }
        self
    }
}

/// Immutable description of an algorithm, created once at registration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmMeta {
    pub name: String,
    pub category: Category,
    pub summary: String,
    pub description: String,
    pub complexity: String,
    pub references: Vec<String>,
    pub parameters: Vec<Parameter>,
    pub visualization: Option<VisualizationHint>,
}

impl AlgorithmMeta {
    pub fn new(
        name: &str,
        category: Category,
        summary: &str,
        description: &str,
        complexity: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            category,
            summary: summary.to_string(),
            description: description.to_string(),
            complexity: complexity.to_string(),
            references: Vec::new(),
            parameters: Vec::new(),
            visualization: None,
        }
    }

    pub fn reference(mut self, citation: &str) -> Self {
        self.references.push(citation.to_string());
        self
    }

    pub fn param(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn visualization(mut self, hint: VisualizationHint) -> Self {
        self.visualization = Some(hint);
        self
    }

    /// The sample input declared by the visualization hint, if any
    pub fn sample_input(&self) -> Option<&Map<String, Value>> {
        self.visualization
            .as_ref()
            .and_then(|v| v.sample_input.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_parse_test() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>().unwrap(), c);
        }
        assert!(matches!(
            "heuristic".parse::<Category>(),
            Err(Error::UnknownCategory(s)) if s == "heuristic"
        ));
    }

    #[test]
    fn meta_serialization_test() {
        let meta = AlgorithmMeta::new("demo", Category::Modular, "s", "d", "O(1)")
            .param(Parameter::new("rounds", "int", "Rounds.").default_value(5))
            .visualization(
                VisualizationHint::new(VisualizationMode::Graph).sample(json!({"p": 23, "a": 7})),
            );
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["category"], "modular");
        assert_eq!(value["references"], json!([]));
        assert_eq!(value["parameters"][0]["type"], "int");
        assert_eq!(value["parameters"][0]["default"], 5);
        assert_eq!(value["visualization"]["mode"], "graph");
        assert_eq!(value["visualization"]["steps"], Value::Null);
        assert_eq!(value["visualization"]["sample_input"]["p"], 23);
        assert_eq!(meta.sample_input().unwrap()["a"], 7);
    }
}
