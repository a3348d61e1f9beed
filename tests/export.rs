use prime_catalog::export::{export, export_metadata, export_samples, ExportConfig};
use prime_catalog::{registry, Registry};
use serde_json::Value;
use std::fs;
use std::path::Path;

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn export_metadata_test() {
    let registry = registry().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("algorithms.json");

    export_metadata(&registry, &path).unwrap();
    let value = read_json(&path);
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 13);

    let first = &entries[0];
    assert_eq!(first["name"], "trial_division");
    assert_eq!(first["category"], "basic");
    assert_eq!(first["parameters"][0]["name"], "n");
    assert_eq!(first["parameters"][0]["type"], "int");
    assert_eq!(first["visualization"]["mode"], "bars");
    assert_eq!(first["visualization"]["sample_input"]["n"], 221);

    let names: Vec<_> = entries.iter().map(|e| e["name"].as_str().unwrap()).collect();
    let expected: Vec<_> = prime_catalog::MODULES.iter().map(|e| e.name).collect();
    assert_eq!(names, expected);
    for entry in entries {
        for key in ["summary", "description", "complexity"] {
            assert!(!entry[key].as_str().unwrap().is_empty());
        }
    }
}

#[test]
fn export_samples_test() {
    let registry = registry().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let written = export_samples(&registry, dir.path()).unwrap();
    assert_eq!(written, 13);

    let sample = read_json(&dir.path().join("euclid_mullin_sequence.json"));
    assert_eq!(sample["input"]["k"], 5);
    assert_eq!(sample["output"]["result"], serde_json::json!([2, 3, 7, 43, 13]));

    let sample = read_json(&dir.path().join("lucas_lehmer.json"));
    assert_eq!(sample["input"]["p"], 13);
    assert_eq!(sample["output"]["result"], true);

    for meta in registry.list_algorithms(None) {
        let sample = read_json(&dir.path().join(format!("{}.json", meta.name)));
        assert!(sample["output"].get("error").is_none(), "{}", meta.name);
        assert!(sample["output"]["meta"]["time_ms"].is_number());
    }
}

#[test]
fn export_config_test() {
    let registry = registry().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let config = ExportConfig {
        output: dir.path().join("public").join("algorithms.json"),
        examples_dir: dir.path().join("public").join("examples"),
        samples: false,
    };

    export(&registry, &config).unwrap();
    assert!(config.output.is_file());
    // created even without samples
    assert!(config.examples_dir.is_dir());
    assert_eq!(fs::read_dir(&config.examples_dir).unwrap().count(), 0);

    let config = ExportConfig { samples: true, ..config };
    export(&registry, &config).unwrap();
    assert_eq!(fs::read_dir(&config.examples_dir).unwrap().count(), 13);
}

#[test]
fn empty_registry_export_test() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("algorithms.json");
    export_metadata(&Registry::new(), &path).unwrap();
    assert_eq!(read_json(&path), serde_json::json!([]));
    assert_eq!(export_samples(&Registry::new(), dir.path()).unwrap(), 0);
}
