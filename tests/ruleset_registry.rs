mod common;

use common::scratch_dir;
use moser_core::Ruleset;
use moser_io::{DuplicateResolution, IoError, RulesetRegistry};

#[test]
fn test_missing_file_loads_predefined_only() {
    let dir = scratch_dir("registry_missing");
    let registry = RulesetRegistry::load(dir.join("rulesets.json")).unwrap();
    assert_eq!(registry.rulesets().len(), 17);
    assert!(registry.custom().is_empty());
    assert!(registry.is_predefined("Stains"));
}

#[test]
fn test_custom_rulesets_persist_across_loads() {
    let dir = scratch_dir("registry_persist");
    let path = dir.join("rulesets.json");

    let mut registry = RulesetRegistry::load(&path).unwrap();
    registry
        .add(Ruleset::from_notation("Sparse", "B1/S1", "thin").unwrap())
        .unwrap();
    registry
        .add(Ruleset::from_notation("Crowd", "B78/S678", "").unwrap())
        .unwrap();
    assert!(path.exists());

    let reloaded = RulesetRegistry::load(&path).unwrap();
    let names: Vec<&str> = reloaded.custom().iter().map(|r| r.name()).collect();
    assert_eq!(names, ["Sparse", "Crowd"]);
    assert_eq!(reloaded.get("Sparse").unwrap().description(), "thin");
    assert_eq!(reloaded.get("Crowd").unwrap().notation(), "B78/S678");
}

#[test]
fn test_saved_file_holds_only_custom_rulesets() {
    let dir = scratch_dir("registry_format");
    let path = dir.join("rulesets.json");
    let mut registry = RulesetRegistry::load(&path).unwrap();
    registry
        .add(Ruleset::new("Mine", [6, 1], [2], "mine"))
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Mine");
    assert_eq!(entries[0]["birth_rules"], serde_json::json!([1, 6]));
    assert_eq!(entries[0]["survival_rules"], serde_json::json!([2]));
}

#[test]
fn test_saved_entries_cannot_shadow_predefined() {
    let dir = scratch_dir("registry_shadow");
    let path = dir.join("rulesets.json");
    std::fs::write(
        &path,
        r#"[
            {"name": "HighLife", "birth_rules": [1], "survival_rules": [1], "description": "fake"},
            {"name": "Mine", "birth_rules": [2, 4], "survival_rules": [], "description": ""}
        ]"#,
    )
    .unwrap();

    let registry = RulesetRegistry::load(&path).unwrap();
    assert_eq!(registry.get("HighLife").unwrap().notation(), "B36/S23");
    assert_eq!(registry.custom().len(), 1);
    assert_eq!(registry.get("Mine").unwrap().notation(), "B24/S");
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = scratch_dir("registry_corrupt");
    let path = dir.join("rulesets.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = RulesetRegistry::load(&path).unwrap_err();
    assert!(err.to_string().contains("loading rulesets"));
}

#[test]
fn test_delete_persists() {
    let dir = scratch_dir("registry_delete");
    let path = dir.join("rulesets.json");
    let mut registry = RulesetRegistry::load(&path).unwrap();
    registry.add(Ruleset::new("Gone", [1], [8], "")).unwrap();
    registry.delete("Gone").unwrap();

    let reloaded = RulesetRegistry::load(&path).unwrap();
    assert!(reloaded.get("Gone").is_none());
    assert!(matches!(
        reloaded.clone().delete("Conway's Game of Life"),
        Err(IoError::PredefinedRuleset { .. })
    ));
}

#[test]
fn test_create_duplicate_persists_both_names() {
    let dir = scratch_dir("registry_duplicate");
    let path = dir.join("rulesets.json");
    let mut registry = RulesetRegistry::load(&path).unwrap();
    registry.add(Ruleset::new("First", [1, 2], [3], "")).unwrap();

    let second = Ruleset::new("Second", [2, 1], [3], "");
    assert!(matches!(
        registry.add(second.clone()),
        Err(IoError::DuplicateRules { ref existing, .. }) if existing == "First"
    ));
    registry
        .resolve_duplicate(second, DuplicateResolution::CreateDuplicate)
        .unwrap();

    let reloaded = RulesetRegistry::load(&path).unwrap();
    assert!(reloaded.get("First").is_some());
    assert!(reloaded.get("Second").is_some());
}

#[test]
fn test_replacing_a_custom_ruleset_keeps_its_position() {
    let dir = scratch_dir("registry_replace");
    let path = dir.join("rulesets.json");
    let mut registry = RulesetRegistry::load(&path).unwrap();
    registry.add(Ruleset::new("A", [1], [1], "")).unwrap();
    registry.add(Ruleset::new("B", [2], [2], "")).unwrap();
    registry.add(Ruleset::new("A", [4], [4], "edited")).unwrap();

    let names: Vec<&str> = registry.custom().iter().map(|r| r.name()).collect();
    assert_eq!(names, ["A", "B"]);
    assert_eq!(registry.get("A").unwrap().notation(), "B4/S4");
}
