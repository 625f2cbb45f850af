//! Single-file tools: analyze, structure, symbol, dependencies, inline code

use gdscope::{Analyzer, AnalyzerError, ErrorCategory, SymbolKind};

use crate::common::{fixture, TestProject};

fn names(symbols: &[gdscope::Symbol]) -> Vec<&str> {
    symbols.iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn test_analyze_fixture_file() {
    let analyzer = Analyzer::new();
    let result = analyzer
        .analyze_file(&fixture("sample_player.gd"))
        .expect("analysis should succeed");

    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("file").is_some());
    assert!(json.get("symbols").is_some());
    assert!(json.get("summary").is_some());

    let symbols = &result.symbols;
    assert_eq!(names(&symbols.classes), vec!["Inventory"]);
    assert_eq!(
        names(&symbols.functions),
        vec!["_ready", "take_damage", "rename", "add_item"]
    );
    assert_eq!(names(&symbols.signals), vec!["health_changed", "died"]);
    assert_eq!(names(&symbols.enums), vec!["State"]);
    assert!(names(&symbols.variables).contains(&"player_name"));
    assert!(names(&symbols.variables).contains(&"items"));
    assert_eq!(result.summary.total_functions, 4);
}

#[test]
fn test_analyze_nonexistent_file() {
    let err = Analyzer::new()
        .analyze_file("/nonexistent/file.gd")
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert!(err.to_string().to_lowercase().contains("not found"));
}

#[test]
fn test_analyze_non_gdscript_file() {
    let project = TestProject::new();
    project.add_file("test.txt", "random text");

    let err = project.analyzer().analyze_file("test.txt").unwrap_err();
    assert!(matches!(err, AnalyzerError::UnsupportedFile { .. }));
    assert_eq!(err.category(), ErrorCategory::InvalidInput);
}

#[test]
fn test_gdscript_extension_accepted() {
    let project = TestProject::new();
    project.add_file("Tool.GDScript", "func run():\n\tpass\n");

    let result = project.analyzer().analyze_file("Tool.GDScript").unwrap();
    assert_eq!(result.summary.total_functions, 1);
}

#[test]
fn test_get_structure() {
    let structure = Analyzer::new()
        .get_structure(&fixture("sample_player.gd"))
        .unwrap();

    assert!(structure.starts_with("=== GDScript File Structure ==="));
    let classes = structure.find("Classes:").unwrap();
    let functions = structure.find("Functions:").unwrap();
    let signals = structure.find("Signals:").unwrap();
    let variables = structure.find("Variables:").unwrap();
    let enums = structure.find("Enums:").unwrap();
    assert!(classes < functions && functions < signals);
    assert!(signals < variables && variables < enums);
    assert!(structure.contains("  - _ready (line 16)"));
}

#[test]
fn test_get_structure_nonexistent_file() {
    assert!(Analyzer::new().get_structure("/nonexistent/file.gd").is_err());
}

#[test]
fn test_find_existing_symbol() {
    let found = Analyzer::new()
        .find_symbol(&fixture("sample_player.gd"), "_ready")
        .unwrap();
    assert_eq!(found.kind, SymbolKind::Function);
    assert_eq!(found.name, "_ready");
    assert_eq!((found.line, found.column), (16, 0));

    let json = serde_json::to_value(&found).unwrap();
    assert_eq!(json["type"], "function");
}

#[test]
fn test_find_nonexistent_symbol() {
    let err = Analyzer::new()
        .find_symbol(&fixture("sample_player.gd"), "nonexistent_symbol")
        .unwrap_err();
    assert!(matches!(err, AnalyzerError::SymbolNotFound { .. }));
}

#[test]
fn test_find_symbol_missing_name() {
    let err = Analyzer::new()
        .find_symbol(&fixture("sample_player.gd"), "")
        .unwrap_err();
    assert!(matches!(
        err,
        AnalyzerError::MissingArgument {
            name: "symbol_name"
        }
    ));
}

#[test]
fn test_get_dependencies() {
    let result = Analyzer::new()
        .get_dependencies(&fixture("sample_player.gd"))
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["dependencies"].get("extends").is_some());
    assert!(json["dependencies"].get("import").is_some());

    assert_eq!(
        result.dependencies.preload,
        vec!["res://scenes/bullet.tscn", "res://effects/hit_effect.tscn"]
    );
    // `extends CharacterBody2D` names a class, not a path literal
    assert!(result.dependencies.extends.is_empty());
}

#[test]
fn test_get_dependencies_path_extends() {
    let result = Analyzer::new()
        .get_dependencies(&fixture("project/enemies/goblin.gd"))
        .unwrap();
    assert_eq!(
        result.dependencies.extends,
        vec!["res://enemies/base_enemy.gd"]
    );
}

#[test]
fn test_analyze_code() {
    let code = "extends Node2D\n\nsignal my_signal\n\nvar my_var: int = 10\n\nfunc my_func() -> void:\n\tprint(\"test\")\n\tmy_var = 20\n";
    let result = Analyzer::new().analyze_code(code).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("structure").is_some());
    assert!(json.get("symbols").is_some());
    assert!(json.get("summary").is_some());
    assert!(result.structure.contains("my_func"));
}

#[test]
fn test_find_references_in_file() {
    let report = Analyzer::new()
        .find_references("player_name", Some(fixture("sample_player.gd").as_str()))
        .unwrap();

    assert_eq!(report.symbol, "player_name");
    let lines: Vec<usize> = report.references.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![12, 17, 27]);
    assert_eq!(report.total_references, 3);
}

#[test]
fn test_find_references_nonexistent_file() {
    let err = Analyzer::new()
        .find_references("symbol", Some("/nonexistent/file.gd"))
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
}

#[test]
fn test_find_references_with_no_matches() {
    let report = Analyzer::new()
        .find_references("nonexistent_symbol_xyz", Some(fixture("sample_player.gd").as_str()))
        .unwrap();
    assert_eq!(report.total_references, 0);
    assert!(report.references.is_empty());
}
