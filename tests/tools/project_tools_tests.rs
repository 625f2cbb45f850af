//! Project tools: set/get project root and project-wide reference search

use std::fs;

use gdscope::{Analyzer, AnalyzerError, ErrorCategory, RootStatus};

use crate::common::{fixture, fixture_dir, TestProject};

#[test]
fn test_get_project_root_not_set() {
    assert_eq!(Analyzer::new().get_project_root(), RootStatus::Unset);
}

#[test]
fn test_set_valid_project_root() {
    let analyzer = Analyzer::new();
    let result = analyzer
        .set_project_root(&fixture_dir().join("project").to_string_lossy())
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["status"], "success");
    assert!(json.get("project_root").is_some());
    assert_eq!(json["gdscript_files_count"], 3);

    match analyzer.get_project_root() {
        RootStatus::Set { file_count, .. } => assert_eq!(file_count, 3),
        RootStatus::Unset => panic!("root should be set"),
    }
}

#[test]
fn test_set_nonexistent_project_root() {
    let err = Analyzer::new()
        .set_project_root("/nonexistent/path")
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::NotFound);
}

#[test]
fn test_set_file_as_project_root_keeps_prior_state() {
    let analyzer = Analyzer::new();
    analyzer
        .set_project_root(&fixture_dir().join("project").to_string_lossy())
        .unwrap();
    let before = analyzer.get_project_root();

    let err = analyzer
        .set_project_root(&fixture("sample_player.gd"))
        .unwrap_err();
    assert!(matches!(err, AnalyzerError::NotADirectory { .. }));
    assert_eq!(err.category(), ErrorCategory::InvalidInput);

    assert_eq!(analyzer.get_project_root(), before);
}

#[test]
fn test_find_references_without_project_root_or_file() {
    let err = Analyzer::new().find_references("my_symbol", None).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvalidInput);
    assert!(err.to_string().to_lowercase().contains("project root"));
}

#[test]
fn test_find_references_in_project() {
    let analyzer = Analyzer::new();
    analyzer
        .set_project_root(&fixture_dir().join("project").to_string_lossy())
        .unwrap();

    let report = analyzer.find_references("player_name", None).unwrap();
    assert_eq!(report.symbol, "player_name");
    assert_eq!(report.files_searched, Some(3));
    assert_eq!(report.total_references, report.references.len());
    assert!(report.references.iter().all(|r| r.file.is_some()));

    let main_lines: Vec<usize> = report
        .references
        .iter()
        .filter(|r| r.file.as_deref().is_some_and(|f| f.ends_with("main.gd")))
        .map(|r| r.line)
        .collect();
    assert_eq!(main_lines, vec![3, 6]);

    // Discovery order: enemies/ sorts before main.gd
    let last = report.references.last().unwrap();
    assert!(last.file.as_deref().unwrap().ends_with("main.gd"));
}

#[test]
fn test_project_search_skips_bad_files() {
    let project = TestProject::new();
    project
        .add_file("a.gd", "var coins = 0\nfunc add():\n\tcoins += 1\n")
        .add_bytes("broken.gd", &[0xc3, 0x28, 0xff])
        .add_file("ui/shop.gd", "func buy(coins):\n\treturn coins > 5\n");

    let analyzer = project.analyzer();
    analyzer.set_project_root(".").unwrap();

    let report = analyzer.find_references("coins", None).unwrap();
    assert_eq!(report.total_references, 4);
    assert_eq!(report.files_searched, Some(3));

    let skipped = report.skipped_files.expect("project mode reports skips");
    assert_eq!(skipped.len(), 1);
    assert!(skipped[0].file.ends_with("broken.gd"));
}

#[test]
fn test_root_rescan_picks_up_new_files() {
    let project = TestProject::new();
    project.add_file("a.gd", "var gold = 1\n");

    let analyzer = project.analyzer();
    assert_eq!(analyzer.set_project_root(".").unwrap().gdscript_files_count, 1);

    fs::write(project.path().join("b.gd"), "var gold = 2\n").unwrap();
    // Cached list is not refreshed until the root is set again
    assert_eq!(analyzer.find_references("gold", None).unwrap().total_references, 1);

    assert_eq!(analyzer.set_project_root(".").unwrap().gdscript_files_count, 2);
    assert_eq!(analyzer.find_references("gold", None).unwrap().total_references, 2);
}
