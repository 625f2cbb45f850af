//! Laws that hold for any input: extraction never fails, results are
//! deterministic, and project totals agree with per-file searches

use gdscope::{
    extract_dependencies, extract_symbols, find_references_in_source, parse_source,
    render_structure, Analyzer, SymbolKind,
};

use crate::common::TestProject;

const ASSORTED_INPUTS: &[&str] = &[
    "",
    "   \n\n\t\n",
    "func",
    "func (:",
    "class",
    "signal",
    "extends",
    "var = = =",
    "enum {",
    "const X = preload(",
    "preload(\"res://a.gd\"",
    "@@@ ### $$$",
    "\"unterminated string",
    "func _ready():\n\tvar 名前 = \"ünïcödé\"\n",
    "class A:\n\tclass B:\n\t\tclass C:\n\t\t\tfunc deep():\n\t\t\t\tpass\n",
    "\u{0}\u{1}\u{2}",
];

fn extract_all(source: &str) -> (String, String) {
    let tree = parse_source(source).expect("parser should accept any text");
    let symbols = extract_symbols(tree.root_node(), source);
    let dependencies = extract_dependencies(tree.root_node(), source);
    (
        render_structure(&symbols),
        serde_json::to_string(&dependencies).unwrap(),
    )
}

#[test]
fn test_extraction_total_on_assorted_inputs() {
    for input in ASSORTED_INPUTS {
        let (structure, _) = extract_all(input);
        assert!(
            structure.starts_with("=== GDScript File Structure ==="),
            "bad outline for {input:?}"
        );
        Analyzer::new()
            .analyze_code(input)
            .unwrap_or_else(|e| panic!("analyze_code failed on {input:?}: {e}"));
    }
}

#[test]
fn test_extraction_is_deterministic() {
    let source = "extends \"res://base.gd\"\nsignal hit\nvar hp = 3\nfunc f():\n\thp = 2\n";
    let first = extract_all(source);
    for _ in 0..5 {
        assert_eq!(extract_all(source), first);
    }
}

#[test]
fn test_deep_nesting_terminates() {
    for depth in [50, 1_000, 5_000] {
        let source = format!("var x = {}1{}\n", "[".repeat(depth), "]".repeat(depth));
        let (structure, _) = extract_all(&source);
        assert!(structure.contains("x (line 1)"));

        let refs = find_references_in_source(&source, "x").unwrap();
        assert_eq!(refs.len(), 1);
    }
}

#[test]
fn test_preload_count_matches_literal_calls() {
    for count in [0, 1, 3, 8] {
        let source: String = (0..count)
            .map(|i| format!("const R{i} = preload(\"res://r{i}.tscn\")\n"))
            .collect();
        let tree = parse_source(&source).unwrap();
        let deps = extract_dependencies(tree.root_node(), &source);

        let expected: Vec<String> = (0..count).map(|i| format!("res://r{i}.tscn")).collect();
        assert_eq!(deps.preload, expected);
    }
}

#[test]
fn test_paths_never_keep_quotes() {
    let source = "extends 'res://base.gd'\nconst A = preload('res://a.gd')\nconst B = preload(\"res://b.gd\")\n";
    let tree = parse_source(source).unwrap();
    let deps = extract_dependencies(tree.root_node(), source);

    for path in deps.extends.iter().chain(&deps.preload) {
        assert!(!path.starts_with(['"', '\'']), "quoted: {path}");
        assert!(!path.ends_with(['"', '\'']), "quoted: {path}");
    }
    assert_eq!(deps.preload, vec!["res://a.gd", "res://b.gd"]);
}

#[test]
fn test_summary_matches_table() {
    let source = "class A:\n\tpass\nsignal s\nenum E { X }\nvar v\nfunc f():\n\tpass\nfunc g():\n\tpass\n";
    let tree = parse_source(source).unwrap();
    let symbols = extract_symbols(tree.root_node(), source);
    let summary = symbols.summary();

    for kind in SymbolKind::PRIORITY {
        let total = match kind {
            SymbolKind::Class => summary.total_classes,
            SymbolKind::Function => summary.total_functions,
            SymbolKind::Signal => summary.total_signals,
            SymbolKind::Variable => summary.total_variables,
            SymbolKind::Enum => summary.total_enums,
        };
        assert_eq!(total, symbols.get(kind).len(), "{kind:?}");
    }
    assert_eq!(summary.total_functions, 2);
}

#[test]
fn test_project_total_is_sum_of_file_searches() {
    let files = [
        ("a.gd", "var score = 0\nfunc add():\n\tscore += 1\n"),
        ("b/b.gd", "func show(score):\n\tprint(score)\n\tprint(\"score\")\n"),
        ("b/c/c.gdscript", "var high_score = 0\n"),
        ("d.gd", "func reset():\n\tscore = 0\n\tscore = score\n"),
    ];
    let project = TestProject::new();
    for (path, content) in files {
        project.add_file(path, content);
    }

    let analyzer = project.analyzer();
    analyzer.set_project_root(".").unwrap();
    let report = analyzer.find_references("score", None).unwrap();

    let per_file: usize = files
        .iter()
        .map(|(path, _)| {
            analyzer
                .find_references("score", Some(*path))
                .unwrap()
                .total_references
        })
        .sum();
    assert_eq!(report.total_references, per_file);
    assert_eq!(report.total_references, report.references.len());
    assert_eq!(per_file, 7);
}
