// Extension routing and parallel directory extraction.

use crate::cli::{ExtractionConfig, ParallelExtractor};
use crate::extractors::base::SymbolKind;
use crate::extractors::ExtractorManager;
use std::fs;

#[test]
fn test_php_extensions_are_supported() {
    let manager = ExtractorManager::new();
    for name in [
        "index.php",
        "legacy.php3",
        "page.phtml",
        "UPPER.PHP",
        "dir/nested/app.php",
    ] {
        assert!(manager.is_supported(name), "{name} should be supported");
    }
}

#[test]
fn test_unknown_extensions_yield_empty_results() {
    let manager = ExtractorManager::new();
    assert!(!manager.is_supported("notes.txt"));

    let symbols = manager
        .extract_symbols("notes.txt", "class NotPhp {}")
        .unwrap();
    assert!(symbols.is_empty());
}

#[test]
fn test_extract_symbols_routes_php() {
    let manager = ExtractorManager::new();
    let symbols = manager
        .extract_symbols("app.php", "class App {\n}\n")
        .unwrap();

    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].name, "App");
    assert_eq!(symbols[0].language, "php");
    assert_eq!(symbols[0].file_path, "app.php");
}

#[test]
fn test_parallel_extraction_over_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("a.php"),
        "class A {\n  public function go() {\n  }\n}\n",
    )
    .unwrap();
    fs::write(dir.path().join("b.php"), "function solo() {\n}\n").unwrap();
    fs::write(dir.path().join("ignored.txt"), "class Nope {}\n").unwrap();

    let extractor = ParallelExtractor::new(ExtractionConfig { num_threads: 2 });
    let results = extractor
        .extract_paths(&[dir.path().to_path_buf()])
        .unwrap();

    assert_eq!(results.len(), 2);
    // Sorted by path
    assert!(results[0].0.ends_with("a.php"));
    assert!(results[1].0.ends_with("b.php"));

    let a_symbols = &results[0].1;
    assert_eq!(a_symbols.len(), 2);
    assert_eq!(a_symbols[0].kind, SymbolKind::Class);
    assert_eq!(a_symbols[1].scope_name, Some("A".to_string()));

    assert_eq!(results[1].1[0].name, "solo");
}

#[test]
fn test_missing_path_is_skipped() {
    let extractor = ParallelExtractor::new(ExtractionConfig { num_threads: 1 });
    let results = extractor
        .extract_paths(&[std::path::PathBuf::from("does/not/exist.php")])
        .unwrap();
    assert!(results.is_empty());
}
