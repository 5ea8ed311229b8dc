use mason::constants::IGNORE_FILE;
use mason::ignore::IgnoreRules;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_builtin_patterns_without_ignore_file() {
    let temp_dir = TempDir::new().unwrap();
    let rules = IgnoreRules::load(temp_dir.path()).unwrap();

    assert!(rules.should_ignore(temp_dir.path().join(".git")));
    assert!(rules.should_ignore(temp_dir.path().join(".hidden")));
    assert!(rules.should_ignore(temp_dir.path().join("__pycache__")));
    assert!(rules.should_ignore(temp_dir.path().join("module.pyc")));
    assert!(rules.should_ignore(temp_dir.path().join("dist")));
    assert!(rules.should_ignore(temp_dir.path().join("src/nested.pyc")));

    assert!(!rules.should_ignore(temp_dir.path().join("src")));
    assert!(!rules.should_ignore(temp_dir.path().join("main.py")));
}

#[test]
fn test_builtin_patterns_always_apply() {
    let temp_dir = TempDir::new().unwrap();
    let mut file = File::create(temp_dir.path().join(IGNORE_FILE)).unwrap();
    writeln!(file, "*.log").unwrap();

    let rules = IgnoreRules::load(temp_dir.path()).unwrap();

    // Built-in patterns still apply regardless of the ignore file contents
    assert!(rules.should_ignore(temp_dir.path().join(".pytest_cache")));
    assert!(rules.should_ignore(temp_dir.path().join("module.pyc")));
    assert!(rules.should_ignore(temp_dir.path().join("debug.log")));
}

#[test]
fn test_directory_pattern_both_forms() {
    let temp_dir = TempDir::new().unwrap();
    let mut file = File::create(temp_dir.path().join(IGNORE_FILE)).unwrap();
    writeln!(file, "outputs/\ndata").unwrap();

    let rules = IgnoreRules::load(temp_dir.path()).unwrap();

    // Slash-terminated pattern matches the slashless directory name too
    assert!(rules.should_ignore(temp_dir.path().join("outputs")));
    // Anything below the directory matches via prefix containment
    assert!(rules.should_ignore(temp_dir.path().join("outputs/run1")));
    assert!(rules.should_ignore(temp_dir.path().join("outputs/run1/metrics.csv")));

    // Slashless pattern gains a slash-terminated form
    assert!(rules.should_ignore(temp_dir.path().join("data")));
    assert!(rules.should_ignore(temp_dir.path().join("data/raw.csv")));

    assert!(!rules.should_ignore(temp_dir.path().join("output")));
}

#[test]
fn test_comments_and_blank_lines_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let mut file = File::create(temp_dir.path().join(IGNORE_FILE)).unwrap();
    writeln!(file, "# build artifacts\n\n*.tmp").unwrap();

    let rules = IgnoreRules::load(temp_dir.path()).unwrap();

    assert!(rules.should_ignore(temp_dir.path().join("scratch.tmp")));
    assert!(!rules.should_ignore(temp_dir.path().join("build artifacts")));
}

#[test]
fn test_negation_is_not_supported() {
    let temp_dir = TempDir::new().unwrap();
    let mut file = File::create(temp_dir.path().join(IGNORE_FILE)).unwrap();
    writeln!(file, "*.log\n!important.log").unwrap();

    let rules = IgnoreRules::load(temp_dir.path()).unwrap();

    // A later negation pattern never exempts a path from an earlier match
    assert!(rules.should_ignore(temp_dir.path().join("important.log")));
    assert!(rules.should_ignore(temp_dir.path().join("debug.log")));
}
