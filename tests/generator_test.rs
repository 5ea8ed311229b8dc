use mason::generator::StructureGenerator;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_directories_sort_before_files_case_insensitively() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("b.txt"), "").unwrap();
    fs::create_dir(temp_dir.path().join("A")).unwrap();
    fs::write(temp_dir.path().join("a.txt"), "").unwrap();

    let generator = StructureGenerator::new(temp_dir.path(), "PROJECT_STRUCTURE.md").unwrap();
    let output = generator.generate().unwrap();

    let dir_pos = output.find("  📁 A/").unwrap();
    let a_pos = output.find("  📄 a.txt").unwrap();
    let b_pos = output.find("  📄 b.txt").unwrap();
    assert!(dir_pos < a_pos);
    assert!(a_pos < b_pos);
}

#[test]
fn test_document_header() {
    let temp_dir = TempDir::new().unwrap();

    let generator = StructureGenerator::new(temp_dir.path(), "PROJECT_STRUCTURE.md").unwrap();
    let output = generator.generate().unwrap();

    assert!(output.starts_with(
        "# Project Structure\n\n## Directory Structure and Code Analysis\n\n📁 Project Root\n"
    ));
}

#[test]
fn test_ignored_entries_are_not_listed_or_recursed() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("stuff")).unwrap();
    fs::write(temp_dir.path().join("stuff/cache.pyc"), "").unwrap();
    fs::create_dir(temp_dir.path().join("__pycache__")).unwrap();
    fs::write(temp_dir.path().join("__pycache__/module.cpython-311.pyc"), "").unwrap();

    let generator = StructureGenerator::new(temp_dir.path(), "PROJECT_STRUCTURE.md").unwrap();
    let output = generator.generate().unwrap();

    // Directory with only ignored entries keeps its heading, with no children
    assert!(output.contains("  📁 stuff/\n"));
    assert!(!output.contains("cache.pyc"));
    assert!(!output.contains("__pycache__"));
}

#[test]
fn test_python_file_analysis_is_rendered() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("module.py"),
        r#"
class Foo:
    """Does foo."""


def _helper():
    pass


def bar():
    pass
"#,
    )
    .unwrap();

    let generator = StructureGenerator::new(temp_dir.path(), "PROJECT_STRUCTURE.md").unwrap();
    let output = generator.generate().unwrap();

    assert!(output.contains("  📄 module.py\n"));
    assert!(output.contains("      Classes:\n       • Foo\n        Does foo.\n"));
    assert!(output.contains("      Functions:\n       • bar\n        No description\n"));
    assert!(!output.contains("_helper"));
}

#[test]
fn test_unparsable_python_file_is_listed_without_breakdown() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("broken.py"), "def broken(:\n    pass\n").unwrap();

    let generator = StructureGenerator::new(temp_dir.path(), "PROJECT_STRUCTURE.md").unwrap();
    let output = generator.generate().unwrap();

    assert!(output.contains("  📄 broken.py\n"));
    assert!(!output.contains("Classes:"));
    assert!(!output.contains("Functions:"));
}

#[test]
fn test_generate_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("src")).unwrap();
    fs::write(temp_dir.path().join("src/app.py"), "def run():\n    pass\n").unwrap();
    fs::write(temp_dir.path().join("README.md"), "# readme\n").unwrap();

    let generator = StructureGenerator::new(temp_dir.path(), "PROJECT_STRUCTURE.md").unwrap();
    let first = generator.generate().unwrap();
    let second = generator.generate().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_save_writes_and_overwrites_report() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("main.py"), "def run():\n    pass\n").unwrap();

    let generator = StructureGenerator::new(temp_dir.path(), "PROJECT_STRUCTURE.md").unwrap();
    let output_path = generator.save().unwrap();

    assert_eq!(output_path, temp_dir.path().join("PROJECT_STRUCTURE.md"));
    let contents = fs::read_to_string(&output_path).unwrap();
    assert!(contents.starts_with("# Project Structure"));

    // Saving again overwrites the existing report
    let second_path = generator.save().unwrap();
    assert_eq!(second_path, output_path);
}
