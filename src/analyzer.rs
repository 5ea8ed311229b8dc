//! Python source analysis for structure generation.
//! Parses a file with tree-sitter and collects class and function
//! declarations together with their docstrings. Other languages are passed
//! through unanalyzed.

use crate::constants::NO_DESCRIPTION;
use std::fs;
use std::path::Path;
use tree_sitter::Node;

/// One class or function declaration extracted from a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    /// Trimmed docstring text, or the "No description" placeholder.
    pub docstring: String,
}

/// Result of analyzing one source file.
///
/// Constructed per file and consumed immediately by the renderer. Failures
/// are carried as data so that a single unreadable or unparsable file never
/// aborts the surrounding traversal.
#[derive(Debug)]
pub enum SourceAnalysis {
    /// The file parsed; classes and functions keep encounter order.
    Parsed { classes: Vec<Declaration>, functions: Vec<Declaration> },
    /// The file could not be read or parsed; carries a diagnostic string.
    Failed(String),
}

/// Returns true when the path names a Python source file.
pub fn is_python_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("py")
}

/// Parses a Python file and extracts classes and functions with their
/// docstrings.
///
/// Walks every node of the syntax tree in pre-order, collecting every class
/// definition regardless of nesting depth, and every function definition
/// whose name does not begin with an underscore. A declaration without a
/// docstring receives the "No description" placeholder.
///
/// # Arguments
/// * `file_path` - Path of the Python file to analyze
///
/// # Returns
/// * `SourceAnalysis` - Declarations on success, a diagnostic on failure.
///   No error escapes this function.
pub fn analyze_source<P: AsRef<Path>>(file_path: P) -> SourceAnalysis {
    let content = match fs::read_to_string(file_path.as_ref()) {
        Ok(content) => content,
        Err(e) => return SourceAnalysis::Failed(format!("Error parsing Python file: {}", e)),
    };

    let mut parser = tree_sitter::Parser::new();
    if let Err(e) = parser.set_language(&tree_sitter_python::LANGUAGE.into()) {
        return SourceAnalysis::Failed(format!("Error parsing Python file: {}", e));
    }

    let tree = match parser.parse(&content, None) {
        Some(tree) => tree,
        None => {
            return SourceAnalysis::Failed(
                "Error parsing Python file: parser produced no tree".to_string(),
            )
        }
    };

    if tree.root_node().has_error() {
        return SourceAnalysis::Failed("Error parsing Python file: invalid syntax".to_string());
    }

    let mut classes = Vec::new();
    let mut functions = Vec::new();
    collect_declarations(tree.root_node(), content.as_bytes(), &mut classes, &mut functions);

    SourceAnalysis::Parsed { classes, functions }
}

/// Pre-order walk over the syntax tree. Class and function bodies are
/// descended into so nested declarations are collected as well.
fn collect_declarations(
    node: Node,
    source: &[u8],
    classes: &mut Vec<Declaration>,
    functions: &mut Vec<Declaration>,
) {
    match node.kind() {
        "class_definition" => {
            if let Some(declaration) = declaration_of(node, source) {
                classes.push(declaration);
            }
        }
        "function_definition" => {
            if let Some(declaration) = declaration_of(node, source) {
                // Skip private functions
                if !declaration.name.starts_with('_') {
                    functions.push(declaration);
                }
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_declarations(child, source, classes, functions);
    }
}

fn declaration_of(node: Node, source: &[u8]) -> Option<Declaration> {
    let name = node.child_by_field_name("name")?.utf8_text(source).ok()?.to_string();
    let docstring =
        docstring_of(node, source).unwrap_or_else(|| NO_DESCRIPTION.to_string());
    Some(Declaration { name, docstring })
}

/// Extracts the docstring of a class or function definition: the first
/// statement of the body, when it is a plain string literal.
fn docstring_of(node: Node, source: &[u8]) -> Option<String> {
    let body = node.child_by_field_name("body")?;
    let first = body.named_child(0)?;
    if first.kind() != "expression_statement" {
        return None;
    }
    let expression = first.named_child(0)?;
    if expression.kind() != "string" {
        return None;
    }

    let raw = expression.utf8_text(source).ok()?;
    let text = strip_string_delimiters(raw).trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Removes string prefixes (r, b, u, f) and the surrounding quote
/// delimiters from a Python string literal.
fn strip_string_delimiters(raw: &str) -> &str {
    let body = raw.trim_start_matches(|c: char| {
        matches!(c, 'r' | 'R' | 'b' | 'B' | 'u' | 'U' | 'f' | 'F')
    });
    for quote in ["\"\"\"", "'''", "\"", "'"] {
        if let Some(inner) = body.strip_prefix(quote).and_then(|s| s.strip_suffix(quote)) {
            return inner;
        }
    }
    body
}
