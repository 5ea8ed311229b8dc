//! Core structure report generation.
//! Walks the project tree depth-first, filters paths through the ignore
//! rules, annotates Python files with their source analysis and renders
//! everything as one Markdown document.

use crate::analyzer::{analyze_source, is_python_file, Declaration, SourceAnalysis};
use crate::error::{Error, Result};
use crate::ignore::IgnoreRules;
use log::debug;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// One indentation unit, repeated once per traversal depth.
const INDENT: &str = "  ";

/// Generates a Markdown representation of a project's structure with code
/// analysis.
pub struct StructureGenerator {
    root: PathBuf,
    output_file: String,
    ignore: IgnoreRules,
}

impl StructureGenerator {
    /// Creates a generator for the given project root.
    ///
    /// # Arguments
    /// * `root` - Root directory of the project
    /// * `output_file` - Name of the report file, written under the root
    ///
    /// # Errors
    /// * `Error::IgnoreError` if the root's ignore file contains an invalid
    ///   pattern
    pub fn new<P: AsRef<Path>>(root: P, output_file: &str) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let ignore = IgnoreRules::load(&root)?;
        Ok(Self { root, output_file: output_file.to_string(), ignore })
    }

    /// Renders the project structure with code analysis.
    ///
    /// Traversal is depth-first and pre-order. Within each directory,
    /// subdirectories precede files and each group is sorted alphabetically,
    /// case-insensitively. Ignored entries are skipped entirely and not
    /// recursed into.
    ///
    /// # Errors
    /// * `Error::IoError` if a directory cannot be read mid-walk
    pub fn generate(&self) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Project Structure\n\n");
        output.push_str("## Directory Structure and Code Analysis\n\n");
        output.push_str("📁 Project Root\n");

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by(compare_entries)
            .into_iter()
            .filter_entry(|entry| !self.ignore.should_ignore(entry.path()));

        for entry in walker {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            let prefix = INDENT.repeat(entry.depth());
            let name = entry.file_name().to_string_lossy();

            if entry.file_type().is_dir() {
                output.push_str(&format!("{}📁 {}/\n", prefix, name));
            } else {
                output.push_str(&format!("{}📄 {}\n", prefix, name));
                if is_python_file(entry.path()) {
                    append_analysis(entry.path(), &prefix, &mut output);
                }
            }
        }

        Ok(output)
    }

    /// Renders the report and writes it under the project root, overwriting
    /// any existing file at that path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path of the written report
    ///
    /// # Errors
    /// * `Error::IoError` if the report cannot be written; no partial-file
    ///   cleanup is attempted
    pub fn save(&self) -> Result<PathBuf> {
        let structure = self.generate()?;
        let output_path = self.root.join(&self.output_file);
        fs::write(&output_path, structure).map_err(Error::IoError)?;
        Ok(output_path)
    }
}

/// Sibling ordering: directories first, then case-insensitive alphabetical.
fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_key = (!a.file_type().is_dir(), a.file_name().to_string_lossy().to_lowercase());
    let b_key = (!b.file_type().is_dir(), b.file_name().to_string_lossy().to_lowercase());
    a_key.cmp(&b_key)
}

/// Appends the analysis of one Python file to the output. A file whose
/// analysis failed is listed without a breakdown.
fn append_analysis(path: &Path, prefix: &str, output: &mut String) {
    match analyze_source(path) {
        SourceAnalysis::Parsed { classes, functions } => {
            if !classes.is_empty() {
                output.push_str(&format!("{}    Classes:\n", prefix));
                for declaration in &classes {
                    append_declaration(declaration, prefix, output);
                }
            }
            if !functions.is_empty() {
                output.push_str(&format!("{}    Functions:\n", prefix));
                for declaration in &functions {
                    append_declaration(declaration, prefix, output);
                }
            }
        }
        SourceAnalysis::Failed(reason) => {
            debug!("Skipping analysis of {}: {}", path.display(), reason);
        }
    }
}

fn append_declaration(declaration: &Declaration, prefix: &str, output: &mut String) {
    output.push_str(&format!("{}     • {}\n", prefix, declaration.name));
    append_docstring(&declaration.docstring, prefix, output);
}

/// Appends the docstring one indent level below its owning name. Blank
/// docstring lines are preserved as blank, followed by one empty line after
/// the whole docstring.
fn append_docstring(docstring: &str, prefix: &str, output: &mut String) {
    if docstring.is_empty() {
        return;
    }
    for line in docstring.trim().lines() {
        let line = line.trim();
        if line.is_empty() {
            output.push_str(&format!("{}      \n", prefix));
        } else {
            output.push_str(&format!("{}      {}\n", prefix, line));
        }
    }
    output.push('\n');
}
