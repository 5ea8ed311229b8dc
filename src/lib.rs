//! Mason is a companion tool for project scaffolding workflows.
//! It generates Markdown reports of a project's directory structure with
//! lightweight source analysis, and validates template variables before a
//! project is generated.

/// Python source analysis
/// Extracts classes, functions and docstrings via syntax-tree parsing
pub mod analyzer;

/// Command-line interface module for the Mason application
pub mod cli;

/// Common constants shared across modules
pub mod constants;

/// Error types and handling for the Mason application
pub mod error;

/// Core structure report generation
/// Combines traversal, filtering and analysis into the final document
pub mod generator;

/// File and directory ignore patterns
/// Combines built-in patterns with the project's .gitignore contents
pub mod ignore;

/// Template variable validation
/// Checks project names and Python versions before scaffolding
pub mod validation;
