//! Template variable validation.
//! Checks user-supplied scaffolding variables (project name, Python version)
//! before a template is rendered, so generation fails early with a clear
//! message instead of producing a broken project.

use crate::error::{Error, Result};

/// Oldest Python version still receiving support.
pub const MIN_PYTHON_VERSION: (u32, u32) = (3, 10);

/// Newest Python version accepted by the templates.
pub const MAX_PYTHON_VERSION: (u32, u32) = (3, 13);

/// Reserved words that cannot be used as a project name.
const PYTHON_KEYWORDS: [&str; 35] = [
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "elif", "else", "except", "finally",
    "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Validates a project name for use as a Python package name.
///
/// The name must be a valid lowercase identifier: letters, digits and
/// underscores only, not starting with a digit, containing no uppercase
/// letters, and not a Python keyword.
///
/// # Errors
/// * `Error::ValidationError` describing the first violated rule
pub fn validate_project_name(name: &str) -> Result<()> {
    if !is_identifier(name) || name.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(Error::ValidationError(
            "Project name must be a valid Python name and lowercase. \
             It must not contain spaces or special characters, and must not start with a number. \
             In general, use only lowercase letters and underscores. \
             See: https://peps.python.org/pep-0008/#package-and-module-names"
                .to_string(),
        ));
    }

    if PYTHON_KEYWORDS.contains(&name) {
        return Err(Error::ValidationError(
            "Project name cannot be a Python keyword.".to_string(),
        ));
    }

    Ok(())
}

/// Validates a Python version string of the form `MAJOR.MINOR`.
///
/// # Errors
/// * `Error::ValidationError` if the string does not parse or the version
///   falls outside the supported range
pub fn validate_python_version(version: &str) -> Result<()> {
    let parsed = parse_version(version).ok_or_else(|| {
        Error::ValidationError(format!(
            "Python version must be of the form MAJOR.MINOR, got '{}'.",
            version
        ))
    })?;

    if parsed < MIN_PYTHON_VERSION || parsed > MAX_PYTHON_VERSION {
        return Err(Error::ValidationError(format!(
            "Python version must be between {}.{} and {}.{}. \
             These are the versions that still receive support. \
             See: https://devguide.python.org/versions/",
            MIN_PYTHON_VERSION.0, MIN_PYTHON_VERSION.1, MAX_PYTHON_VERSION.0, MAX_PYTHON_VERSION.1
        )));
    }

    Ok(())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse_version(version: &str) -> Option<(u32, u32)> {
    let (major, minor) = version.split_once('.')?;
    Some((major.parse().ok()?, minor.parse().ok()?))
}
