//! Common constants used throughout the Mason application.

/// Ignore file read from the project root
pub const IGNORE_FILE: &str = ".gitignore";

/// Default name of the generated structure report
pub const OUTPUT_FILE: &str = "PROJECT_STRUCTURE.md";

/// Placeholder used when a class or function carries no docstring
pub const NO_DESCRIPTION: &str = "No description";

/// Patterns that are always ignored, regardless of the ignore file contents:
/// hidden files and directories, caches, and build artifacts.
pub const BUILTIN_IGNORE_PATTERNS: [&str; 17] = [
    ".*",
    "__pycache__",
    "*.pyc",
    "*.pyo",
    "*.pyd",
    "*.so",
    "*.egg",
    "*.egg-info",
    "dist",
    "build",
    ".git",
    ".pytest_cache",
    ".mypy_cache",
    ".ruff_cache",
    "lightning_logs",
    "wandb",
    "outputs/",
];
