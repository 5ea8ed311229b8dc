//! Ignore pattern handling for structure generation.
//! This module combines a fixed built-in pattern set with patterns read from
//! the project's ignore file, similar to .gitignore functionality.

use crate::constants::{BUILTIN_IGNORE_PATTERNS, IGNORE_FILE};
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

/// Compiled ignore rules for one generation run.
///
/// Built once from the built-in pattern list and the project's ignore file,
/// then queried for every path encountered during traversal. Immutable after
/// construction.
///
/// Negation patterns are not supported: a pattern can only add to the ignore
/// set, never exempt a path excluded by another pattern. A leading `!` is
/// treated as a literal character.
pub struct IgnoreRules {
    root: PathBuf,
    builtin: GlobSet,
    project: GlobSet,
    dir_prefixes: Vec<String>,
}

impl IgnoreRules {
    /// Loads ignore rules for the given project root.
    ///
    /// # Arguments
    /// * `root` - Root directory whose ignore file is read
    ///
    /// # Returns
    /// * `Result<IgnoreRules>` - Compiled rule set
    ///
    /// # Notes
    /// - If the ignore file doesn't exist, only the built-in patterns apply
    /// - Blank lines and `#` comments in the ignore file are skipped
    /// - Each ignore-file pattern is registered both with and without a
    ///   trailing slash so directory and non-directory forms both match
    /// - Invalid patterns result in an `Error::IgnoreError`
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        let mut builtin = GlobSetBuilder::new();
        for pattern in BUILTIN_IGNORE_PATTERNS {
            builtin.add(compile_pattern(pattern)?);
        }

        let mut project = GlobSetBuilder::new();
        let mut dir_prefixes = Vec::new();
        let ignore_path = root.join(IGNORE_FILE);
        if let Ok(contents) = read_to_string(&ignore_path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some(stripped) = line.strip_suffix('/') {
                    project.add(compile_pattern(line)?);
                    project.add(compile_pattern(stripped)?);
                    dir_prefixes.push(line.to_string());
                } else {
                    project.add(compile_pattern(line)?);
                    project.add(compile_pattern(&format!("{}/", line))?);
                    dir_prefixes.push(format!("{}/", line));
                }
            }
        } else {
            debug!("{} does not exist", ignore_path.display());
        }

        let builtin = builtin
            .build()
            .map_err(|e| Error::IgnoreError(format!("ignore rules loading failed: {}", e)))?;
        let project = project
            .build()
            .map_err(|e| Error::IgnoreError(format!("ignore rules loading failed: {}", e)))?;

        Ok(Self { root, builtin, project, dir_prefixes })
    }

    /// Checks whether the path should be excluded from the structure report.
    ///
    /// Pure with respect to the compiled rule set: no I/O, no mutation.
    /// Tests, in order, until any succeeds:
    /// 1. the path's base name or its root-relative form against the
    ///    built-in patterns
    /// 2. the full path or its root-relative form against the ignore-file
    ///    patterns
    /// 3. for slash-terminated ignore-file patterns, whether the
    ///    root-relative or full path string starts with that pattern
    pub fn should_ignore<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        let rel_str = rel.to_string_lossy();
        let path_str = path.to_string_lossy();

        if self.builtin.is_match(name.as_ref()) || self.builtin.is_match(rel) {
            return true;
        }

        if self.project.is_match(path) || self.project.is_match(rel) {
            return true;
        }

        self.dir_prefixes
            .iter()
            .any(|prefix| rel_str.starts_with(prefix.as_str()) || path_str.starts_with(prefix.as_str()))
    }
}

fn compile_pattern(pattern: &str) -> Result<Glob> {
    Glob::new(pattern)
        .map_err(|e| Error::IgnoreError(format!("ignore rules loading failed: {}", e)))
}
