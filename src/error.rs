//! Error handling for the Mason application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Mason operations.
///
/// This enum represents all possible errors that can occur within the Mason
/// application. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations,
    /// including failures while writing the final structure report
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors in processing ignore patterns
    #[error("Ignore pattern error: {0}.")]
    IgnoreError(String),

    /// Represents validation failures in template variables
    #[error("Validation error: {0}.")]
    ValidationError(String),
}

/// Convenience type alias for Results with Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
