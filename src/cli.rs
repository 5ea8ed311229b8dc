//! Command-line interface implementation for Mason.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::OUTPUT_FILE;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for Mason.
#[derive(Parser, Debug)]
#[command(author, version, about = "Mason: project structure reports and scaffolding checks", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a Markdown report of the project structure with code analysis
    Structure {
        /// Root directory of the project
        #[arg(value_name = "ROOT_DIR", default_value = ".")]
        root: PathBuf,

        /// Name of the report file, written under the root directory
        #[arg(short, long, value_name = "FILE", default_value = OUTPUT_FILE)]
        output: String,
    },

    /// Validate template variables before scaffolding a new project
    Check {
        /// Project name to validate (must be a lowercase Python identifier)
        #[arg(value_name = "PROJECT_NAME")]
        project_name: String,

        /// Python version to validate, e.g. 3.11
        #[arg(short, long, value_name = "VERSION")]
        python_version: Option<String>,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if a required argument or subcommand is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument | ErrorKind::MissingSubcommand
            ) {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
