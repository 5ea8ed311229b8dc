//! Mason's main application entry point and orchestration logic.
//! Handles command-line argument parsing and dispatches to structure
//! generation or template variable validation.

use mason::{
    cli::{get_args, Args, Command},
    error::{default_error_handler, Result},
    generator::StructureGenerator,
    validation::{validate_project_name, validate_python_version},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Arguments
/// * `args` - Parsed command line arguments
///
/// # Returns
/// * `Result<()>` - Success or error status of the selected command
fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Structure { root, output } => {
            let generator = StructureGenerator::new(&root, &output)?;
            let output_path = generator.save()?;
            println!("Project structure has been saved to {}", output_path.display());
        }
        Command::Check { project_name, python_version } => {
            validate_project_name(&project_name)?;
            if let Some(version) = &python_version {
                validate_python_version(version)?;
            }
            println!("All template variables are valid.");
        }
    }
    Ok(())
}
