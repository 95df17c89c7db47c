use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::error::CheckError;
use crate::domain::report::CheckReport;
use crate::engine::{env, validate};
use crate::io;

/// Input arguments for check command execution API.
#[derive(Debug, Clone)]
pub struct CheckCommandArgs {
    pub env_file: PathBuf,
    pub schema: PathBuf,
}

/// Runs one validation pass over the configured input files.
///
/// Both paths are existence-checked before anything is opened so a missing
/// input is always reported as a precondition failure, never as a parse
/// failure.
pub fn execute(args: &CheckCommandArgs) -> Result<CheckReport, CheckError> {
    for path in [&args.env_file, &args.schema] {
        if !path.exists() {
            return Err(CheckError::MissingInput { path: path.clone() });
        }
    }

    let env_text = read_input(&args.env_file)?;
    let schema_text = read_input(&args.schema)?;

    let env_vars = env::parse_env(&env_text)?;
    let schema = io::load_schema(&schema_text)?;
    Ok(validate::validate(&env_vars, &schema))
}

fn read_input(path: &Path) -> Result<String, CheckError> {
    fs::read_to_string(path).map_err(|source| CheckError::ReadInput {
        path: path.display().to_string(),
        source,
    })
}
