use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use envcheck::cmd::check::{self, CheckCommandArgs};
use envcheck::domain::report::CheckReport;

#[derive(Debug, Parser)]
#[command(
    name = "envcheck",
    version,
    about = "Validate .env files against a declarative schema"
)]
struct Cli {
    /// Path to the .env file.
    env_file: PathBuf,

    /// Path to the YAML schema file.
    #[arg(long, short = 's')]
    schema: PathBuf,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    let args = CheckCommandArgs {
        env_file: cli.env_file,
        schema: cli.schema,
    };
    match check::execute(&args) {
        Ok(report) => emit_report(&report),
        Err(error) => {
            eprintln!("Error: {error}");
            1
        }
    }
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            eprint!("{error}");
            2
        }
    }
}

fn emit_report(report: &CheckReport) -> i32 {
    if report.passed {
        println!("✓ Validation passed");
        return 0;
    }

    eprintln!("Validation failed:");
    for error in &report.errors {
        eprintln!("  • {error}");
    }
    1
}
