//! fxml-check CLI entry point
//!
//! Validates JavaFX dialog layouts and their stylesheets.

use clap::error::ErrorKind;
use clap::Parser;
use fxml_check::cli::args::{Args, Command};
use fxml_check::cli::logging::init_tracing;
use fxml_check::cli::output::get_formatter;
use fxml_check::version::get_build_info;
use fxml_check::{run_checks, FxmlCheckConfig};

use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };
    init_tracing(args.log_level.into());

    match args.command() {
        Command::Version => {
            println!("{}", get_build_info());
            ExitCode::SUCCESS
        }
        Command::List => print_target_list(&args),
        Command::Check => run(&args),
    }
}

fn load_config(args: &Args) -> Option<FxmlCheckConfig> {
    match FxmlCheckConfig::from_args(args) {
        Ok(config) => Some(config),
        Err(e) => {
            println!("ERROR: {}", e);
            None
        }
    }
}

fn print_target_list(args: &Args) -> ExitCode {
    let Some(config) = load_config(args) else {
        return ExitCode::FAILURE;
    };

    println!("Files checked in {}:", config.target_dir.display());
    println!();
    for target in &config.targets {
        println!("  {:<5} {}", target.kind, target.name);
    }
    ExitCode::SUCCESS
}

fn run(args: &Args) -> ExitCode {
    let Some(config) = load_config(args) else {
        return ExitCode::FAILURE;
    };

    let report = match run_checks(config) {
        Ok(report) => report,
        Err(e) => {
            println!("ERROR: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let color = !args.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();
    let formatter = get_formatter(args.format, color, args.verbose);
    println!("{}", formatter.format(&report));

    if report.all_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
