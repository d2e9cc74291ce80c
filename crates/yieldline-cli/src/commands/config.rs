//! Config command implementation.
//!
//! Shows the effective settings and manages the configuration file.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{print_info, print_success, table, KeyValue};
use crate::settings::{default_path, Settings};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show the configuration file location
    Path,

    /// Write a configuration file with default values
    Init(InitArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Destination. Defaults to the user config directory.
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: &ConfigArgs, settings: &Settings, explicit: Option<&Path>) -> CliResult<()> {
    match &args.command {
        ConfigCommand::Show => execute_show(settings),
        ConfigCommand::Path => execute_path(explicit),
        ConfigCommand::Init(init) => {
            let path = init_config(init)?;
            print_success(&format!("Wrote {}", path.display()));
            Ok(())
        }
    }
}

/// Show current configuration.
fn execute_show(settings: &Settings) -> CliResult<()> {
    match settings.output.format {
        OutputFormat::Table => println!("{}", table(&settings_rows(settings))),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(settings)?),
        OutputFormat::Minimal => print!("{}", settings.to_toml()?),
    }
    Ok(())
}

/// Show configuration file path.
fn execute_path(explicit: Option<&Path>) -> CliResult<()> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(default_path)
        .ok_or_else(|| CliError::config("could not determine config directory"))?;

    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

/// Writes default settings to the requested or default location.
pub fn init_config(args: &InitArgs) -> CliResult<PathBuf> {
    let path = args
        .path
        .clone()
        .or_else(default_path)
        .ok_or_else(|| CliError::config("could not determine config directory"))?;

    if path.exists() && !args.force {
        return Err(CliError::config(format!(
            "{} already exists; use --force to overwrite",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, Settings::default().to_toml()?)?;
    Ok(path)
}

fn settings_rows(settings: &Settings) -> Vec<KeyValue> {
    let format = match settings.output.format {
        OutputFormat::Table => "table",
        OutputFormat::Json => "json",
        OutputFormat::Minimal => "minimal",
    };
    vec![
        KeyValue::new("solver.tolerance", format!("{:e}", settings.solver.tolerance)),
        KeyValue::new(
            "solver.max_iterations",
            settings.solver.max_iterations.to_string(),
        ),
        KeyValue::new("output.format", format),
        KeyValue::new("output.precision", settings.output.precision.to_string()),
        KeyValue::new("bond.frequency", settings.bond.frequency.to_string()),
    ]
}
