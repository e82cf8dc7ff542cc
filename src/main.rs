use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use pathman::config::{config_path, load_settings};
use pathman::{Change, Outcome, Pathman, PathmanError, Shell, SourceStatus};

#[derive(Parser)]
#[command(name = "pathman")]
#[command(
	author,
	version,
	about = "Pathman helps you manage your shell RC files, making it a tad simpler to handle the PATH environment variable"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Enable verbose output
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Add a directory to your PATH
	Add(EditArgs),
	/// Remove a directory from your PATH
	Remove(EditArgs),
	/// Configuration commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display effective settings and resolved paths
	Show,
	/// Print the path of the config file
	Path,
}

#[derive(Args)]
struct EditArgs {
	/// Directory to add to or remove from the PATH
	#[arg(value_parser = NonEmptyStringValueParser::new())]
	directory: String,

	/// Source the RC file after modification
	#[arg(long, overrides_with = "no_source")]
	source: bool,

	/// Skip sourcing the RC file after modification
	#[arg(long, visible_alias = "skip-source", overrides_with = "source")]
	no_source: bool,

	/// Back up the RC file before modifying it
	#[arg(long, overrides_with = "no_backup")]
	backup: bool,

	/// Do not back up the RC file
	#[arg(long, overrides_with = "backup")]
	no_backup: bool,
}

impl EditArgs {
	fn sourcing(&self) -> Option<bool> {
		tri_state(self.source, self.no_source)
	}

	fn backup(&self) -> Option<bool> {
		tri_state(self.backup, self.no_backup)
	}
}

/// Collapse a `--flag`/`--no-flag` pair into an explicit choice, if any.
fn tri_state(yes: bool, no: bool) -> Option<bool> {
	match (yes, no) {
		(true, _) => Some(true),
		(_, true) => Some(false),
		_ => None,
	}
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let home = dirs::home_dir().ok_or(PathmanError::HomeDirectoryNotFound)?;

	match cli.command {
		Commands::Add(args) => {
			let pathman = build_pathman(&home)?;
			let outcome = pathman.add(&args.directory, args.sourcing(), args.backup())?;
			report(&pathman, &args.directory, &outcome);
		}
		Commands::Remove(args) => {
			let pathman = build_pathman(&home)?;
			let outcome = pathman.remove(&args.directory, args.sourcing(), args.backup())?;
			report(&pathman, &args.directory, &outcome);
		}
		Commands::Config { action } => match action {
			ConfigAction::Show => handle_config_show(&home)?,
			ConfigAction::Path => println!("{}", config_path(&home).display()),
		},
	}

	Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.without_time()
		.init();
}

/// Resolve config, shell and rc file once for this invocation.
fn build_pathman(home: &Path) -> Result<Pathman> {
	let settings = load_settings(home).context("Failed to load configuration")?;
	let shell = Shell::detect()?;
	Ok(Pathman::for_home(shell, home, settings))
}

fn report(pathman: &Pathman, directory: &str, outcome: &Outcome) {
	let rc_name = file_name(pathman.rc_path());

	if let Some(ref backup) = outcome.backup {
		println!("Backed up {} to {}", rc_name, file_name(backup));
	}

	match outcome.change {
		Change::AlreadyPresent => {
			println!("Directory '{}' is already in PATH. No changes made.", directory);
		}
		Change::Added => println!("Directory added to PATH in {}", rc_name),
		Change::Removed => println!("Directory removed from PATH in {}", rc_name),
	}

	match outcome.source {
		SourceStatus::Sourced(_) => {
			println!("Sourced {} successfully", pathman.rc_path().display());
		}
		SourceStatus::Manual(ref path) => {
			println!("\nTo apply changes, run this command in your terminal:");
			println!("source {}", path.display());
		}
		SourceStatus::Skipped => {}
	}
}

fn file_name(path: &Path) -> String {
	path.file_name()
		.map(|name| name.to_string_lossy().to_string())
		.unwrap_or_else(|| path.display().to_string())
}

fn handle_config_show(home: &Path) -> Result<()> {
	let path = config_path(home);
	let settings = load_settings(home).context("Failed to load configuration")?;

	println!("Config path: {}", path.display());
	if path.exists() {
		if let Err(e) = pathman::config::parse_config_file(&path) {
			println!("  (invalid, using defaults: {})", e);
		} else {
			println!("  (exists)");
		}
	} else {
		println!("  (not found, using defaults)");
	}
	println!();

	println!(
		"defaultRcFile: {}",
		settings.rc_file_override.as_deref().unwrap_or("(none)")
	);
	println!("autoSource: {}", settings.auto_source);
	println!("backup: {}", settings.backup);
	println!();

	match Shell::detect() {
		Ok(shell) => {
			let pathman = Pathman::for_home(shell, home, settings);
			println!("Shell: {}", shell);
			println!("RC file: {}", pathman.rc_path().display());
		}
		Err(e) => println!("Shell: {}", e),
	}

	Ok(())
}
