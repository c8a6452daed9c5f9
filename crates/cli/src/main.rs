// SalesGrid CLI - sales log analysis reports

mod analyze;
mod exit_codes;
mod input;
mod settings;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use salesgrid_io::ExportFormat;

use exit_codes::{
    EXIT_INPUT_UNAVAILABLE, EXIT_INVALID_CONFIG, EXIT_OUTPUT_UNWRITABLE, EXIT_SCHEMA_INVALID,
    EXIT_SUCCESS, EXIT_USAGE,
};
use settings::DEFAULT_CONFIG_PATH;

#[derive(Parser)]
#[command(name = "salesgrid")]
#[command(about = "Customer/product coverage and seller performance reports from a sales log")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    /// Config file (missing file means built-in defaults)
    #[arg(long, short = 'c', global = true, env = "SALESGRID_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Only log warnings and errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Log debug detail
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a sales log and write the three reports (default)
    #[command(after_help = "\
Examples:
  salesgrid run sales.csv
  salesgrid run --results reports --format text
  salesgrid -c team.toml run export.csv --stdout --no-prompt")]
    Run(RunArgs),

    /// Check that the config file parses and is consistent
    #[command(after_help = "\
Examples:
  salesgrid validate
  salesgrid -c team.toml validate")]
    Validate,

    /// Print the effective configuration as TOML
    #[command(after_help = "\
Examples:
  salesgrid config
  salesgrid config --defaults > salesgrid.toml")]
    Config {
        /// Print built-in defaults instead of the loaded file
        #[arg(long)]
        defaults: bool,
    },
}

#[derive(Args, Default)]
pub struct RunArgs {
    /// Sales log CSV (overrides [paths].input_file)
    pub input: Option<PathBuf>,

    /// Base folder for the timestamped results folder (overrides [paths].results_path)
    #[arg(long, short = 'o')]
    pub results: Option<PathBuf>,

    /// Report file format
    #[arg(long, short = 'f', value_enum, default_value_t = ReportFormat::Csv)]
    pub format: ReportFormat,

    /// Also print the reports as aligned text on stdout
    #[arg(long)]
    pub stdout: bool,

    /// Never ask for an input path; fail instead
    #[arg(long)]
    pub no_prompt: bool,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
    Text,
}

impl From<ReportFormat> for ExportFormat {
    fn from(f: ReportFormat) -> Self {
        match f {
            ReportFormat::Csv => ExportFormat::Csv,
            ReportFormat::Json => ExportFormat::Json,
            ReportFormat::Text => ExportFormat::Text,
        }
    }
}

fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version land here too and are not failures
            let code = if e.use_stderr() { EXIT_USAGE } else { EXIT_SUCCESS };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_logging(cli.quiet, cli.verbose);

    let result = match cli.command {
        None => analyze::cmd_run(&cli.config, RunArgs::default()),
        Some(Commands::Run(args)) => analyze::cmd_run(&cli.config, args),
        Some(Commands::Validate) => analyze::cmd_validate(&cli.config),
        Some(Commands::Config { defaults }) => analyze::cmd_config(&cli.config, defaults),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(code: u8, msg: impl Into<String>) -> Self {
        Self { code, message: msg.into(), hint: None }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::new(EXIT_INVALID_CONFIG, msg)
    }

    pub fn input(msg: impl Into<String>) -> Self {
        Self::new(EXIT_INPUT_UNAVAILABLE, msg)
    }

    pub fn schema(msg: impl Into<String>) -> Self {
        Self::new(EXIT_SCHEMA_INVALID, msg)
    }

    pub fn output(msg: impl Into<String>) -> Self {
        Self::new(EXIT_OUTPUT_UNWRITABLE, msg)
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
