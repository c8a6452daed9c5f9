// Command handlers: run, validate, config

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use salesgrid_analytics::{load_csv_dataset, run, AnalyticsError, AnalyzerConfig, TextGrid};
use salesgrid_io::{create_results_dir, export_grids, read_sales_log, render_text};

use crate::exit_codes::EXIT_ERROR;
use crate::input::{resolve_input, stdin_is_interactive};
use crate::settings::resolve_config;
use crate::{CliError, RunArgs};

pub fn cmd_run(config_path: &Path, args: RunArgs) -> Result<(), CliError> {
    log::info!("Initiated sales data analysis.");

    let config = resolve_config(config_path)?;

    let interactive = !args.no_prompt && stdin_is_interactive();
    let input = resolve_input(args.input, &config.paths.input_file, interactive)?;
    log::info!("Reading sales log {}", input.display());

    let log_file = read_sales_log(&input).map_err(|e| CliError::input(e.to_string()))?;
    log::debug!("detected delimiter {:?}", log_file.delimiter as char);

    let dataset = load_csv_dataset(&log_file.content, log_file.delimiter, &config.columns)
        .map_err(|e| schema_error(e, &input))?;

    let reports = run(&config, &dataset);
    let grids = reports.formatted();

    let base = args
        .results
        .unwrap_or_else(|| PathBuf::from(&config.paths.results_path));
    let dir = create_results_dir(&base, chrono::Local::now().naive_local())
        .map_err(|e| CliError::output(e.to_string()))?;
    let written = export_grids(&dir, &grids, args.format.into())
        .map_err(|e| CliError::output(e.to_string()))?;
    for path in &written {
        log::debug!("wrote {}", path.display());
    }
    log::info!("Output generated under: {}", dir.display());

    if args.stdout {
        print_grids(&grids)
            .map_err(|e| CliError::new(EXIT_ERROR, format!("cannot write to stdout: {e}")))?;
    }

    log::info!("Completed successfully.");
    Ok(())
}

fn schema_error(err: AnalyticsError, input: &Path) -> CliError {
    match err {
        AnalyticsError::MissingColumns { .. } => CliError::schema(format!("{}: {err}", input.display()))
            .with_hint("set [columns] in the config to the header names used by the input"),
        other => CliError::schema(format!("{}: {other}", input.display())),
    }
}

fn print_grids(grids: &[TextGrid]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for (i, grid) in grids.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", grid.name)?;
        writeln!(out)?;
        out.write_all(render_text(grid).as_bytes())?;
    }
    out.flush()
}

pub fn cmd_validate(config_path: &Path) -> Result<(), CliError> {
    if !config_path.exists() {
        resolve_config(config_path)?;
        eprintln!("valid: built-in defaults (no file at {})", config_path.display());
        return Ok(());
    }
    resolve_config(config_path)?;
    eprintln!("valid: {}", config_path.display());
    Ok(())
}

pub fn cmd_config(config_path: &Path, defaults: bool) -> Result<(), CliError> {
    let config = if defaults {
        AnalyzerConfig::default()
    } else {
        resolve_config(config_path)?
    };
    let text = config
        .to_toml()
        .map_err(|e| CliError::new(EXIT_ERROR, e.to_string()))?;
    print!("{text}");
    Ok(())
}
