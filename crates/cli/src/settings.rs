//! Config file resolution.

use std::io::ErrorKind;
use std::path::Path;

use salesgrid_analytics::AnalyzerConfig;

use crate::CliError;

pub const DEFAULT_CONFIG_PATH: &str = "salesgrid.toml";

/// Load and validate the config at `path`. A missing file falls back to the
/// built-in defaults with a warning; any other failure is fatal.
pub fn resolve_config(path: &Path) -> Result<AnalyzerConfig, CliError> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            let config = AnalyzerConfig::from_toml(&text)
                .map_err(|e| CliError::config(format!("{}: {e}", path.display())))?;
            log::debug!("config loaded from {}", path.display());
            Ok(config)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!(
                "Configuration file {} not found. Using default values.",
                path.display()
            );
            Ok(AnalyzerConfig::default())
        }
        Err(e) => Err(CliError::config(format!("cannot read {}: {e}", path.display()))),
    }
}
