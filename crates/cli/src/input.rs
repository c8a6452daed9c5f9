//! Input file resolution: CLI argument, then config, then an interactive prompt.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::CliError;

/// Pick the sales log to analyze.
///
/// `arg` wins over `configured`. If the chosen path is not a file and
/// `interactive` is set, the user is asked for a path on stderr/stdin.
pub fn resolve_input(
    arg: Option<PathBuf>,
    configured: &str,
    interactive: bool,
) -> Result<PathBuf, CliError> {
    let candidate = arg.unwrap_or_else(|| PathBuf::from(configured));
    if candidate.is_file() {
        return Ok(candidate);
    }

    log::warn!("input file {} not found", candidate.display());

    if !interactive {
        return Err(CliError::input(format!(
            "input file not found: {}",
            candidate.display()
        ))
        .with_hint("pass the sales log as an argument or set [paths].input_file"));
    }

    let stdin = io::stdin();
    let selected = prompt_for_path(stdin.lock(), io::stderr())
        .ok_or_else(|| CliError::input("No file was selected. Restart the tool and select a file."))?;

    if !selected.is_file() {
        return Err(CliError::input(format!(
            "input file not found: {}",
            selected.display()
        )));
    }
    Ok(selected)
}

/// Whether a prompt can reach a user.
pub fn stdin_is_interactive() -> bool {
    atty::is(atty::Stream::Stdin)
}

/// Ask for a path and read one line. `None` on EOF or a blank answer.
fn prompt_for_path(mut reader: impl BufRead, mut prompt: impl Write) -> Option<PathBuf> {
    // Prompt output is best-effort; the answer is what matters.
    let _ = write!(prompt, "Path to sales log (CSV): ");
    let _ = prompt.flush();

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let answer = line.trim().trim_matches('"');
            (!answer.is_empty()).then(|| PathBuf::from(answer))
        }
    }
}
