//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract; scripts rely on them.
//!
//! | Code | Description                                               |
//! |------|-----------------------------------------------------------|
//! | 0    | Success                                                   |
//! | 1    | General error (unspecified)                               |
//! | 2    | CLI usage error (bad args; emitted by clap)               |
//! | 3    | Config file exists but is unreadable, malformed or invalid |
//! | 4    | No input file could be resolved or read                   |
//! | 5    | Input lacks required columns or is not valid CSV          |
//! | 6    | Results folder or report file cannot be written           |
//!
//! A missing config file is not an error: defaults apply.

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// Config file could not be read, parsed or validated.
pub const EXIT_INVALID_CONFIG: u8 = 3;

/// Input path missing and none selected, or unreadable.
pub const EXIT_INPUT_UNAVAILABLE: u8 = 4;

/// Required column absent from the input header, or malformed CSV.
pub const EXIT_SCHEMA_INVALID: u8 = 5;

/// Results folder or a report file could not be created.
pub const EXIT_OUTPUT_UNWRITABLE: u8 = 6;
