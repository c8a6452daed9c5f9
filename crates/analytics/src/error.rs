use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// TOML parse / deserialization error (includes unknown keys).
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// Config validation error (empty or duplicate names, clashing labels).
    #[error("config validation error: {0}")]
    ConfigValidation(String),

    /// One or more configured columns are absent from the input header.
    #[error("missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// Malformed CSV input.
    #[error("CSV error: {0}")]
    Csv(String),
}

impl From<csv::Error> for AnalyticsError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e.to_string())
    }
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
