use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;

/// Suffix appended to the configured overall-metric labels.
pub const PERCENT_SUFFIX: &str = " (%)";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Every recognized option, grouped by TOML section. All sections and keys are
/// optional; anything not listed here is rejected at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    pub paths: PathsConfig,
    pub columns: ColumnConfig,
    pub status: StatusConfig,
    pub output: OutputConfig,
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub input_file: String,
    pub results_path: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_file: "input_sales.csv".into(),
            results_path: "results".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Column roles
// ---------------------------------------------------------------------------

/// Header names of the four input column roles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnConfig {
    pub product: String,
    pub customer: String,
    pub seller: String,
    pub status: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            product: "produkt".into(),
            customer: "kunde".into(),
            seller: "verkäufer".into(),
            status: "status".into(),
        }
    }
}

impl ColumnConfig {
    /// Role names paired with their configured header, in load order.
    pub fn roles(&self) -> [(&'static str, &str); 4] {
        [
            ("product", &self.product),
            ("customer", &self.customer),
            ("seller", &self.seller),
            ("status", &self.status),
        ]
    }
}

// ---------------------------------------------------------------------------
// Status labels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatusConfig {
    pub accepted: String,
    pub rejected: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            accepted: "verkauft".into(),
            rejected: "abgelehnt".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Output naming
// ---------------------------------------------------------------------------

/// Table headers and artifact names. `*_name` values are file stems; the
/// exporter picks the extension.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub effectiveness_column: String,
    pub coverage_column: String,
    pub unoffered_products_name: String,
    pub seller_effectiveness_name: String,
    pub seller_coverage_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            effectiveness_column: "Total Effectiveness".into(),
            coverage_column: "Total Coverage".into(),
            unoffered_products_name: "Unoffered Products".into(),
            seller_effectiveness_name: "Seller Effectiveness".into(),
            seller_coverage_name: "Seller Coverage".into(),
        }
    }
}

impl OutputConfig {
    pub fn effectiveness_header(&self) -> String {
        format!("{}{PERCENT_SUFFIX}", self.effectiveness_column)
    }

    pub fn coverage_header(&self) -> String {
        format!("{}{PERCENT_SUFFIX}", self.coverage_column)
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl AnalyzerConfig {
    pub fn from_toml(input: &str) -> Result<Self, AnalyticsError> {
        let config: AnalyzerConfig =
            toml::from_str(input).map_err(|e| AnalyticsError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, AnalyticsError> {
        toml::to_string_pretty(self).map_err(|e| AnalyticsError::ConfigParse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), AnalyticsError> {
        let roles = self.columns.roles();
        for (role, name) in &roles {
            if name.trim().is_empty() {
                return Err(AnalyticsError::ConfigValidation(format!(
                    "column name for '{role}' must not be empty"
                )));
            }
        }
        for (i, (role_a, name_a)) in roles.iter().enumerate() {
            for (role_b, name_b) in &roles[i + 1..] {
                if name_a == name_b {
                    return Err(AnalyticsError::ConfigValidation(format!(
                        "columns '{role_a}' and '{role_b}' both map to '{name_a}'"
                    )));
                }
            }
        }

        if self.status.accepted.is_empty() || self.status.rejected.is_empty() {
            return Err(AnalyticsError::ConfigValidation(
                "status labels must not be empty".into(),
            ));
        }
        if self.status.accepted == self.status.rejected {
            return Err(AnalyticsError::ConfigValidation(format!(
                "accepted and rejected status are both '{}'",
                self.status.accepted
            )));
        }

        let names = [
            ("unoffered_products_name", &self.output.unoffered_products_name),
            ("seller_effectiveness_name", &self.output.seller_effectiveness_name),
            ("seller_coverage_name", &self.output.seller_coverage_name),
        ];
        for (key, name) in &names {
            if name.trim().is_empty() {
                return Err(AnalyticsError::ConfigValidation(format!(
                    "output.{key} must not be empty"
                )));
            }
            if name.contains(['/', '\\']) {
                return Err(AnalyticsError::ConfigValidation(format!(
                    "output.{key} must be a file name, got '{name}'"
                )));
            }
        }
        if names[0].1 == names[1].1 || names[0].1 == names[2].1 || names[1].1 == names[2].1 {
            return Err(AnalyticsError::ConfigValidation(
                "output names must be distinct".into(),
            ));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
