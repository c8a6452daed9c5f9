//! CSV text → [`Dataset`]. Reading bytes from disk is the caller's job.

use crate::config::ColumnConfig;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::model::{Dataset, OfferRecord};

/// Parse a sales log. All four configured columns must be present in the
/// header; every missing one is reported in a single error.
///
/// Empty seller/status cells load as `None`. Rows with an empty product or
/// customer cell are skipped with a warning.
pub fn load_csv_dataset(
    csv_data: &str,
    delimiter: u8,
    columns: &ColumnConfig,
) -> AnalyticsResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let idx = |name: &str| headers.iter().position(|h| h == name);

    let missing: Vec<String> = columns
        .roles()
        .iter()
        .filter(|(_, name)| idx(name).is_none())
        .map(|(_, name)| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(AnalyticsError::MissingColumns { columns: missing });
    }

    // All four resolved above.
    let [product_idx, customer_idx, seller_idx, status_idx] =
        columns.roles().map(|(_, name)| idx(name).unwrap_or_default());

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let cell = |i: usize| record.get(i).filter(|v| !v.is_empty());

        let (Some(product), Some(customer)) = (cell(product_idx), cell(customer_idx)) else {
            log::warn!(
                "row {}: empty '{}' or '{}', skipped",
                line + 2,
                columns.product,
                columns.customer
            );
            skipped += 1;
            continue;
        };

        records.push(OfferRecord::new(
            product,
            customer,
            cell(seller_idx),
            cell(status_idx),
        ));
    }

    let dataset = Dataset::new(records);
    log::info!(
        "loaded {} offers for {} customers ({} rows skipped)",
        dataset.len(),
        dataset.customers().len(),
        skipped
    );
    Ok(dataset)
}
