//! Seller success rate, overall and per customer.

use std::collections::BTreeMap;

use crate::model::Dataset;
use crate::seller::{percent, seller_table, SellerMetric, SellerTableHeaders};
use crate::table::ReportTable;

#[derive(Debug, Default)]
struct Tally {
    /// Records with a present status.
    total: usize,
    /// Records whose status is the accepted label.
    successful: usize,
}

impl Tally {
    fn add(&mut self, status: Option<&str>, accepted: &str) {
        if let Some(status) = status {
            self.total += 1;
            if status == accepted {
                self.successful += 1;
            }
        }
    }

    fn rate(&self) -> f64 {
        percent(self.successful, self.total)
    }
}

/// Each seller's share of accepted offers among their offers with a status.
///
/// Records without a seller are not grouped. Every customer in the universe
/// gets a column; customers the seller never dealt with score `0`.
pub fn seller_effectiveness(
    dataset: &Dataset,
    accepted: &str,
    headers: SellerTableHeaders<'_>,
) -> ReportTable {
    let mut by_seller: BTreeMap<&str, (Tally, BTreeMap<&str, Tally>)> = BTreeMap::new();

    for record in dataset.records() {
        let Some(seller) = record.seller.as_deref() else {
            continue;
        };
        let (overall, per_customer) = by_seller.entry(seller).or_default();
        let status = record.status.as_deref();
        overall.add(status, accepted);
        per_customer
            .entry(record.customer.as_str())
            .or_default()
            .add(status, accepted);
    }

    let metrics: Vec<SellerMetric> = by_seller
        .into_iter()
        .map(|(seller, (overall, per_customer))| SellerMetric {
            seller: seller.to_string(),
            per_customer: dataset
                .customers()
                .iter()
                .map(|c| per_customer.get(c.as_str()).map_or(0.0, Tally::rate))
                .collect(),
            overall: overall.rate(),
        })
        .collect();

    log::debug!("effectiveness: {} sellers", metrics.len());
    seller_table(headers, dataset.customers(), metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OfferRecord;
    use crate::table::Cell;

    const HEADERS: SellerTableHeaders<'static> = SellerTableHeaders {
        name: "Seller Effectiveness",
        seller: "verkäufer",
        overall: "Total Effectiveness (%)",
    };

    fn offer(product: &str, customer: &str, seller: &str, status: Option<&str>) -> OfferRecord {
        OfferRecord::new(product, customer, Some(seller), status)
    }

    fn value(table: &ReportTable, seller: &str, column: &str) -> f64 {
        table.cell(seller, column).and_then(Cell::as_number).unwrap()
    }

    #[test]
    fn three_of_four_accepted_is_75() {
        let ds = Dataset::new(vec![
            offer("P1", "C1", "S1", Some("verkauft")),
            offer("P2", "C1", "S1", Some("verkauft")),
            offer("P3", "C2", "S1", Some("verkauft")),
            offer("P4", "C2", "S1", Some("abgelehnt")),
        ]);
        let t = seller_effectiveness(&ds, "verkauft", HEADERS);
        assert_eq!(value(&t, "S1", HEADERS.overall), 75.0);
        assert_eq!(value(&t, "S1", "C1"), 100.0);
        assert_eq!(value(&t, "S1", "C2"), 50.0);
    }

    #[test]
    fn seller_without_status_scores_zero() {
        let ds = Dataset::new(vec![
            offer("P1", "C1", "S1", None),
            offer("P2", "C1", "S2", Some("verkauft")),
        ]);
        let t = seller_effectiveness(&ds, "verkauft", HEADERS);
        assert_eq!(value(&t, "S1", HEADERS.overall), 0.0);
        assert_eq!(value(&t, "S1", "C1"), 0.0);
        assert_eq!(t.row_keys(), ["S2", "S1"]);
    }

    #[test]
    fn unknown_status_counts_toward_total_only() {
        let ds = Dataset::new(vec![
            offer("P1", "C1", "S1", Some("verkauft")),
            offer("P2", "C1", "S1", Some("offen")),
        ]);
        let t = seller_effectiveness(&ds, "verkauft", HEADERS);
        assert_eq!(value(&t, "S1", HEADERS.overall), 50.0);
    }

    #[test]
    fn every_customer_is_a_column_for_every_seller() {
        let ds = Dataset::new(vec![
            offer("P1", "C1", "S1", Some("verkauft")),
            offer("P1", "C3", "S2", Some("verkauft")),
            OfferRecord::new("P1", "C2", None, Some("verkauft")),
        ]);
        let t = seller_effectiveness(&ds, "verkauft", HEADERS);
        assert_eq!(
            t.header(),
            ["verkäufer", "C1", "C2", "C3", "Total Effectiveness (%)"]
        );
        assert_eq!(value(&t, "S1", "C3"), 0.0);
        assert_eq!(value(&t, "S2", "C1"), 0.0);
        assert_eq!(value(&t, "S2", "C2"), 0.0);
    }

    #[test]
    fn records_without_seller_are_not_grouped() {
        let ds = Dataset::new(vec![
            OfferRecord::new("P1", "C1", None, Some("verkauft")),
            offer("P1", "C1", "S1", Some("abgelehnt")),
        ]);
        let t = seller_effectiveness(&ds, "verkauft", HEADERS);
        assert_eq!(t.row_keys(), ["S1"]);
        assert_eq!(value(&t, "S1", HEADERS.overall), 0.0);
    }

    #[test]
    fn ties_ordered_by_seller_descending() {
        let ds = Dataset::new(vec![
            offer("P1", "C1", "Anna", Some("verkauft")),
            offer("P1", "C1", "Bert", Some("verkauft")),
            offer("P1", "C1", "Carl", Some("abgelehnt")),
        ]);
        let t = seller_effectiveness(&ds, "verkauft", HEADERS);
        assert_eq!(t.row_keys(), ["Bert", "Anna", "Carl"]);
    }

    #[test]
    fn empty_dataset_has_header_only() {
        let t = seller_effectiveness(&Dataset::default(), "verkauft", HEADERS);
        assert_eq!(t.header(), ["verkäufer", "Total Effectiveness (%)"]);
        assert!(t.is_empty());
    }
}
