//! Seller share of offer volume, overall and per customer.
//!
//! The per-customer figure divides by the customer's offers across *all*
//! sellers, and its numerator counts the seller's rows for that customer
//! whether or not they carry a status. Overall coverage counts only rows
//! with a status on both sides.

use std::collections::{BTreeMap, HashMap};

use crate::model::Dataset;
use crate::seller::{percent, seller_table, SellerMetric, SellerTableHeaders};
use crate::table::ReportTable;

#[derive(Debug, Default)]
struct SellerCounts<'a> {
    /// Rows with a status.
    offers: usize,
    /// Rows per customer, status not required.
    rows_by_customer: HashMap<&'a str, usize>,
}

pub fn seller_coverage(dataset: &Dataset, headers: SellerTableHeaders<'_>) -> ReportTable {
    let mut total_offers = 0usize;
    let mut customer_offers: HashMap<&str, usize> = HashMap::new();
    let mut by_seller: BTreeMap<&str, SellerCounts<'_>> = BTreeMap::new();

    for record in dataset.records() {
        if record.has_status() {
            total_offers += 1;
            *customer_offers.entry(record.customer.as_str()).or_default() += 1;
        }
        let Some(seller) = record.seller.as_deref() else {
            continue;
        };
        let counts = by_seller.entry(seller).or_default();
        if record.has_status() {
            counts.offers += 1;
        }
        *counts
            .rows_by_customer
            .entry(record.customer.as_str())
            .or_default() += 1;
    }

    let metrics: Vec<SellerMetric> = by_seller
        .into_iter()
        .map(|(seller, counts)| SellerMetric {
            seller: seller.to_string(),
            per_customer: dataset
                .customers()
                .iter()
                .map(|c| {
                    let c = c.as_str();
                    percent(
                        counts.rows_by_customer.get(c).copied().unwrap_or(0),
                        customer_offers.get(c).copied().unwrap_or(0),
                    )
                })
                .collect(),
            overall: percent(counts.offers, total_offers),
        })
        .collect();

    log::debug!(
        "coverage: {} sellers, {} offers with status",
        metrics.len(),
        total_offers
    );
    seller_table(headers, dataset.customers(), metrics)
}
