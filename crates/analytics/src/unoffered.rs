//! Products never offered to each customer.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Dataset, OfferRecord};
use crate::table::{Cell, Column, ColumnKind, ReportTable};

/// Cell value for a (customer, product) pair that was never offered.
pub const UNOFFERED_MARKER: &str = "X";

/// Unoffered matrix plus the synthetic rows it was pivoted from.
#[derive(Debug, Clone)]
pub struct UnofferedProducts {
    pub table: ReportTable,
    /// One seller-less, status-less row per missing (customer, product) pair,
    /// sorted by product then customer.
    pub synthetic: Vec<OfferRecord>,
}

/// Build the customer × product matrix of offers that never happened.
///
/// Rows are the customers missing at least one product; columns are the
/// products missing for at least one customer. Both ascending.
pub fn unoffered_products(dataset: &Dataset, customer_header: &str, name: &str) -> UnofferedProducts {
    let all_products = dataset.products();

    let mut offered: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for record in dataset.records() {
        offered
            .entry(record.customer.as_str())
            .or_default()
            .insert(record.product.as_str());
    }

    let mut synthetic: Vec<OfferRecord> = offered
        .iter()
        .flat_map(|(customer, products)| {
            all_products
                .difference(products)
                .map(move |product| OfferRecord::synthetic(*product, *customer))
        })
        .collect();
    synthetic.sort_by(|a, b| {
        a.product
            .cmp(&b.product)
            .then_with(|| a.customer.cmp(&b.customer))
    });

    let table = pivot(&synthetic, customer_header, name);
    log::debug!(
        "unoffered: {} products, {} customers, {} missing pairs",
        all_products.len(),
        offered.len(),
        synthetic.len()
    );

    UnofferedProducts { table, synthetic }
}

fn pivot(synthetic: &[OfferRecord], customer_header: &str, name: &str) -> ReportTable {
    let products: BTreeSet<&str> = synthetic.iter().map(|r| r.product.as_str()).collect();
    let mut by_customer: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for record in synthetic {
        by_customer
            .entry(record.customer.as_str())
            .or_default()
            .insert(record.product.as_str());
    }

    let mut columns = vec![Column::new(customer_header, ColumnKind::Identifier)];
    columns.extend(products.iter().map(|p| Column::new(*p, ColumnKind::Marker)));
    let mut table = ReportTable::new(name, columns);

    for (customer, missing) in by_customer {
        let mut row = Vec::with_capacity(products.len() + 1);
        row.push(Cell::Text(customer.to_string()));
        row.extend(products.iter().map(|p| {
            if missing.contains(p) {
                Cell::Text(UNOFFERED_MARKER.to_string())
            } else {
                Cell::Empty
            }
        }));
        table.push_row(row);
    }

    table
}
