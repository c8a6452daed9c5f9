//! Shared shape of the per-seller tables.

use std::cmp::Ordering;

use crate::table::{Cell, Column, ColumnKind, ReportTable};

/// `num / den * 100`, or `0` when `den` is zero.
pub fn percent(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64 * 100.0
    }
}

/// Header names for a seller-keyed table.
#[derive(Debug, Clone, Copy)]
pub struct SellerTableHeaders<'a> {
    pub name: &'a str,
    pub seller: &'a str,
    pub overall: &'a str,
}

/// One seller's metric, per customer (universe order) and overall.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerMetric {
    pub seller: String,
    pub per_customer: Vec<f64>,
    pub overall: f64,
}

/// Descending by overall metric, ties descending by seller.
pub fn rank_order(a: &SellerMetric, b: &SellerMetric) -> Ordering {
    b.overall
        .total_cmp(&a.overall)
        .then_with(|| b.seller.cmp(&a.seller))
}

/// Lay out `[seller, customer…, overall]` with rows in rank order.
pub fn seller_table(
    headers: SellerTableHeaders<'_>,
    customers: &[String],
    mut metrics: Vec<SellerMetric>,
) -> ReportTable {
    let mut columns = Vec::with_capacity(customers.len() + 2);
    columns.push(Column::new(headers.seller, ColumnKind::Identifier));
    columns.extend(customers.iter().map(|c| Column::new(c.as_str(), ColumnKind::Percentage)));
    columns.push(Column::new(headers.overall, ColumnKind::Percentage));

    metrics.sort_by(rank_order);

    let mut table = ReportTable::new(headers.name, columns);
    for m in metrics {
        debug_assert_eq!(m.per_customer.len(), customers.len());
        let mut row = Vec::with_capacity(customers.len() + 2);
        row.push(Cell::Text(m.seller));
        row.extend(m.per_customer.into_iter().map(Cell::Number));
        row.push(Cell::Number(m.overall));
        table.push_row(row);
    }
    table
}
