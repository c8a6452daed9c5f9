// Property tests over randomly generated sales logs.
// Run with: cargo test -p salesgrid-analytics --test properties

use proptest::prelude::*;

use salesgrid_analytics::config::AnalyzerConfig;
use salesgrid_analytics::coverage::seller_coverage;
use salesgrid_analytics::effectiveness::seller_effectiveness;
use salesgrid_analytics::engine::run;
use salesgrid_analytics::model::{Dataset, OfferRecord};
use salesgrid_analytics::seller::SellerTableHeaders;
use salesgrid_analytics::{Cell, ReportTable};

const EFF: SellerTableHeaders<'static> = SellerTableHeaders {
    name: "Seller Effectiveness",
    seller: "verkäufer",
    overall: "Total Effectiveness (%)",
};

const COV: SellerTableHeaders<'static> = SellerTableHeaders {
    name: "Seller Coverage",
    seller: "verkäufer",
    overall: "Total Coverage (%)",
};

fn status() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("verkauft".to_string())),
        Just(Some("abgelehnt".to_string())),
        Just(Some("offen".to_string())),
    ]
}

/// Rows where seller may be absent and status may be anything.
fn any_record() -> impl Strategy<Value = OfferRecord> {
    ("P[0-4]", "C[0-5]", proptest::option::of("S[0-3]"), status()).prop_map(
        |(product, customer, seller, status)| OfferRecord {
            product,
            customer,
            seller,
            status,
        },
    )
}

/// Rows where every seller-attributed record carries a status.
fn complete_record() -> impl Strategy<Value = OfferRecord> {
    any_record().prop_map(|mut r| {
        if r.seller.is_some() && r.status.is_none() {
            r.status = Some("abgelehnt".into());
        }
        r
    })
}

fn numbers(table: &ReportTable) -> impl Iterator<Item = f64> + '_ {
    table.rows.iter().flat_map(|r| r[1..].iter().filter_map(Cell::as_number))
}

fn overall(table: &ReportTable, row: &[Cell]) -> f64 {
    row[table.columns.len() - 1].as_number().unwrap()
}

proptest! {
    #[test]
    fn customer_columns_match_universe(records in prop::collection::vec(any_record(), 0..60)) {
        let ds = Dataset::new(records);
        for table in [seller_effectiveness(&ds, "verkauft", EFF), seller_coverage(&ds, COV)] {
            let header = table.header();
            prop_assert_eq!(header.len(), ds.customers().len() + 2);
            let customer_cols: Vec<&str> = header[1..header.len() - 1].to_vec();
            let universe: Vec<&str> = ds.customers().iter().map(String::as_str).collect();
            prop_assert_eq!(customer_cols, universe);
            for row in &table.rows {
                prop_assert_eq!(row.len(), header.len());
            }
        }
    }

    #[test]
    fn effectiveness_is_a_percentage(records in prop::collection::vec(any_record(), 0..60)) {
        let ds = Dataset::new(records);
        let table = seller_effectiveness(&ds, "verkauft", EFF);
        for v in numbers(&table) {
            prop_assert!((0.0..=100.0).contains(&v), "effectiveness {v} out of range");
        }
    }

    #[test]
    fn coverage_is_a_percentage_when_seller_rows_have_status(
        records in prop::collection::vec(complete_record(), 0..60)
    ) {
        let ds = Dataset::new(records);
        let table = seller_coverage(&ds, COV);
        for v in numbers(&table) {
            prop_assert!((0.0..=100.0).contains(&v), "coverage {v} out of range");
        }
    }

    #[test]
    fn rows_ordered_by_metric_then_seller(records in prop::collection::vec(any_record(), 0..60)) {
        let ds = Dataset::new(records);
        for table in [seller_effectiveness(&ds, "verkauft", EFF), seller_coverage(&ds, COV)] {
            for pair in table.rows.windows(2) {
                let (a, b) = (overall(&table, &pair[0]), overall(&table, &pair[1]));
                prop_assert!(a >= b);
                if a == b {
                    prop_assert!(pair[0][0].as_text() > pair[1][0].as_text());
                }
            }
        }
    }

    #[test]
    fn seller_tables_are_idempotent(records in prop::collection::vec(any_record(), 0..60)) {
        let ds = Dataset::new(records);
        prop_assert_eq!(
            seller_effectiveness(&ds, "verkauft", EFF),
            seller_effectiveness(&ds, "verkauft", EFF)
        );
        prop_assert_eq!(seller_coverage(&ds, COV), seller_coverage(&ds, COV));
    }

    #[test]
    fn synthetic_rows_are_inert(records in prop::collection::vec(any_record(), 0..60)) {
        let config = AnalyzerConfig::default();
        let ds = Dataset::new(records);
        let reports = run(&config, &ds);
        prop_assert_eq!(reports.seller_effectiveness, seller_effectiveness(&ds, "verkauft", EFF));
        prop_assert_eq!(reports.seller_coverage, seller_coverage(&ds, COV));
    }

    #[test]
    fn formatted_tables_never_show_zero(records in prop::collection::vec(any_record(), 0..60)) {
        let reports = run(&AnalyzerConfig::default(), &Dataset::new(records));
        for grid in reports.formatted() {
            for row in &grid.rows {
                prop_assert!(row.iter().all(|cell| cell != "0"));
            }
        }
    }
}
