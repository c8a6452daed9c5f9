use crate::config::AnalyzerConfig;
use crate::coverage::seller_coverage;
use crate::effectiveness::seller_effectiveness;
use crate::format::{format_table, TextGrid};
use crate::model::Dataset;
use crate::seller::SellerTableHeaders;
use crate::table::ReportTable;
use crate::unoffered::unoffered_products;

/// The three derived tables of one run.
#[derive(Debug, Clone)]
pub struct ReportSet {
    pub unoffered_products: ReportTable,
    pub seller_effectiveness: ReportTable,
    pub seller_coverage: ReportTable,
    /// Dataset the seller tables were computed from: the input plus one
    /// synthetic row per unoffered (customer, product) pair.
    pub augmented: Dataset,
}

impl ReportSet {
    pub fn tables(&self) -> [&ReportTable; 3] {
        [
            &self.unoffered_products,
            &self.seller_effectiveness,
            &self.seller_coverage,
        ]
    }

    pub fn formatted(&self) -> Vec<TextGrid> {
        self.tables().into_iter().map(format_table).collect()
    }
}

/// Run all three aggregations in order.
///
/// Unoffered products goes first; its synthetic rows are appended to an
/// augmented copy of `dataset`, which the seller tables then read. The
/// synthetic rows have no seller and no status, so they leave both seller
/// tables unchanged.
pub fn run(config: &AnalyzerConfig, dataset: &Dataset) -> ReportSet {
    let columns = &config.columns;
    let output = &config.output;

    let unoffered = unoffered_products(dataset, &columns.customer, &output.unoffered_products_name);
    log::info!(
        "unoffered products: {} customers with gaps, {} missing pairs",
        unoffered.table.rows.len(),
        unoffered.synthetic.len()
    );

    let augmented = dataset.augmented(&unoffered.synthetic);

    let effectiveness_header = output.effectiveness_header();
    let seller_effectiveness = seller_effectiveness(
        &augmented,
        &config.status.accepted,
        SellerTableHeaders {
            name: &output.seller_effectiveness_name,
            seller: &columns.seller,
            overall: &effectiveness_header,
        },
    );
    log::info!("seller effectiveness: {} sellers", seller_effectiveness.rows.len());

    let coverage_header = output.coverage_header();
    let seller_coverage = seller_coverage(
        &augmented,
        SellerTableHeaders {
            name: &output.seller_coverage_name,
            seller: &columns.seller,
            overall: &coverage_header,
        },
    );
    log::info!("seller coverage: {} sellers", seller_coverage.rows.len());

    ReportSet {
        unoffered_products: unoffered.table,
        seller_effectiveness,
        seller_coverage,
        augmented,
    }
}
