use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One offer from the sales log. Seller and status are `None` when the cell
/// was empty, and always `None` for synthetic rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferRecord {
    pub product: String,
    pub customer: String,
    pub seller: Option<String>,
    pub status: Option<String>,
}

impl OfferRecord {
    pub fn new(
        product: impl Into<String>,
        customer: impl Into<String>,
        seller: Option<&str>,
        status: Option<&str>,
    ) -> Self {
        Self {
            product: product.into(),
            customer: customer.into(),
            seller: seller.map(str::to_string),
            status: status.map(str::to_string),
        }
    }

    /// A row carrying only customer and product.
    pub fn synthetic(product: impl Into<String>, customer: impl Into<String>) -> Self {
        Self::new(product, customer, None, None)
    }

    pub fn has_status(&self) -> bool {
        self.status.is_some()
    }

    pub fn is_seller(&self, seller: &str) -> bool {
        self.seller.as_deref() == Some(seller)
    }
}

/// Loaded offers plus the sorted customer universe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<OfferRecord>,
    customers: Vec<String>,
}

impl Dataset {
    pub fn new(records: Vec<OfferRecord>) -> Self {
        let customers: BTreeSet<&str> = records.iter().map(|r| r.customer.as_str()).collect();
        let customers = customers.into_iter().map(str::to_string).collect();
        Self { records, customers }
    }

    pub fn records(&self) -> &[OfferRecord] {
        &self.records
    }

    /// Distinct customers, ascending.
    pub fn customers(&self) -> &[String] {
        &self.customers
    }

    /// Distinct products, ascending. Computed on every call.
    pub fn products(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.product.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A copy of this dataset with `extra` appended. Extra rows must reference
    /// customers already in the universe, so the universe is carried over.
    pub fn augmented(&self, extra: &[OfferRecord]) -> Dataset {
        debug_assert!(extra
            .iter()
            .all(|r| self.customers.binary_search(&r.customer).is_ok()));
        let mut records = Vec::with_capacity(self.records.len() + extra.len());
        records.extend_from_slice(&self.records);
        records.extend_from_slice(extra);
        Dataset {
            records,
            customers: self.customers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_universe_is_sorted_and_distinct() {
        let ds = Dataset::new(vec![
            OfferRecord::new("P1", "Mia", Some("S1"), Some("verkauft")),
            OfferRecord::new("P2", "Anna", Some("S1"), None),
            OfferRecord::new("P1", "Mia", Some("S2"), Some("abgelehnt")),
        ]);
        assert_eq!(ds.customers(), ["Anna", "Mia"]);
        assert_eq!(ds.products().into_iter().collect::<Vec<_>>(), ["P1", "P2"]);
    }

    #[test]
    fn augmented_leaves_original_untouched() {
        let ds = Dataset::new(vec![OfferRecord::new("P1", "C1", Some("S1"), Some("x"))]);
        let extra = [OfferRecord::synthetic("P2", "C1")];
        let aug = ds.augmented(&extra);
        assert_eq!(ds.len(), 1);
        assert_eq!(aug.len(), 2);
        assert_eq!(aug.customers(), ds.customers());
        assert_eq!(aug.records()[1].seller, None);
        assert!(!aug.records()[1].has_status());
    }
}
