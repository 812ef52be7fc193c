//! Sales book: catalog plus sales ledger
//!
//! The sales variant adds a second grouping key on top of the ledger: the
//! catalog product's name. Category grouping comes from the inner ledger;
//! product grouping and product-level rankings live here.

use std::sync::Arc;

use crate::error::{TallyError, TallyResult};
use crate::models::{Money, Product, Sale};

use super::{CategoryOrder, Ledger};

/// One product's share of a sales book
#[derive(Debug, Clone)]
pub struct ProductTotal {
    /// Product name
    pub name: String,
    /// Total units sold
    pub units: u32,
    /// Summed revenue across all sales of the product
    pub revenue: Money,
}

/// A product catalog and the ledger of sales against it
#[derive(Debug, Clone, Default)]
pub struct SalesBook {
    catalog: Vec<Arc<Product>>,
    sales: Ledger<Sale>,
}

impl SalesBook {
    /// Create an empty sales book
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the catalog
    ///
    /// Rejects invalid products and duplicate names (compared
    /// case-insensitively) before any mutation.
    pub fn add_product(&mut self, product: Product) -> TallyResult<Arc<Product>> {
        product
            .validate()
            .map_err(|e| TallyError::Validation(e.to_string()))?;

        if self.find_product(&product.name).is_some() {
            return Err(TallyError::duplicate_product(product.name));
        }

        let product = Arc::new(product);
        self.catalog.push(Arc::clone(&product));
        Ok(product)
    }

    /// All catalog products in the order they were added
    pub fn products(&self) -> &[Arc<Product>] {
        &self.catalog
    }

    /// Look up a product by name, case-insensitively
    pub fn find_product(&self, name: &str) -> Option<&Arc<Product>> {
        let name = name.trim();
        self.catalog
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Record a sale of `quantity` units of the named product
    pub fn record_sale(&mut self, product_name: &str, quantity: u32, date_str: &str) -> TallyResult<Sale> {
        if quantity == 0 {
            return Err(TallyError::Validation(
                "Sale quantity must be at least 1".into(),
            ));
        }

        let product = self
            .find_product(product_name)
            .ok_or_else(|| TallyError::product_not_found(product_name.trim()))?;

        let sale = Sale::new(Arc::clone(product), quantity, date_str);
        self.sales.add(sale.clone());
        Ok(sale)
    }

    /// The underlying sales ledger, for category/period/trend queries
    pub fn ledger(&self) -> &Ledger<Sale> {
        &self.sales
    }

    /// Remove the sale at `index` (0-based) and return it
    pub fn remove_at(&mut self, index: usize) -> TallyResult<Sale> {
        self.sales.remove_at(index)
    }

    /// Per-product totals, grouped by product name
    ///
    /// The grouping key is the catalog item's name, distinct from the
    /// per-record category grouping of the inner ledger.
    pub fn product_breakdown(&self, order: CategoryOrder) -> Vec<ProductTotal> {
        let mut breakdown: Vec<ProductTotal> = Vec::new();

        for sale in self.sales.records() {
            let name = &sale.product.name;
            match breakdown.iter_mut().find(|e| e.name.eq_ignore_ascii_case(name)) {
                Some(entry) => {
                    entry.units += sale.quantity;
                    entry.revenue += sale.revenue();
                }
                None => breakdown.push(ProductTotal {
                    name: name.clone(),
                    units: sale.quantity,
                    revenue: sale.revenue(),
                }),
            }
        }

        if order == CategoryOrder::ByTotalDesc {
            breakdown.sort_by(|a, b| b.revenue.cmp(&a.revenue));
        }

        breakdown
    }

    /// Mapping product name -> summed revenue
    pub fn revenue_by_product(&self, order: CategoryOrder) -> Vec<(String, Money)> {
        self.product_breakdown(order)
            .into_iter()
            .map(|entry| (entry.name, entry.revenue))
            .collect()
    }

    /// The `n` products with the highest summed revenue
    ///
    /// Ties keep the order in which the products first appeared in the
    /// sales list; `n` past the product count returns everything.
    pub fn top_products(&self, n: usize) -> Vec<ProductTotal> {
        let mut ranked = self.product_breakdown(CategoryOrder::ByTotalDesc);
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> SalesBook {
        let mut book = SalesBook::new();
        book.add_product(Product::new("Widget", "Hardware", Money::from_cents(250)))
            .unwrap();
        book.add_product(Product::new("Gadget", "Hardware", Money::from_cents(1000)))
            .unwrap();
        book.add_product(Product::new("Manual", "Books", Money::from_cents(500)))
            .unwrap();

        book.record_sale("Widget", 4, "2024-01-05").unwrap(); // $10.00
        book.record_sale("Gadget", 3, "2024-01-10").unwrap(); // $30.00
        book.record_sale("Widget", 2, "2024-02-01").unwrap(); // $5.00
        book.record_sale("Manual", 1, "2024-02-15").unwrap(); // $5.00
        book
    }

    #[test]
    fn test_duplicate_product_rejected() {
        let mut book = sample_book();
        let err = book
            .add_product(Product::new("widget", "Hardware", Money::from_cents(300)))
            .unwrap_err();
        assert!(matches!(err, TallyError::Duplicate { .. }));
        assert_eq!(book.products().len(), 3);
    }

    #[test]
    fn test_invalid_product_rejected() {
        let mut book = SalesBook::new();
        let err = book
            .add_product(Product::new("", "Hardware", Money::from_cents(300)))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(book.products().is_empty());
    }

    #[test]
    fn test_find_product_case_insensitive() {
        let book = sample_book();
        assert!(book.find_product("WIDGET").is_some());
        assert!(book.find_product(" widget ").is_some());
        assert!(book.find_product("Sprocket").is_none());
    }

    #[test]
    fn test_record_sale_unknown_product() {
        let mut book = sample_book();
        let err = book.record_sale("Sprocket", 1, "2024-01-05").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(book.ledger().len(), 4);
    }

    #[test]
    fn test_record_sale_zero_quantity() {
        let mut book = sample_book();
        let err = book.record_sale("Widget", 0, "2024-01-05").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_sale_revenue_uses_unit_price() {
        let book = sample_book();
        let total: Money = book.ledger().records().iter().map(|s| s.revenue()).sum();
        assert_eq!(total, Money::from_cents(5000));
        assert_eq!(book.ledger().total(), total);
    }

    #[test]
    fn test_product_breakdown_groups_by_name() {
        let book = sample_book();
        let breakdown = book.product_breakdown(CategoryOrder::FirstSeen);

        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[0].name, "Widget");
        assert_eq!(breakdown[0].units, 6);
        assert_eq!(breakdown[0].revenue, Money::from_cents(1500));
        assert_eq!(breakdown[1].name, "Gadget");
        assert_eq!(breakdown[1].revenue, Money::from_cents(3000));
    }

    #[test]
    fn test_category_grouping_is_distinct_from_product_grouping() {
        let book = sample_book();
        let by_category = book.ledger().total_by_category(CategoryOrder::FirstSeen);
        assert_eq!(
            by_category,
            vec![
                ("Hardware".to_string(), Money::from_cents(4500)),
                ("Books".to_string(), Money::from_cents(500)),
            ]
        );
    }

    #[test]
    fn test_top_products() {
        let book = sample_book();
        let top = book.top_products(2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Gadget");
        assert_eq!(top[1].name, "Widget");

        assert_eq!(book.top_products(10).len(), 3);
        assert!(book.top_products(0).is_empty());
    }

    #[test]
    fn test_top_products_ties_are_stable() {
        let book = sample_book();
        // Widget ($15.00) and Manual ($5.00); Widget appeared first among
        // the non-tied, and Manual ties with nothing after the Gadget lead.
        let ranked = book.top_products(3);
        assert_eq!(ranked[2].name, "Manual");
    }

    #[test]
    fn test_remove_sale() {
        let mut book = sample_book();
        let removed = book.remove_at(1).unwrap();
        assert_eq!(removed.product.name, "Gadget");
        assert_eq!(book.ledger().len(), 3);

        let err = book.remove_at(10).unwrap_err();
        assert!(err.is_out_of_range());
    }
}
