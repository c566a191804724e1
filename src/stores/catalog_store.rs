//! Catalog filter state.
//!
//! Any change to a filter control rewinds pagination to the first page and
//! resubmits the query; pagination survives only untouched filters.

use dioxus::prelude::*;

/// Products shown per page.
pub const PAGE_SIZE: usize = 6;

pub const CATEGORIES: &[&str] = &["Electronics", "Home", "Beauty", "Sports"];

/// Price caps offered by the filter bar, in whole currency units.
pub const PRICE_CAPS: &[u32] = &[1_000, 5_000, 20_000];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Empty string means every category.
    pub category: String,
    /// Empty string means no price cap; otherwise a decimal cap.
    pub max_price: String,
    pub in_stock_only: bool,
    pub page: u32,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            category: String::new(),
            max_price: String::new(),
            in_stock_only: false,
            page: 1,
        }
    }
}

/// One filter-control edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterChange {
    Category(String),
    MaxPrice(String),
    InStockOnly(bool),
}

impl CatalogQuery {
    /// Apply a control change and rewind to the first page. Returns the
    /// query to submit.
    pub fn apply_change(&mut self, change: FilterChange) -> CatalogQuery {
        match change {
            FilterChange::Category(category) => self.category = category,
            FilterChange::MaxPrice(max_price) => self.max_price = max_price,
            FilterChange::InStockOnly(in_stock_only) => self.in_stock_only = in_stock_only,
        }
        self.page = 1;
        self.clone()
    }

    fn price_cap(&self) -> Option<u32> {
        self.max_price.parse().ok()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.is_empty() && product.category != self.category {
            return false;
        }
        if let Some(cap) = self.price_cap() {
            if product.price > cap {
                return false;
            }
        }
        if self.in_stock_only && !product.in_stock {
            return false;
        }
        true
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub category: &'static str,
    pub price: u32,
    pub in_stock: bool,
}

pub const PRODUCTS: &[Product] = &[
    Product { name: "Wireless earbuds", category: "Electronics", price: 3_490, in_stock: true },
    Product { name: "Smart scale", category: "Electronics", price: 2_190, in_stock: true },
    Product { name: "4K action camera", category: "Electronics", price: 14_900, in_stock: false },
    Product { name: "Mechanical keyboard", category: "Electronics", price: 6_990, in_stock: true },
    Product { name: "Robot vacuum", category: "Home", price: 18_990, in_stock: true },
    Product { name: "Air humidifier", category: "Home", price: 1_890, in_stock: true },
    Product { name: "Cast-iron skillet", category: "Home", price: 2_590, in_stock: false },
    Product { name: "Blackout curtains", category: "Home", price: 990, in_stock: true },
    Product { name: "Vitamin C serum", category: "Beauty", price: 790, in_stock: true },
    Product { name: "Hair dryer brush", category: "Beauty", price: 3_290, in_stock: true },
    Product { name: "Clay face mask set", category: "Beauty", price: 540, in_stock: false },
    Product { name: "Yoga mat", category: "Sports", price: 1_190, in_stock: true },
    Product { name: "Adjustable dumbbells", category: "Sports", price: 9_490, in_stock: true },
    Product { name: "Resistance band kit", category: "Sports", price: 690, in_stock: true },
];

/// One rendered page of the filtered catalog.
#[derive(Debug, PartialEq, Eq)]
pub struct ProductPage {
    pub items: Vec<&'static Product>,
    pub page: u32,
    pub total_pages: u32,
}

/// Filter and paginate the catalog for `query`. An out-of-range page is
/// clamped rather than rendered empty.
pub fn filter_products(query: &CatalogQuery) -> ProductPage {
    let matches: Vec<&Product> = PRODUCTS
        .iter()
        .filter(|product| query.matches(product))
        .collect();
    let total_pages = (matches.len().div_ceil(PAGE_SIZE)).max(1) as u32;
    let page = query.page.clamp(1, total_pages);
    let start = (page as usize - 1) * PAGE_SIZE;
    let items = matches
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .collect();
    ProductPage {
        items,
        page,
        total_pages,
    }
}

/// Global catalog query driving the catalog route.
pub static CATALOG_QUERY: GlobalSignal<CatalogQuery> = Signal::global(CatalogQuery::default);

/// Submit a query, the way the original page submits its filter form.
pub fn submit_query(query: CatalogQuery) {
    log::debug!("catalog query submitted: {query:?}");
    *CATALOG_QUERY.write() = query;
}

/// Entry point for the filter controls: apply the edit, rewind the page
/// field, submit exactly once.
pub fn change_filter(change: FilterChange) {
    let mut query = CATALOG_QUERY.read().clone();
    let submitted = query.apply_change(change);
    submit_query(submitted);
}

/// Jump to a page without touching the filters.
pub fn go_to_page(page: u32) {
    let mut query = CATALOG_QUERY.read().clone();
    query.page = page.max(1);
    submit_query(query);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_filter_change_rewinds_to_page_one() {
        let changes = [
            FilterChange::Category("Home".to_string()),
            FilterChange::MaxPrice("5000".to_string()),
            FilterChange::InStockOnly(true),
        ];
        for change in changes {
            let mut query = CatalogQuery {
                page: 5,
                ..CatalogQuery::default()
            };
            let submitted = query.apply_change(change);
            assert_eq!(submitted.page, 1);
            assert_eq!(query, submitted);
        }
    }

    #[test]
    fn category_and_stock_filters_compose() {
        let query = CatalogQuery {
            category: "Home".to_string(),
            in_stock_only: true,
            ..CatalogQuery::default()
        };
        let page = filter_products(&query);
        assert!(!page.items.is_empty());
        assert!(page
            .items
            .iter()
            .all(|product| product.category == "Home" && product.in_stock));
    }

    #[test]
    fn price_cap_is_inclusive_and_optional() {
        let capped = CatalogQuery {
            max_price: "990".to_string(),
            ..CatalogQuery::default()
        };
        let page = filter_products(&capped);
        assert!(page.items.iter().all(|product| product.price <= 990));
        assert!(page.items.iter().any(|product| product.price == 990));

        // Unparsable cap behaves as "no cap".
        let garbage = CatalogQuery {
            max_price: "cheap".to_string(),
            ..CatalogQuery::default()
        };
        assert_eq!(filter_products(&garbage).items.len(), PAGE_SIZE);
    }

    #[test]
    fn pagination_clamps_out_of_range_pages() {
        let query = CatalogQuery {
            page: 99,
            ..CatalogQuery::default()
        };
        let page = filter_products(&query);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 3);
        assert!(!page.items.is_empty());
    }

    #[test]
    fn pages_partition_the_matches() {
        let first = filter_products(&CatalogQuery::default());
        let second = filter_products(&CatalogQuery {
            page: 2,
            ..CatalogQuery::default()
        });
        assert_eq!(first.items.len(), PAGE_SIZE);
        assert!(first
            .items
            .iter()
            .all(|product| !second.items.contains(product)));
    }
}
