//! Catalog screen state and the messages that change it.

use catalog_core::QueryParams;
use catalog_model::{CategoryList, ProductSummary};

use super::derive::derive_view;

/// Label of the "no restriction" filter value.
pub const ALL_CATEGORIES: &str = "All";

/// Selected category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Keep every product.
    #[default]
    All,
    /// Keep products whose category equals this label exactly.
    Category(String),
}

impl CategoryFilter {
    /// Map a control value to a filter. `"All"` is the sentinel.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(label.to_string())
        }
    }

    /// Value used in the filter control.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(label) => label,
        }
    }

    pub fn matches(&self, product: &ProductSummary) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(label) => product.category == *label,
        }
    }
}

/// Price sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Parse a control value (`asc` / `desc`).
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Ascending),
            "desc" => Some(Self::Descending),
            _ => None,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    pub fn all() -> [SortOrder; 2] {
        [Self::Ascending, Self::Descending]
    }
}

/// Everything that can happen to a catalog screen after mount.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogMsg {
    /// The product list arrived.
    ProductsLoaded(Vec<ProductSummary>),
    /// The category labels arrived.
    CategoriesLoaded(CategoryList),
    /// The user picked a category.
    CategorySelected(CategoryFilter),
    /// The user picked a sort direction.
    SortSelected(SortOrder),
}

impl CatalogMsg {
    /// Interactions carried in a host page query (`?category=..&sort=..`).
    ///
    /// An unknown sort value means ascending. A missing or empty category
    /// selects nothing.
    pub fn interactions_from_query(query: &QueryParams) -> Vec<CatalogMsg> {
        let mut msgs = Vec::new();

        if let Some(label) = query.get("category").filter(|l| !l.is_empty()) {
            msgs.push(CatalogMsg::CategorySelected(CategoryFilter::from_label(label)));
        }

        if let Some(sort) = query.get("sort") {
            let order = SortOrder::from_param(sort).unwrap_or_default();
            msgs.push(CatalogMsg::SortSelected(order));
        }

        msgs
    }
}

/// State owned by one catalog screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    products: Vec<ProductSummary>,
    loading: bool,
    filter: CategoryFilter,
    categories: CategoryList,
    sort: SortOrder,
}

impl CatalogState {
    /// Initial state: no products, loading, "All", no categories, ascending.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            filter: CategoryFilter::All,
            categories: CategoryList::default(),
            sort: SortOrder::Ascending,
        }
    }

    /// Apply one message. Never issues a fetch.
    pub fn update(&mut self, msg: CatalogMsg) {
        match msg {
            CatalogMsg::ProductsLoaded(products) => {
                self.products = products;
                self.loading = false;
            }
            CatalogMsg::CategoriesLoaded(categories) => {
                self.categories = categories;
            }
            CatalogMsg::CategorySelected(filter) => {
                self.filter = filter;
            }
            CatalogMsg::SortSelected(order) => {
                self.sort = order;
            }
        }
    }

    /// Filtered then sorted projection of the product list.
    pub fn view(&self) -> Vec<&ProductSummary> {
        derive_view(&self.products, &self.filter, self.sort)
    }

    pub fn products(&self) -> &[ProductSummary] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn categories(&self) -> &CategoryList {
        &self.categories
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}
