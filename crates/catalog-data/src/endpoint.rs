//! The read operations issued against the product service.

/// One of the three reads the screens perform.
///
/// None of them carries query parameters, headers or a body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `/products` - the full product list.
    Products,
    /// `/products/category-list` - the category labels.
    Categories,
    /// `/products/{id}` - one product's detail record.
    Product(String),
}

impl Endpoint {
    /// Path relative to the service base URL.
    pub fn path(&self) -> String {
        match self {
            Self::Products => "/products".to_string(),
            Self::Categories => "/products/category-list".to_string(),
            Self::Product(id) => format!("/products/{}", id),
        }
    }

    /// Absolute URL under `base`.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }

    /// Short name used in logs and timing marks.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Categories => "categories",
            Self::Product(_) => "product",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
