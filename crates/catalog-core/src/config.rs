//! Site and route configuration.

use serde::{Deserialize, Serialize};

use crate::context::RouteParams;

/// Default product API host.
pub const DEFAULT_API_BASE: &str = "https://dummyjson.com";

/// Site-wide settings shared by both screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site name shown in the header.
    pub name: String,
    /// Default document title.
    pub title: String,
    /// Base URL of the product API.
    pub api_base: String,
    /// Optional external stylesheet.
    pub css_path: Option<String>,
}

impl SiteConfig {
    /// Create a configuration with the given site name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Point the client at another product API host.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Add an external stylesheet.
    pub fn with_css(mut self, path: impl Into<String>) -> Self {
        self.css_path = Some(path.into());
        self
    }

    /// Route of the catalog screen.
    pub fn catalog_route(&self) -> RouteConfig {
        RouteConfig::new("/", "catalog")
    }

    /// Route of the product detail screen.
    pub fn product_route(&self) -> RouteConfig {
        RouteConfig::new("/product/:id", "product")
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Catalog".to_string(),
            title: "Product List".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            css_path: None,
        }
    }
}

/// Configuration for a single route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Route pattern (e.g., "/product/:id").
    pub pattern: String,
    /// Screen served by this route.
    pub screen: String,
}

impl RouteConfig {
    pub fn new(pattern: impl Into<String>, screen: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            screen: screen.into(),
        }
    }

    /// Match a request path (without query) against the pattern.
    ///
    /// `:name` segments capture one non-empty segment. A pattern with
    /// captures also accepts trailing segments after the last capture,
    /// so `/product/:id` matches `/product/5/reviews` with `id = "5"`.
    pub fn match_path(&self, path: &str) -> Option<RouteParams> {
        let pattern: Vec<&str> = self.pattern.split('/').filter(|s| !s.is_empty()).collect();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let has_captures = pattern.iter().any(|p| p.starts_with(':'));
        if segments.len() < pattern.len() || (!has_captures && segments.len() != pattern.len()) {
            return None;
        }

        let mut params = RouteParams::new();
        for (expected, actual) in pattern.iter().zip(segments.iter()) {
            match expected.strip_prefix(':') {
                Some(name) => {
                    params.insert(name.to_string(), actual.to_string());
                }
                None if expected == actual => {}
                None => return None,
            }
        }

        Some(params)
    }

    /// Build a concrete link by substituting parameters into the pattern.
    pub fn link(&self, params: &[(&str, &str)]) -> String {
        let mut link = self.pattern.clone();
        for (name, value) in params {
            link = link.replace(&format!(":{}", name), value);
        }
        link
    }
}
