//! Category labels.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::validate::Validate;

/// The category labels served by `/products/category-list`.
///
/// Only used to populate the filter control. Nothing checks it against the
/// categories actually present in the product list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryList(pub Vec<String>);

impl CategoryList {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for CategoryList {
    fn from(labels: Vec<String>) -> Self {
        CategoryList(labels)
    }
}

impl Validate for CategoryList {
    fn validate(&self) -> Result<(), ModelError> {
        Ok(())
    }
}
