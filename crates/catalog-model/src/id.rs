//! Opaque product identifier.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Identifier assigned by the product API.
///
/// Carried as a string and only interpreted by the service. The wire form is
/// a number, which is kept in its decimal representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "WireId", into = "String")]
pub struct ProductId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(u64),
    Text(String),
}

impl TryFrom<WireId> for ProductId {
    type Error = ModelError;

    fn try_from(wire: WireId) -> Result<Self, Self::Error> {
        match wire {
            WireId::Number(n) => Ok(ProductId(n.to_string())),
            WireId::Text(s) => ProductId::parse(s),
        }
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl ProductId {
    /// Accept any non-blank token.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ModelError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ModelError::invalid("id", "identifier is empty"));
        }
        Ok(ProductId(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
