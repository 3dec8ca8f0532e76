//! Product data model for the catalog browser.
//!
//! Every record coming from the product API is deserialized into one of these
//! types and then validated. A body that does not have the expected shape, or
//! that carries out-of-range values, is rejected with a [`ModelError`] instead
//! of failing later when a field is read.
//!
//! - **Catalog**: [`ProductSummary`], [`ProductList`], [`CategoryList`]
//! - **Detail**: [`ProductDetail`], [`Dimensions`], [`ProductMeta`], [`Availability`]
//! - **Reviews**: [`Review`]

pub mod category;
pub mod error;
pub mod id;
pub mod product;
pub mod review;
mod validate;

pub use category::CategoryList;
pub use error::ModelError;
pub use id::ProductId;
pub use product::{
    format_price, Availability, Dimensions, ProductDetail, ProductList, ProductMeta,
    ProductSummary,
};
pub use review::Review;
pub use validate::{from_json, Validate};
