//! Data access for the catalog browser.
//!
//! This crate provides:
//! - `ProductApi` - Typed reads against the product service
//! - `Endpoint` - The three read operations the screens use
//! - `FetchTask` - Cancellable handle for one in-flight read
//! - `HttpTransport` - Transport seam (Spin outbound HTTP, or `MockTransport`)

mod client;
mod endpoint;
mod error;
mod task;
mod transport;

pub use client::*;
pub use endpoint::*;
pub use error::*;
pub use task::*;
pub use transport::*;
