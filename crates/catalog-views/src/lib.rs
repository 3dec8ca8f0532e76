//! The two screens of the catalog browser.
//!
//! - [`catalog`] - product grid with category filter and price sort
//! - [`detail`] - one product with images, specs and reviews
//! - [`page`] - shell-first page flow used by the Spin workloads
//!
//! Each screen owns its state exclusively. A screen is created by `mount`,
//! which starts its one-shot load and is the only place a fetch is issued.
//! Everything after that is a message applied to the state, followed by a
//! render.

pub mod catalog;
pub mod detail;
pub mod html;
pub mod page;

pub use catalog::{
    derive_view, CatalogInit, CatalogMsg, CatalogScreen, CatalogState, CategoryFilter,
    InitFailure, SortOrder,
};
pub use detail::{format_review_date, DetailScreen};
pub use html::{escape_html, page_shell, HeadContent, Shell};
pub use page::{serve_catalog, serve_product};
