//! Pure projection of the catalog list.

use std::cmp::Ordering;

use catalog_model::ProductSummary;

use super::state::{CategoryFilter, SortOrder};

/// Filter `products` by `filter`, then order by price.
///
/// The sort is stable: products with equal prices keep their relative order
/// from the source list. The source slice is never modified.
pub fn derive_view<'a>(
    products: &'a [ProductSummary],
    filter: &CategoryFilter,
    order: SortOrder,
) -> Vec<&'a ProductSummary> {
    let mut view: Vec<&ProductSummary> = products.iter().filter(|p| filter.matches(p)).collect();

    view.sort_by(|a, b| {
        let by_price = a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal);
        match order {
            SortOrder::Ascending => by_price,
            SortOrder::Descending => by_price.reverse(),
        }
    });

    view
}
