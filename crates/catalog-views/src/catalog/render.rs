//! Catalog section renderers.

use catalog_model::ProductSummary;

use super::state::{CatalogState, SortOrder, ALL_CATEGORIES};
use crate::html::escape_html;

/// Heading and the two selection controls.
///
/// The category control lists "All" first, then the loaded categories in
/// the order they were received.
pub fn render_controls(state: &CatalogState) -> String {
    let category_options = render_category_options(state);

    let sort_options: String = SortOrder::all()
        .iter()
        .map(|order| render_option(order.as_param(), order.display_name(), *order == state.sort()))
        .collect();

    format!(
        r#"<section class="catalog-header" data-section="controls">
    <h1>Product List</h1>
    <div class="catalog-controls">
        <div class="control">
            <label for="category">Filter by Category:</label>
            <select id="category" name="category">{category_options}</select>
        </div>
        <div class="control">
            <label for="sort">Sort by Price:</label>
            <select id="sort" name="sort">{sort_options}</select>
        </div>
    </div>
</section>"#,
    )
}

fn render_category_options(state: &CatalogState) -> String {
    let selected_label = state.filter().label();

    std::iter::once(ALL_CATEGORIES)
        .chain(state.categories().iter())
        .map(|label| render_option(label, label, label == selected_label))
        .collect()
}

/// Replaces the options of an already streamed category control.
///
/// Sent when the category list arrives after the grid went out.
pub fn render_category_update(state: &CatalogState) -> String {
    format!(
        r#"<template id="category-options" data-section="category-options">{}</template>
<script>
(function() {{
  const select = document.getElementById('category');
  const options = document.getElementById('category-options');
  if (select && options) {{
    select.replaceChildren(options.content.cloneNode(true));
  }}
}})();
</script>"#,
        render_category_options(state)
    )
}

fn render_option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        escape_html(value),
        if selected { " selected" } else { "" },
        escape_html(label)
    )
}

/// The content area: the loading indicator, or the grid once products arrived.
pub fn render_catalog_content(state: &CatalogState) -> String {
    if state.is_loading() {
        render_loading()
    } else {
        render_product_grid(&state.view())
    }
}

pub fn render_loading() -> String {
    r#"<p class="loading" data-section="products">Loading products...</p>"#.to_string()
}

/// One card per product, in the given order.
pub fn render_product_grid(products: &[&ProductSummary]) -> String {
    let cards: String = products.iter().map(|p| render_product_card(p)).collect();

    format!(
        r#"<section class="product-grid" data-section="products">
{cards}</section>"#
    )
}

pub fn render_product_card(product: &ProductSummary) -> String {
    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <img src="{thumbnail}" alt="{title}" loading="lazy">
    <h2>{title}</h2>
    <p class="description">{description}</p>
    <p class="price">{price}</p>
    <a href="{href}">View Details</a>
</article>
"#,
        id = escape_html(product.id.as_str()),
        thumbnail = escape_html(&product.thumbnail),
        title = escape_html(&product.title),
        description = escape_html(&product.description),
        price = escape_html(&product.price_display()),
        href = escape_html(&product.detail_path()),
    )
}

/// Selecting a value reloads the page with the choice in the query string.
pub fn catalog_scripts() -> String {
    r#"<script>
function selectControl(key, value) {
    const url = new URL(window.location);
    url.searchParams.set(key, value);
    window.location = url;
}

document.getElementById('category')?.addEventListener('change', e => selectControl('category', e.target.value));
document.getElementById('sort')?.addEventListener('change', e => selectControl('sort', e.target.value));
</script>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogMsg, CategoryFilter};
    use catalog_model::ProductId;

    fn product(id: u32, title: &str, price: f64, category: &str) -> ProductSummary {
        ProductSummary {
            id: ProductId::parse(id.to_string()).unwrap(),
            title: title.to_string(),
            description: format!("About {}", title),
            price,
            category: category.to_string(),
            thumbnail: format!("https://cdn.example/{}.png", id),
        }
    }

    #[test]
    fn test_loading_shows_only_indicator() {
        let state = CatalogState::new();
        let html = render_catalog_content(&state);
        assert!(html.contains("Loading products..."));
        assert!(!html.contains("product-card"));
    }

    #[test]
    fn test_grid_renders_cards_in_view_order() {
        let mut state = CatalogState::new();
        state.update(CatalogMsg::ProductsLoaded(vec![
            product(1, "Lamp", 30.0, "home"),
            product(2, "Soap", 2.5, "beauty"),
        ]));
        let html = render_catalog_content(&state);

        assert!(!html.contains("Loading products..."));
        let soap = html.find("Soap").unwrap();
        let lamp = html.find("Lamp").unwrap();
        assert!(soap < lamp);
        assert!(html.contains("<p class=\"price\">$2.5</p>"));
        assert!(html.contains(r#"<a href="/product/1">View Details</a>"#));
    }

    #[test]
    fn test_card_escapes_text() {
        let html = render_product_card(&product(7, "<b>Bold</b>", 1.0, "x"));
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    // === Controls ===

    #[test]
    fn test_controls_list_all_first() {
        let mut state = CatalogState::new();
        state.update(CatalogMsg::CategoriesLoaded(
            vec!["beauty".to_string(), "fragrances".to_string()].into(),
        ));
        let html = render_controls(&state);

        assert!(html.contains("<h1>Product List</h1>"));
        assert!(html.contains("Filter by Category:"));
        assert!(html.contains("Sort by Price:"));
        let all = html.find(r#"<option value="All" selected>All</option>"#).unwrap();
        let beauty = html.find(r#"<option value="beauty">beauty</option>"#).unwrap();
        let fragrances = html.find(r#"value="fragrances""#).unwrap();
        assert!(all < beauty && beauty < fragrances);
    }

    #[test]
    fn test_controls_reflect_selection() {
        let mut state = CatalogState::new();
        state.update(CatalogMsg::CategoriesLoaded(vec!["beauty".to_string()].into()));
        state.update(CatalogMsg::CategorySelected(CategoryFilter::from_label("beauty")));
        state.update(CatalogMsg::SortSelected(SortOrder::Descending));
        let html = render_controls(&state);

        assert!(html.contains(r#"<option value="beauty" selected>beauty</option>"#));
        assert!(html.contains(r#"<option value="All">All</option>"#));
        assert!(html.contains(r#"<option value="desc" selected>Descending</option>"#));
        assert!(html.contains(r#"<option value="asc">Ascending</option>"#));
    }

    #[test]
    fn test_category_update_carries_late_options() {
        let mut state = CatalogState::new();
        state.update(CatalogMsg::CategorySelected(CategoryFilter::from_label("beauty")));
        state.update(CatalogMsg::CategoriesLoaded(vec!["beauty".to_string()].into()));
        let html = render_category_update(&state);

        assert!(html.contains(r#"<template id="category-options""#));
        assert!(html.contains(r#"<option value="All">All</option>"#));
        assert!(html.contains(r#"<option value="beauty" selected>beauty</option>"#));
        assert!(html.contains("replaceChildren"));
        assert!(!html.contains("Sort by Price:"));
    }

    #[test]
    fn test_controls_without_categories() {
        let html = render_controls(&CatalogState::new());
        assert_eq!(html.matches("<option").count(), 3);
    }
}
