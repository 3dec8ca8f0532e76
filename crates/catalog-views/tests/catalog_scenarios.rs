//! End-to-end catalog behaviour against an in-memory product service.

use std::rc::Rc;

use catalog_data::{MockTransport, ProductApi, RawResponse};
use catalog_model::{ProductId, ProductSummary};
use catalog_views::{derive_view, CatalogMsg, CatalogScreen, CategoryFilter, SortOrder};
use futures::executor::block_on;

const BASE: &str = "https://dummyjson.com";
const PRODUCTS_URL: &str = "https://dummyjson.com/products";
const CATEGORIES_URL: &str = "https://dummyjson.com/products/category-list";

fn product(id: u32, price: f64, category: &str) -> ProductSummary {
    ProductSummary {
        id: ProductId::parse(id.to_string()).unwrap(),
        title: format!("Product {}", id),
        description: format!("Description {}", id),
        price,
        category: category.to_string(),
        thumbnail: format!("https://cdn.example/{}.png", id),
    }
}

/// [{10, A}, {5, B}, {5, A}]
fn scenario_list() -> Vec<ProductSummary> {
    vec![product(1, 10.0, "A"), product(2, 5.0, "B"), product(3, 5.0, "A")]
}

fn products_body(products: &[ProductSummary]) -> String {
    serde_json::json!({ "products": products, "total": products.len() }).to_string()
}

fn pairs(view: &[&ProductSummary]) -> Vec<(f64, String)> {
    view.iter().map(|p| (p.price, p.category.clone())).collect()
}

fn mount(mock: &Rc<MockTransport>) -> CatalogScreen {
    CatalogScreen::mount(&ProductApi::new(BASE, mock.clone()))
}

// === Derived view properties ===

#[test]
fn test_filtered_view_only_contains_selected_category() {
    let products = scenario_list();
    for label in ["A", "B", "C"] {
        let filter = CategoryFilter::from_label(label);
        for order in SortOrder::all() {
            let view = derive_view(&products, &filter, order);
            assert!(view.iter().all(|p| p.category == label));
            assert!(view.len() <= products.len());
        }
    }
}

#[test]
fn test_all_filter_keeps_every_product() {
    let products = scenario_list();
    let view = derive_view(&products, &CategoryFilter::All, SortOrder::Ascending);
    assert_eq!(view.len(), products.len());
    for p in &products {
        assert!(view.iter().any(|v| v.id == p.id));
    }
}

#[test]
fn test_monotonic_prices() {
    let products = vec![
        product(1, 3.5, "A"),
        product(2, 0.0, "A"),
        product(3, 99.99, "B"),
        product(4, 3.5, "B"),
        product(5, 12.0, "A"),
    ];
    let asc = derive_view(&products, &CategoryFilter::All, SortOrder::Ascending);
    assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));

    let desc = derive_view(&products, &CategoryFilter::All, SortOrder::Descending);
    assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));
}

#[test]
fn test_rederiving_is_idempotent() {
    let products = scenario_list();
    let filter = CategoryFilter::from_label("A");
    let first = derive_view(&products, &filter, SortOrder::Descending);
    let second = derive_view(&products, &filter, SortOrder::Descending);
    assert_eq!(first, second);
}

#[test]
fn test_scenario_a_ties_keep_input_order() {
    let products = scenario_list();
    let view = derive_view(&products, &CategoryFilter::All, SortOrder::Ascending);
    assert_eq!(
        pairs(&view),
        [(5.0, "B".to_string()), (5.0, "A".to_string()), (10.0, "A".to_string())]
    );
}

#[test]
fn test_scenario_b_filter_then_descending() {
    let products = scenario_list();
    let view = derive_view(&products, &CategoryFilter::from_label("A"), SortOrder::Descending);
    assert_eq!(pairs(&view), [(10.0, "A".to_string()), (5.0, "A".to_string())]);
}

// === Screen scenarios ===

#[test]
fn test_scenario_c_empty_categories() {
    let mock = Rc::new(MockTransport::new());
    mock.respond(PRODUCTS_URL, 200, products_body(&scenario_list()))
        .respond(CATEGORIES_URL, 200, "[]");
    let mut screen = mount(&mock);

    assert!(block_on(screen.load()).is_empty());

    let controls = screen.render_controls();
    assert_eq!(controls.matches("<option").count(), 3);
    assert!(controls.contains(r#"<option value="All" selected>All</option>"#));

    let content = screen.render_content();
    assert_eq!(content.matches("product-card").count(), 3);
}

#[test]
fn test_scenario_d_products_first() {
    let mock = Rc::new(MockTransport::new());
    let products_gate = mock.gate(PRODUCTS_URL);
    let categories_gate = mock.gate(CATEGORIES_URL);
    let mut screen = mount(&mock);

    products_gate
        .send(Ok(RawResponse::new(200, products_body(&scenario_list()))))
        .unwrap();
    block_on(screen.next_arrival()).unwrap().unwrap();
    assert!(!screen.state().is_loading());
    assert!(screen.state().categories().is_empty());
    assert_eq!(screen.render_content().matches("product-card").count(), 3);

    categories_gate
        .send(Ok(RawResponse::new(200, r#"["A","B"]"#)))
        .unwrap();
    block_on(screen.next_arrival()).unwrap().unwrap();
    assert!(!screen.state().is_loading());
    assert_eq!(screen.state().categories().len(), 2);
}

#[test]
fn test_scenario_d_categories_first() {
    let mock = Rc::new(MockTransport::new());
    let products_gate = mock.gate(PRODUCTS_URL);
    let categories_gate = mock.gate(CATEGORIES_URL);
    let mut screen = mount(&mock);

    categories_gate
        .send(Ok(RawResponse::new(200, r#"["A","B"]"#)))
        .unwrap();
    block_on(screen.next_arrival()).unwrap().unwrap();
    assert!(screen.state().is_loading());
    assert!(screen.render_content().contains("Loading products..."));
    assert!(screen.render_controls().contains(r#"value="B""#));

    products_gate
        .send(Ok(RawResponse::new(200, products_body(&scenario_list()))))
        .unwrap();
    block_on(screen.next_arrival()).unwrap().unwrap();
    assert!(!screen.state().is_loading());
}

#[test]
fn test_failed_categories_leave_only_all_option() {
    let mock = Rc::new(MockTransport::new());
    mock.respond(PRODUCTS_URL, 200, products_body(&scenario_list()))
        .fail(CATEGORIES_URL, "host unreachable");
    let mut screen = mount(&mock);

    let failures = block_on(screen.load());
    assert_eq!(failures.len(), 1);
    assert!(failures[0].error.is_transport());
    assert!(!screen.state().is_loading());

    let content = screen.render_content();
    assert_eq!(content.matches("product-card").count(), 3);
    for id in 1..=3 {
        assert!(content.contains(&format!(r#"href="/product/{}""#, id)));
    }

    let controls = screen.render_controls();
    assert_eq!(controls.matches(r#"<option value="All" selected>All</option>"#).count(), 1);
    assert!(!controls.contains(r#"value="A""#));
    assert_eq!(controls.matches("<option").count(), 3);
}

#[test]
fn test_empty_filter_result_renders_empty_grid() {
    let mock = Rc::new(MockTransport::new());
    mock.respond(PRODUCTS_URL, 200, products_body(&scenario_list()))
        .respond(CATEGORIES_URL, 200, r#"["A","B","C"]"#);
    let mut screen = mount(&mock);
    block_on(screen.load());

    screen.dispatch(CatalogMsg::CategorySelected(CategoryFilter::from_label("C")));
    let content = screen.render_content();
    assert!(content.contains(r#"class="product-grid""#));
    assert!(!content.contains("product-card"));
    assert!(!content.contains("Loading"));
}

#[test]
fn test_query_interactions_reorder_without_refetch() {
    let mock = Rc::new(MockTransport::new());
    mock.respond(PRODUCTS_URL, 200, products_body(&scenario_list()))
        .respond(CATEGORIES_URL, 200, r#"["A","B"]"#);
    let mut screen = mount(&mock);
    block_on(screen.load());

    let query = catalog_core::parse_query("category=A&sort=desc");
    for msg in CatalogMsg::interactions_from_query(&query) {
        screen.dispatch(msg);
    }

    assert_eq!(
        pairs(&screen.state().view()),
        [(10.0, "A".to_string()), (5.0, "A".to_string())]
    );
    assert_eq!(mock.requests().len(), 2);
}

#[test]
fn test_malformed_products_leave_screen_loading() {
    let mock = Rc::new(MockTransport::new());
    mock.respond(PRODUCTS_URL, 500, "<html>Internal error</html>")
        .respond(CATEGORIES_URL, 200, r#"["A"]"#);
    let mut screen = mount(&mock);

    let failures = block_on(screen.load());
    assert_eq!(failures.len(), 1);
    assert!(screen.state().is_loading());
    assert!(screen.render_content().contains("Loading products..."));
}
