//! Detail section renderers.

use catalog_model::{format_price, ProductDetail, Review};

use super::date::format_review_date;
use crate::html::escape_html;

/// The page's sections in document order, named for the page sink.
pub fn detail_sections(product: &ProductDetail) -> Vec<(&'static str, String)> {
    vec![
        ("layout-start", r#"<div class="product-detail">"#.to_string()),
        ("gallery", render_gallery(product)),
        (
            "info",
            format!(
                "<div class=\"product-info\">\n{}\n{}\n{}\n</div>",
                render_summary(product),
                render_specs(product),
                render_qr_code(product)
            ),
        ),
        ("layout-end", "</div>".to_string()),
        ("reviews", render_reviews(&product.reviews)),
    ]
}

/// All sections concatenated.
pub fn render_detail(product: &ProductDetail) -> String {
    detail_sections(product)
        .into_iter()
        .map(|(_, html)| html)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Large first image, then every image as a thumbnail.
pub fn render_gallery(product: &ProductDetail) -> String {
    let main = product
        .primary_image()
        .map(|src| {
            format!(
                r#"<div class="gallery-main"><img src="{}" alt="{}"></div>"#,
                escape_html(src),
                escape_html(product.title())
            )
        })
        .unwrap_or_default();

    // thumbnails are not clickable
    let thumbnails: String = product
        .images
        .iter()
        .enumerate()
        .map(|(i, src)| {
            format!(
                r#"<img src="{}" alt="Image {}" loading="lazy">"#,
                escape_html(src),
                i + 1
            )
        })
        .collect();

    format!(
        r#"<section class="gallery" data-section="gallery">
    {main}
    <div class="gallery-thumbs">{thumbnails}</div>
</section>"#
    )
}

/// Title, description, price with discount, rating, stock and availability.
pub fn render_summary(product: &ProductDetail) -> String {
    let availability = product.availability();

    format!(
        r#"<section class="product-summary" data-section="summary">
    <h1>{title}</h1>
    <p class="description">{description}</p>
    <p class="price-row"><span class="price">{price}</span> <s class="discount">-${discount}%</s></p>
    <p class="rating">Rating: {rating} / 5</p>
    <p class="stock">Stock: {stock}</p>
    <p class="availability {class}">{status}</p>
</section>"#,
        title = escape_html(product.title()),
        description = escape_html(&product.summary.description),
        price = escape_html(&format_price(product.summary.price)),
        discount = product.discount_percentage,
        rating = product.rating,
        stock = product.stock,
        class = availability.css_class(),
        status = escape_html(&product.availability_status),
    )
}

/// The fixed spec list.
pub fn render_specs(product: &ProductDetail) -> String {
    let rows = [
        ("SKU", escape_html(&product.sku)),
        ("Weight", format!("{}kg", product.weight)),
        ("Dimensions", product.dimensions.display()),
        ("Warranty", escape_html(&product.warranty_information)),
        ("Shipping", escape_html(&product.shipping_information)),
        ("Return Policy", escape_html(&product.return_policy)),
        (
            "Minimum Order Quantity",
            product.minimum_order_quantity.to_string(),
        ),
    ];

    let items: String = rows
        .iter()
        .map(|(label, value)| format!("<li><strong>{}:</strong> {}</li>", label, value))
        .collect();

    format!(
        r#"<section class="product-specs" data-section="specs">
    <h3>Details</h3>
    <ul class="spec-list">{items}</ul>
</section>"#
    )
}

pub fn render_qr_code(product: &ProductDetail) -> String {
    format!(
        r#"<section class="qr-code" data-section="qr-code">
    <h3>Product QR Code</h3>
    <img src="{}" alt="QR Code">
</section>"#,
        escape_html(&product.meta.qr_code)
    )
}

/// Reviews in service order. An empty slice renders an empty list.
pub fn render_reviews(reviews: &[Review]) -> String {
    let items: String = reviews.iter().map(render_review).collect();

    format!(
        r#"<section class="product-reviews" data-section="reviews">
    <h3>Customer Reviews</h3>
    <div class="reviews-list">{items}</div>
</section>"#
    )
}

fn render_review(review: &Review) -> String {
    format!(
        r#"
        <article class="review">
            <p><strong>{name}</strong> ({email})</p>
            <p>Rating: {rating} / 5</p>
            <p>{comment}</p>
            <p class="review-date">{date}</p>
        </article>"#,
        name = escape_html(&review.reviewer_name),
        email = escape_html(&review.reviewer_email),
        rating = review.rating,
        comment = escape_html(&review.comment),
        date = format_review_date(&review.date),
    )
}
