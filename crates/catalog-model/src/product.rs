//! Product data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::id::ProductId;
use crate::review::Review;
use crate::validate::{non_negative, within, Validate};

/// Availability status that gets the in-stock treatment.
pub const IN_STOCK: &str = "In Stock";

/// A product as listed in the catalog grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub thumbnail: String,
}

impl ProductSummary {
    /// Price with a currency symbol, in the number's own decimal form.
    pub fn price_display(&self) -> String {
        format_price(self.price)
    }

    /// Link to this product's detail screen.
    pub fn detail_path(&self) -> String {
        format!("/product/{}", self.id)
    }
}

impl Validate for ProductSummary {
    fn validate(&self) -> Result<(), ModelError> {
        non_negative("price", self.price)
    }
}

/// Format a price as `$` followed by the shortest decimal form of the number.
///
/// No rounding or fixed number of decimals: `10.0` is `$10`, `9.99` is `$9.99`.
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

/// Envelope served by `/products`. Paging keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    pub products: Vec<ProductSummary>,
}

impl Validate for ProductList {
    fn validate(&self) -> Result<(), ModelError> {
        self.products.iter().try_for_each(Validate::validate)
    }
}

/// Physical dimensions in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Dimensions {
    /// `W x H x D cm`.
    pub fn display(&self) -> String {
        format!("{} x {} x {} cm", self.width, self.height, self.depth)
    }
}

/// Record metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMeta {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub barcode: String,
    pub qr_code: String,
}

/// Binary availability classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    InStock,
    /// Any status other than "In Stock".
    Unavailable,
}

impl Availability {
    pub fn from_status(status: &str) -> Self {
        if status == IN_STOCK {
            Availability::InStock
        } else {
            Availability::Unavailable
        }
    }

    /// CSS class for the status badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Availability::InStock => "availability--in-stock",
            Availability::Unavailable => "availability--unavailable",
        }
    }
}

/// Full product record served by `/products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(flatten)]
    pub summary: ProductSummary,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    pub sku: String,
    pub weight: f64,
    pub dimensions: Dimensions,
    pub warranty_information: String,
    pub shipping_information: String,
    pub availability_status: String,
    pub return_policy: String,
    pub minimum_order_quantity: u32,
    pub images: Vec<String>,
    pub meta: ProductMeta,
    pub reviews: Vec<Review>,
}

impl ProductDetail {
    pub fn id(&self) -> &ProductId {
        &self.summary.id
    }

    pub fn title(&self) -> &str {
        &self.summary.title
    }

    /// The image shown large: the first one, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn availability(&self) -> Availability {
        Availability::from_status(&self.availability_status)
    }
}

impl Validate for ProductDetail {
    fn validate(&self) -> Result<(), ModelError> {
        self.summary.validate()?;
        within("discountPercentage", self.discount_percentage, 0.0, 100.0)?;
        within("rating", self.rating, 0.0, 5.0)?;
        non_negative("weight", self.weight)?;
        non_negative("dimensions.width", self.dimensions.width)?;
        non_negative("dimensions.height", self.dimensions.height)?;
        non_negative("dimensions.depth", self.dimensions.depth)?;
        self.reviews.iter().try_for_each(Validate::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_json;

    const DETAIL: &str = r#"{
        "id": 1,
        "title": "Essence Mascara Lash Princess",
        "description": "Popular mascara.",
        "category": "beauty",
        "price": 9.99,
        "discountPercentage": 7.17,
        "rating": 4.94,
        "stock": 5,
        "tags": ["beauty", "mascara"],
        "brand": "Essence",
        "sku": "RCH45Q1A",
        "weight": 2,
        "dimensions": {"width": 23.17, "height": 14.43, "depth": 28.01},
        "warrantyInformation": "1 month warranty",
        "shippingInformation": "Ships in 1 month",
        "availabilityStatus": "Low Stock",
        "reviews": [
            {"rating": 2, "comment": "Very unhappy with my purchase!", "date": "2024-05-23T08:56:21.618Z",
             "reviewerName": "John Doe", "reviewerEmail": "john.doe@x.dummyjson.com"}
        ],
        "returnPolicy": "30 days return policy",
        "minimumOrderQuantity": 24,
        "meta": {"createdAt": "2024-05-23T08:56:21.618Z", "updatedAt": "2024-05-23T08:56:21.618Z",
                 "barcode": "9164035109868", "qrCode": "https://assets.dummyjson.com/public/qr-code.png"},
        "images": ["https://cdn.dummyjson.com/products/images/beauty/1.png"],
        "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/thumbnail.png"
    }"#;

    #[test]
    fn test_detail_parses() {
        let detail: ProductDetail = from_json(DETAIL.as_bytes()).unwrap();
        assert_eq!(detail.id().as_str(), "1");
        assert_eq!(detail.summary.category, "beauty");
        assert_eq!(detail.sku, "RCH45Q1A");
        assert_eq!(detail.minimum_order_quantity, 24);
        assert_eq!(detail.reviews.len(), 1);
        assert_eq!(detail.primary_image(), Some("https://cdn.dummyjson.com/products/images/beauty/1.png"));
        assert_eq!(detail.availability(), Availability::Unavailable);
    }

    #[test]
    fn test_not_found_envelope_is_malformed() {
        let result = from_json::<ProductDetail>(br#"{"message":"Product with id '0' not found"}"#);
        assert!(matches!(result, Err(ModelError::Malformed(_))));
    }

    #[test]
    fn test_negative_price_rejected() {
        let body = DETAIL.replace("\"price\": 9.99", "\"price\": -1");
        let err = from_json::<ProductDetail>(body.as_bytes()).unwrap_err();
        assert!(matches!(err, ModelError::Invalid { ref field, .. } if field == "price"));
    }

    #[test]
    fn test_invalid_review_rejects_detail() {
        let body = DETAIL.replace("\"rating\": 2,", "\"rating\": 9,");
        assert!(from_json::<ProductDetail>(body.as_bytes()).is_err());
    }

    #[test]
    fn test_empty_reviews_and_images() {
        let body = DETAIL
            .replace(
                r#""images": ["https://cdn.dummyjson.com/products/images/beauty/1.png"]"#,
                r#""images": []"#,
            );
        let mut value: serde_json::Value = serde_json::from_str(&body).unwrap();
        value["reviews"] = serde_json::json!([]);
        let detail: ProductDetail = from_json(value.to_string().as_bytes()).unwrap();
        assert!(detail.reviews.is_empty());
        assert_eq!(detail.primary_image(), None);
    }

    // === Summary and list ===

    #[test]
    fn test_list_envelope_ignores_paging() {
        let body = br#"{"products":[{"id":3,"title":"Powder","description":"d","price":14.99,
            "category":"beauty","thumbnail":"t.png","rating":2.5}],"total":194,"skip":0,"limit":30}"#;
        let list: ProductList = from_json(body).unwrap();
        assert_eq!(list.products.len(), 1);
        assert_eq!(list.products[0].detail_path(), "/product/3");
    }

    #[test]
    fn test_list_rejects_negative_price() {
        let body = br#"{"products":[{"id":3,"title":"P","description":"d","price":-2,
            "category":"beauty","thumbnail":"t.png"}]}"#;
        assert!(from_json::<ProductList>(body).is_err());
    }

    #[test]
    fn test_price_display() {
        assert_eq!(format_price(9.99), "$9.99");
        assert_eq!(format_price(10.0), "$10");
        assert_eq!(format_price(0.5), "$0.5");
    }

    #[test]
    fn test_availability_is_binary() {
        assert_eq!(Availability::from_status("In Stock"), Availability::InStock);
        assert_eq!(Availability::from_status("Low Stock"), Availability::Unavailable);
        assert_eq!(Availability::from_status("in stock"), Availability::Unavailable);
        assert_eq!(Availability::from_status(""), Availability::Unavailable);
    }

    #[test]
    fn test_dimensions_display() {
        let d = Dimensions { width: 23.17, height: 14.43, depth: 28.0 };
        assert_eq!(d.display(), "23.17 x 14.43 x 28 cm");
    }
}
