//! Product service client.

use std::rc::Rc;

use catalog_model::{from_json, CategoryList, ProductDetail, ProductId, ProductList, Validate};
use futures::FutureExt;
use serde::de::DeserializeOwned;

use crate::endpoint::Endpoint;
use crate::error::FetchError;
use crate::task::FetchTask;
use crate::transport::HttpTransport;

/// Typed reads against the product service.
///
/// No retries, no timeouts, no headers. The response status is ignored and
/// the body always goes through the parser.
#[derive(Clone)]
pub struct ProductApi {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
}

impl ProductApi {
    pub fn new(base_url: impl Into<String>, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /products`.
    pub fn list_products(&self) -> FetchTask<ProductList> {
        self.fetch(Endpoint::Products)
    }

    /// `GET /products/category-list`.
    pub fn list_categories(&self) -> FetchTask<CategoryList> {
        self.fetch(Endpoint::Categories)
    }

    /// `GET /products/{id}`. The identifier is passed through untouched.
    pub fn get_product(&self, id: &ProductId) -> FetchTask<ProductDetail> {
        self.fetch(Endpoint::Product(id.as_str().to_string()))
    }

    fn fetch<T>(&self, endpoint: Endpoint) -> FetchTask<T>
    where
        T: DeserializeOwned + Validate + 'static,
    {
        let url = endpoint.url(&self.base_url);
        let transport = Rc::clone(&self.transport);

        let future = async move {
            let resp = transport
                .get(&url)
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            let value: T = from_json(&resp.body)?;
            Ok::<T, FetchError>(value)
        };

        FetchTask::new(endpoint, future.boxed_local())
    }
}

impl std::fmt::Debug for ProductApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductApi")
            .field("base_url", &self.base_url)
            .finish()
    }
}
