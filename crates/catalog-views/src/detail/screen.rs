//! Detail screen lifetime.

use catalog_data::{FetchError, FetchTask, ProductApi};
use catalog_model::{ProductDetail, ProductId};
use futures::future::AbortHandle;

use super::sections::{detail_sections, render_detail};

/// One product detail screen.
///
/// Suspended until its single read resolves. A failed read leaves it
/// suspended for good, so nothing is ever rendered for it.
#[derive(Debug)]
pub struct DetailScreen {
    id: ProductId,
    task: Option<FetchTask<ProductDetail>>,
    handle: AbortHandle,
    product: Option<ProductDetail>,
}

impl DetailScreen {
    /// Create the screen and its read. The request goes out on first [`load`].
    ///
    /// [`load`]: DetailScreen::load
    pub fn mount(api: &ProductApi, id: ProductId) -> Self {
        let task = api.get_product(&id);
        Self {
            id,
            handle: task.abort_handle(),
            task: Some(task),
            product: None,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Await the read. Runs it at most once; later calls return `Ok(())`
    /// without touching the network.
    pub async fn load(&mut self) -> Result<(), FetchError> {
        let Some(task) = self.task.take() else {
            return Ok(());
        };
        self.product = Some(task.await?);
        Ok(())
    }

    /// Handle that can abort the read. Nothing uses it on drop.
    pub fn abort_handle(&self) -> AbortHandle {
        self.handle.clone()
    }

    pub fn product(&self) -> Option<&ProductDetail> {
        self.product.as_ref()
    }

    pub fn is_suspended(&self) -> bool {
        self.product.is_none()
    }

    /// Full content, or `None` while suspended.
    pub fn render(&self) -> Option<String> {
        self.product.as_ref().map(render_detail)
    }

    /// Named sections for streaming, empty while suspended.
    pub fn sections(&self) -> Vec<(&'static str, String)> {
        self.product
            .as_ref()
            .map(detail_sections)
            .unwrap_or_default()
    }
}
