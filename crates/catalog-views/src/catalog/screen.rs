//! Catalog screen lifetime: mount, one-shot load, messages, render.

use std::pin::Pin;
use std::task::{Context, Poll};

use catalog_data::{Endpoint, FetchError, FetchTask, ProductApi};
use futures::future::{AbortHandle, LocalBoxFuture};
use futures::stream::{FuturesUnordered, Stream};
use futures::{FutureExt, StreamExt};

use super::render::{render_catalog_content, render_category_update, render_controls};
use super::state::{CatalogMsg, CatalogState};

/// A load that produced no message.
#[derive(Debug, thiserror::Error)]
#[error("{endpoint} fetch failed: {error}")]
pub struct InitFailure {
    pub endpoint: Endpoint,
    #[source]
    pub error: FetchError,
}

type InitOutcome = (Endpoint, Result<CatalogMsg, FetchError>);

/// The catalog's initial load: products and categories, both in flight.
///
/// Yields one item per fetch in the order the responses arrive.
pub struct CatalogInit {
    pending: FuturesUnordered<LocalBoxFuture<'static, InitOutcome>>,
    handles: Vec<AbortHandle>,
}

impl CatalogInit {
    /// Start both reads. They are issued on first poll.
    pub fn start(api: &ProductApi) -> Self {
        let mut init = Self {
            pending: FuturesUnordered::new(),
            handles: Vec::with_capacity(2),
        };

        init.push(api.list_products(), |list| CatalogMsg::ProductsLoaded(list.products));
        init.push(api.list_categories(), CatalogMsg::CategoriesLoaded);

        init
    }

    fn push<T: 'static>(&mut self, task: FetchTask<T>, into_msg: fn(T) -> CatalogMsg) {
        let endpoint = task.endpoint().clone();
        self.handles.push(task.abort_handle());
        self.pending
            .push(task.map(move |result| (endpoint, result.map(into_msg))).boxed_local());
    }

    /// Abort every read still in flight. Nothing calls this on drop.
    pub fn cancel(&self) {
        for handle in &self.handles {
            handle.abort();
        }
    }

    /// Reads that have not resolved yet.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl Stream for CatalogInit {
    type Item = Result<(Endpoint, CatalogMsg), InitFailure>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().pending.poll_next_unpin(cx).map(|next| {
            next.map(|(endpoint, result)| match result {
                Ok(msg) => Ok((endpoint, msg)),
                Err(error) => Err(InitFailure { endpoint, error }),
            })
        })
    }
}

impl std::fmt::Debug for CatalogInit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogInit")
            .field("remaining", &self.pending.len())
            .finish()
    }
}

/// One catalog screen.
///
/// [`CatalogScreen::mount`] is the only constructor and the only place the
/// screen fetches. [`CatalogScreen::dispatch`] changes selection state and
/// never reaches the network.
#[derive(Debug)]
pub struct CatalogScreen {
    state: CatalogState,
    init: CatalogInit,
}

impl CatalogScreen {
    pub fn mount(api: &ProductApi) -> Self {
        Self {
            state: CatalogState::new(),
            init: CatalogInit::start(api),
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn dispatch(&mut self, msg: CatalogMsg) {
        self.state.update(msg);
    }

    /// Wait for the next response of the initial load and apply it.
    ///
    /// Returns the endpoint that resolved, or `None` once both have. A failed
    /// read leaves the state untouched.
    pub async fn next_arrival(&mut self) -> Option<Result<Endpoint, InitFailure>> {
        let outcome = self.init.next().await?;
        Some(outcome.map(|(endpoint, msg)| {
            self.state.update(msg);
            endpoint
        }))
    }

    /// Drive the initial load to completion, returning what failed.
    pub async fn load(&mut self) -> Vec<InitFailure> {
        let mut failures = Vec::new();
        while let Some(outcome) = self.next_arrival().await {
            if let Err(failure) = outcome {
                failures.push(failure);
            }
        }
        failures
    }

    pub fn init(&self) -> &CatalogInit {
        &self.init
    }

    pub fn render_controls(&self) -> String {
        render_controls(&self.state)
    }

    pub fn render_content(&self) -> String {
        render_catalog_content(&self.state)
    }

    pub fn render_category_update(&self) -> String {
        render_category_update(&self.state)
    }
}
