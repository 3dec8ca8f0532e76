//! Cancellable fetch handles.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{AbortHandle, Abortable, Aborted, LocalBoxFuture};

use crate::endpoint::Endpoint;
use crate::error::FetchError;

/// One in-flight read.
///
/// The request is issued when the task is first polled. [`FetchTask::cancel`]
/// (or an [`AbortHandle`] taken from it) stops it, after which the task
/// resolves to [`FetchError::Cancelled`]. Dropping a task does not cancel
/// anything that already holds its handle.
pub struct FetchTask<T> {
    endpoint: Endpoint,
    future: Abortable<LocalBoxFuture<'static, Result<T, FetchError>>>,
    handle: AbortHandle,
}

impl<T> FetchTask<T> {
    pub fn new(endpoint: Endpoint, future: LocalBoxFuture<'static, Result<T, FetchError>>) -> Self {
        let (handle, registration) = AbortHandle::new_pair();
        Self {
            endpoint,
            future: Abortable::new(future, registration),
            handle,
        }
    }

    /// The read this task performs.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Handle that can cancel this task from elsewhere.
    pub fn abort_handle(&self) -> AbortHandle {
        self.handle.clone()
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl<T> Future for FetchTask<T> {
    type Output = Result<T, FetchError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.future).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(Aborted)) => Poll::Ready(Err(FetchError::Cancelled)),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T> std::fmt::Debug for FetchTask<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchTask")
            .field("endpoint", &self.endpoint)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
