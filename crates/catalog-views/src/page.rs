//! Host page flow for both screens: shell first, then the screen's sections.
//!
//! Generic over the byte sink so the Spin workloads and the tests drive the
//! same code.

use std::fmt::Display;

use catalog_core::{PageSink, RequestContext, ScreenError, SiteConfig, StructuredLogger};
use catalog_data::{Endpoint, ProductApi};
use catalog_model::ProductId;
use futures::{FutureExt, Sink};

use crate::catalog::{catalog_scripts, CatalogMsg, CatalogScreen, InitFailure};
use crate::detail::DetailScreen;
use crate::html::page_shell;

/// Serve the catalog screen for one host request.
///
/// The query string carries the user's selections. The controls and the
/// content go out as soon as the product list settles. A category list that
/// arrives later is streamed as an update to the category control. Load
/// failures are logged and leave the screen in its loading state.
pub async fn serve_catalog<S, E>(
    ctx: &RequestContext,
    config: &SiteConfig,
    api: &ProductApi,
    sink: &mut PageSink<S, E>,
    logger: &StructuredLogger,
) -> Result<(), ScreenError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let shell = page_shell(config, &config.title).with_trailer(&catalog_scripts());
    sink.send_shell(&shell.render_opening()).await?;
    logger.debug("Shell sent");

    let mut screen = CatalogScreen::mount(api);
    while let Some(outcome) = screen.next_arrival().await {
        if record_arrival(&outcome, sink, logger) == Endpoint::Products {
            break;
        }
    }
    // take anything else that already resolved without waiting for it
    while let Some(Some(outcome)) = screen.next_arrival().now_or_never() {
        record_arrival(&outcome, sink, logger);
    }

    for msg in CatalogMsg::interactions_from_query(&ctx.query) {
        screen.dispatch(msg);
    }

    let state = screen.state();
    logger
        .info_builder("Catalog rendered")
        .field("filter", state.filter().label())
        .field("sort", state.sort().as_param())
        .field_u64("visible", state.view().len() as u64)
        .field_bool("loading", state.is_loading())
        .emit();

    sink.send_section("controls", &screen.render_controls()).await?;
    sink.send_section("products", &screen.render_content()).await?;

    while let Some(outcome) = screen.next_arrival().await {
        let endpoint = record_arrival(&outcome, sink, logger);
        if outcome.is_ok() && endpoint == Endpoint::Categories {
            sink.send_section("category-options", &screen.render_category_update())
                .await?;
        }
    }

    sink.finish(&shell.render_closing()).await
}

/// Log one settled read of the catalog load and mark its timing.
fn record_arrival<S, E>(
    outcome: &Result<Endpoint, InitFailure>,
    sink: &mut PageSink<S, E>,
    logger: &StructuredLogger,
) -> Endpoint
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    match outcome {
        Ok(endpoint) => {
            sink.timing_mut().mark_fetch_done(endpoint.name());
            logger
                .debug_builder("Fetch resolved")
                .field("endpoint", endpoint.name())
                .emit();
            endpoint.clone()
        }
        Err(failure) => {
            logger
                .error_builder("Fetch failed")
                .field("endpoint", failure.endpoint.name())
                .error_field(&failure.error)
                .emit();
            failure.endpoint.clone()
        }
    }
}

/// Serve the detail screen for product `id`.
///
/// Nothing is emitted between the shell and the closing if the read fails.
pub async fn serve_product<S, E>(
    id: ProductId,
    config: &SiteConfig,
    api: &ProductApi,
    sink: &mut PageSink<S, E>,
    logger: &StructuredLogger,
) -> Result<(), ScreenError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let shell = page_shell(config, &format!("Product {} | {}", id, config.name));
    sink.send_shell(&shell.render_opening()).await?;
    logger.debug("Shell sent");

    let mut screen = DetailScreen::mount(api, id);
    match screen.load().await {
        Ok(()) => {
            sink.timing_mut().mark_fetch_done("product");
        }
        Err(e) => {
            logger
                .error_builder("Product fetch failed")
                .field("product_id", screen.id().as_str())
                .error_field(&e)
                .emit();
        }
    }

    for (name, html) in screen.sections() {
        sink.send_section(name, &html).await?;
    }

    sink.finish(&shell.render_closing()).await
}
