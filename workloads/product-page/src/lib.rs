//! Product detail page workload.
//!
//! Serves `/product/{id}`. The identifier is the first path segment after
//! `/product/`; anything after it, and the query string, is ignored.

use std::rc::Rc;

use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use catalog_core::{PageSink, RequestContext, RequestId, SiteConfig, StructuredLogger};
use catalog_data::{ProductApi, SpinTransport};
use catalog_model::ProductId;
use catalog_views::serve_product;

/// Product page handler.
#[http_component]
async fn handle_product(req: IncomingRequest, response_out: ResponseOutparam) {
    let path_with_query = req.path_with_query().unwrap_or_default();
    let mut ctx = RequestContext::new(request_method(&req.method()), &path_with_query);

    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_workload("product-page")
        .with_screen("product");

    if !ctx.method.is_get() {
        logger
            .warn_builder("Method not allowed")
            .field("method", ctx.method.as_str())
            .field("path", ctx.path.as_str())
            .emit();
        if let Err(e) = respond_empty(405, &ctx.request_id, response_out) {
            logger.error_builder("Failed to respond").field("error", e.to_string()).emit();
        }
        return;
    }

    let config = SiteConfig::default();
    if let Some(params) = config.product_route().match_path(&ctx.path) {
        ctx = ctx.with_params(params);
    }
    let Some(id) = extract_product_id(&ctx) else {
        logger
            .warn_builder("No product identifier in path")
            .field("path", ctx.path.as_str())
            .emit();
        if let Err(e) = respond_empty(404, &ctx.request_id, response_out) {
            logger.error_builder("Failed to respond").field("error", e.to_string()).emit();
        }
        return;
    };

    logger
        .info_builder("Product request started")
        .field("product_id", id.as_str())
        .emit();

    let response = match html_response(200, &ctx.request_id) {
        Ok(response) => response,
        Err(e) => {
            logger.error_builder("Failed to build response").field("error", e.to_string()).emit();
            return;
        }
    };
    let body = response.take_body();
    response_out.set(response);

    let api = ProductApi::new(config.api_base.clone(), Rc::new(SpinTransport));
    let mut sink = PageSink::new(body, ctx.timing.clone());

    if let Err(e) = serve_product(id, &config, &api, &mut sink, &logger).await {
        logger.error_builder("Page stream failed").error_field(&e).emit();
        return;
    }

    let timing = sink.timing();
    let mut done = logger
        .info_builder("Product request complete")
        .field_u64("sections", sink.sections_sent().len() as u64)
        .field_u64("bytes", sink.bytes_sent() as u64);
    if let Some(shell) = timing.time_to_shell() {
        done = done.duration_ms("time_to_shell_ms", shell);
    }
    for (endpoint, at) in timing.fetch_timings() {
        done = done.duration_ms(&format!("fetch_{}_ms", endpoint), at);
    }
    done.duration_ms("total_ms", timing.elapsed()).emit();
}

/// Identifier captured from a path like `/product/123`.
fn extract_product_id(ctx: &RequestContext) -> Option<ProductId> {
    ProductId::parse(ctx.param("id")?).ok()
}

/// The host method as the screens name it.
fn request_method(method: &Method) -> catalog_core::Method {
    match method {
        Method::Get => catalog_core::Method::Get,
        Method::Post => catalog_core::Method::Post,
        Method::Put => catalog_core::Method::Put,
        Method::Delete => catalog_core::Method::Delete,
        Method::Patch => catalog_core::Method::Patch,
        Method::Head => catalog_core::Method::Head,
        Method::Options => catalog_core::Method::Options,
        _ => catalog_core::Method::Other,
    }
}

fn html_response(status: u16, request_id: &RequestId) -> anyhow::Result<OutgoingResponse> {
    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("x-request-id".to_owned(), request_id.to_string().into()),
    ];

    let headers = Fields::from_list(&header_list)
        .map_err(|e| anyhow::anyhow!("invalid response headers: {:?}", e))?;
    let response = OutgoingResponse::new(headers);
    response
        .set_status_code(status)
        .map_err(|()| anyhow::anyhow!("invalid status code {}", status))?;

    Ok(response)
}

fn respond_empty(
    status: u16,
    request_id: &RequestId,
    response_out: ResponseOutparam,
) -> anyhow::Result<()> {
    let response = html_response(status, request_id)?;
    response_out.set(response);
    Ok(())
}
