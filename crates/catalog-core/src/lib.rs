//! Core abstractions shared by the catalog browser screens and workloads.
//!
//! This crate provides:
//! - `RequestContext` - Typed request path, query and route parameters
//! - `SiteConfig` / `RouteConfig` - Site settings and route matching
//! - `TimingContext` / `ScreenPhase` - Lifecycle and timing tracking
//! - `StructuredLogger` - Request-scoped structured logging
//! - `PageSink` - Shell-first HTML streaming

mod config;
mod context;
mod error;
mod lifecycle;
mod logging;
mod sink;

pub use config::*;
pub use context::*;
pub use error::*;
pub use lifecycle::*;
pub use logging::*;
pub use sink::*;
