//! # specdocs
//!
//! **specdocs** is a local documentation server: given a specification
//! document describing an API (JSON or YAML, from a file or a URL), it
//! serves the canonical document over HTTP together with an optional
//! rendered, browsable documentation UI, and can open a browser on the
//! resulting URL. Serving runs on the `may` coroutine runtime via
//! `may_minihttp`.
//!
//! ## Architecture
//!
//! - **[`spec`]** - document loading, reference expansion (flatten), and
//!   canonical serialization
//! - **[`server`]** - address resolution, handler-plan composition, the
//!   HTTP service, and the serve coroutine wrapper
//! - **[`middleware`]** - the permissive cross-origin layer wrapped around
//!   every response
//! - **[`cli`]** - the `serve` subcommand tying it all together
//! - **[`config`]** - the serving configuration value object
//! - **[`runtime_config`]** - environment-based coroutine runtime tuning
//!
//! ## Quick start
//!
//! ```bash
//! specdocs serve openapi.json --flavor swagger -p 8080 --no-open
//! ```
//!
//! The document is always served at `{base-path}/swagger.json`; the UI, when
//! enabled, at `{base-path}/{path}`.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod runtime_config;
pub mod server;
pub mod spec;

pub use config::{Flavor, ServeConfig};
pub use error::{DocsError, Result};
pub use server::{
    bind, BoundAddress, DocService, HandlerPlan, HttpServer, ResolvedAddress, ServerHandle, UiMode,
};
pub use spec::{expand, load_document, process, SpecDocument};
