//! Handler composition and the HTTP serving path.

pub mod address;
pub mod http_server;
pub mod plan;
pub mod response;
pub mod service;
pub mod ui;

pub use address::{bind, BoundAddress, ResolvedAddress};
pub use http_server::{HttpServer, ServerHandle};
pub use plan::{asset_prefix, HandlerPlan, UiMode, REDOC_ASSET_PREFIX, SWAGGER_UI_ASSET_PREFIX};
pub use service::DocService;
