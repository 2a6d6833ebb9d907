use crate::error::Result;
use crate::middleware::CorsMiddleware;
use crate::server::plan::HandlerPlan;
use crate::server::response::{write_bytes, write_json_error};
use crate::server::ui;
use may_minihttp::{HttpService, Request, Response};
use serde_json::json;
use std::io;
use std::sync::Arc;
use tracing::debug;

/// HTTP service for a composed handler plan.
///
/// Serves the canonical document bytes at the plan's document route and,
/// when a UI is configured, the rendered viewer page at the UI route. All
/// state is fixed before the server starts and shared read-only between
/// connections; nothing is mutated after handoff.
#[derive(Clone)]
pub struct DocService {
    plan: Arc<HandlerPlan>,
    document: Arc<Vec<u8>>,
    ui_page: Option<Arc<Vec<u8>>>,
    cors: Arc<CorsMiddleware>,
}

impl DocService {
    /// Build the service from a composed plan and the canonical document
    /// bytes, rendering the UI page up front.
    pub fn new(plan: HandlerPlan, document: Vec<u8>) -> Result<Self> {
        let ui_page = ui::render_page(&plan.ui)?.map(Arc::new);
        Ok(Self {
            plan: Arc::new(plan),
            document: Arc::new(document),
            ui_page,
            cors: Arc::new(CorsMiddleware::default()),
        })
    }
}

impl HttpService for DocService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let method = req.method().to_string();
        let path = req.path().split('?').next().unwrap_or("/").to_string();

        // The cross-origin layer wraps everything, the document route
        // included.
        self.cors.apply(res);
        if self.cors.is_preflight(&method) {
            res.status_code(204, "No Content");
            return Ok(());
        }

        if method == "GET" && path == self.plan.doc_route {
            debug!(path = %path, bytes = self.document.len(), "serving specification document");
            write_bytes(
                res,
                200,
                "Content-Type: application/json",
                self.document.as_ref().clone(),
            );
            return Ok(());
        }

        if let (Some(route), Some(page)) = (self.plan.ui.route(), &self.ui_page) {
            if method == "GET" && path == route {
                debug!(path = %path, "serving documentation page");
                write_bytes(
                    res,
                    200,
                    "Content-Type: text/html; charset=utf-8",
                    page.as_ref().clone(),
                );
                return Ok(());
            }
        }

        write_json_error(
            res,
            404,
            json!({ "error": "Not Found", "method": method, "path": path }),
        );
        Ok(())
    }
}
