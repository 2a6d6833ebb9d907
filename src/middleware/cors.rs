use http::Method;
use may_minihttp::Response;

/// CORS (Cross-Origin Resource Sharing) layer
///
/// Wraps the handler chain outermost: every response gets the configured
/// CORS headers, and preflight OPTIONS requests are answered without
/// reaching any route.
pub struct CorsMiddleware {
    headers: Vec<&'static str>,
}

impl CorsMiddleware {
    /// Create a CORS layer with specific allow-lists.
    ///
    /// # Arguments
    ///
    /// * `allowed_origins` - allowed origins (e.g., `["https://example.com"]`)
    /// * `allowed_headers` - allowed request headers
    /// * `allowed_methods` - allowed HTTP methods
    pub fn new(
        allowed_origins: Vec<String>,
        allowed_headers: Vec<String>,
        allowed_methods: Vec<Method>,
    ) -> Self {
        let methods = allowed_methods
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        // Composed once per run; the transport only accepts 'static header
        // strings.
        let headers = vec![
            leak(format!(
                "Access-Control-Allow-Origin: {}",
                allowed_origins.join(", ")
            )),
            leak(format!(
                "Access-Control-Allow-Headers: {}",
                allowed_headers.join(", ")
            )),
            leak(format!("Access-Control-Allow-Methods: {methods}")),
        ];
        Self { headers }
    }

    /// Whether the request is a CORS preflight to be answered directly.
    pub fn is_preflight(&self, method: &str) -> bool {
        method == Method::OPTIONS.as_str()
    }

    /// Add the configured CORS headers to a response.
    pub fn apply(&self, res: &mut Response) {
        for &header in &self.headers {
            res.header(header);
        }
    }
}

/// Permissive policy: all origins, common headers and methods.
impl Default for CorsMiddleware {
    fn default() -> Self {
        Self::new(
            vec!["*".into()],
            vec!["Content-Type".into(), "Authorization".into()],
            vec![
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ],
        )
    }
}

fn leak(header: String) -> &'static str {
    Box::leak(header.into_boxed_str())
}
