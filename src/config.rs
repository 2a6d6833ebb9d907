use clap::ValueEnum;

/// Choice of documentation UI renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Flavor {
    /// Redoc single-script viewer
    Redoc,
    /// Swagger UI with the standalone preset
    Swagger,
}

impl Flavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Redoc => "redoc",
            Flavor::Swagger => "swagger",
        }
    }
}

/// Serving configuration, immutable once parsed from the CLI.
///
/// `base_path` may be empty; [`ServeConfig::base_path`] applies the `/`
/// default. `ui_path` must be non-empty (the CLI default is `docs`).
#[derive(Clone, Debug)]
pub struct ServeConfig {
    pub base_path: String,
    pub flavor: Flavor,
    pub doc_url: Option<String>,
    pub no_open: bool,
    pub no_ui: bool,
    pub flatten: bool,
    pub host: String,
    pub port: u16,
    pub ui_path: String,
    pub source_url: Option<String>,
}

impl ServeConfig {
    /// Base path under which all routes are mounted, defaulting to `/`.
    pub fn base_path(&self) -> &str {
        if self.base_path.is_empty() {
            "/"
        } else {
            &self.base_path
        }
    }
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            flavor: Flavor::Redoc,
            doc_url: None,
            no_open: false,
            no_ui: false,
            flatten: false,
            host: "0.0.0.0".to_string(),
            port: 0,
            ui_path: "docs".to_string(),
            source_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_defaults_to_root() {
        let config = ServeConfig::default();
        assert_eq!(config.base_path(), "/");

        let config = ServeConfig {
            base_path: "/api".to_string(),
            ..ServeConfig::default()
        };
        assert_eq!(config.base_path(), "/api");
    }

    #[test]
    fn test_flavor_names() {
        assert_eq!(Flavor::Redoc.as_str(), "redoc");
        assert_eq!(Flavor::Swagger.as_str(), "swagger");
    }
}
