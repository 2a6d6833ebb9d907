use crate::config::{Flavor, ServeConfig};
use crate::server::address::ResolvedAddress;

/// Default remote prefix for swagger-ui render assets.
pub const SWAGGER_UI_ASSET_PREFIX: &str = "https://unpkg.com/swagger-ui-dist";
/// Default remote prefix for the redoc standalone bundle.
pub const REDOC_ASSET_PREFIX: &str = "https://cdn.jsdelivr.net/npm/redoc/bundles";

/// Static-asset base URL for UI rendering.
///
/// An explicit override is used verbatim for whichever flavor is active;
/// otherwise each flavor has its own default remote prefix. Reachability is
/// not validated here: a broken override simply yields broken asset links,
/// surfaced only when the browser fetches them.
pub fn asset_prefix<'a>(override_url: Option<&'a str>, flavor: Flavor) -> &'a str {
    match override_url {
        Some(url) if !url.is_empty() => url,
        _ => match flavor {
            Flavor::Redoc => REDOC_ASSET_PREFIX,
            Flavor::Swagger => SWAGGER_UI_ASSET_PREFIX,
        },
    }
}

/// The documentation UI selected for a run.
///
/// A closed choice carrying only the fields each variant needs, so invalid
/// field combinations cannot be represented.
#[derive(Clone, Debug, PartialEq)]
pub enum UiMode {
    None,
    Redoc {
        ui_route: String,
        spec_url: String,
        script_url: String,
    },
    Swagger {
        ui_route: String,
        spec_url: String,
        bundle_url: String,
        preset_url: String,
        styles_url: String,
        favicon16_url: String,
        favicon32_url: String,
    },
}

impl UiMode {
    /// Route the UI page is mounted at, when there is one.
    pub fn route(&self) -> Option<&str> {
        match self {
            UiMode::None => None,
            UiMode::Redoc { ui_route, .. } | UiMode::Swagger { ui_route, .. } => Some(ui_route),
        }
    }
}

/// The composed serving decision: which routes exist and where to point the
/// browser after startup.
///
/// Produced once, deterministically, from the configuration and the resolved
/// address. Composition is a pure data transformation and cannot fail;
/// failures surface later, at request or serve time. `visit_url` is empty
/// when there is nothing to open.
#[derive(Clone, Debug)]
pub struct HandlerPlan {
    /// Route serving the canonical document bytes; registered in every mode.
    pub doc_route: String,
    pub ui: UiMode,
    pub visit_url: String,
}

impl HandlerPlan {
    pub fn compose(config: &ServeConfig, addr: &ResolvedAddress) -> HandlerPlan {
        let base = config.base_path();
        let doc_route = join_path(base, "swagger.json");
        let mut visit_url = config.doc_url.clone().unwrap_or_default();
        let mut ui = UiMode::None;

        if !config.no_ui {
            let prefix = asset_prefix(config.source_url.as_deref(), config.flavor);
            match config.flavor {
                Flavor::Redoc => {
                    ui = UiMode::Redoc {
                        ui_route: join_path(base, &config.ui_path),
                        spec_url: doc_route.clone(),
                        script_url: format!("{prefix}/redoc.standalone.js"),
                    };
                    // The visit path is pinned to `docs` regardless of a
                    // custom ui_path.
                    visit_url = format!(
                        "http://{}:{}{}",
                        addr.display_host,
                        addr.bound_port,
                        join_path(base, "docs")
                    );
                }
                // An explicit doc URL selects a UI as well; with a closed
                // two-flavor choice that guard is always satisfied here.
                Flavor::Swagger => {
                    ui = UiMode::Swagger {
                        ui_route: join_path(base, &config.ui_path),
                        spec_url: doc_route.clone(),
                        bundle_url: format!("{prefix}/swagger-ui-bundle.js"),
                        preset_url: format!("{prefix}/swagger-ui-standalone-preset.js"),
                        styles_url: format!("{prefix}/swagger-ui.css"),
                        favicon16_url: format!("{prefix}/favicon-16x16.png"),
                        favicon32_url: format!("{prefix}/favicon-32x32.png"),
                    };
                    visit_url = format!(
                        "http://{}:{}{}",
                        addr.display_host,
                        addr.bound_port,
                        join_path(base, &config.ui_path)
                    );
                }
            }
        }

        HandlerPlan {
            doc_route,
            ui,
            visit_url,
        }
    }
}

/// Join a path segment onto a base path, normalizing the slash between them.
pub(crate) fn join_path(base: &str, segment: &str) -> String {
    let base = base.trim_end_matches('/');
    let segment = segment.trim_start_matches('/');
    if base.is_empty() {
        format!("/{segment}")
    } else {
        format!("{base}/{segment}")
    }
}
