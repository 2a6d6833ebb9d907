use crate::config::{Flavor, ServeConfig};
use crate::error::{DocsError, Result};
use crate::runtime_config::RuntimeConfig;
use crate::server::{bind, DocService, HandlerPlan, HttpServer};
use crate::spec;
use clap::{Parser, Subcommand};
use tracing::info;

/// Command-line interface for specdocs
#[derive(Parser)]
#[command(name = "specdocs")]
#[command(about = "Serve API specification documents with a browsable docs UI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Serve a specification document with an optional docs UI
    Serve {
        /// Path or URL of the specification document to serve
        spec: String,

        /// The base path to serve the spec and UI at
        #[arg(long, default_value = "")]
        base_path: String,

        /// The flavor of docs to render
        #[arg(short = 'F', long, value_enum, default_value_t = Flavor::Redoc)]
        flavor: Flavor,

        /// Override the url which takes a url query param to render the doc ui
        #[arg(long)]
        doc_url: Option<String>,

        /// When present, won't open the browser to show the url
        #[arg(long, default_value_t = false)]
        no_open: bool,

        /// When present, only the specification document will be served
        #[arg(long, default_value_t = false)]
        no_ui: bool,

        /// When present, expand references in the specification before serving it
        #[arg(long, default_value_t = false)]
        flatten: bool,

        /// The port to serve this site (0 picks any free port)
        #[arg(short = 'p', long, env = "PORT", default_value_t = 0)]
        port: u16,

        /// The interface to serve this site
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,

        /// The uri path at which the docs UI will be served
        #[arg(long = "path", default_value = "docs")]
        path: String,

        /// The docs UI render asset download url prefix
        #[arg(short = 'S', long = "source_url")]
        source_url: Option<String>,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The specification document cannot be loaded or parsed
/// - Reference expansion or serialization fails
/// - The requested address cannot be bound
/// - The browser cannot be opened
/// - The server terminates with a failure
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Serve {
            spec,
            base_path,
            flavor,
            doc_url,
            no_open,
            no_ui,
            flatten,
            port,
            host,
            path,
            source_url,
        } => {
            let config = ServeConfig {
                base_path,
                flavor,
                doc_url,
                no_open,
                no_ui,
                flatten,
                host,
                port,
                ui_path: path,
                source_url,
            };
            run_serve(&spec, &config)?;
            Ok(())
        }
    }
}

/// Load, render, bind, compose, and serve; blocks until the server fails.
///
/// The serve coroutine runs independently so the browser-launch step can
/// proceed while the server is already accepting connections; the caller
/// then blocks on the handle for the single serve outcome.
pub fn run_serve(spec_location: &str, config: &ServeConfig) -> Result<()> {
    let doc = spec::load_document(spec_location)?;
    let document = spec::process(&doc, config.flatten)?;

    let bound = bind(&config.host, config.port)?;
    let plan = HandlerPlan::compose(config, bound.resolved());
    let visit_url = plan.visit_url.clone();
    let service = DocService::new(plan, document)?;

    let runtime = RuntimeConfig::from_env();
    may::config().set_stack_size(runtime.stack_size);

    let addr = bound.release();
    let handle = HttpServer(service)
        .start(addr)
        .map_err(|e| DocsError::Serve(e.to_string()))?;
    handle
        .wait_ready()
        .map_err(|e| DocsError::Serve(e.to_string()))?;

    if !config.no_open && !config.no_ui {
        open::that(&visit_url).map_err(|e| DocsError::BrowserLaunch(e.to_string()))?;
    }
    info!("serving docs at {visit_url}");

    handle
        .join()
        .map_err(|e| DocsError::Serve(format!("{e:?}")))?;
    Ok(())
}
