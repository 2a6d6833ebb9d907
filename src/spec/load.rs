use crate::error::{DocsError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Where a document was loaded from.
///
/// Relative external references are resolved against the origin: siblings on
/// disk for file origins, joined URLs for remote origins.
#[derive(Clone, Debug)]
pub enum Origin {
    File(PathBuf),
    Url(Url),
}

/// A loaded specification document.
///
/// The document is held as a generic JSON value; interpreting its schema
/// language is out of scope here, it is served as data.
#[derive(Clone, Debug)]
pub struct SpecDocument {
    pub value: Value,
    origin: Origin,
}

impl SpecDocument {
    pub fn new(value: Value, origin: Origin) -> Self {
        Self { value, origin }
    }

    /// Stable identifier of the origin, used to track reference cycles.
    pub(crate) fn origin_key(&self) -> String {
        match &self.origin {
            Origin::File(path) => path.display().to_string(),
            Origin::Url(url) => url.to_string(),
        }
    }

    /// Load a document referenced relative to this one. Best effort: any
    /// failure resolves to `None` and the caller keeps the reference verbatim.
    pub(crate) fn fetch_relative(&self, target: &str) -> Option<SpecDocument> {
        let fetched = match &self.origin {
            Origin::File(path) => {
                let base = path.parent().unwrap_or_else(|| Path::new("."));
                let target_path = base.join(target);
                fs::read_to_string(&target_path)
                    .map_err(|e| DocsError::Load(format!("{}: {e}", target_path.display())))
                    .and_then(|content| parse_content(target, &content))
                    .map(|value| SpecDocument::new(value, Origin::File(target_path)))
            }
            Origin::Url(url) => url
                .join(target)
                .map_err(|e| DocsError::Load(format!("{target}: {e}")))
                .and_then(|joined| {
                    let body = fetch_url(&joined)?;
                    let value = parse_lenient(joined.as_str(), &body)?;
                    Ok(SpecDocument::new(value, Origin::Url(joined)))
                }),
        };
        match fetched {
            Ok(doc) => Some(doc),
            Err(err) => {
                debug!(reference = target, error = %err, "external reference left unresolved");
                None
            }
        }
    }
}

/// Load a specification document from a filesystem path or an HTTP(S) URL.
pub fn load_document(location: &str) -> Result<SpecDocument> {
    if let Ok(url) = Url::parse(location) {
        if matches!(url.scheme(), "http" | "https") {
            return load_url(url);
        }
    }
    load_file(Path::new(location))
}

fn load_file(path: &Path) -> Result<SpecDocument> {
    let content = fs::read_to_string(path)
        .map_err(|e| DocsError::Load(format!("{}: {e}", path.display())))?;
    let value = parse_content(&path.to_string_lossy(), &content)?;
    Ok(SpecDocument::new(value, Origin::File(path.to_path_buf())))
}

fn load_url(url: Url) -> Result<SpecDocument> {
    let body = fetch_url(&url)?;
    let value = parse_lenient(url.as_str(), &body)?;
    Ok(SpecDocument::new(value, Origin::Url(url)))
}

fn fetch_url(url: &Url) -> Result<String> {
    reqwest::blocking::get(url.as_str())
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|e| DocsError::Load(format!("{url}: {e}")))
}

/// Parse file content by extension: `.yaml`/`.yml` as YAML, anything else as
/// JSON.
fn parse_content(name: &str, content: &str) -> Result<Value> {
    if name.ends_with(".yaml") || name.ends_with(".yml") {
        serde_yaml::from_str(content).map_err(|e| DocsError::Load(format!("{name}: {e}")))
    } else {
        serde_json::from_str(content).map_err(|e| DocsError::Load(format!("{name}: {e}")))
    }
}

/// Parse remote content without a trustworthy extension: JSON first, then
/// YAML.
fn parse_lenient(name: &str, content: &str) -> Result<Value> {
    serde_json::from_str(content)
        .or_else(|_| serde_yaml::from_str(content))
        .map_err(|e| DocsError::Load(format!("{name}: {e}")))
}
