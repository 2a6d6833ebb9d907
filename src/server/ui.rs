use crate::error::{DocsError, Result};
use crate::server::plan::UiMode;
use minijinja::Environment;
use serde::Serialize;

const PAGE_TITLE: &str = "API documentation";

const REDOC_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>{{ title }}</title>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
      body { margin: 0; padding: 0; }
    </style>
  </head>
  <body>
    <redoc spec-url="{{ spec_url }}"></redoc>
    <script src="{{ script_url }}"></script>
  </body>
</html>
"#;

const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>{{ title }}</title>
    <link rel="stylesheet" type="text/css" href="{{ styles_url }}">
    <link rel="icon" type="image/png" href="{{ favicon32_url }}" sizes="32x32">
    <link rel="icon" type="image/png" href="{{ favicon16_url }}" sizes="16x16">
    <style>
      html { box-sizing: border-box; overflow-y: scroll; }
      *, *:before, *:after { box-sizing: inherit; }
      body { margin: 0; background: #fafafa; }
    </style>
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="{{ bundle_url }}" charset="UTF-8"></script>
    <script src="{{ preset_url }}" charset="UTF-8"></script>
    <script>
      window.onload = function() {
        window.ui = SwaggerUIBundle({
          url: "{{ spec_url }}",
          dom_id: "#swagger-ui",
          deepLinking: true,
          presets: [
            SwaggerUIBundle.presets.apis,
            SwaggerUIStandalonePreset
          ],
          plugins: [
            SwaggerUIBundle.plugins.DownloadUrl
          ],
          layout: "StandaloneLayout"
        });
      };
    </script>
  </body>
</html>
"##;

#[derive(Serialize)]
struct RedocContext<'a> {
    title: &'a str,
    spec_url: &'a str,
    script_url: &'a str,
}

#[derive(Serialize)]
struct SwaggerContext<'a> {
    title: &'a str,
    spec_url: &'a str,
    bundle_url: &'a str,
    preset_url: &'a str,
    styles_url: &'a str,
    favicon16_url: &'a str,
    favicon32_url: &'a str,
}

/// Render the viewer page for the selected UI, once per run.
///
/// Returns `None` when no UI is configured.
pub fn render_page(ui: &UiMode) -> Result<Option<Vec<u8>>> {
    match ui {
        UiMode::None => Ok(None),
        UiMode::Redoc {
            spec_url,
            script_url,
            ..
        } => render(
            "redoc",
            REDOC_PAGE,
            &RedocContext {
                title: PAGE_TITLE,
                spec_url,
                script_url,
            },
        )
        .map(Some),
        UiMode::Swagger {
            spec_url,
            bundle_url,
            preset_url,
            styles_url,
            favicon16_url,
            favicon32_url,
            ..
        } => render(
            "swagger-ui",
            SWAGGER_UI_PAGE,
            &SwaggerContext {
                title: PAGE_TITLE,
                spec_url,
                bundle_url,
                preset_url,
                styles_url,
                favicon16_url,
                favicon32_url,
            },
        )
        .map(Some),
    }
}

fn render<S: Serialize>(name: &str, source: &str, ctx: &S) -> Result<Vec<u8>> {
    let mut env = Environment::new();
    env.add_template(name, source)
        .map_err(|e| DocsError::Serialization(e.to_string()))?;
    let template = env
        .get_template(name)
        .map_err(|e| DocsError::Serialization(e.to_string()))?;
    let rendered = template
        .render(ctx)
        .map_err(|e| DocsError::Serialization(e.to_string()))?;
    Ok(rendered.into_bytes())
}
