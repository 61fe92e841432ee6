//! Bundle assembler
//!
//! Builds the HTML document served as the weather widget resource: embeds
//! the compiled client bundle, injects the server-held API key or a
//! missing-key guard, and optionally embeds a prefetched observation as
//! seed data so the client skips its own fetch.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::WidgetError;
use crate::weather::client::WeatherClient;
use crate::weather::fetch::{FetchLifecycle, FetchState};
use crate::weather::normalize::QueryCandidate;
use crate::weather::types::{RawToolInput, WeatherObservation};

/// Served when the compiled client bundle artifact is absent; a partial
/// widget is never served in its place
pub const MISSING_BUNDLE_FRAGMENT: &str = r#"
<div style="padding: 32px; font-family: 'Segoe UI', Arial, sans-serif; background: #111827; color: #f87171;">
  <h2 style="margin-top: 0;">Weather widget bundle not found</h2>
  <p>Run <code>npm run build</code> to generate <code>dist/weatherWidget.js</code> before invoking this tool.</p>
</div>"#;

/// Shown by the injected guard when no key is supplied and the server holds
/// no default
const MISSING_KEY_WARNING_HTML: &str = r#"<div style="padding: 32px; font-family: 'Segoe UI', Arial, sans-serif; background: #111827; color: #facc15; border-radius: 16px;">
  <h2 style="margin-top: 0;">Weather API key required</h2>
  <p>Provide an <code>apiKey</code> parameter or set <code>OPENWEATHER_API_KEY</code> in your environment.</p>
</div>"#;

const BOOTSTRAP_FAILURE_HTML: &str = r#"<div style="padding:24px;color:#ef4444;font-family:Segoe UI,Arial,sans-serif;">Failed to initialize weather widget.</div>"#;

/// Escape text for interpolation into HTML body content
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Error document served when tool input fails validation outright; the
/// message replaces the widget instead of the widget guessing at defaults
pub fn invalid_input_fragment(message: &str) -> String {
    format!(
        r#"<div style="padding: 32px; font-family: 'Segoe UI', Arial, sans-serif; background: #111827; color: #f87171; border-radius: 16px;">
  <h2 style="margin-top: 0;">Invalid weather request</h2>
  <p>{}</p>
</div>"#,
        escape_html(message)
    )
}

/// Neutralize literal closing-script-tag sequences so embedded code cannot
/// terminate its enclosing script block early
pub fn escape_script_content(code: &str) -> String {
    code.replace("</script>", "<\\/script>")
}

/// HTML document builder for widget resources
///
/// Script content goes through [`escape_script_content`] on every path, so
/// no call site can embed an unescaped bundle.
#[derive(Debug, Default)]
pub struct WidgetDocument {
    parts: Vec<String>,
}

impl WidgetDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append static markup
    pub fn markup(mut self, fragment: &str) -> Self {
        self.parts.push(fragment.to_string());
        self
    }

    /// Append a module script block with its content escaped
    pub fn module_script(mut self, code: &str) -> Self {
        self.parts.push(format!(
            "<script type=\"module\">\n{}\n</script>",
            escape_script_content(code)
        ));
        self
    }

    pub fn build(self) -> String {
        self.parts.join("\n")
    }
}

/// Read the compiled client bundle from disk
pub fn load_bundle(path: &Path) -> Result<String, WidgetError> {
    std::fs::read_to_string(path).map_err(|_| WidgetError::BundleMissing {
        path: path.display().to_string(),
    })
}

/// Build the weather widget document from its resolved pieces
///
/// Pure with respect to its inputs: the bundle text, whether a server
/// default key exists (and its value), and an optional prefetched seed.
pub fn build_widget_html(
    bundle: &str,
    default_api_key: Option<&str>,
    seed: Option<&WeatherObservation>,
) -> String {
    let key_script = match default_api_key {
        Some(key) => {
            // Backfill a missing client key before the state machine runs.
            let encoded = serde_json::to_string(key).unwrap_or_else(|_| "null".to_string());
            format!(
                "const __fallbackApiKey = {encoded};\n\
                 if (!input.apiKey) {{\n  input.apiKey = __fallbackApiKey;\n}}"
            )
        }
        None => {
            // No server key: short-circuit before any network attempt.
            let warning = serde_json::to_string(MISSING_KEY_WARNING_HTML)
                .unwrap_or_else(|_| "\"Weather API key required\"".to_string());
            format!(
                "if (!input.apiKey) {{\n  container.innerHTML = {warning};\n  return;\n}}"
            )
        }
    };

    let seed_literal = seed
        .and_then(|obs| serde_json::to_string(obs).ok())
        .unwrap_or_else(|| "undefined".to_string());

    let failure_html =
        serde_json::to_string(BOOTSTRAP_FAILURE_HTML).unwrap_or_else(|_| "\"\"".to_string());

    let bootstrap = format!(
        r#"(async () => {{
  const container = document.getElementById("app");
  if (!container) {{
    throw new Error("Weather widget container missing.");
  }}
  const input = Object.assign({{}}, window.openai?.toolInput);
  container.innerHTML = '';
  {key_script}
  const seedData = {seed_literal};
  if (window.renderWeatherWidget) {{
    window.renderWeatherWidget(container, {{ ...input, initialData: seedData }});
  }} else {{
    container.innerHTML = {failure_html};
  }}
}})().catch((error) => {{
  console.error("Error bootstrapping weather widget:", error);
}});"#
    );

    WidgetDocument::new()
        .markup(r#"<div id="app"></div>"#)
        .module_script(&format!("{bundle}\n{bootstrap}"))
        .build()
}

/// Assemble the weather widget resource document
///
/// Tool input that fails validation outright (an unrecognized unit system)
/// yields an error document carrying the validation message; the widget is
/// never served as if the value had been valid. When the normalized input
/// has complete coordinates and a resolved key, the server performs one
/// prefetch through the shared fetch state machine and embeds the
/// observation as seed data. Any prefetch failure degrades to an unseeded
/// widget; it never aborts assembly.
pub async fn assemble_weather_widget(
    config: &Config,
    client: &WeatherClient,
    input: Option<RawToolInput>,
) -> String {
    let bundle = match load_bundle(&config.bundle_path) {
        Ok(bundle) => bundle,
        Err(err) => {
            warn!("{err}; serving build instructions instead");
            return MISSING_BUNDLE_FRAGMENT.to_string();
        }
    };

    let candidate = match input {
        Some(input) => {
            match QueryCandidate::from_input(input, config.default_api_key.as_deref()) {
                Ok(candidate) => Some(candidate),
                Err(err) => {
                    warn!("weather input rejected: {err}");
                    return invalid_input_fragment(&err.to_string());
                }
            }
        }
        None => None,
    };

    let seed = match &candidate {
        Some(candidate) => prefetch_seed(client, candidate).await,
        None => None,
    };

    build_widget_html(&bundle, config.default_api_key.as_deref(), seed.as_ref())
}

/// Server-side prefetch: one attempt through the shared lifecycle, success
/// or nothing
async fn prefetch_seed(
    client: &WeatherClient,
    candidate: &QueryCandidate,
) -> Option<WeatherObservation> {
    if candidate.complete().is_none() {
        debug!(
            "weather prefetch skipped: missing {}",
            candidate.missing_fields().join(", ")
        );
        return None;
    }

    let mut lifecycle = FetchLifecycle::new();
    match lifecycle.run_attempt(client, candidate, None).await {
        state if state.is_success() => state.observation().cloned(),
        FetchState::Error { message } => {
            warn!("weather prefetch failed: {message}");
            None
        }
        _ => None,
    }
}
