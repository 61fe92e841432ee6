//! MCP tool and resource definitions and handlers
//!
//! Every tool answers with a short text acknowledgment; the widget-backed
//! ones additionally reference an HTML resource the host renders.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::Config;
use crate::error::WidgetError;
use crate::mcp::types::{
    CallToolResult, ReadResourceResult, Resource, ResourceContents, Tool, ToolResultContent,
};
use crate::weather::bundle::assemble_weather_widget;
use crate::weather::client::WeatherClient;
use crate::weather::types::RawToolInput;
use crate::weather::widgets::{
    uris, COLOR_PLAYGROUND_HTML, HELLO_WIDGET_HTML, INSIGHTS_DASHBOARD_HTML,
    REACT_CATALOG_HTML, RED_TEXT_WIDGET_HTML, WIDGET_MIME_TYPE,
};

/// Tool handler
///
/// Constructed fresh per invocation so configuration is re-read from the
/// environment each time and nothing is shared across requests.
pub struct ToolHandler {
    config: Config,
    weather_client: WeatherClient,
}

impl ToolHandler {
    /// Create a tool handler with explicit configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            weather_client: WeatherClient::new(),
        }
    }

    /// Create a tool handler from the environment
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    /// List all available tools
    pub fn list_tools(&self) -> Vec<Tool> {
        vec![
            tool_def(
                "say-hello",
                "Say hello to the world",
                empty_schema(),
                None,
            ),
            tool_def(
                "say-hello-with-ui",
                "Say hello to the world with a UI",
                empty_schema(),
                Some(widget_meta(uris::HELLO, "Loading UI", "Loaded UI")),
            ),
            tool_def(
                "show-insights-dashboard",
                "Display a dashboard with key metrics and descriptions",
                empty_schema(),
                Some(widget_meta(
                    uris::INSIGHTS_DASHBOARD,
                    "Loading insights dashboard",
                    "Insights dashboard ready",
                )),
            ),
            tool_def(
                "make-text-red",
                "Makes text red",
                make_text_red_schema(),
                Some(widget_meta(uris::RED_TEXT, "Loading red text", "Loaded red text")),
            ),
            tool_def(
                "render-react-catalog",
                "Show a React-based catalog component with cards and rich copy",
                react_catalog_schema(),
                Some(widget_meta(
                    uris::REACT_CATALOG,
                    "Mounting React component",
                    "React component rendered",
                )),
            ),
            tool_def(
                "render-react-color-playground",
                "Launch a React component with buttons that randomize background and text colors",
                empty_schema(),
                Some(widget_meta(
                    uris::COLOR_PLAYGROUND,
                    "Setting up color playground",
                    "Color playground ready",
                )),
            ),
            tool_def(
                "render-weather-widget",
                "Fetch and display live weather conditions in a widget",
                render_weather_widget_schema(),
                Some(widget_meta(
                    uris::WEATHER,
                    "Gathering weather data",
                    "Weather widget ready",
                )),
            ),
        ]
    }

    /// Call a tool by name
    pub async fn call_tool(&self, name: &str, args: Value) -> CallToolResult {
        match name {
            "say-hello" => CallToolResult::text("Hello from the weather widget server!"),
            "say-hello-with-ui" => CallToolResult::text("Showing UI"),
            "show-insights-dashboard" => CallToolResult::text("Rendering insights dashboard UI"),
            "make-text-red" => self.handle_make_text_red(args),
            "render-react-catalog" => self.handle_render_react_catalog(args),
            "render-react-color-playground" => {
                CallToolResult::text("Rendering React color playground UI")
            }
            "render-weather-widget" => self.handle_render_weather_widget(args).await,
            _ => CallToolResult::error(format!("Unknown tool: {}", name)),
        }
    }

    /// List all widget resources
    pub fn list_resources(&self) -> Vec<Resource> {
        vec![
            resource_def(uris::HELLO, "hello-widget"),
            resource_def(uris::INSIGHTS_DASHBOARD, "insights-dashboard"),
            resource_def(uris::RED_TEXT, "red-text"),
            resource_def(uris::REACT_CATALOG, "react-product-catalog"),
            resource_def(uris::COLOR_PLAYGROUND, "react-color-playground"),
            resource_def(uris::WEATHER, "weather-widget"),
        ]
    }

    /// Read a widget resource by URI
    ///
    /// The weather widget read without tool input is assembled unseeded; the
    /// client performs its own fetch.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, WidgetError> {
        let text = match uri {
            uris::HELLO => HELLO_WIDGET_HTML.to_string(),
            uris::INSIGHTS_DASHBOARD => INSIGHTS_DASHBOARD_HTML.to_string(),
            uris::RED_TEXT => RED_TEXT_WIDGET_HTML.to_string(),
            uris::REACT_CATALOG => REACT_CATALOG_HTML.to_string(),
            uris::COLOR_PLAYGROUND => COLOR_PLAYGROUND_HTML.to_string(),
            uris::WEATHER => {
                assemble_weather_widget(&self.config, &self.weather_client, None).await
            }
            _ => {
                return Err(WidgetError::UnknownResource {
                    uri: uri.to_string(),
                })
            }
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents {
                uri: uri.to_string(),
                text: Some(text),
                mime_type: Some(WIDGET_MIME_TYPE.to_string()),
            }],
        })
    }

    // ==================== Tool Handlers ====================

    fn handle_make_text_red(&self, args: Value) -> CallToolResult {
        #[derive(Deserialize)]
        struct Args {
            #[allow(dead_code)]
            text: String,
        }

        match serde_json::from_value::<Args>(args) {
            Ok(_) => CallToolResult::text("Making text red"),
            Err(e) => CallToolResult::error(format!("Invalid arguments: {}", e)),
        }
    }

    fn handle_render_react_catalog(&self, args: Value) -> CallToolResult {
        #[derive(Deserialize)]
        #[allow(dead_code)]
        struct Product {
            #[serde(default)]
            name: Option<String>,
            #[serde(default)]
            category: Option<String>,
            #[serde(default)]
            description: Option<String>,
            #[serde(default)]
            price: Option<String>,
        }

        #[derive(Deserialize)]
        #[allow(dead_code)]
        struct Args {
            #[serde(default)]
            products: Option<Vec<Product>>,
        }

        match serde_json::from_value::<Args>(args) {
            Ok(_) => CallToolResult::text("Rendering React catalog UI"),
            Err(e) => CallToolResult::error(format!("Invalid arguments: {}", e)),
        }
    }

    async fn handle_render_weather_widget(&self, args: Value) -> CallToolResult {
        let input: RawToolInput = match serde_json::from_value(args) {
            Ok(input) => input,
            Err(e) => return CallToolResult::error(format!("Invalid arguments: {}", e)),
        };

        let html =
            assemble_weather_widget(&self.config, &self.weather_client, Some(input)).await;

        CallToolResult {
            content: vec![
                ToolResultContent::Text {
                    text: "Rendering weather widget UI".to_string(),
                },
                ToolResultContent::Resource {
                    resource: ResourceContents {
                        uri: uris::WEATHER.to_string(),
                        text: Some(html),
                        mime_type: Some(WIDGET_MIME_TYPE.to_string()),
                    },
                },
            ],
            is_error: false,
        }
    }
}

// ==================== Schema Definitions ====================

fn tool_def(name: &str, description: &str, input_schema: Value, meta: Option<Value>) -> Tool {
    Tool {
        name: name.to_string(),
        description: Some(description.to_string()),
        input_schema,
        meta,
    }
}

fn resource_def(uri: &str, name: &str) -> Resource {
    Resource {
        uri: uri.to_string(),
        name: name.to_string(),
        mime_type: Some(WIDGET_MIME_TYPE.to_string()),
    }
}

/// Host metadata tying a tool to its widget resource
fn widget_meta(template_uri: &str, invoking: &str, invoked: &str) -> Value {
    json!({
        "openai/outputTemplate": template_uri,
        "openai/toolInvocation/invoking": invoking,
        "openai/toolInvocation/invoked": invoked,
    })
}

fn empty_schema() -> Value {
    json!({"type": "object", "properties": {}})
}

fn make_text_red_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "text": {
                "type": "string",
                "description": "The text to make red"
            }
        },
        "required": ["text"]
    })
}

fn react_catalog_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "products": {
                "type": "array",
                "description": "List of product-like objects to populate the catalog",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": {"type": "string"},
                        "category": {"type": "string"},
                        "description": {"type": "string"},
                        "price": {"type": "string"}
                    }
                }
            }
        }
    })
}

fn render_weather_widget_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "lat": {
                "type": ["number", "string"],
                "description": "Latitude coordinate in decimal degrees"
            },
            "lon": {
                "type": ["number", "string"],
                "description": "Longitude coordinate in decimal degrees"
            },
            "apiKey": {
                "type": "string",
                "description": "OpenWeather API key. Optional if OPENWEATHER_API_KEY is set in the server environment"
            },
            "units": {
                "type": "string",
                "enum": ["standard", "metric", "imperial"],
                "description": "Unit system for temperature and wind speed"
            },
            "title": {
                "type": "string",
                "description": "Optional custom heading for the widget"
            }
        },
        "required": ["lat", "lon"]
    })
}
