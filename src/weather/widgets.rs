//! Static widget templates
//!
//! The non-weather widgets are fixed HTML fragments; only the weather
//! widget is assembled dynamically. Styling is intentionally minimal.

/// Mime type the host expects for widget resources
pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";

/// Widget resource URIs
pub mod uris {
    pub const HELLO: &str = "ui://widget/hello.html";
    pub const INSIGHTS_DASHBOARD: &str = "ui://widget/insights-dashboard.html";
    pub const RED_TEXT: &str = "ui://widget/red-text.html";
    pub const REACT_CATALOG: &str = "ui://widget/react-product-catalog.html";
    pub const COLOR_PLAYGROUND: &str = "ui://widget/react-color-playground.html";
    pub const WEATHER: &str = "ui://widget/weather.html";
}

pub const HELLO_WIDGET_HTML: &str = r#"
<h1 style="color: red;">Hello, world!</h1>"#;

pub const INSIGHTS_DASHBOARD_HTML: &str = r#"
<style>
  :root {
    color-scheme: light;
    font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif;
  }
  body { margin: 0; padding: 24px; background: #f5f7fb; color: #1f2933; }
  .card {
    max-width: 720px; margin: 0 auto; background: #ffffff;
    border-radius: 16px; border: 1px solid #e1e7ef; overflow: hidden;
  }
  .header { padding: 32px 32px 16px; border-bottom: 1px solid #eef2f7; }
  .header h1 { margin: 0; font-size: 28px; font-weight: 600; }
  table { width: 100%; border-collapse: collapse; }
  th, td { padding: 14px 16px; text-align: left; font-size: 15px; border-bottom: 1px solid #eef2f7; }
  .metric { font-weight: 600; color: #2563eb; }
</style>
<div class="card">
  <div class="header">
    <h1>Product Metrics Overview</h1>
    <p>Snapshot of current performance indicators.</p>
  </div>
  <table>
    <thead>
      <tr><th>Metric</th><th>Current Value</th><th>Trend</th></tr>
    </thead>
    <tbody>
      <tr><td>Active Users</td><td class="metric">18,240</td><td>+12% WoW</td></tr>
      <tr><td>Revenue</td><td class="metric">$94,600</td><td>+6% WoW</td></tr>
      <tr><td>Support Tickets</td><td class="metric">146</td><td>-18% WoW</td></tr>
      <tr><td>Deployment Frequency</td><td class="metric">24 releases</td><td>+3 releases</td></tr>
    </tbody>
  </table>
</div>"#;

pub const RED_TEXT_WIDGET_HTML: &str = r#"
<script>
  document.addEventListener('DOMContentLoaded', function() {
    const textElement = document.getElementById("text");
    textElement.innerText = window.openai.toolInput.text;
  });
</script>

<div style="height: 300px;"><h1 style="color: red;" id="text"></h1></div>"#;

/// Card catalog populated from `toolInput.products`, falling back to a
/// built-in product list when the tool call carries none
pub const REACT_CATALOG_HTML: &str = r#"
<style>
  body { margin: 0; padding: 32px; font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif; background: #f8fafc; color: #111827; }
  .wrapper { max-width: 960px; margin: 0 auto; display: flex; flex-direction: column; gap: 24px; }
  .header { text-align: center; }
  .header h1 { margin: 0; font-size: 32px; font-weight: 700; }
  .grid { display: grid; gap: 20px; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); }
  .card { background: #ffffff; border-radius: 18px; padding: 20px; border: 1px solid #e2e8f0; display: flex; flex-direction: column; gap: 12px; }
  .badge { align-self: flex-start; background: rgba(59, 130, 246, 0.1); color: #1d4ed8; border-radius: 999px; padding: 6px 12px; font-size: 12px; font-weight: 600; text-transform: uppercase; }
  .card h3 { margin: 0; font-size: 20px; font-weight: 600; }
  .description { margin: 0; color: #556070; font-size: 14px; flex-grow: 1; }
  .price { font-weight: 700; font-size: 18px; color: #2563eb; }
</style>
<div id="app"></div>
<script crossorigin src="https://unpkg.com/react@18/umd/react.development.js"></script>
<script crossorigin src="https://unpkg.com/react-dom@18/umd/react-dom.development.js"></script>
<script>
  (function () {
    const defaultProducts = [
      { name: "FocusFlow Planner", category: "Productivity", description: "Guided daily planning with AI summarization and calendar sync.", price: "$18/mo" },
      { name: "Canvas Studio", category: "Design", description: "Collaborative canvas with version history and reusable design kits.", price: "$32/mo" },
      { name: "Pulse Analytics", category: "Operations", description: "Real-time ops dashboard with anomaly detection and smart alerts.", price: "$89/mo" },
      { name: "Atlas Docs", category: "Knowledge Base", description: "Docs with AI search, auto-tagging, and secure workspace sharing.", price: "$24/mo" }
    ];

    const inputProducts = window.openai && window.openai.toolInput && Array.isArray(window.openai.toolInput.products)
      ? window.openai.toolInput.products
      : null;
    const products = inputProducts && inputProducts.length > 0 ? inputProducts : defaultProducts;

    function ProductCard(props) {
      const product = props.product;
      return React.createElement(
        "div",
        { className: "card" },
        React.createElement("span", { className: "badge" }, product.category || "Featured"),
        React.createElement("h3", null, product.name || "Untitled product"),
        React.createElement("p", { className: "description" }, product.description || "No description provided."),
        React.createElement("span", { className: "price" }, product.price || "")
      );
    }

    function CatalogApp() {
      return React.createElement(
        "div",
        { className: "wrapper" },
        React.createElement(
          "div",
          { className: "header" },
          React.createElement("h1", null, "Product Experience Catalog")
        ),
        React.createElement(
          "div",
          { className: "grid" },
          products.map(function (product, index) {
            return React.createElement(ProductCard, { product: product, key: (product.name || "product") + index });
          })
        )
      );
    }

    const container = document.getElementById("app");
    if (!container) {
      return;
    }
    ReactDOM.createRoot(container).render(React.createElement(CatalogApp));
  })();
</script>"#;

/// Stateful React component with buttons shuffling background and text hues
pub const COLOR_PLAYGROUND_HTML: &str = r##"
<style>
  body { margin: 0; padding: 32px; font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif; background: #f8fafc; color: #111827; }
  .playground { max-width: 640px; margin: 0 auto; border-radius: 20px; border: 1px solid #e2e8f0; overflow: hidden; }
  .playground-inner { padding: 36px; display: flex; flex-direction: column; gap: 24px; transition: background-color 240ms ease-in-out, color 240ms ease-in-out; min-height: 250px; }
  .playground-inner h2 { margin: 0; font-size: 28px; font-weight: 700; }
  .actions { display: flex; gap: 16px; flex-wrap: wrap; }
  button { all: unset; cursor: pointer; border-radius: 999px; padding: 12px 22px; font-size: 15px; font-weight: 600; background: linear-gradient(135deg, #60a5fa, #2563eb); color: white; }
</style>
<div id="app"></div>
<script crossorigin src="https://unpkg.com/react@18/umd/react.development.js"></script>
<script crossorigin src="https://unpkg.com/react-dom@18/umd/react-dom.development.js"></script>
<script>
  (function () {
    function randomColor() {
      var hue = Math.floor(Math.random() * 360);
      var saturation = Math.floor(Math.random() * 20) + 60;
      var lightness = Math.floor(Math.random() * 20) + 45;
      return "hsl(" + hue + " " + saturation + "% " + lightness + "%)";
    }

    function ColorPlayground() {
      var backgroundState = React.useState(randomColor());
      var background = backgroundState[0], setBackground = backgroundState[1];
      var textState = React.useState("#111827");
      var textColor = textState[0], setTextColor = textState[1];

      return React.createElement(
        "div",
        { className: "playground" },
        React.createElement(
          "div",
          { className: "playground-inner", style: { backgroundColor: background, color: textColor } },
          React.createElement("h2", null, "Dynamic Color Playground"),
          React.createElement(
            "div",
            { className: "actions" },
            React.createElement(
              "button",
              { type: "button", onClick: function () { setBackground(randomColor()); } },
              "Randomize Background"
            ),
            React.createElement(
              "button",
              { type: "button", onClick: function () { setTextColor(randomColor()); } },
              "Randomize Text"
            )
          )
        )
      );
    }

    var container = document.getElementById("app");
    if (!container) {
      return;
    }
    ReactDOM.createRoot(container).render(React.createElement(ColorPlayground));
  })();
</script>"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_uris_are_distinct() {
        let all = [
            uris::HELLO,
            uris::INSIGHTS_DASHBOARD,
            uris::RED_TEXT,
            uris::REACT_CATALOG,
            uris::COLOR_PLAYGROUND,
            uris::WEATHER,
        ];
        for (i, a) in all.iter().enumerate() {
            assert!(a.starts_with("ui://widget/"));
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_red_text_widget_reads_tool_input() {
        assert!(RED_TEXT_WIDGET_HTML.contains("window.openai.toolInput.text"));
    }

    #[test]
    fn test_catalog_reads_products_with_fallback() {
        assert!(REACT_CATALOG_HTML.contains("window.openai.toolInput.products"));
        assert!(REACT_CATALOG_HTML.contains("defaultProducts"));
    }

    #[test]
    fn test_color_playground_randomizes_both_colors() {
        assert!(COLOR_PLAYGROUND_HTML.contains("Randomize Background"));
        assert!(COLOR_PLAYGROUND_HTML.contains("Randomize Text"));
    }
}
