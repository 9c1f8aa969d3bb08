//! Minimal HTML renderer.
//!
//! Markup semantics are out of scope for mdpad, so the document source is
//! shown verbatim: escaped and wrapped in a `<pre>` block. Anything richer
//! plugs in through the `Renderer` trait.

use mdpad_core::Renderer;

#[derive(Debug, Clone, Default)]
pub struct PreformattedHtmlRenderer;

impl PreformattedHtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

impl Renderer for PreformattedHtmlRenderer {
    fn render(&self, content: &str) -> String {
        format!("<pre class=\"mdpad-source\">{}</pre>", escape_html(content))
    }
}
