//! HTML templates and styling for the editor page.
//!
//! - `styles` - CSS constants (layout, dark mode, print)
//! - `editor` - the editor page with the client-side autosave loop

mod editor;
mod styles;

pub use editor::render_editor;
pub use styles::STYLE;

// ============================================================================
// Text Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(html_escape("a & b \"c\""), "a &amp; b &quot;c&quot;");
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn test_html_escape_ampersand_first() {
        // Escaping must not double-escape entities it just produced.
        assert_eq!(html_escape("&lt;"), "&amp;lt;");
    }
}
