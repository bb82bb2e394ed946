//! Markdown body rendering
//!
//! Raw HTML in article text is never passed through: block and inline
//! HTML events are dropped before the HTML writer sees them. Link and
//! image targets must be relative or use `http`, `https` or `mailto`;
//! anything else (`javascript:`, `data:`, ...) is replaced with `#`.

use pulldown_cmark::{html, CowStr, Event, Parser, Tag};
use serde::Serialize;

/// Rendered article body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    /// HTML fragment
    pub html: String,
    /// Raw HTML fragments that were dropped
    pub suppressed_html: usize,
    /// Link and image targets replaced because of their scheme
    pub blocked_urls: usize,
}

impl RenderedDocument {
    /// Check if nothing was rendered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// Markdown rendering collaborator
///
/// Implementations must not emit raw host markup found in the input.
/// Rendering is best-effort and never fails.
pub trait MarkdownRenderer: Send + Sync {
    /// Render normalized text
    fn render(&self, text: &str) -> RenderedDocument;
}

/// CommonMark renderer backed by pulldown-cmark
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMarkRenderer;

impl CommonMarkRenderer {
    /// Create new renderer
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Placeholder for a rejected link or image target
const BLOCKED_URL: &str = "#";

/// Check that a destination is relative or uses an allowed scheme
fn is_safe_url(url: &str) -> bool {
    // Browsers ignore embedded whitespace and control characters in schemes
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();

    match cleaned.find([':', '/', '?', '#']) {
        Some(end) if cleaned[end..].starts_with(':') => {
            let scheme = cleaned[..end].to_ascii_lowercase();
            SAFE_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}

fn guard_url<'a>(url: CowStr<'a>, blocked: &mut usize) -> CowStr<'a> {
    if is_safe_url(&url) {
        url
    } else {
        *blocked += 1;
        CowStr::Borrowed(BLOCKED_URL)
    }
}

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, text: &str) -> RenderedDocument {
        let mut suppressed_html = 0;
        let mut blocked_urls = 0;
        let events = Parser::new_ext(text, crate::markdown_options())
            .filter(|event| {
                let raw = matches!(event, Event::Html(_) | Event::InlineHtml(_));
                if raw {
                    suppressed_html += 1;
                }
                !raw
            })
            .map(|event| match event {
                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                }) => Event::Start(Tag::Link {
                    link_type,
                    dest_url: guard_url(dest_url, &mut blocked_urls),
                    title,
                    id,
                }),
                Event::Start(Tag::Image {
                    link_type,
                    dest_url,
                    title,
                    id,
                }) => Event::Start(Tag::Image {
                    link_type,
                    dest_url: guard_url(dest_url, &mut blocked_urls),
                    title,
                    id,
                }),
                other => other,
            });

        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, events);

        RenderedDocument {
            html: out,
            suppressed_html,
            blocked_urls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> RenderedDocument {
        CommonMarkRenderer::new().render(text)
    }

    #[test]
    fn renders_headings_and_paragraphs() {
        let doc = render("# Geralt\n\nA witcher.");
        assert!(doc.html.contains("<h1>Geralt</h1>"));
        assert!(doc.html.contains("<p>A witcher.</p>"));
        assert_eq!(doc.suppressed_html, 0);
        assert_eq!(doc.blocked_urls, 0);
    }

    #[test]
    fn inline_html_is_dropped() {
        let doc = render("Hello <script>alert(1)</script> world");
        assert!(!doc.html.contains("<script>"));
        assert!(doc.html.contains("Hello"));
        assert!(doc.suppressed_html >= 2);
    }

    #[test]
    fn script_link_targets_are_replaced() {
        let doc = render(
            "[click](javascript:alert(1)) [again](JaVaScRiPt:alert(2)) \
             <vbscript:msgbox(1)> ![pic](data:text/html;base64,PHNjcmlwdD4=)",
        );
        assert!(!doc.html.to_ascii_lowercase().contains("javascript:"));
        assert!(!doc.html.contains("href=\"vbscript:"));
        assert!(!doc.html.contains("data:"));
        assert!(doc.html.contains("<a href=\"#\">click</a>"));
        assert!(doc.html.contains("src=\"#\""));
        assert_eq!(doc.blocked_urls, 4);
    }

    #[test]
    fn web_and_relative_link_targets_survive() {
        let doc = render(
            "[wiki](https://witcher.fandom.com/wiki/Geralt) [mail](mailto:ciri@kaer.morhen) \
             [local](/article/Ciri) [frag](#history) [odd](path/with:colon)",
        );
        assert!(doc.html.contains("href=\"https://witcher.fandom.com/wiki/Geralt\""));
        assert!(doc.html.contains("href=\"mailto:ciri@kaer.morhen\""));
        assert!(doc.html.contains("href=\"/article/Ciri\""));
        assert!(doc.html.contains("href=\"#history\""));
        assert!(doc.html.contains("href=\"path/with:colon\""));
        assert_eq!(doc.blocked_urls, 0);
    }

    #[test]
    fn block_html_is_dropped() {
        let doc = render("<div onclick=\"x()\">\nboom\n</div>\n\nSafe text.");
        assert!(!doc.html.contains("<div"));
        assert!(doc.html.contains("<p>Safe text.</p>"));
        assert!(doc.suppressed_html > 0);
    }

    #[test]
    fn escaped_markup_in_code_survives_as_text() {
        let doc = render("`<b>` is bold");
        assert!(doc.html.contains("<code>&lt;b&gt;</code>"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(render("").is_empty());
    }
}
