//! Description Rendering
//!
//! Product and farm descriptions are written by farmers in Markdown.
//! Raw HTML in the source is escaped, never passed through, and link or
//! image targets outside http(s)/mailto/relative URLs are replaced by `#`.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Render a description to HTML for `inner_html`
pub fn render_description(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Plain-text excerpt for cards, cut at `max_chars` with an ellipsis
pub fn summary(text: &str, max_chars: usize) -> String {
    let mut plain = String::new();
    for event in Parser::new_ext(text, get_options()) {
        match event {
            Event::Text(t) | Event::Code(t) => plain.push_str(&t),
            Event::SoftBreak
            | Event::HardBreak
            | Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::Heading(_)) => plain.push(' '),
            _ => {}
        }
    }
    let plain = plain.split_whitespace().collect::<Vec<_>>().join(" ");
    if plain.chars().count() <= max_chars {
        return plain;
    }
    let cut: String = plain.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

/// True for relative URLs and the allowed schemes
fn is_safe_url(url: &str) -> bool {
    // Browsers drop control characters and whitespace before reading the scheme
    let cleaned: String = url.chars().filter(|c| !c.is_control() && !c.is_whitespace()).collect();
    match cleaned.split_once(':') {
        None => true,
        // A colon after a path, query or fragment separator is not a scheme
        Some((scheme, _)) if scheme.contains(['/', '?', '#']) => true,
        Some((scheme, _)) => ALLOWED_SCHEMES.iter().any(|allowed| scheme.eq_ignore_ascii_case(allowed)),
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        log::warn!("dropping unsafe link target in description");
        CowStr::Borrowed("#")
    }
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let html = render_description("**Sun-ripened** on the vine");
        assert_eq!(html.trim(), "<p><strong>Sun-ripened</strong> on the vine</p>");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_description("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_script_links_are_neutralised() {
        let html = render_description("[Order here](javascript:alert(document.cookie))");
        assert!(!html.contains("javascript"));
        assert!(html.contains("href=\"#\""));

        let image = render_description("![x](JavaScript:alert(1))");
        assert!(!image.to_lowercase().contains("javascript"));

        let data = render_description("[x](data:text/html,boom)");
        assert!(!data.contains("data:"));
    }

    #[test]
    fn test_ordinary_links_are_kept() {
        let html = render_description("[Our farm](https://example.com/farm) and [email](mailto:a@b.c)");
        assert!(html.contains("href=\"https://example.com/farm\""));
        assert!(html.contains("href=\"mailto:a@b.c\""));
        assert!(render_description("[batches](/products/3?tab=a:b)").contains("href=\"/products/3?tab=a:b\""));
    }

    #[test]
    fn test_safe_url_ignores_hidden_characters() {
        assert!(!is_safe_url("java\tscript:alert(1)"));
        assert!(!is_safe_url(" vbscript:msgbox"));
        assert!(is_safe_url("#reviews"));
        assert!(is_safe_url("HTTPS://example.com"));
    }

    #[test]
    fn test_summary_strips_markup() {
        assert_eq!(summary("# Green Acres\n\nFamily *farm* since 1952", 100), "Green Acres Family farm since 1952");
    }

    #[test]
    fn test_summary_truncates() {
        assert_eq!(summary("Heirloom tomatoes and peppers", 9), "Heirloom…");
    }
}
