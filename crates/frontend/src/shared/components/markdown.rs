use leptos::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Render markdown text to an HTML string using pulldown-cmark.
///
/// Strikethrough, tables and task lists are enabled to cover the
/// syntax the research models produce.
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Markdown viewer component
#[component]
pub fn Markdown(
    /// The raw markdown text to render
    #[prop(into)]
    content: String,
) -> impl IntoView {
    let html_content = render_markdown(&content);

    view! { <div class="markdown-content" inner_html=html_content /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_heading() {
        assert_eq!(render_markdown("# A").trim(), "<h1>A</h1>");
    }

    #[test]
    fn test_render_emphasis() {
        assert_eq!(
            render_markdown("**B**").trim(),
            "<p><strong>B</strong></p>"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_markdown(""), "");
    }

    #[test]
    fn test_render_list() {
        let html = render_markdown("- one\n- two");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<li>two</li>"));
    }
}
