//! Markdown rendering for post bodies.

use pulldown_cmark::{Event, Options, Parser, html};

/// Render `source` to HTML.
///
/// Raw HTML blocks and inline tags are emitted as escaped text, so the
/// result is safe to embed in a page unescaped.
#[must_use]
pub fn to_html(source: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}
