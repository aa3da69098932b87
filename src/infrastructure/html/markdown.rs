//! Markdown conversion for extracted article text.

use thiserror::Error;

/// The converter rejected its input.
#[derive(Debug, Error)]
#[error("Markdown conversion failed: {0}")]
pub struct MarkdownError(String);

/// Converts an HTML fragment into Markdown.
///
/// Inline markup is rewritten (`<strong>` becomes `**..**`, `<a>` becomes
/// `[..](..)`). Runs of whitespace collapse to a single space, so paragraphs
/// separated only by blank lines in the source end up on one line. Markdown
/// metacharacters that appear in text (`_`, `*`) are backslash-escaped, and
/// character references such as `&lt;` are decoded in the output.
///
/// # Errors
///
/// Returns [`MarkdownError`] if the converter cannot process the input.
pub fn to_markdown(html: &str) -> Result<String, MarkdownError> {
    htmd::convert(html)
        .map(|markdown| markdown.trim().to_string())
        .map_err(|e| MarkdownError(e.to_string()))
}

/// Converts already-extracted visible text into Markdown.
///
/// The text is escaped first so that literal `<`, `>` and `&` (as in
/// `Vec<String>`) are kept as text instead of being parsed as markup.
///
/// # Errors
///
/// Returns [`MarkdownError`] if the converter cannot process the input.
pub fn text_to_markdown(text: &str) -> Result<String, MarkdownError> {
    to_markdown(&escape_text(text))
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
