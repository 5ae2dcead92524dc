//! Markup escaping for untrusted report text
//!
//! Every free-text field returned by the analysis service is escaped before
//! it is placed in markup. Quotes are escaped as well so values are safe in
//! attribute context, not only in element content.

/// Escape `&`, `<`, `>`, `"` and `'` for safe insertion into HTML.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_html(text: &str) -> std::borrow::Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return std::borrow::Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    std::borrow::Cow::Owned(out)
}
