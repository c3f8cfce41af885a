//! Shared rendering utilities.
//!
//! Every string that reaches the generated markup goes through [`escape`] or
//! [`attr`]; components never format raw content into HTML.

use std::fmt::Write as _;

/// Escapes text for use inside an HTML element or a quoted attribute.
///
/// # Example
///
/// ```rust
/// use leavedesk_landing::ui::helpers::escape;
///
/// assert_eq!(escape("<b>\"R&D\"</b>"), "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Quotes text as a JS string literal that is safe inside a `<script>` element.
#[must_use]
pub fn js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            c if u32::from(c) < 0x20 => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Formats ` name="value"` with the value escaped.
#[must_use]
pub fn attr(name: &str, value: &str) -> String {
    format!(" {name}=\"{}\"", escape(value))
}

/// Escapes text and turns newlines into `<br>`.
#[must_use]
pub fn multiline(text: &str) -> String {
    text.lines()
        .map(escape)
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Formats a CSS pixel length, dropping a zero fraction (`60px`, `60.5px`).
#[must_use]
pub fn px(value: f64) -> String {
    let mut out = String::new();
    if value.fract() == 0.0 {
        let _ = write!(out, "{value:.0}px");
    } else {
        let _ = write!(out, "{value:.1}px");
    }
    out
}

/// Rejects `javascript:` and other script URLs in content links.
///
/// Relative URLs, fragments, `http(s):` and `mailto:` pass through; anything
/// else becomes `#`.
#[must_use]
pub fn safe_href(href: &str) -> &str {
    let trimmed = href.trim();
    let lower = trimmed.to_ascii_lowercase();
    let has_scheme = lower
        .split_once(':')
        .is_some_and(|(scheme, _)| !scheme.contains('/') && !scheme.contains('#') && !scheme.contains('?'));

    if !has_scheme
        || lower.starts_with("http:")
        || lower.starts_with("https:")
        || lower.starts_with("mailto:")
    {
        trimmed
    } else {
        tracing::debug!(href = %href, "dropping unsafe link");
        "#"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes_in_attributes() {
        assert_eq!(attr("alt", "It's \"ok\""), " alt=\"It&#39;s &quot;ok&quot;\"");
    }

    #[test]
    fn multiline_escapes_each_line() {
        assert_eq!(multiline("1. <Share>\n2. Add"), "1. &lt;Share&gt;<br>2. Add");
    }

    #[test]
    fn js_strings_cannot_close_the_script() {
        assert_eq!(js_string("app"), "\"app\"");
        assert_eq!(js_string("</script>"), "\"\\u003c/script\\u003e\"");
        assert_eq!(js_string("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }

    #[test]
    fn formats_pixels() {
        assert_eq!(px(60.0), "60px");
        assert_eq!(px(0.0), "0px");
        assert_eq!(px(42.5), "42.5px");
    }

    #[test]
    fn filters_script_urls() {
        assert_eq!(safe_href("#team"), "#team");
        assert_eq!(safe_href("assets/a.png"), "assets/a.png");
        assert_eq!(safe_href("https://example.com/a:b"), "https://example.com/a:b");
        assert_eq!(safe_href("mailto:hello@leavedesk.app"), "mailto:hello@leavedesk.app");
        assert_eq!(safe_href(" JavaScript:alert(1)"), "#");
        assert_eq!(safe_href("data:text/html,hi"), "#");
        assert_eq!(safe_href("/path?x=a:b"), "/path?x=a:b");
    }
}
