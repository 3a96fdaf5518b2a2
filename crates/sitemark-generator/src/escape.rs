//! HTML and XML escaping helpers.

use std::borrow::Cow;

/// Escape special characters in an HTML attribute value.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
pub(crate) fn escape_attr(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape special characters in XML text content.
pub(crate) fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("hello"), "hello");
        assert_eq!(escape_attr("a & b"), "a &amp; b");
        assert_eq!(escape_attr("<script>"), "&lt;script&gt;");
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_attr("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_clean_input_borrows() {
        assert!(matches!(
            escape_attr("https://example.com/page"),
            Cow::Borrowed(_)
        ));
        assert!(matches!(
            escape_xml("https://example.com/page"),
            Cow::Borrowed(_)
        ));
    }
}
