use url::Url;

/// Escapes a user-supplied string for embedding in HTML text or attributes.
///
/// Blank input yields an empty string.
pub fn escape_html(value: &str) -> String {
    if value.trim().is_empty() {
        return String::new();
    }

    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn escape_opt(value: Option<&str>) -> String {
    value.map(escape_html).unwrap_or_default()
}

/// Escaped value, or the escaped fallback when the value is absent or blank.
pub fn escape_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => escape_html(v),
        _ => escape_html(fallback),
    }
}

/// Escaped link target. Blank values and absolute URLs with a scheme other
/// than http/https yield `None`; relative paths pass through.
pub fn safe_href(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    match Url::parse(trimmed) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => None,
        _ => Some(escape_html(trimmed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_special_characters() {
        assert_eq!(
            escape_html(r#"Tom & "Jerry" <b>'hi'</b>"#),
            "Tom &amp; &quot;Jerry&quot; &lt;b&gt;&#39;hi&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_script_tag_has_no_raw_angle_brackets() {
        let escaped = escape_html("<script>alert(1)</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert_eq!(escaped, "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn test_blank_and_absent_input_is_empty() {
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("   \n\t"), "");
        assert_eq!(escape_opt(None), "");
    }

    #[test]
    fn test_escape_or_uses_fallback_for_blank() {
        assert_eq!(escape_or(Some("  "), "Your Name"), "Your Name");
        assert_eq!(escape_or(None, "A & B"), "A &amp; B");
        assert_eq!(escape_or(Some("Ada"), "Your Name"), "Ada");
    }

    #[test]
    fn test_safe_href_keeps_web_and_relative_links() {
        assert_eq!(
            safe_href(" https://example.com/?a=1&b=2 ").as_deref(),
            Some("https://example.com/?a=1&amp;b=2")
        );
        assert_eq!(safe_href("docs/resume.pdf").as_deref(), Some("docs/resume.pdf"));
        assert_eq!(safe_href("github.com/ada").as_deref(), Some("github.com/ada"));
    }

    #[test]
    fn test_safe_href_drops_blank_and_script_links() {
        assert_eq!(safe_href("   "), None);
        assert_eq!(safe_href("javascript:alert(1)"), None);
        assert_eq!(safe_href("JavaScript:alert(1)"), None);
        assert_eq!(safe_href("data:text/html,<b>x</b>"), None);
    }
}
