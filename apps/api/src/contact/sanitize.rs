/// Escapes the five HTML-significant characters. `&` goes first so the
/// entities introduced by later replacements are never escaped twice.
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escapes a multi-line message and turns each newline into a `<br />` tag.
pub fn escape_html_multiline(value: &str) -> String {
    escape_html(value).replace('\n', "<br />")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_order_avoids_double_escaping() {
        assert_eq!(
            escape_html("O'Reilly & <Sons>"),
            "O&#39;Reilly &amp; &lt;Sons&gt;"
        );
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_existing_entities_are_escaped_again() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_html("Hello world"), "Hello world");
    }

    #[test]
    fn test_single_line_escape_keeps_newlines() {
        assert_eq!(escape_html("a\nb"), "a\nb");
    }

    #[test]
    fn test_multiline_converts_newlines_after_escaping() {
        assert_eq!(
            escape_html_multiline("line one\n<b>two</b>\n\nend"),
            "line one<br />&lt;b&gt;two&lt;/b&gt;<br /><br />end"
        );
    }
}
