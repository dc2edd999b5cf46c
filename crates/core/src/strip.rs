//! Markup stripping for slide XML.
//!
//! A deliberately shallow scan: everything between `<` and `>` is dropped and
//! everything else is kept. Entities stay escaped, and comments, CDATA, and
//! processing instructions get no special treatment.

/// Strip tags from raw XML bytes, keeping the character data between them.
///
/// Invalid UTF-8 is replaced with U+FFFD. Interior whitespace is preserved;
/// only the ends of the final result are trimmed.
pub fn strip_markup(data: &[u8]) -> String {
    let content = String::from_utf8_lossy(data);
    let mut text = String::with_capacity(content.len());

    let mut in_tag = false;
    for c in content.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_only_trimmed() {
        assert_eq!(strip_markup(b"  hello\n  world \t"), "hello\n  world");
        assert_eq!(strip_markup(b""), "");
        assert_eq!(strip_markup(b"   \n "), "");
    }

    #[test]
    fn test_simple_tags() {
        assert_eq!(strip_markup(b"<a>hello</a> <b>world</b>"), "hello world");
    }

    #[test]
    fn test_empty_and_self_closing_tags() {
        assert_eq!(strip_markup(b"<p></p>text<br/>more"), "textmore");
    }

    #[test]
    fn test_nested_tags() {
        assert_eq!(strip_markup(b"<a><b>x</b></a>"), "x");
    }

    #[test]
    fn test_entities_are_not_unescaped() {
        assert_eq!(strip_markup(b"<a:t>R&amp;D &lt;3</a:t>"), "R&amp;D &lt;3");
    }

    #[test]
    fn test_interior_newlines_preserved() {
        let xml = b"<?xml version=\"1.0\"?>\n<p:sld>\n  <a:t>One</a:t>\n  <a:t>Two</a:t>\n</p:sld>\n";
        assert_eq!(strip_markup(xml), "One\n  Two");
    }

    #[test]
    fn test_attributes_dropped() {
        assert_eq!(
            strip_markup(br#"<a:off x="10" y="20"/><a:t lang="en-US">Hi</a:t>"#),
            "Hi"
        );
    }

    #[test]
    fn test_comment_with_angle_bracket_leaks() {
        // The first `>` inside the comment ends the tag state.
        assert_eq!(strip_markup(b"<!-- a > b -->c"), "b --c");
    }

    #[test]
    fn test_cdata_is_not_special() {
        assert_eq!(strip_markup(b"<![CDATA[x > y]]>z"), "y]]z");
    }

    #[test]
    fn test_stray_close_bracket_dropped() {
        assert_eq!(strip_markup(b"a > b"), "a  b");
    }

    #[test]
    fn test_unterminated_tag_swallows_rest() {
        assert_eq!(strip_markup(b"keep<lost forever"), "keep");
    }

    #[test]
    fn test_invalid_utf8_replaced() {
        assert_eq!(strip_markup(b"<t>a\xffb</t>"), "a\u{FFFD}b");
    }

    #[test]
    fn test_unicode_text() {
        assert_eq!(
            strip_markup("<a:t>Grâce étonnante</a:t>".as_bytes()),
            "Grâce étonnante"
        );
    }
}
