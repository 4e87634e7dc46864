//! Markup-to-text conversion for reports that only arrive as HTML.

use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>|</(?:p|div|tr|li|h[1-6])\s*>").unwrap());

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

static SCRIPT_OR_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<(script|style)\b.*?</(?:script|style)\s*>").unwrap());

static NUMERIC_ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"&#(x?)([0-9a-fA-F]+);").unwrap());

/// Strip tags and decode the common entities, keeping line structure.
///
/// Block-level closers and `<br>` become newlines so labeled lines stay on
/// their own line after stripping.
pub fn strip_markup(html: &str) -> String {
    let without_code = SCRIPT_OR_STYLE.replace_all(html, "");
    let with_breaks = BLOCK_BREAK.replace_all(&without_code, "\n");
    let text = TAG.replace_all(&with_breaks, "");
    decode_entities(&text)
}

fn decode_entities(text: &str) -> String {
    let decoded = NUMERIC_ENTITY.replace_all(text, |caps: &regex::Captures| {
        let radix = if caps[1].is_empty() { 10 } else { 16 };
        u32::from_str_radix(&caps[2], radix)
            .ok()
            .and_then(char::from_u32)
            .map(|c| c.to_string())
            .unwrap_or_default()
    });

    // &amp; last so "&amp;lt;" decodes to "&lt;" rather than "<"
    decoded
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_keeps_lines() {
        let html = "<div><b>Distance</b>: 75 yards</div><div><b>Week</b>: 7</div>";
        assert_eq!(strip_markup(html), "Distance: 75 yards\nWeek: 7\n");
    }

    #[test]
    fn br_becomes_newline() {
        assert_eq!(strip_markup("a<br>b<br/>c"), "a\nb\nc");
    }

    #[test]
    fn decodes_named_and_numeric_entities() {
        assert_eq!(strip_markup("A &amp; B &lt;3&gt;"), "A & B <3>");
        assert_eq!(strip_markup("&#127944; &#x1F3C8;"), "🏈 🏈");
        assert_eq!(strip_markup("&amp;lt;"), "&lt;");
    }

    #[test]
    fn drops_style_blocks() {
        let html = "<style>.r1 { color: red }</style><pre>Week: 7</pre>";
        assert_eq!(strip_markup(html), "Week: 7");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_markup("Distance: 10 yards"), "Distance: 10 yards");
    }
}
