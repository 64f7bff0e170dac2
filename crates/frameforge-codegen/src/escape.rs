//! String escaping for the emitted source.

/// Escape for a single-quoted JavaScript string literal.
pub fn escape_js(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

/// Single-quoted JavaScript string literal.
pub fn js_string(text: &str) -> String {
    format!("'{}'", escape_js(text))
}

/// Escape JSX child text: HTML entities plus the expression braces.
pub fn escape_jsx_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSX child for literal text.
///
/// JSX folds line breaks and the indentation around them, so text with a
/// line break goes through a string expression instead of entity escaping.
pub fn jsx_text(text: &str) -> String {
    if text.contains(['\n', '\r', '\u{2028}', '\u{2029}']) {
        format!("{{{}}}", js_string(text))
    } else {
        escape_jsx_text(text)
    }
}

/// Escape a double-quoted markup attribute value.
pub fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Whether `key` can appear unquoted as an object literal key.
pub fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Object literal key, quoted when not an identifier.
pub fn object_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        js_string(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_js() {
        assert_eq!(escape_js("it's"), "it\\'s");
        assert_eq!(escape_js("a\\b"), "a\\\\b");
        assert_eq!(escape_js("line\nbreak\r"), "line\\nbreak\\r");
        assert_eq!(escape_js("sep\u{2028}"), "sep\\u2028");
        assert_eq!(js_string("say \"hi\""), "'say \"hi\"'");
    }

    #[test]
    fn test_escape_jsx_text() {
        assert_eq!(escape_jsx_text("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_jsx_text("{value}"), "&#123;value&#125;");
    }

    #[test]
    fn test_jsx_text_keeps_line_breaks() {
        assert_eq!(jsx_text("a < b"), "a &lt; b");
        assert_eq!(jsx_text("Line one\nLine two"), "{'Line one\\nLine two'}");
        assert_eq!(jsx_text("it's\r\n{x}"), "{'it\\'s\\r\\n{x}'}");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("Logo \"main\" & <co>"), "Logo &quot;main&quot; &amp; &lt;co&gt;");
    }

    #[test]
    fn test_object_key() {
        assert_eq!(object_key("left"), "left");
        assert_eq!(object_key("white-space"), "'white-space'");
        assert_eq!(object_key("aria-label"), "'aria-label'");
        assert_eq!(object_key("__html"), "__html");
        assert_eq!(object_key("1st"), "'1st'");
        assert!(!is_identifier(""));
    }
}
