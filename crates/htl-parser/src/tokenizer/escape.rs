//! Escape tables for quoted strings.
//!
//! Only characters inside double quotes pass through these tables. Bare
//! tokens are copied verbatim, so `(a b<c)` keeps its raw `<`.

/// Append `c` to `out`, replacing the five HTML-significant characters with
/// their entities.
pub fn html_escape_char(out: &mut String, c: char) {
    match c {
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '&' => out.push_str("&amp;"),
        '\'' => out.push_str("&apos;"),
        '"' => out.push_str("&quot;"),
        c => out.push(c),
    }
}

/// Resolve the character following a backslash inside a quoted string.
///
/// `f`, `n`, `r`, `t` and `v` map to their control characters. Everything
/// else, backslash and double quote included, goes through
/// [`html_escape_char`], so `\\` and `\"` render as `\` and `&quot;`.
pub fn unescape_then_html_escape(out: &mut String, c: char) {
    match c {
        'f' => out.push('\x0c'),
        'n' => out.push('\n'),
        'r' => out.push('\r'),
        't' => out.push('\t'),
        'v' => out.push('\x0b'),
        c => html_escape_char(out, c),
    }
}
