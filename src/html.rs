/*!
HTML escaping.
*/
use std::borrow::Cow;

/// Escape `&`, `<`, `>`, `"` and `'` so the text can sit in element content
/// or in a single- or double-quoted attribute.
pub fn escape(s: &str) -> Cow<'_, str> {
    let first = match s.find(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        Some(n) => n,
        None => { return Cow::Borrowed(s); },
    };

    let mut out = String::with_capacity(s.len() + 16);
    out.push_str(&s[..first]);
    for c in s[first..].chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
