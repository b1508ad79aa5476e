/// Escapes text for inclusion in template markup. Spaces become `&nbsp;`
/// so runs of blanks survive rendering; other whitespace is kept as-is.
pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            ' ' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Replaces `\r\n` and `\n` line endings with `<br />`.
pub fn line_break(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\n', "<br />")
}
