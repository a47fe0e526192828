//! Text helpers shared by the HTML and SVG renderers

/// Escapes text for use in HTML/SVG element content and quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Formats a rounded metric the way a dataframe prints floats: whole
/// numbers keep one decimal (`40.0`), everything else prints as stored
/// (`45.7`, `1.234`).
pub fn format_metric(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
