//! Minimal HTML assembly helpers for the template renderers.

/// Escape user text for element content and attribute values.
pub fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A `<div>` with inline styles. The templates are built entirely from
/// inline-styled elements so the output is self-contained markup the
/// export surface can capture without a stylesheet.
pub fn div(style: &str, inner: &str) -> String {
    format!("<div style=\"{}\">{}</div>", style, inner)
}

/// A bulleted list of highlight lines.
pub fn ul(style: &str, items: &[String]) -> String {
    let lis: String = items
        .iter()
        .map(|h| format!("<li style=\"margin-bottom:2px\">{}</li>", esc(h)))
        .collect();
    format!("<ul style=\"{}\">{}</ul>", style, lis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_esc() {
        assert_eq!(
            esc(r#"<b>"R&D" 'ops'</b>"#),
            "&lt;b&gt;&quot;R&amp;D&quot; &#39;ops&#39;&lt;/b&gt;"
        );
        assert_eq!(esc("plain"), "plain");
    }

    #[test]
    fn test_div_and_ul() {
        assert_eq!(div("color:#111", "hi"), "<div style=\"color:#111\">hi</div>");
        let list = ul("margin:0", &["a < b".to_string()]);
        assert!(list.starts_with("<ul style=\"margin:0\">"));
        assert!(list.contains("a &lt; b"));
    }
}
