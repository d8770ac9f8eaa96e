//! HTML rendering
//!
//! Pages are plain functions returning `String`. Every value that came from
//! the data file or a form goes through [`escape`].

pub mod blogs;
pub mod cafes;
pub mod pages;

use std::fmt::Write;

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Percent-encode a value for use as a single URL path segment
pub fn path_segment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Render `url` as a link only when it is an absolute http(s) URL; anything
/// else (`javascript:`, `data:`, relative paths) is shown as plain text.
pub fn external_link(url: &str, text: &str) -> String {
    let trimmed = url.trim();
    let scheme_ok = ["http://", "https://"].iter().any(|scheme| {
        trimmed
            .get(..scheme.len())
            .map_or(false, |prefix| prefix.eq_ignore_ascii_case(scheme))
    });
    if scheme_ok {
        format!(
            r#"<a href="{}" rel="noopener noreferrer">{}</a>"#,
            escape(trimmed),
            escape(text)
        )
    } else {
        escape(url)
    }
}

/// Shared page shell with site navigation
pub fn layout(title: &str, body: &str) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Cafe Directory</title>
<link rel="stylesheet" href="/css/styles.css">
</head>
<body>
<header>
<nav>
<a href="/">Home</a>
<a href="/blogs">Blog</a>
<a href="/add-cafe">Add a cafe</a>
<a href="/about">About</a>
<a href="/contact">Contact</a>
</nav>
</header>
<main>
{body}
</main>
<footer><a href="/privacy">Privacy</a></footer>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    );
    html
}
