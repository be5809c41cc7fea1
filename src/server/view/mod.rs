//! Server-rendered HTML pages.
//!
//! Every page is a plain function returning a `String`, wrapped in the shared [`layout`].
//! Any value that originates from a user must pass through [`escape`] before it is
//! interpolated.

pub mod auth;
pub mod error;
pub mod home;
pub mod secret;

/// Wraps `body` in the document shell shared by every page.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/css/bootstrap.min.css">
<link rel="stylesheet" href="/css/styles.css">
</head><body>
{body}
</body></html>"#,
        title = escape(title),
    )
}

/// Escapes the characters that are significant in HTML text and attribute values.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }

    escaped
}
