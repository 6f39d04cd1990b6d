pub const NAV_HTML: &str = r#"<nav class="navbar navbar-light bg-light px-3">
    <a class="nav-link d-inline" href="/">Edit Config</a> | <a class="nav-link d-inline" href="/logs">View Logs</a>
</nav>"#;

pub fn escape_html(input: &str) -> String {
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

/// Wrap a page body with the shared head and navigation.
pub fn render_layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{}</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css" rel="stylesheet">
    <style>
        textarea {{ font-family: monospace; }}
        pre {{ white-space: pre-wrap; }}
    </style>
</head>
<body>
    {}
    <div class="container mt-4">
{}
    </div>
</body>
</html>
"#,
        escape_html(title),
        NAV_HTML,
        body
    )
}
