//! Secret listing and submission pages.

use super::{escape, layout};

/// Lists every submitted secret without any indication of who wrote it.
pub fn secrets(secrets: &[String]) -> String {
    let items: String = secrets
        .iter()
        .map(|secret| format!("<p class=\"secret-text\">{}</p>\n", escape(secret)))
        .collect();

    let body = format!(
        r#"<div class="jumbotron text-center">
<div class="container">
<h1 class="display-3">You've Discovered My Secret!</h1>
{items}<hr>
<a class="btn btn-light btn-lg" href="/logout" role="button">Log Out</a>
<a class="btn btn-dark btn-lg" href="/submit" role="button">Submit a Secret</a>
</div>
</div>"#
    );

    layout("Secrets", &body)
}

pub fn submit() -> String {
    layout(
        "Submit a Secret",
        r#"<div class="container">
<div class="jumbotron centered">
<h1 class="display-3">Secrets</h1>
<p class="secret-text">Don't keep your secrets, share them anonymously!</p>
<form action="/submit" method="POST">
<div class="form-group">
<input type="text" class="form-control text-center" name="secret" placeholder="What's your secret?" required>
</div>
<button type="submit" class="btn btn-dark">Submit</button>
</form>
</div>
</div>"#,
    )
}
