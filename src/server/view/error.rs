use super::layout;

/// Generic page for unexpected failures. Never includes error details.
pub fn internal_error() -> String {
    layout(
        "Something went wrong",
        r#"<div class="jumbotron centered">
<div class="container">
<h1 class="display-3">Something went wrong</h1>
<p class="secret-text">Please try again later.</p>
<a class="btn btn-light btn-lg" href="/" role="button">Home</a>
</div>
</div>"#,
    )
}
