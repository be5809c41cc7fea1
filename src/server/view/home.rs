use super::layout;

pub fn home() -> String {
    layout(
        "Secrets",
        r#"<div class="jumbotron centered">
<div class="container">
<h1 class="display-3">Secrets</h1>
<p class="lead">Don't keep your secrets, share them anonymously!</p>
<hr>
<a class="btn btn-light btn-lg" href="/register" role="button">Register</a>
<a class="btn btn-dark btn-lg" href="/login" role="button">Login</a>
</div>
</div>"#,
    )
}
