//! Login and registration pages.
//!
//! Both pages post a `username` & `password` form back to their own path and offer the
//! Google login as an alternative.

use super::layout;

pub fn login() -> String {
    credentials_page("Login", "/login")
}

pub fn register() -> String {
    credentials_page("Register", "/register")
}

fn credentials_page(title: &str, action: &str) -> String {
    let body = format!(
        r#"<div class="container mt-5">
<h1>{title}</h1>
<div class="row">
<div class="col-sm-8">
<div class="card">
<div class="card-body">
<form action="{action}" method="POST">
<div class="form-group">
<label for="username">Email</label>
<input type="email" class="form-control" id="username" name="username" required>
</div>
<div class="form-group">
<label for="password">Password</label>
<input type="password" class="form-control" id="password" name="password" required>
</div>
<button type="submit" class="btn btn-dark">{title}</button>
</form>
</div>
</div>
</div>
<div class="col-sm-4">
<div class="card social-block">
<div class="card-body">
<a class="btn btn-block" href="/auth/google" role="button">
Sign In with Google
</a>
</div>
</div>
</div>
</div>
</div>"#
    );

    layout(title, &body)
}
