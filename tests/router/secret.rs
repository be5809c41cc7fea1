use sea_orm::EntityTrait;

use super::*;

#[tokio::test]
/// Expect every protected route to redirect an anonymous client to /login
async fn protected_routes_redirect_anonymous() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let app = test_app(&test);

    for request in [
        get("/secrets", None),
        get("/submit", None),
        post_form("/submit", "secret=hello", None),
    ] {
        let resp = app.clone().oneshot(request).await.unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/login");
    }

    Ok(())
}

#[tokio::test]
/// Expect a submitted secret to land on the submitting user only and show up anonymously
async fn submitted_secret_is_listed() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let app = test_app(&test);

    let resp = app
        .clone()
        .oneshot(post_form(
            "/register",
            &credentials_body("author@example.com", "password"),
            None,
        ))
        .await
        .unwrap();
    let author_cookie = session_cookie(&resp).unwrap();
    let resp = app
        .clone()
        .oneshot(post_form(
            "/register",
            &credentials_body("reader@example.com", "password"),
            None,
        ))
        .await
        .unwrap();
    let reader_cookie = session_cookie(&resp).unwrap();

    let resp = app
        .clone()
        .oneshot(post_form(
            "/submit",
            "secret=I+like+%3Cb%3Epineapple%3C%2Fb%3E",
            Some(&author_cookie),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/secrets");

    let users = entity::prelude::SecretsUser::find().all(&test.db).await?;
    for user in users {
        match user.username.as_deref() {
            Some("author@example.com") => {
                assert_eq!(user.secret.as_deref(), Some("I like <b>pineapple</b>"))
            }
            _ => assert!(user.secret.is_none()),
        }
    }

    let resp = app
        .clone()
        .oneshot(get("/secrets", Some(&reader_cookie)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("I like &lt;b&gt;pineapple&lt;/b&gt;"));
    assert!(!body.contains("author@example.com"));

    Ok(())
}
