use sea_orm::{EntityTrait, PaginatorTrait};
use secrets_test_utils::constant::{TEST_PASSWORD, TEST_USERNAME};

use super::*;

#[tokio::test]
/// Expect the session cookie from registration to unlock /secrets
async fn registration_logs_user_in() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let app = test_app(&test);

    let resp = app
        .clone()
        .oneshot(post_form(
            "/register",
            &credentials_body(TEST_USERNAME, TEST_PASSWORD),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/secrets");
    let cookie = session_cookie(&resp).unwrap();

    let resp = app
        .clone()
        .oneshot(get("/secrets", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let user = entity::prelude::SecretsUser::find()
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(user.username.as_deref(), Some(TEST_USERNAME));

    Ok(())
}

#[tokio::test]
/// Expect a second registration of the same username to create nothing and leave the client anonymous
async fn duplicate_registration_is_rejected() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let app = test_app(&test);
    let body = credentials_body(TEST_USERNAME, TEST_PASSWORD);

    app.clone()
        .oneshot(post_form("/register", &body, None))
        .await
        .unwrap();
    let resp = app
        .clone()
        .oneshot(post_form("/register", &body, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/register");
    assert!(session_cookie(&resp).is_none());

    let count = entity::prelude::SecretsUser::find().count(&test.db).await?;
    assert_eq!(count, 1);

    Ok(())
}

#[tokio::test]
/// Expect login with the registered password to unlock /secrets
async fn login_with_correct_password() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let app = test_app(&test);
    let body = credentials_body(TEST_USERNAME, TEST_PASSWORD);
    app.clone()
        .oneshot(post_form("/register", &body, None))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(post_form("/login", &body, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/secrets");
    let cookie = session_cookie(&resp).unwrap();

    let resp = app
        .clone()
        .oneshot(get("/secrets", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect a wrong password to redirect back to /login without starting a session
async fn login_with_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let app = test_app(&test);
    app.clone()
        .oneshot(post_form(
            "/register",
            &credentials_body(TEST_USERNAME, TEST_PASSWORD),
            None,
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(post_form(
            "/login",
            &credentials_body(TEST_USERNAME, "wrong password"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");
    assert!(session_cookie(&resp).is_none());

    Ok(())
}

#[tokio::test]
/// Expect /secrets to be inaccessible again after logout, even with the old cookie
async fn logout_ends_session() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let app = test_app(&test);
    let resp = app
        .clone()
        .oneshot(post_form(
            "/register",
            &credentials_body(TEST_USERNAME, TEST_PASSWORD),
            None,
        ))
        .await
        .unwrap();
    let cookie = session_cookie(&resp).unwrap();

    let resp = app
        .clone()
        .oneshot(get("/logout", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/");

    let resp = app
        .clone()
        .oneshot(get("/secrets", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");

    Ok(())
}

#[tokio::test]
/// Expect the public pages to render without a session
async fn public_pages_render() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let app = test_app(&test);

    for (uri, expected) in [
        ("/", r#"href="/register""#),
        ("/login", r#"<form action="/login" method="POST">"#),
        ("/register", r#"<form action="/register" method="POST">"#),
    ] {
        let resp = app.clone().oneshot(get(uri, None)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        assert!(body_string(resp).await.contains(expected), "{}", uri);
    }

    Ok(())
}

#[tokio::test]
/// Expect a password login to issue a new session ID and leave the pre-login cookie anonymous
async fn login_rotates_session_id() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let app = test_app(&test);
    let body = credentials_body(TEST_USERNAME, TEST_PASSWORD);
    app.clone()
        .oneshot(post_form("/register", &body, None))
        .await
        .unwrap();

    // Any session value gives the client a cookie before it logs in
    let resp = app
        .clone()
        .oneshot(get("/auth/google", None))
        .await
        .unwrap();
    let pre_login_cookie = session_cookie(&resp).unwrap();

    let resp = app
        .clone()
        .oneshot(post_form("/login", &body, Some(&pre_login_cookie)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/secrets");
    let login_cookie = session_cookie(&resp).unwrap();
    assert_ne!(login_cookie, pre_login_cookie);

    let resp = app
        .clone()
        .oneshot(get("/secrets", Some(&pre_login_cookie)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");

    let resp = app
        .clone()
        .oneshot(get("/secrets", Some(&login_cookie)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
