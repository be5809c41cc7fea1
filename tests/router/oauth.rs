use sea_orm::{EntityTrait, PaginatorTrait};
use secrets_test_utils::constant::TEST_GOOGLE_ID;

use super::*;

/// Starts a Google login and returns the session cookie and the state sent to Google
async fn start_google_login(app: &axum::Router) -> (String, String) {
    let resp = app
        .clone()
        .oneshot(get("/auth/google", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    let state = location(&resp)
        .split("state=")
        .nth(1)
        .and_then(|rest| rest.split('&').next())
        .unwrap()
        .to_string();
    let cookie = session_cookie(&resp).unwrap();

    (cookie, state)
}

#[tokio::test]
/// Expect the same user to be logged in on the first and second Google login
async fn google_login_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_google_login_endpoints(TEST_GOOGLE_ID, 2)
        .build()
        .await?;
    let app = test_app(&test);

    for _ in 0..2 {
        let (cookie, state) = start_google_login(&app).await;

        let resp = app
            .clone()
            .oneshot(get(
                &format!("/auth/google/secrets?state={}&code=code", state),
                Some(&cookie),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&resp), "/secrets");
        let cookie = session_cookie(&resp).unwrap();

        let resp = app
            .clone()
            .oneshot(get("/secrets", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let count = entity::prelude::SecretsUser::find().count(&test.db).await?;
    assert_eq!(count, 1);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a forged state to never authenticate the client
async fn google_callback_with_forged_state() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_google_login_endpoints(TEST_GOOGLE_ID, 0)
        .build()
        .await?;
    let app = test_app(&test);
    let (cookie, _) = start_google_login(&app).await;

    let resp = app
        .clone()
        .oneshot(get(
            "/auth/google/secrets?state=forged&code=code",
            Some(&cookie),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");

    let resp = app
        .clone()
        .oneshot(get("/secrets", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let count = entity::prelude::SecretsUser::find().count(&test.db).await?;
    assert_eq!(count, 0);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect malformed callbacks to redirect to /login rather than fail query parsing
async fn google_callback_without_state() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_google_login_endpoints(TEST_GOOGLE_ID, 0)
        .build()
        .await?;
    let app = test_app(&test);

    for uri in [
        "/auth/google/secrets",
        "/auth/google/secrets?code=code",
        "/auth/google/secrets?error=access_denied",
    ] {
        let (cookie, _) = start_google_login(&app).await;

        let resp = app
            .clone()
            .oneshot(get(uri, Some(&cookie)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{}", uri);
        assert_eq!(location(&resp), "/login", "{}", uri);

        let resp = app.clone().oneshot(get(uri, None)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{}", uri);
        assert_eq!(location(&resp), "/login", "{}", uri);
    }

    let count = entity::prelude::SecretsUser::find().count(&test.db).await?;
    assert_eq!(count, 0);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a Google login to issue a new session ID and leave the pre-login cookie anonymous
async fn google_login_rotates_session_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_google_login_endpoints(TEST_GOOGLE_ID, 1)
        .build()
        .await?;
    let app = test_app(&test);
    let (pre_login_cookie, state) = start_google_login(&app).await;

    let resp = app
        .clone()
        .oneshot(get(
            &format!("/auth/google/secrets?state={}&code=code", state),
            Some(&pre_login_cookie),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
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
