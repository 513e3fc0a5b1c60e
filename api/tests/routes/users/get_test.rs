#[cfg(test)]
mod tests {
    use crate::helpers::{basic_auth, json_body, make_test_app, seed_user};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::AUTHORIZATION},
    };
    use tower::ServiceExt;

    fn get_users(auth: Option<String>) -> Request<AxumBody> {
        let mut builder = Request::builder().method("GET").uri("/api/users");
        if let Some(auth) = auth {
            builder = builder.header(AUTHORIZATION, auth);
        }
        builder.body(AxumBody::empty()).unwrap()
    }

    #[tokio::test]
    async fn returns_the_authenticated_user_without_password() {
        let (app, app_state) = make_test_app().await;
        let joe = seed_user(app_state.db(), "Joe Smith", "joe@smith.com").await;
        seed_user(app_state.db(), "Sally Jones", "sally@jones.com").await;

        let response = app
            .oneshot(get_users(Some(basic_auth("joe@smith.com", "password"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["_id"], joe.id);
        assert_eq!(json["fullName"], "Joe Smith");
        assert_eq!(json["emailAddress"], "joe@smith.com");
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn missing_credentials_are_unauthorized() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(get_users(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let json = json_body(response).await;
        assert_eq!(json["message"], "Authentication Failed");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let (app, app_state) = make_test_app().await;
        seed_user(app_state.db(), "Joe Smith", "joe@smith.com").await;

        let wrong_password = app
            .clone()
            .oneshot(get_users(Some(basic_auth("joe@smith.com", "nope"))))
            .await
            .unwrap();
        let unknown_email = app
            .oneshot(get_users(Some(basic_auth("ghost@smith.com", "password"))))
            .await
            .unwrap();

        assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(wrong_password).await, json_body(unknown_email).await);
    }

    #[tokio::test]
    async fn malformed_authorization_header_is_unauthorized() {
        let (app, app_state) = make_test_app().await;
        seed_user(app_state.db(), "Joe Smith", "joe@smith.com").await;

        for header in ["Bearer abc.def.ghi", "Basic not-base64!!", "Basic"] {
            let response = app
                .clone()
                .oneshot(get_users(Some(header.to_string())))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{header}");
        }
    }
}
