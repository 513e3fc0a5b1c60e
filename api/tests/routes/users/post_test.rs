#[cfg(test)]
mod tests {
    use crate::helpers::{basic_auth, json_body, make_test_app, seed_user};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::AUTHORIZATION},
    };
    use db::models::User;
    use sea_orm::EntityTrait;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn post_users(body: Value) -> Request<AxumBody> {
        Request::builder()
            .method("POST")
            .uri("/api/users")
            .header("Content-Type", "application/json")
            .body(AxumBody::from(body.to_string()))
            .unwrap()
    }

    fn jane() -> Value {
        json!({
            "fullName": "Jane Smith",
            "emailAddress": "jane@smith.com",
            "password": "secret",
            "confirmPassword": "secret"
        })
    }

    #[tokio::test]
    async fn registers_user_who_can_then_authenticate() {
        let (app, app_state) = make_test_app().await;

        let response = app.clone().oneshot(post_users(jane())).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());

        let stored = User::find().all(app_state.db()).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_ne!(stored[0].password_hash, "secret");

        let req = Request::builder()
            .uri("/api/users")
            .header(AUTHORIZATION, basic_auth("jane@smith.com", "secret"))
            .body(AxumBody::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn mismatched_passwords_are_rejected_without_a_row() {
        let (app, app_state) = make_test_app().await;
        let mut body = jane();
        body["confirmPassword"] = json!("different");

        let response = app.oneshot(post_users(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = json_body(response).await;
        assert_eq!(json["message"], "Passwords must match");
        assert!(User::find().all(app_state.db()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let (app, _) = make_test_app().await;
        let mut body = jane();
        body["emailAddress"] = json!("jane.smith.com");

        let response = app.oneshot(post_users(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = json_body(response).await;
        assert_eq!(json["message"], "jane.smith.com is not a valid e-mail address");
    }

    #[tokio::test]
    async fn missing_full_name_is_rejected() {
        let (app, _) = make_test_app().await;
        let mut body = jane();
        body.as_object_mut().unwrap().remove("fullName");

        let response = app.oneshot(post_users(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = json_body(response).await;
        assert_eq!(json["message"], "Full name is required");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let (app, app_state) = make_test_app().await;
        seed_user(app_state.db(), "Jane Doe", "jane@smith.com").await;

        let response = app.oneshot(post_users(jane())).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = json_body(response).await;
        assert_eq!(
            json["message"],
            "A user with the email address jane@smith.com already exists"
        );
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let (app, _) = make_test_app().await;

        let req = Request::builder()
            .method("POST")
            .uri("/api/users")
            .header("Content-Type", "application/json")
            .body(AxumBody::from("{\"fullName\": "))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["success"], false);
    }
}
