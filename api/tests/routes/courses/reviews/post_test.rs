#[cfg(test)]
mod tests {
    use crate::helpers::{basic_auth, json_body, make_test_app, seed_course, seed_user};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode, header::AUTHORIZATION, header::LOCATION},
    };
    use db::models::Review;
    use sea_orm::EntityTrait;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn post_review(course_id: impl std::fmt::Display, auth: &str, body: Value) -> Request<AxumBody> {
        Request::builder()
            .method("POST")
            .uri(format!("/api/courses/{course_id}/reviews"))
            .header("Content-Type", "application/json")
            .header(AUTHORIZATION, auth)
            .body(AxumBody::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn another_user_can_review() {
        let (app, app_state) = make_test_app().await;
        let joe = seed_user(app_state.db(), "Joe Smith", "joe@smith.com").await;
        let sally = seed_user(app_state.db(), "Sally Jones", "sally@jones.com").await;
        let course = seed_course(app_state.db(), &joe).await;

        let response = app
            .oneshot(post_review(
                course.id,
                &basic_auth("sally@jones.com", "password"),
                json!({ "rating": 5, "review": "Great course!", "user": joe.id }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/");

        let reviews = Review::find().all(app_state.db()).await.unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].course_id, course.id);
        assert_eq!(reviews[0].user_id, sally.id);
        assert_eq!(reviews[0].rating, 5);
    }

    #[tokio::test]
    async fn owner_cannot_review_own_course() {
        let (app, app_state) = make_test_app().await;
        let joe = seed_user(app_state.db(), "Joe Smith", "joe@smith.com").await;
        let course = seed_course(app_state.db(), &joe).await;

        let response = app
            .oneshot(post_review(
                course.id,
                &basic_auth("joe@smith.com", "password"),
                json!({ "rating": 5 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(json_body(response).await["message"], "Forbidden");
        assert!(Review::find().all(app_state.db()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn out_of_range_ratings_are_bad_requests() {
        let (app, app_state) = make_test_app().await;
        let joe = seed_user(app_state.db(), "Joe Smith", "joe@smith.com").await;
        seed_user(app_state.db(), "Sally Jones", "sally@jones.com").await;
        let course = seed_course(app_state.db(), &joe).await;

        for rating in [0, 6] {
            let response = app
                .clone()
                .oneshot(post_review(
                    course.id,
                    &basic_auth("sally@jones.com", "password"),
                    json!({ "rating": rating }),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{rating}");
            assert_eq!(
                json_body(response).await["message"],
                "Ratings must be between 1 and 5"
            );
        }
        assert!(Review::find().all(app_state.db()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_rating_is_a_bad_request() {
        let (app, app_state) = make_test_app().await;
        let joe = seed_user(app_state.db(), "Joe Smith", "joe@smith.com").await;
        seed_user(app_state.db(), "Sally Jones", "sally@jones.com").await;
        let course = seed_course(app_state.db(), &joe).await;

        let response = app
            .oneshot(post_review(
                course.id,
                &basic_auth("sally@jones.com", "password"),
                json!({ "review": "No stars given" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["message"], "Rating is required");
    }

    #[tokio::test]
    async fn missing_course_is_not_found() {
        let (app, app_state) = make_test_app().await;
        seed_user(app_state.db(), "Sally Jones", "sally@jones.com").await;

        for course_id in ["404", "not-a-number"] {
            let response = app
                .clone()
                .oneshot(post_review(
                    course_id,
                    &basic_auth("sally@jones.com", "password"),
                    json!({ "rating": 3 }),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{course_id}");
            assert_eq!(json_body(response).await["message"], "Course not found");
        }
    }

    #[tokio::test]
    async fn without_credentials_is_unauthorized() {
        let (app, app_state) = make_test_app().await;
        let joe = seed_user(app_state.db(), "Joe Smith", "joe@smith.com").await;
        let course = seed_course(app_state.db(), &joe).await;

        let req = Request::builder()
            .method("POST")
            .uri(format!("/api/courses/{}/reviews", course.id))
            .header("Content-Type", "application/json")
            .body(AxumBody::from(json!({ "rating": 4 }).to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(Review::find().all(app_state.db()).await.unwrap().is_empty());
    }
}
