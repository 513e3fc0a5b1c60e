#[cfg(test)]
mod tests {
    use crate::helpers::{json_body, make_test_app, seed_course, seed_user};
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use services::review::{CreateReview, ReviewService};
    use tower::ServiceExt;

    fn get(uri: &str) -> Request<AxumBody> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(AxumBody::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn list_is_empty_array_without_courses() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(get("/api/courses")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn list_returns_only_id_and_title() {
        let (app, app_state) = make_test_app().await;
        let joe = seed_user(app_state.db(), "Joe Smith", "joe@smith.com").await;
        let first = seed_course(app_state.db(), &joe).await;
        let second = seed_course(app_state.db(), &joe).await;

        let response = app.oneshot(get("/api/courses")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        let courses = json.as_array().unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0]["_id"], first.id);
        assert_eq!(courses[1]["_id"], second.id);
        for course in courses {
            let keys: Vec<&String> = course.as_object().unwrap().keys().collect();
            assert_eq!(keys.len(), 2);
            assert_eq!(course["title"], "Build a Basic Bookcase");
        }
    }

    #[tokio::test]
    async fn detail_expands_owner_steps_and_reviews() {
        let (app, app_state) = make_test_app().await;
        let joe = seed_user(app_state.db(), "Joe Smith", "joe@smith.com").await;
        let sally = seed_user(app_state.db(), "Sally Jones", "sally@jones.com").await;
        let course = seed_course(app_state.db(), &joe).await;
        ReviewService::create(
            app_state.db(),
            course.id,
            sally.id,
            CreateReview {
                rating: Some(4),
                review: Some("Solid instructions.".into()),
            },
        )
        .await
        .unwrap();

        let response = app
            .oneshot(get(&format!("/api/courses/{}", course.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = json_body(response).await;
        assert_eq!(json["_id"], course.id);
        assert_eq!(json["user"], serde_json::json!({ "_id": joe.id, "fullName": "Joe Smith" }));
        assert_eq!(json["estimatedTime"], "12 hours");
        assert!(json.get("materialsNeeded").is_none());

        let steps = json["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0]["stepNumber"], 1);
        assert_eq!(steps[0]["title"], "Measure Twice, Cut Once");
        assert_eq!(steps[1]["title"], "Assemble");

        let reviews = json["reviews"].as_array().unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0]["user"], sally.id);
        assert_eq!(reviews[0]["rating"], 4);
        assert_eq!(reviews[0]["review"], "Solid instructions.");
        assert!(reviews[0]["postedOn"].is_string());
    }

    #[tokio::test]
    async fn missing_course_is_not_found_with_id() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(get("/api/courses/42")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = json_body(response).await;
        assert_eq!(json["message"], "No Course found with id: 42");
    }

    #[tokio::test]
    async fn non_numeric_id_is_not_found_with_raw_id() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(get("/api/courses/abc")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = json_body(response).await;
        assert_eq!(json["message"], "No Course found with id: abc");
    }
}
