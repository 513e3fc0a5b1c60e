use api::routes::app;
use axum::{Router, response::Response};
use base64::{Engine, engine::general_purpose::STANDARD};
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use services::{
    course::{Course, CourseService, CreateCourse, NewStep},
    user::{CreateUser, User, UserService},
};
use util::state::AppState;

pub const PASSWORD: &str = "password";

/// Full application over a fresh in-memory database.
pub async fn make_test_app() -> (Router, AppState) {
    let db = setup_test_db().await;
    let app_state = AppState::new(db);
    (app(app_state.clone()), app_state)
}

pub fn basic_auth(email: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{email}:{password}")))
}

pub async fn json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub async fn seed_user(db: &DatabaseConnection, full_name: &str, email: &str) -> User {
    UserService::create(
        db,
        CreateUser {
            full_name: full_name.into(),
            email_address: email.into(),
            password: PASSWORD.into(),
        },
    )
    .await
    .expect("Failed to seed user")
}

pub async fn seed_course(db: &DatabaseConnection, owner: &User) -> Course {
    CourseService::create(
        db,
        owner.id,
        CreateCourse {
            title: "Build a Basic Bookcase".into(),
            description: "High-end furniture projects are great to dream about.".into(),
            estimated_time: Some("12 hours".into()),
            materials_needed: None,
            steps: vec![
                NewStep {
                    step_number: Some(1),
                    title: "Measure Twice, Cut Once".into(),
                    description: "Cut the sides.".into(),
                },
                NewStep {
                    step_number: Some(2),
                    title: "Assemble".into(),
                    description: "Glue and screw.".into(),
                },
            ],
        },
    )
    .await
    .expect("Failed to seed course")
}
