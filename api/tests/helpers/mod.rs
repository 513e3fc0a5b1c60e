pub mod app;

pub use app::{basic_auth, json_body, make_test_app, seed_course, seed_user};
