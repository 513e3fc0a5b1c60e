pub mod course;
pub mod error;
pub mod review;
pub mod user;

pub use error::ServiceError;
