pub mod course;
pub mod review;
pub mod step;
pub mod user;

pub use course::Entity as Course;
pub use review::Entity as Review;
pub use step::Entity as Step;
pub use user::Entity as User;
