use crate::seed::Seeder;
use crate::seeds::FIXED_USERS;
use anyhow::Context;
use async_trait::async_trait;
use db::models::user;
use fake::{
    Fake,
    faker::lorem::en::{Paragraph, Sentence},
};
use sea_orm::DatabaseConnection;
use services::course::{CourseService, CreateCourse, NewStep};

pub struct CourseSeeder;

#[async_trait]
impl Seeder for CourseSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> anyhow::Result<()> {
        let courses = [
            (
                "Build a Basic Bookcase",
                "High-end furniture projects are great to dream about. But unless you have a well-equipped shop and some serious woodworking experience to draw on, it can be difficult to turn the dream into a reality.",
                Some("12 hours"),
                Some("* 1/2 x 3/4 inch parting strip\n* 1 x 2 common pine\n* Wood screws"),
            ),
            (
                "Learn How to Program",
                "In this course, you'll learn how to write code like a pro!",
                Some("6 hours"),
                Some("* Notebook computer running Mac OS X or Windows\n* Text editor"),
            ),
        ];

        for ((title, description, estimated_time, materials_needed), (_, email)) in
            courses.into_iter().zip(FIXED_USERS)
        {
            let owner = user::Model::find_by_email(db, email)
                .await?
                .with_context(|| format!("fixed user {email} is missing"))?;

            let steps = (1..=fastrand::i32(2..=5))
                .map(|n| NewStep {
                    step_number: Some(n),
                    title: Sentence(2..5).fake(),
                    description: Paragraph(1..3).fake(),
                })
                .collect();

            CourseService::create(
                db,
                owner.id,
                CreateCourse {
                    title: title.into(),
                    description: description.into(),
                    estimated_time: estimated_time.map(Into::into),
                    materials_needed: materials_needed.map(Into::into),
                    steps,
                },
            )
            .await?;
        }

        Ok(())
    }
}
