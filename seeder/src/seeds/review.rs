use crate::seed::Seeder;
use crate::seeds::FIXED_USERS;
use anyhow::Context;
use async_trait::async_trait;
use db::models::user;
use fake::{Fake, faker::lorem::en::Sentence};
use sea_orm::DatabaseConnection;
use services::{
    course::CourseService,
    review::{CreateReview, ReviewService},
};

pub struct ReviewSeeder;

#[async_trait]
impl Seeder for ReviewSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> anyhow::Result<()> {
        let mut reviewers = Vec::new();
        for (_, email) in FIXED_USERS {
            let reviewer = user::Model::find_by_email(db, email)
                .await?
                .with_context(|| format!("fixed user {email} is missing"))?;
            reviewers.push(reviewer);
        }

        for summary in CourseService::list(db).await? {
            let Some(detail) = CourseService::find_detail(db, summary.id).await? else {
                continue;
            };

            // Owners never review their own course.
            for reviewer in reviewers.iter().filter(|r| r.id != detail.course.user_id) {
                ReviewService::create(
                    db,
                    detail.course.id,
                    reviewer.id,
                    CreateReview {
                        rating: Some(fastrand::i32(1..=5)),
                        review: fastrand::bool().then(|| Sentence(4..10).fake()),
                    },
                )
                .await?;
            }
        }

        Ok(())
    }
}
