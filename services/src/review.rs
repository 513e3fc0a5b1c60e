use crate::error::ServiceError;
use chrono::Utc;
use db::models::{course, review};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, TransactionTrait};
use validator::Validate;

pub use db::models::review::Model as Review;

#[derive(Debug, Clone, Validate)]
pub struct CreateReview {
    #[validate(
        required(message = "Rating is required"),
        range(min = 1, max = 5, message = "Ratings must be between 1 and 5")
    )]
    pub rating: Option<i32>,

    pub review: Option<String>,
}

pub struct ReviewService;

impl ReviewService {
    /// Posts a review by `author_id` on `course_id`.
    ///
    /// The course lookup, the owner check and the insert share one
    /// transaction, and the review row itself carries the course link, so a
    /// review can never exist without being attached to its course.
    pub async fn create(
        db: &DatabaseConnection,
        course_id: i64,
        author_id: i64,
        params: CreateReview,
    ) -> Result<Review, ServiceError> {
        let txn = db.begin().await?;

        let course = course::Entity::find_by_id(course_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Course not found".into()))?;

        if course.user_id == author_id {
            tracing::warn!(course_id, author_id, "Rejected self-review");
            return Err(ServiceError::Forbidden);
        }

        params.validate()?;
        let rating = params
            .rating
            .ok_or_else(|| ServiceError::Validation("Rating is required".into()))?;

        let created = review::ActiveModel {
            course_id: Set(course.id),
            user_id: Set(author_id),
            posted_on: Set(Utc::now()),
            rating: Set(rating),
            review: Set(params.review),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|err| match err {
            DbErr::RecordNotInserted | DbErr::RecordNotFound(_) => {
                ServiceError::NotCreated("Unable to create review".into())
            }
            other => ServiceError::Database(other),
        })?;

        txn.commit().await?;
        tracing::info!(review_id = created.id, course_id, author_id, "Posted review");
        Ok(created)
    }
}
