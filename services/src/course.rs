use crate::error::ServiceError;
use chrono::Utc;
use db::models::{
    course::{self, CourseSummary},
    review, step, user,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, Set, TransactionTrait,
};
use validator::Validate;

pub use db::models::course::Model as Course;

#[derive(Debug, Clone, Validate)]
pub struct NewStep {
    pub step_number: Option<i32>,

    #[validate(length(min = 1, message = "Step title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Step description is required"))]
    pub description: String,
}

#[derive(Debug, Clone, Validate)]
pub struct CreateCourse {
    #[validate(length(min = 1, message = "Course title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Course description is required"))]
    pub description: String,

    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,

    #[validate(nested)]
    pub steps: Vec<NewStep>,
}

/// Partial update. `None` leaves a field untouched; `Some(None)` clears an
/// optional field; `Some(steps)` replaces the step list.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateCourse {
    #[validate(length(min = 1, message = "Course title is required"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Course description is required"))]
    pub description: Option<String>,

    pub estimated_time: Option<Option<String>>,
    pub materials_needed: Option<Option<String>>,

    pub steps: Option<Vec<NewStep>>,
}

/// A course with everything the detail view shows.
#[derive(Debug, Clone)]
pub struct CourseDetail {
    pub course: Course,
    pub owner: user::Model,
    pub steps: Vec<step::Model>,
    pub reviews: Vec<review::Model>,
}

pub fn course_not_found(raw_id: &str) -> ServiceError {
    ServiceError::NotFound(format!("No Course found with id: {raw_id}"))
}

async fn insert_steps<C>(db: &C, course_id: i64, steps: Vec<NewStep>) -> Result<(), ServiceError>
where
    C: ConnectionTrait,
{
    for (position, new_step) in (0i32..).zip(steps) {
        step::ActiveModel {
            course_id: Set(course_id),
            position: Set(position),
            step_number: Set(new_step.step_number),
            title: Set(new_step.title),
            description: Set(new_step.description),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }
    Ok(())
}

pub struct CourseService;

impl CourseService {
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<CourseSummary>, ServiceError> {
        Ok(course::Model::summaries(db).await?)
    }

    pub async fn find_detail(
        db: &DatabaseConnection,
        course_id: i64,
    ) -> Result<Option<CourseDetail>, ServiceError> {
        let Some((course, owner)) = course::Entity::find_by_id(course_id)
            .find_also_related(user::Entity)
            .one(db)
            .await?
        else {
            return Ok(None);
        };

        let owner = owner.ok_or_else(|| {
            ServiceError::NotFound(format!("No User found with id: {}", course.user_id))
        })?;
        let steps = course.steps(db).await?;
        let reviews = course.reviews(db).await?;

        Ok(Some(CourseDetail {
            course,
            owner,
            steps,
            reviews,
        }))
    }

    /// Creates a course owned by `owner_id` together with its steps.
    pub async fn create(
        db: &DatabaseConnection,
        owner_id: i64,
        params: CreateCourse,
    ) -> Result<Course, ServiceError> {
        params.validate()?;

        let now = Utc::now();
        let txn = db.begin().await?;

        let course = course::ActiveModel {
            user_id: Set(owner_id),
            title: Set(params.title),
            description: Set(params.description),
            estimated_time: Set(params.estimated_time),
            materials_needed: Set(params.materials_needed),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_steps(&txn, course.id, params.steps).await?;
        txn.commit().await?;

        tracing::info!(course_id = course.id, owner_id, "Created course");
        Ok(course)
    }

    /// Applies a partial update on behalf of `editor_id`, who must own the course.
    ///
    /// Existence and ownership are checked before the body is validated.
    pub async fn update(
        db: &DatabaseConnection,
        course_id: i64,
        editor_id: i64,
        params: UpdateCourse,
    ) -> Result<Course, ServiceError> {
        let txn = db.begin().await?;

        let existing = course::Entity::find_by_id(course_id)
            .one(&txn)
            .await?
            .ok_or_else(|| course_not_found(&course_id.to_string()))?;

        if existing.user_id != editor_id {
            tracing::warn!(course_id, editor_id, "Rejected course update by non-owner");
            return Err(ServiceError::Forbidden);
        }

        params.validate()?;
        if let Some(steps) = &params.steps {
            for new_step in steps {
                new_step.validate()?;
            }
        }

        let mut active = existing.into_active_model();
        if let Some(title) = params.title {
            active.title = Set(title);
        }
        if let Some(description) = params.description {
            active.description = Set(description);
        }
        if let Some(estimated_time) = params.estimated_time {
            active.estimated_time = Set(estimated_time);
        }
        if let Some(materials_needed) = params.materials_needed {
            active.materials_needed = Set(materials_needed);
        }
        active.updated_at = Set(Utc::now());
        let updated = active.update(&txn).await?;

        if let Some(steps) = params.steps {
            step::Entity::delete_many()
                .filter(step::Column::CourseId.eq(course_id))
                .exec(&txn)
                .await?;
            insert_steps(&txn, course_id, steps).await?;
        }

        txn.commit().await?;
        tracing::info!(course_id, "Updated course");
        Ok(updated)
    }
}
