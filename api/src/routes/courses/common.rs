use chrono::{DateTime, Utc};
use db::models::{course::CourseSummary, review, step, user};
use serde::{Deserialize, Deserializer, Serialize};
use services::course::{CourseDetail, CreateCourse, NewStep, UpdateCourse};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepRequest {
    pub step_number: Option<i32>,
    pub title: String,
    pub description: String,
}

impl From<StepRequest> for NewStep {
    fn from(req: StepRequest) -> Self {
        Self {
            step_number: req.step_number,
            title: req.title,
            description: req.description,
        }
    }
}

/// Body of `POST /api/courses`. A client-supplied `user` is ignored; the owner
/// is always the authenticated caller.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub steps: Vec<StepRequest>,
}

impl From<CreateCourseRequest> for CreateCourse {
    fn from(req: CreateCourseRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            estimated_time: req.estimated_time,
            materials_needed: req.materials_needed,
            steps: req.steps.into_iter().map(Into::into).collect(),
        }
    }
}

/// Keeps an explicit `null` apart from an absent field: absent is `None`
/// (via `default`), `null` is `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Body of `PUT /api/courses/{course_id}`.
///
/// Absent fields are left as they are. `null` clears `estimatedTime` and
/// `materialsNeeded`, empties `steps`, and fails validation for the required
/// `title` and `description`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub estimated_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub materials_needed: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub steps: Option<Option<Vec<StepRequest>>>,
}

impl From<UpdateCourseRequest> for UpdateCourse {
    fn from(req: UpdateCourseRequest) -> Self {
        Self {
            title: req.title.map(Option::unwrap_or_default),
            description: req.description.map(Option::unwrap_or_default),
            estimated_time: req.estimated_time,
            materials_needed: req.materials_needed,
            steps: req.steps.map(|steps| {
                steps
                    .unwrap_or_default()
                    .into_iter()
                    .map(Into::into)
                    .collect()
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CourseSummaryResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub title: String,
}

impl From<CourseSummary> for CourseSummaryResponse {
    fn from(summary: CourseSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
        }
    }
}

/// The course owner as shown on a course: id and name only.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub full_name: String,
}

impl From<user::Model> for OwnerResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_number: Option<i32>,
    pub title: String,
    pub description: String,
}

impl From<step::Model> for StepResponse {
    fn from(step: step::Model) -> Self {
        Self {
            id: step.id,
            step_number: step.step_number,
            title: step.title,
            description: step.description,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    /// Author id.
    pub user: i64,
    pub posted_on: DateTime<Utc>,
    pub rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

impl From<review::Model> for ReviewResponse {
    fn from(review: review::Model) -> Self {
        Self {
            id: review.id,
            user: review.user_id,
            posted_on: review.posted_on,
            rating: review.rating,
            review: review.review,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetailResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub user: OwnerResponse,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials_needed: Option<String>,
    pub steps: Vec<StepResponse>,
    pub reviews: Vec<ReviewResponse>,
}

impl From<CourseDetail> for CourseDetailResponse {
    fn from(detail: CourseDetail) -> Self {
        let CourseDetail {
            course,
            owner,
            steps,
            reviews,
        } = detail;

        Self {
            id: course.id,
            user: owner.into(),
            title: course.title,
            description: course.description,
            estimated_time: course.estimated_time,
            materials_needed: course.materials_needed,
            steps: steps.into_iter().map(Into::into).collect(),
            reviews: reviews.into_iter().map(Into::into).collect(),
        }
    }
}
