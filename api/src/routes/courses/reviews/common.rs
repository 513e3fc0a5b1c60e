use serde::Deserialize;
use services::review::CreateReview;

/// Body of `POST /api/courses/{course_id}/reviews`. The author is always the
/// authenticated caller.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateReviewRequest {
    pub rating: Option<i32>,
    pub review: Option<String>,
}

impl From<CreateReviewRequest> for CreateReview {
    fn from(req: CreateReviewRequest) -> Self {
        Self {
            rating: req.rating,
            review: req.review,
        }
    }
}
