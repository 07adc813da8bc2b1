use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Feedback {
    pub id: i64,
    pub name: String,
    pub feedback: String,
    pub ratings: f64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFeedback {
    #[validate(length(min = 1))]
    pub feedback: String,
    #[validate(range(min = 0.0, max = 5.0))]
    pub ratings: f64,
}
