use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::models::feedback::{CreateFeedback, Feedback};

pub async fn get_feedback(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let feedbacks = sqlx::query_as::<_, Feedback>("SELECT * FROM feedback ORDER BY id")
        .fetch_all(pool.get_ref())
        .await?;

    Ok(HttpResponse::Ok().json(feedbacks))
}

pub async fn add_feedback(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUser,
    body: web::Json<CreateFeedback>,
) -> Result<HttpResponse, ApiError> {
    body.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    // The display name comes from the resolved identity, not the payload.
    let saved = sqlx::query_as::<_, Feedback>(
        "INSERT INTO feedback (name, feedback, ratings) VALUES (?, ?, ?) RETURNING *",
    )
    .bind(&user.0.name)
    .bind(&body.feedback)
    .bind(body.ratings)
    .fetch_one(pool.get_ref())
    .await?;

    Ok(HttpResponse::Created().json(saved))
}
