use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::auth;
use crate::config::Config;
use crate::error::ApiError;
use crate::models::user::{LoginRequest, SignupRequest, User};

pub async fn signup(
    pool: web::Data<SqlitePool>,
    body: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let existing = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(&body.email)
        .fetch_optional(pool.get_ref())
        .await?;
    if existing.is_some() {
        return Err(ApiError::DuplicateUser);
    }

    // Never store the password itself. A concurrent signup with the same
    // email or username still trips the unique index, which the error
    // conversion reports as a duplicate.
    let password_hash = bcrypt::hash(&body.password, bcrypt::DEFAULT_COST)?;

    sqlx::query(
        r#"
        INSERT INTO users (username, name, email, phone, address, aadhar, password_hash)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&body.username)
    .bind(&body.name)
    .bind(&body.email)
    .bind(&body.phone)
    .bind(&body.address)
    .bind(&body.aadhar)
    .bind(&password_hash)
    .execute(pool.get_ref())
    .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "User registered successfully"
    })))
}

pub async fn login(
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(&body.email)
        .fetch_optional(pool.get_ref())
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !bcrypt::verify(&body.password, &user.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    let token = auth::issue_token(&user, &config.jwt_secret)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Login successful",
        "token": token,
        "name": user.name
    })))
}
