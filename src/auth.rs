use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::config::Config;
use crate::error::ApiError;
use crate::models::user::User;

const TOKEN_TTL_SECS: i64 = 3600;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: i64,
    pub email: String,
    pub exp: i64,
}

pub fn issue_token(user: &User, secret: &str) -> Result<String, ApiError> {
    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        exp: chrono::Utc::now().timestamp() + TOKEN_TTL_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(ApiError::Token)
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    // The default validation tolerates 60 seconds of clock skew, which
    // would stretch the fixed 1-hour expiry. Expiry is exact here.
    let mut validation = Validation::default();
    validation.leeway = 0;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::InvalidToken)
}

/// The caller's user record, resolved from the bearer token.
///
/// Taking this as a handler argument makes the route protected: the token
/// is pulled from the `Authorization` header, verified against the
/// configured secret, and its subject looked up in the users table.
pub struct AuthenticatedUser(pub User);

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let token = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split_whitespace().nth(1))
                .ok_or(ApiError::MissingToken)?
                .to_string();

            let config = req
                .app_data::<web::Data<Config>>()
                .ok_or(ApiError::Configuration("Config not registered"))?;
            let pool = req
                .app_data::<web::Data<SqlitePool>>()
                .ok_or(ApiError::Configuration("SqlitePool not registered"))?;

            let claims = verify_token(&token, &config.jwt_secret)?;

            let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
                .bind(claims.sub)
                .fetch_optional(pool.get_ref())
                .await?
                .ok_or(ApiError::UserNotFound)?;

            Ok(AuthenticatedUser(user))
        })
    }
}
