use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No token provided")]
    MissingToken,
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User already exists")]
    DuplicateUser,
    #[error("{0}")]
    Validation(String),
    #[error("User not found")]
    UserNotFound,
    #[error("Hotel not found")]
    HotelNotFound,
    #[error("Room type not found")]
    RoomTypeNotFound,
    #[error("Database error")]
    Database(#[source] sqlx::Error),
    #[error("Server configuration error")]
    Configuration(&'static str),
    #[error("Failed to process password")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("Failed to issue token")]
    Token(#[source] jsonwebtoken::errors::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        // A racing signup loses to the unique index rather than to the
        // explicit lookup; report it as a duplicate, not a server fault.
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return ApiError::DuplicateUser;
            }
        }
        ApiError::Database(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingToken | ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::InvalidCredentials | ApiError::DuplicateUser | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::UserNotFound | ApiError::HotelNotFound | ApiError::RoomTypeNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::Database(_)
            | ApiError::Configuration(_)
            | ApiError::Hash(_)
            | ApiError::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("internal error: {self:?}");
        }
        // Client-facing message only; source chains stay in the log.
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
