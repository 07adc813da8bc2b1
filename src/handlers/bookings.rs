use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::models::booking::{Booking, CreateBooking};
use crate::models::hotel::{Hotel, RoomType};
use crate::rate::compute_rate;

pub async fn create_booking(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUser,
    body: web::Json<CreateBooking>,
) -> Result<HttpResponse, ApiError> {
    body.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let hotel = sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE name = ?")
        .bind(&body.hotel_name)
        .fetch_optional(pool.get_ref())
        .await?
        .ok_or(ApiError::HotelNotFound)?;

    let room = sqlx::query_as::<_, RoomType>(
        "SELECT room_type, rate, availability FROM room_types WHERE hotel_id = ? AND room_type = ?",
    )
    .bind(hotel.id)
    .bind(&body.room_type)
    .fetch_optional(pool.get_ref())
    .await?
    .ok_or(ApiError::RoomTypeNotFound)?;

    let rate = compute_rate(&body.room_type, room.rate, body.num_guests)?;

    // Denormalized snapshot: the booking keeps the hotel and user details
    // as they were at booking time.
    sqlx::query(
        r#"
        INSERT INTO bookings (
            hotel_name, hotel_address,
            user_id, user_name, user_email, user_phone,
            check_in_date, check_out_date, num_guests, room_type,
            special_requests, rate
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&body.hotel_name)
    .bind(&hotel.address)
    .bind(user.0.id)
    .bind(&user.0.name)
    .bind(&user.0.email)
    .bind(&user.0.phone)
    .bind(body.check_in_date)
    .bind(body.check_out_date)
    .bind(body.num_guests)
    .bind(&body.room_type)
    .bind(&body.special_requests)
    .bind(rate)
    .execute(pool.get_ref())
    .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Booking saved successfully",
        "rate": rate
    })))
}

pub async fn get_bookings(
    pool: web::Data<SqlitePool>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let bookings =
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE user_id = ? ORDER BY id")
            .bind(user.0.id)
            .fetch_all(pool.get_ref())
            .await?;

    Ok(HttpResponse::Ok().json(bookings))
}
