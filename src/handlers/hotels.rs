use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::error::ApiError;
use crate::models::hotel::{CreateReview, Hotel, HotelDetails, Review, RoomType};

async fn load_details(pool: &SqlitePool, hotel: Hotel) -> Result<HotelDetails, ApiError> {
    let room_types = sqlx::query_as::<_, RoomType>(
        "SELECT room_type, rate, availability FROM room_types WHERE hotel_id = ? ORDER BY id",
    )
    .bind(hotel.id)
    .fetch_all(pool)
    .await?;

    let reviews = sqlx::query_as::<_, Review>(
        "SELECT reviewer, comment, rating FROM reviews WHERE hotel_id = ? ORDER BY id",
    )
    .bind(hotel.id)
    .fetch_all(pool)
    .await?;

    let images: Vec<String> =
        sqlx::query_scalar("SELECT url FROM hotel_images WHERE hotel_id = ? ORDER BY id")
            .bind(hotel.id)
            .fetch_all(pool)
            .await?;

    Ok(HotelDetails {
        id: hotel.id,
        name: hotel.name,
        address: hotel.address,
        room_types,
        rating: hotel.rating,
        reviews,
        vacancy: hotel.vacancy,
        images,
    })
}

pub async fn get_hotels(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let hotels = sqlx::query_as::<_, Hotel>("SELECT * FROM hotels ORDER BY id")
        .fetch_all(pool.get_ref())
        .await?;

    let mut details = Vec::with_capacity(hotels.len());
    for hotel in hotels {
        details.push(load_details(pool.get_ref(), hotel).await?);
    }

    Ok(HttpResponse::Ok().json(details))
}

pub async fn get_hotel_by_id(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let hotel = sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = ?")
        .bind(id)
        .fetch_optional(pool.get_ref())
        .await?
        .ok_or(ApiError::HotelNotFound)?;

    let details = load_details(pool.get_ref(), hotel).await?;
    Ok(HttpResponse::Ok().json(details))
}

pub async fn add_review(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<CreateReview>,
) -> Result<HttpResponse, ApiError> {
    body.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let hotel_id = path.into_inner();

    sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = ?")
        .bind(hotel_id)
        .fetch_optional(pool.get_ref())
        .await?
        .ok_or(ApiError::HotelNotFound)?;

    sqlx::query("INSERT INTO reviews (hotel_id, reviewer, comment, rating) VALUES (?, ?, ?, ?)")
        .bind(hotel_id)
        .bind(&body.reviewer)
        .bind(&body.comment)
        .bind(body.rating)
        .execute(pool.get_ref())
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Review added",
        "review": {
            "reviewer": body.reviewer,
            "comment": body.comment,
            "rating": body.rating
        }
    })))
}
