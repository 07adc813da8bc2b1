use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub rating: f64,
    pub vacancy: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct RoomType {
    #[serde(rename = "type")]
    pub room_type: String,
    pub rate: f64,
    pub availability: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Review {
    pub reviewer: String,
    pub comment: String,
    pub rating: f64,
}

/// A hotel with its room types, reviews and images attached, as the hotel
/// endpoints return it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelDetails {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub room_types: Vec<RoomType>,
    pub rating: f64,
    pub reviews: Vec<Review>,
    pub vacancy: bool,
    pub images: Vec<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateReview {
    #[validate(length(min = 1))]
    pub reviewer: String,
    #[validate(length(min = 1))]
    pub comment: String,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
}
