use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub hotel_name: String,
    pub hotel_address: String,
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub check_in_date: chrono::NaiveDate,
    pub check_out_date: chrono::NaiveDate,
    pub num_guests: i64,
    pub room_type: String,
    pub special_requests: Option<String>,
    pub rate: f64,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    #[validate(length(min = 1))]
    pub hotel_name: String,
    #[validate(length(min = 1))]
    pub room_type: String,
    #[validate(range(min = 1))]
    pub num_guests: i64,
    pub check_in_date: chrono::NaiveDate,
    pub check_out_date: chrono::NaiveDate,
    pub special_requests: Option<String>,
}
