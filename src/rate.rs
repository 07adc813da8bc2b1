use crate::error::ApiError;

/// Guests-per-room divisor for a room type. Unknown types (e.g. Suite)
/// fall back to the largest room size.
fn divisor(room_type: &str) -> i64 {
    match room_type {
        "Standard" => 2,
        "Deluxe" => 3,
        _ => 5,
    }
}

/// Total rate for a booking: the number of rooms needed to fit the guests
/// (rounded up) times the per-room rate.
pub fn compute_rate(room_type: &str, rate: f64, num_guests: i64) -> Result<f64, ApiError> {
    if num_guests <= 0 {
        return Err(ApiError::Validation(
            "Number of guests must be positive".to_string(),
        ));
    }
    let d = divisor(room_type);
    let rooms = (num_guests + d - 1) / d;
    Ok(rooms as f64 * rate)
}
