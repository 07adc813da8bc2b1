pub mod auth;
pub mod bookings;
pub mod feedback;
pub mod hotels;
