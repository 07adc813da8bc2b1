pub mod booking;
pub mod feedback;
pub mod hotel;
pub mod user;
