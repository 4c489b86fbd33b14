pub mod booking;
pub mod days;
pub mod week;
