pub mod booking;
pub mod week;
