//! # Tidyslot Core
//!
//! Domain types for the weekly cleaning-booking schedule: bookings, weeks,
//! the Monday-to-Friday slot grid, and the date arithmetic used to lay a week
//! out on a calendar. This crate performs no I/O.

pub mod calendar;
pub mod errors;
pub mod grid;
pub mod models;
