pub mod slot;
pub mod week;

pub use slot::{Slot, SlotSet, Weekday};
pub use week::{Booking, DaySlots, Days, FetchedWeeks, Week, WeekSchedule};
