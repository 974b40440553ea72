pub mod booking;

pub use crate::domain::model::{Booking, BookingPayload, Delivery};
pub use crate::domain::ports::Notifier;
