use chrono::NaiveDate;
use thiserror::Error;

/// Rejections raised by [`crate::Hotel`] operations.
///
/// A failed operation never mutates the hotel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotelError {
    /// The requested date is today or earlier.
    #[error("The booking date must be in the future.")]
    InvalidDate { date: NaiveDate, today: NaiveDate },

    /// The room already has a booking on that exact date.
    #[error("This room is already booked for this date.")]
    DuplicateBooking { room_number: i64, date: NaiveDate },

    #[error("No room found with this room number in the hotel.")]
    RoomNotFound(i64),

    #[error("No booking found with this ID.")]
    BookingNotFound(String),

    /// The id counter cannot advance past `next`, so no further id can be issued.
    #[error("The booking ID counter is exhausted at {next}.")]
    IdsExhausted { next: u32 },

    #[error("Date {from} plus {days} days is out of range.")]
    DateOutOfRange { from: NaiveDate, days: u64 },
}

pub type Result<T> = std::result::Result<T, HotelError>;
