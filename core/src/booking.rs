use std::fmt;
use std::rc::Rc;

use chrono::NaiveDate;
use hotelier_common::date;

use crate::error::{HotelError, Result};
use crate::room::Room;

/// Sequential booking identifier, displayed zero-padded to four digits (`0001`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingId(u32);

impl BookingId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Issues booking ids in strictly increasing order.
///
/// The counter only moves forward: cancelling a booking does not give its id back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingIdSequence {
    next: u32,
}

impl BookingIdSequence {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// The id the next call to [`Self::issue`] will hand out.
    pub fn peek(&self) -> BookingId {
        BookingId(self.next)
    }

    /// Hands out the next id. Fails once the counter cannot advance, so an id is
    /// never issued twice.
    pub fn issue(&mut self) -> Result<BookingId> {
        let following = self
            .next
            .checked_add(1)
            .ok_or(HotelError::IdsExhausted { next: self.next })?;
        let id = BookingId(self.next);
        self.next = following;
        Ok(id)
    }
}

impl Default for BookingIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// A reservation of one room for one date.
///
/// Bookings are created by [`crate::Hotel::book_room`] and never change afterwards.
#[derive(Debug, Clone)]
pub struct Booking {
    id: BookingId,
    room: Rc<Room>,
    booking_date: NaiveDate,
    guest_name: String,
}

impl Booking {
    pub(crate) fn new(
        id: BookingId,
        room: Rc<Room>,
        booking_date: NaiveDate,
        guest_name: String,
    ) -> Self {
        Self {
            id,
            room,
            booking_date,
            guest_name,
        }
    }

    pub fn id(&self) -> BookingId {
        self.id
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn room_number(&self) -> i64 {
        self.room.room_number()
    }

    pub fn booking_date(&self) -> NaiveDate {
        self.booking_date
    }

    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    pub fn info(&self) -> String {
        format!(
            "Booking ID: {}, Booking date: {}, Guest name: {}, {}",
            self.id,
            date::format(self.booking_date),
            self.guest_name,
            self.room.info()
        )
    }

    /// Message shown to the guest right after a successful booking.
    pub fn confirmation(&self) -> String {
        format!(
            "Booking successful! Booking ID: {}, Room number: {}, Date: {}, Guest name: {}",
            self.id,
            self.room_number(),
            date::format(self.booking_date),
            self.guest_name
        )
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
