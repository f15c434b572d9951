//! # Hotel Aggregate
//!
//! Owns the room inventory and the list of active bookings. Every booking rule is
//! enforced here:
//!
//! * A booking date must be strictly after today.
//! * A room can be booked at most once per date.
//! * A booking must reference a room of this hotel.
//!
//! Collections keep insertion order and lookups return the first match. Room numbers
//! are not required to be unique.

use std::rc::Rc;

use chrono::NaiveDate;
use hotelier_common::clock::{Clock, SystemClock};
use hotelier_common::date;
use tracing::{debug, info, warn};

use crate::booking::{Booking, BookingIdSequence};
use crate::error::{HotelError, Result};
use crate::room::Room;

pub struct Hotel {
    name: String,
    rooms: Vec<Rc<Room>>,
    bookings: Vec<Booking>,
    sequence: BookingIdSequence,
    clock: Box<dyn Clock>,
}

impl Hotel {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_clock(name, Box::new(SystemClock))
    }

    pub fn with_clock(name: impl Into<String>, clock: Box<dyn Clock>) -> Self {
        Self::with_parts(name, clock, BookingIdSequence::new())
    }

    pub fn with_parts(
        name: impl Into<String>,
        clock: Box<dyn Clock>,
        sequence: BookingIdSequence,
    ) -> Self {
        Self {
            name: name.into(),
            rooms: Vec::new(),
            bookings: Vec::new(),
            sequence,
            clock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rooms(&self) -> impl ExactSizeIterator<Item = &Room> {
        self.rooms.iter().map(Rc::as_ref)
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn find_room(&self, room_number: i64) -> Option<&Room> {
        self.find_room_rc(room_number).map(Rc::as_ref)
    }

    pub fn find_booking(&self, booking_id: &str) -> Option<&Booking> {
        self.bookings
            .iter()
            .find(|booking| booking.id().to_string() == booking_id)
    }

    pub fn add_room(&mut self, room: Room) {
        debug!("Added room {} to {}", room.room_number(), self.name);
        self.rooms.push(Rc::new(room));
    }

    /// Books `room_number` for `booking_date`.
    ///
    /// Checks run in order and the first failure is returned: the date must be in the
    /// future, the room must be free on that date, and the room must exist.
    pub fn book_room(
        &mut self,
        room_number: i64,
        booking_date: NaiveDate,
        guest_name: impl Into<String>,
    ) -> Result<&Booking> {
        let room = self
            .validate_booking(room_number, booking_date)
            .inspect_err(|e| warn!("Rejected booking of room {room_number}: {e}"))?;

        let id = self
            .sequence
            .issue()
            .inspect_err(|e| warn!("Rejected booking of room {room_number}: {e}"))?;
        let booking = Booking::new(id, room, booking_date, guest_name.into());
        info!(
            "Booked room {room_number} for {} as {id}",
            date::format(booking_date)
        );

        self.bookings.push(booking);
        Ok(&self.bookings[self.bookings.len() - 1])
    }

    /// Removes the first booking whose id renders as `booking_id` (e.g. `"0001"`).
    ///
    /// Bookings dated in the past can still be cancelled.
    pub fn cancel_booking(&mut self, booking_id: &str) -> Result<String> {
        let Some(index) = self
            .bookings
            .iter()
            .position(|booking| booking.id().to_string() == booking_id)
        else {
            warn!("Cancellation of unknown booking '{booking_id}'");
            return Err(HotelError::BookingNotFound(booking_id.to_string()));
        };

        let booking = self.bookings.remove(index);
        info!("Cancelled booking {}", booking.id());

        Ok(format!(
            "Booking {} for date {} has been successfully cancelled.",
            booking.id(),
            date::format(booking.booking_date())
        ))
    }

    pub fn list_bookings(&self) -> String {
        if self.bookings.is_empty() {
            return String::from("No bookings found.");
        }
        self.bookings_info()
    }

    /// Full report: name, room count, every room and every booking.
    pub fn info(&self) -> String {
        let rooms_info = self
            .rooms
            .iter()
            .map(|room| room.info())
            .collect::<Vec<String>>()
            .join("\n");

        format!(
            "Hotel name: {}\nNumber of rooms: {}\n\nRooms:\n{}\n\nBookings:\n{}",
            self.name,
            self.rooms.len(),
            rooms_info,
            self.bookings_info()
        )
    }

    fn bookings_info(&self) -> String {
        self.bookings
            .iter()
            .map(Booking::info)
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn find_room_rc(&self, room_number: i64) -> Option<&Rc<Room>> {
        self.rooms
            .iter()
            .find(|room| room.room_number() == room_number)
    }

    fn validate_booking(&self, room_number: i64, booking_date: NaiveDate) -> Result<Rc<Room>> {
        let today = self.today();
        if booking_date <= today {
            return Err(HotelError::InvalidDate {
                date: booking_date,
                today,
            });
        }

        let taken = self.bookings.iter().any(|booking| {
            booking.room_number() == room_number && booking.booking_date() == booking_date
        });
        if taken {
            return Err(HotelError::DuplicateBooking {
                room_number,
                date: booking_date,
            });
        }

        self.find_room_rc(room_number)
            .cloned()
            .ok_or(HotelError::RoomNotFound(room_number))
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
