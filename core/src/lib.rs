//! # Hotelier Core
//!
//! The booking ledger of a single hotel.
//!
//! * [`room::Room`]: A bookable unit, either a single or a double room.
//! * [`booking::Booking`]: A reservation of one room for one date.
//! * [`hotel::Hotel`]: The aggregate that owns rooms and bookings and enforces the booking rules.
//! * [`seed`]: The startup inventory.

pub mod booking;
pub mod error;
pub mod hotel;
pub mod room;
pub mod seed;

pub use booking::{Booking, BookingId, BookingIdSequence};
pub use error::{HotelError, Result};
pub use hotel::Hotel;
pub use room::{Room, RoomKind};
