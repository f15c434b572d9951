//! # Startup Inventory
//!
//! Rooms 101-103 are single rooms and 201-203 are double rooms. Five of them start
//! with a booking, dated on the days following the hotel's "today" so the regular
//! booking rules accept them.

use chrono::Days;
use tracing::info;

use crate::error::{HotelError, Result};
use crate::hotel::Hotel;
use crate::room::Room;

pub const SINGLE_ROOMS: std::ops::RangeInclusive<i64> = 101..=103;
pub const DOUBLE_ROOMS: std::ops::RangeInclusive<i64> = 201..=203;

/// `(room number, days after today, guest)`
pub const INITIAL_BOOKINGS: [(i64, u64, &str); 5] = [
    (101, 1, "John Doe"),
    (102, 2, "Jane Smith"),
    (103, 3, "Alice Johnson"),
    (201, 4, "Robert Brown"),
    (202, 5, "Emily Davis"),
];

/// Adds the sample rooms and bookings.
///
/// Seed dates are computed before anything is added, so a clock too close to the end
/// of the calendar leaves the hotel untouched.
pub fn populate(hotel: &mut Hotel) -> Result<()> {
    let today = hotel.today();
    let bookings = INITIAL_BOOKINGS
        .iter()
        .map(|&(room_number, days, guest_name)| {
            today
                .checked_add_days(Days::new(days))
                .map(|booking_date| (room_number, booking_date, guest_name))
                .ok_or(HotelError::DateOutOfRange { from: today, days })
        })
        .collect::<Result<Vec<_>>>()?;

    for room_number in SINGLE_ROOMS {
        hotel.add_room(Room::single(room_number));
    }
    for room_number in DOUBLE_ROOMS {
        hotel.add_room(Room::double(room_number));
    }

    for (room_number, booking_date, guest_name) in bookings {
        hotel.book_room(room_number, booking_date, guest_name)?;
    }

    info!(
        "Seeded {} with {} rooms and {} bookings",
        hotel.name(),
        hotel.rooms().len(),
        hotel.bookings().len()
    );
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
