use chrono::{Days, NaiveDate};
use hotelier_common::clock::FixedClock;
use hotelier_core::{BookingIdSequence, Hotel, HotelError, Room, seed};

/// Walks the whole lifecycle of a booking against the real system clock.
#[test]
fn book_duplicate_cancel_roundtrip() {
    let mut hotel = Hotel::new("T");
    hotel.add_room(Room::single(101));
    // One reading of the hotel's clock for the whole scenario
    let tomorrow = hotel.today().succ_opt().unwrap();

    let id = hotel.book_room(101, tomorrow, "A").unwrap().id();
    assert_eq!(id.to_string(), "0001");

    let err = hotel.book_room(101, tomorrow, "B").unwrap_err();
    assert!(
        matches!(err, HotelError::DuplicateBooking { room_number: 101, .. }),
        "Unexpected error: {err:?}"
    );
    assert_eq!(hotel.bookings().len(), 1);

    let message = hotel.cancel_booking("0001").unwrap();
    assert!(message.contains("0001"), "Message without id: {message}");

    assert_eq!(hotel.list_bookings(), "No bookings found.");
}

#[test]
fn ids_keep_growing_across_cancellations() {
    let today = NaiveDate::from_ymd_opt(2032, 2, 28).unwrap();
    let mut hotel = Hotel::with_clock("Ids", Box::new(FixedClock(today)));
    hotel.add_room(Room::double(201));

    let mut issued = Vec::new();
    for day in 1..=4u64 {
        let date = today.checked_add_days(Days::new(day)).unwrap();
        let id = hotel.book_room(201, date, "Guest").unwrap().id();
        issued.push(id);

        // Free every other booking right away
        if day % 2 == 0 {
            hotel.cancel_booking(&id.to_string()).unwrap();
        }
    }

    let date = today.checked_add_days(Days::new(2)).unwrap();
    let rebooked = hotel.book_room(201, date, "Late guest").unwrap().id();

    assert!(issued.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(issued.iter().all(|id| *id < rebooked));
    assert_eq!(rebooked.to_string(), "0005");
    assert_eq!(hotel.bookings().len(), 3);
}

#[test]
fn past_or_present_dates_leave_bookings_untouched() {
    let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
    let mut hotel = Hotel::with_clock("Dates", Box::new(FixedClock(today)));
    seed::populate(&mut hotel).unwrap();
    let before = hotel.bookings().len();

    let past = [
        today,
        today.pred_opt().unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    ];
    for date in past {
        let err = hotel.book_room(203, date, "Nobody").unwrap_err();
        assert!(matches!(err, HotelError::InvalidDate { .. }));
        assert_eq!(hotel.bookings().len(), before);
    }
}

#[test]
fn seeded_hotel_matches_startup_inventory() {
    let today = NaiveDate::from_ymd_opt(2030, 12, 30).unwrap();
    let mut hotel = Hotel::with_clock("Sample Hotel", Box::new(FixedClock(today)));
    seed::populate(&mut hotel).unwrap();

    let info = hotel.info();
    assert!(info.starts_with("Hotel name: Sample Hotel\nNumber of rooms: 6\n\nRooms:\n"));
    assert!(info.contains("Room number: 103, Price: 5000, Bed type: single"));
    assert!(info.contains("Room number: 203, Price: 8000, Beds count: 2"));

    // Seed dates roll over the year boundary
    let emily = hotel.find_booking("0005").unwrap();
    assert_eq!(emily.guest_name(), "Emily Davis");
    assert_eq!(emily.booking_date(), NaiveDate::from_ymd_opt(2031, 1, 4).unwrap());

    // The seed consumed ids 0001-0005
    let next = hotel
        .book_room(203, today.succ_opt().unwrap(), "Walk-in")
        .unwrap()
        .id();
    assert_eq!(next.to_string(), "0006");
}

#[test]
fn injected_sequence_is_deterministic() {
    let today = NaiveDate::from_ymd_opt(2030, 5, 5).unwrap();
    let tomorrow = today.succ_opt().unwrap();

    let build = || {
        let mut hotel = Hotel::with_parts(
            "Twin",
            Box::new(FixedClock(today)),
            BookingIdSequence::starting_at(100),
        );
        hotel.add_room(Room::single(1));
        hotel.book_room(1, tomorrow, "A").unwrap().info()
    };

    assert_eq!(build(), build());
    assert!(build().starts_with("Booking ID: 0100"));
}
