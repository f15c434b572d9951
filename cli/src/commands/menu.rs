//! # Interactive Menu
//!
//! Reads a numbered choice, prompts for the arguments of the chosen operation, calls
//! the [`Hotel`] and prints the outcome. Failures are printed as `Error: <message>`
//! and the menu is shown again. The loop ends on choice 5 or when input is closed.

use std::io::{self, BufRead, Write};
use std::num::ParseIntError;

use chrono::NaiveDate;
use hotelier_common::date;
use hotelier_core::{Hotel, HotelError};
use thiserror::Error;
use tracing::debug;

use crate::terminal::print;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid room number '{input}': {source}")]
    RoomNumber {
        input: String,
        source: ParseIntError,
    },
    #[error("invalid date '{input}', expected dd-mm-yyyy: {source}")]
    Date {
        input: String,
        source: chrono::ParseError,
    },
}

#[derive(Debug, Error)]
pub enum MenuError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Hotel(#[from] HotelError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("input closed")]
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Book,
    Cancel,
    List,
    Info,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Book,
        MenuChoice::Cancel,
        MenuChoice::List,
        MenuChoice::Info,
        MenuChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Book => "Book a room",
            MenuChoice::Cancel => "Cancel a booking",
            MenuChoice::List => "List all bookings",
            MenuChoice::Info => "Hotel information",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(MenuChoice::Book),
            "2" => Some(MenuChoice::Cancel),
            "3" => Some(MenuChoice::List),
            "4" => Some(MenuChoice::Info),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<'h, R, W> {
    hotel: &'h mut Hotel,
    input: R,
    output: W,
}

impl<'h, R: BufRead, W: Write> Menu<'h, R, W> {
    pub fn new(hotel: &'h mut Hotel, input: R, output: W) -> Self {
        Self {
            hotel,
            input,
            output,
        }
    }

    /// Runs until the user exits or input ends. Only I/O failures escape the loop.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(MenuError::EndOfInput) => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                Err(MenuError::Io(e)) => return Err(e),
                Err(e) => {
                    debug!("Menu operation failed: {e:?}");
                    print::error(&mut self.output, &e)?;
                }
            }
        }
    }

    fn step(&mut self) -> Result<Flow, MenuError> {
        self.show_menu()?;
        let choice = self.read_line("Choose an option (1-5): ")?;

        match MenuChoice::parse(&choice) {
            Some(MenuChoice::Book) => self.book()?,
            Some(MenuChoice::Cancel) => self.cancel()?,
            Some(MenuChoice::List) => {
                writeln!(self.output, "List of bookings:")?;
                writeln!(self.output, "{}", self.hotel.list_bookings())?;
            }
            Some(MenuChoice::Info) => writeln!(self.output, "{}", self.hotel.info())?,
            Some(MenuChoice::Exit) => return Ok(Flow::Exit),
            None => writeln!(self.output, "Invalid choice, please try again.")?,
        }

        Ok(Flow::Continue)
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        print::header(&mut self.output, "hotel menu")?;
        for (idx, choice) in MenuChoice::ALL.iter().enumerate() {
            print::menu_entry(&mut self.output, idx + 1, choice.label())?;
        }
        Ok(())
    }

    fn book(&mut self) -> Result<(), MenuError> {
        let room_number = parse_room_number(&self.read_line("Enter room number: ")?)?;
        let booking_date = parse_date(&self.read_line("Enter date (dd-mm-yyyy): ")?)?;
        let guest_name = self.read_line("Enter guest name: ")?;

        let confirmation = self
            .hotel
            .book_room(room_number, booking_date, guest_name)?
            .confirmation();
        writeln!(self.output, "{confirmation}")?;
        Ok(())
    }

    fn cancel(&mut self) -> Result<(), MenuError> {
        let booking_id = self.read_line("Enter booking ID: ")?;
        let message = self.hotel.cancel_booking(&booking_id)?;
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Prompts and reads one line without its line ending.
    fn read_line(&mut self, msg: &str) -> Result<String, MenuError> {
        print::prompt(&mut self.output, msg)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

pub fn parse_room_number(input: &str) -> Result<i64, InputError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|source| InputError::RoomNumber {
            input: input.to_string(),
            source,
        })
}

pub fn parse_date(input: &str) -> Result<NaiveDate, InputError> {
    date::parse(input).map_err(|source| InputError::Date {
        input: input.to_string(),
        source,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use hotelier_common::clock::FixedClock;
    use hotelier_core::Room;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 3, 10).unwrap()
    }

    fn hotel() -> Hotel {
        let mut hotel = Hotel::with_clock("Menu Hotel", Box::new(FixedClock(today())));
        hotel.add_room(Room::single(101));
        hotel.add_room(Room::double(201));
        hotel
    }

    fn run_script(hotel: &mut Hotel, script: &str) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        Menu::new(hotel, script.as_bytes(), &mut output).run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_lists_all_options() {
        let output = run_script(&mut hotel(), "5\n");

        assert!(output.contains("1. Book a room"));
        assert!(output.contains("2. Cancel a booking"));
        assert!(output.contains("3. List all bookings"));
        assert!(output.contains("4. Hotel information"));
        assert!(output.contains("5. Exit"));
        assert!(output.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_book_then_list() {
        let mut hotel = hotel();
        let output = run_script(&mut hotel, "1\n101\n11-03-2030\nAda Lovelace\n3\n5\n");

        assert!(output.contains(
            "Booking successful! Booking ID: 0001, Room number: 101, Date: 11-03-2030, \
             Guest name: Ada Lovelace"
        ));
        assert!(output.contains("List of bookings:\nBooking ID: 0001"));
        assert_eq!(hotel.bookings().len(), 1);
    }

    #[test]
    fn test_domain_errors_are_printed_and_loop_continues() {
        let mut hotel = hotel();
        let output = run_script(
            &mut hotel,
            "1\n101\n10-03-2030\nA\n1\n999\n12-03-2030\nA\n2\n0042\n3\n5\n",
        );

        assert!(output.contains("Error: The booking date must be in the future."));
        assert!(output.contains("Error: No room found with this room number in the hotel."));
        assert!(output.contains("Error: No booking found with this ID."));
        assert!(output.contains("No bookings found."));
        assert!(hotel.bookings().is_empty());
    }

    #[test]
    fn test_parse_failures_stop_the_operation() {
        let mut hotel = hotel();
        // The bad room number aborts before the date prompt.
        let output = run_script(&mut hotel, "1\nabc\n1\n101\n2030-03-12\n5\n");

        assert!(output.contains("Error: invalid room number 'abc'"));
        assert!(output.contains("Error: invalid date '2030-03-12'"));
        assert_eq!(output.matches("Enter date (dd-mm-yyyy): ").count(), 1);
        assert!(hotel.bookings().is_empty());
    }

    #[test]
    fn test_negative_room_number_reaches_room_lookup() {
        let mut hotel = hotel();
        let output = run_script(&mut hotel, "1\n-1\n12-03-2030\nA\n5\n");

        assert!(output.contains("Error: No room found with this room number in the hotel."));
        assert!(!output.contains("invalid room number"));
        assert!(hotel.bookings().is_empty());
    }

    #[test]
    fn test_cancel_booking() {
        let mut hotel = hotel();
        let output = run_script(&mut hotel, "1\n201\n15-03-2030\nB\n2\n0001\n5\n");

        assert!(output.contains("Booking 0001 for date 15-03-2030 has been successfully cancelled."));
        assert!(hotel.bookings().is_empty());
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let output = run_script(&mut hotel(), "9\n\n5\n");

        assert_eq!(output.matches("Invalid choice, please try again.").count(), 2);
        assert_eq!(output.matches("Choose an option (1-5): ").count(), 3);
    }

    #[test]
    fn test_hotel_information() {
        let output = run_script(&mut hotel(), "4\n5\n");

        assert!(output.contains("Hotel name: Menu Hotel\nNumber of rooms: 2"));
        assert!(output.contains("Room number: 201, Price: 8000, Beds count: 2"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let output = run_script(&mut hotel(), "1\n101\n");
        assert!(output.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_room_number(" 101 ").unwrap(), 101);
        assert_eq!(parse_room_number("-1").unwrap(), -1);
        assert!(matches!(
            parse_room_number("1.5"),
            Err(InputError::RoomNumber { .. })
        ));
        assert_eq!(
            parse_date("01-12-2030").unwrap(),
            NaiveDate::from_ymd_opt(2030, 12, 1).unwrap()
        );
        assert!(matches!(parse_date("1/12/2030"), Err(InputError::Date { .. })));
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Book));
        assert_eq!(MenuChoice::parse(" 5 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("book"), None);
    }
}
