//! # Rooms
//!
//! A room is one of two variants. Both carry a number and a nightly price; the
//! variant decides the descriptive attribute shown in reports.

use std::fmt;

pub const SINGLE_DEFAULT_PRICE: u64 = 5000;
pub const DOUBLE_DEFAULT_PRICE: u64 = 8000;

pub const SINGLE_BED_TYPE: &str = "single";
pub const DOUBLE_BEDS_COUNT: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomKind {
    Single,
    Double,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Room {
    Single { room_number: i64, price: u64 },
    Double { room_number: i64, price: u64 },
}

impl Room {
    pub fn single(room_number: i64) -> Self {
        Self::single_with_price(room_number, SINGLE_DEFAULT_PRICE)
    }

    pub fn single_with_price(room_number: i64, price: u64) -> Self {
        Self::Single { room_number, price }
    }

    pub fn double(room_number: i64) -> Self {
        Self::double_with_price(room_number, DOUBLE_DEFAULT_PRICE)
    }

    pub fn double_with_price(room_number: i64, price: u64) -> Self {
        Self::Double { room_number, price }
    }

    pub fn room_number(&self) -> i64 {
        match self {
            Self::Single { room_number, .. } | Self::Double { room_number, .. } => *room_number,
        }
    }

    pub fn price(&self) -> u64 {
        match self {
            Self::Single { price, .. } | Self::Double { price, .. } => *price,
        }
    }

    pub fn kind(&self) -> RoomKind {
        match self {
            Self::Single { .. } => RoomKind::Single,
            Self::Double { .. } => RoomKind::Double,
        }
    }

    /// One-line summary used in booking and hotel reports.
    pub fn info(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Room number: {}, Price: {}, ", self.room_number(), self.price())?;
        match self {
            Self::Single { .. } => write!(f, "Bed type: {SINGLE_BED_TYPE}"),
            Self::Double { .. } => write!(f, "Beds count: {DOUBLE_BEDS_COUNT}"),
        }
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
