//! # Hotelier Common
//!
//! Types shared by every crate in the workspace.
//!
//! * **[`config`]**: Runtime configuration assembled from the command line.
//! * **[`clock`]**: The port that tells the ledger what "today" is.
//! * **[`date`]**: Parsing and rendering of `dd-mm-yyyy` booking dates.

pub mod clock;
pub mod config;
pub mod date;
