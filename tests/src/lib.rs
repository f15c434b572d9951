//! Cross-crate scenarios for the booking ledger.
#![cfg(test)]

mod ledger;
