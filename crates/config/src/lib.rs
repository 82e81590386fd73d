//! Configuration types for the balance plugin.
//!
//! This crate provides:
//! - The monitored-target type (`LabeledAddress`)
//! - Parsing and validation of the comma-separated `address[:label]` list

pub mod address;

pub use address::{parse_addresses, ConfigError, LabeledAddress};
