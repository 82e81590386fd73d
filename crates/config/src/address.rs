//! Monitored address list parsing.
//!
//! The `-addresses` flag value is a comma-separated list of
//! `address[:label]` entries, e.g.
//! `0xAb58...:hot-wallet,0xcd12...`.

use alloy_primitives::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Entry whose address segment is not a well-formed account address
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// One monitored target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledAddress {
    /// Lowercased hex form of the address, used as the metric key
    pub name: String,
    /// Canonical 20-byte form, used for the balance query
    pub address: Address,
    /// Display label for graphing; defaults to `name`
    pub label: String,
}

/// Parse a comma-separated `address[:label]` list into monitored targets.
///
/// Entries are kept in input order. Each address segment must be a
/// 40-digit hex address with optional `0x` prefix (case-insensitive);
/// it is lowercased verbatim to form the metric key. Nothing is trimmed
/// or deduplicated.
pub fn parse_addresses(addresses: &str) -> Result<Vec<LabeledAddress>, ConfigError> {
    addresses.split(',').map(parse_entry).collect()
}

fn parse_entry(entry: &str) -> Result<LabeledAddress, ConfigError> {
    let segments: Vec<&str> = entry.split(':').collect();
    let raw = segments[0];

    let address: Address = raw
        .parse()
        .map_err(|_| ConfigError::InvalidAddress(raw.to_string()))?;
    let name = raw.to_ascii_lowercase();

    // A label applies only to a plain `address:label` entry; an entry
    // with further colons falls back to the default.
    let label = if segments.len() == 2 {
        segments[1].to_string()
    } else {
        name.clone()
    };

    Ok(LabeledAddress {
        name,
        address,
        label,
    })
}
