//! Alpaca REST market-data adapter.
//!
//! Split the way the data flows: [`params`] builds query strings,
//! [`response`] declares the raw wire types and maps them to canonical
//! models, [`resolve`] turns whole payloads into raw entities (one
//! exhaustive decode step per endpoint class), and [`provider`] is the
//! facade tying them to a transport.

pub mod params;
pub mod provider;
pub mod resolve;
pub mod response;
