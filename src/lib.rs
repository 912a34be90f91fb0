// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! US Street Address Parser
//!
//! Splits free-form, often messy, US postal address lines into house number,
//! directions, street name, street type and unit, and renders a canonical
//! single-line form.
//!
//! # Features
//!
//! - PO Box, Rural Route and Highway Contract detection
//! - Leading unit designators ("APT H 968 MOOTY BRIDGE RD")
//! - Direction words used as street names ("North Street")
//! - Retry with swapped lines when the address lines are reversed
//! - USPS abbreviations for street types, directions and unit types
//! - Optional log of addresses that failed to parse
//!
//! # Example
//!
//! ```rust
//! use street_address::AddressParser;
//!
//! let parser = AddressParser::new().unwrap();
//! let address = parser.parse("1600 Pennsylvania Ave, Washington, DC", "");
//!
//! assert!(address.valid);
//! assert_eq!(address.house_number, "1600");
//! assert_eq!(address.street_name, "PENNSYLVANIA");
//! assert_eq!(address.street_type, "AVE");
//! println!("Normalized: {}", address.normalized_address);
//! ```

mod error;
mod helpers;
mod normalize;
mod parser;
mod patterns;
mod reject_log;
mod tables;
mod types;

pub use error::{AddressError, Result};
pub use helpers::*;
pub use parser::AddressParser;
pub use patterns::{PatternLibrary, precedence};
pub use reject_log::{JsonLinesRejectLog, RejectLog, RejectedAddress};
pub use tables::{CanonicalizationTables, DIRECTIONS, STREET_TYPES, UNIT_TYPES};
pub use types::*;
