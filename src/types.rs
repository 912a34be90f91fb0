//! Core types for parsed addresses

use serde::{Deserialize, Serialize};
use std::fmt;

/// A street address split into its components.
///
/// Built fresh by every [`AddressParser::parse`](crate::AddressParser::parse)
/// call. When `valid` is false the component fields hold whatever the
/// pipeline managed to extract and `normalized_address` is the raw first line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAddress {
    /// First input line, verbatim
    pub raw_address1: String,

    /// Second input line, verbatim
    pub raw_address2: String,

    /// Single-line canonical rendering
    pub normalized_address: String,

    /// House number, or the box number on the PO Box path
    pub house_number: String,

    pub pre_direction: String,

    /// Street name, or the box phrase ("PO BOX", "RR 2 BOX", "HC") on the
    /// PO Box path
    pub street_name: String,

    /// Numeric part of an ordinal street name ("42" for "42ND")
    pub numeric_street_name: String,

    pub post_direction: String,
    pub street_type: String,
    pub unit_type: String,
    pub unit_number: String,

    /// Street portion resolved to a PO Box, Rural Route or Highway Contract
    pub is_po_box: bool,

    /// Both a number and a street were found
    pub valid: bool,
}

impl ParsedAddress {
    pub(crate) fn new(raw_address1: &str, raw_address2: &str) -> Self {
        Self {
            raw_address1: raw_address1.to_string(),
            raw_address2: raw_address2.to_string(),
            ..Self::default()
        }
    }

    /// The component fields rewritten during normalization, in output order.
    ///
    /// Raw input lines and the normalized address are not included.
    pub fn text_fields_mut(&mut self) -> [&mut String; 8] {
        [
            &mut self.house_number,
            &mut self.pre_direction,
            &mut self.street_name,
            &mut self.numeric_street_name,
            &mut self.post_direction,
            &mut self.street_type,
            &mut self.unit_type,
            &mut self.unit_number,
        ]
    }

    /// `(name, value)` pairs for every field, in declaration order
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("raw_address1", self.raw_address1.clone()),
            ("raw_address2", self.raw_address2.clone()),
            ("normalized_address", self.normalized_address.clone()),
            ("house_number", self.house_number.clone()),
            ("pre_direction", self.pre_direction.clone()),
            ("street_name", self.street_name.clone()),
            ("numeric_street_name", self.numeric_street_name.clone()),
            ("post_direction", self.post_direction.clone()),
            ("street_type", self.street_type.clone()),
            ("unit_type", self.unit_type.clone()),
            ("unit_number", self.unit_number.clone()),
            ("is_po_box", self.is_po_box.to_string()),
            ("valid", self.valid.to_string()),
        ]
    }

    /// Unit designator and value joined, e.g. "APT 4B"
    #[must_use]
    pub fn unit(&self) -> String {
        format!("{} {}", self.unit_type, self.unit_number)
            .trim()
            .to_string()
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized_address)
    }
}
