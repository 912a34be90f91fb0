//! Main address parser implementation
//!
//! Extraction runs as a fixed sequence of stages over one working string.
//! The order is part of the contract: ambiguous inputs resolve differently
//! if it changes.
//!
//! 1. Sanitize the first line (leading "MR"/"MR-", periods)
//! 2. Merge the second line into the working string
//! 3. PO Box / Rural Route / Highway Contract
//! 4. House number, retried once after stripping a leading unit
//! 5. Street: unit, direction prefix, direction suffix, street type
//! 6. Retry once with the two lines swapped
//! 7. Validity, rejected-address log, normalization

use crate::error::Result;
use crate::normalize::normalize;
use crate::patterns::{PatternLibrary, group};
use crate::reject_log::RejectLog;
use crate::tables::CanonicalizationTables;
use crate::types::ParsedAddress;
use std::fmt;
use tracing::{debug, trace, warn};

/// Parses free-form US street addresses.
///
/// Tables and patterns are built once in [`AddressParser::new`] and never
/// change afterwards; every call to [`parse`](Self::parse) works on its own
/// record, so one parser can be shared across threads.
pub struct AddressParser {
    tables: CanonicalizationTables,
    patterns: PatternLibrary,
    reject_log: Option<Box<dyn RejectLog>>,
}

impl AddressParser {
    /// Build the tables and compile every pattern.
    pub fn new() -> Result<Self> {
        let tables = CanonicalizationTables::new()?;
        let patterns = PatternLibrary::new(&tables)?;

        Ok(Self {
            tables,
            patterns,
            reject_log: None,
        })
    }

    /// Send every address that fails to parse to `log`
    #[must_use]
    pub fn with_reject_log(mut self, log: impl RejectLog + 'static) -> Self {
        self.reject_log = Some(Box::new(log));
        self
    }

    /// Canonicalization tables the parser was built with
    #[must_use]
    pub const fn tables(&self) -> &CanonicalizationTables {
        &self.tables
    }

    /// Patterns compiled from [`tables`](Self::tables)
    #[must_use]
    pub const fn patterns(&self) -> &PatternLibrary {
        &self.patterns
    }

    /// Parse a single address line
    #[must_use]
    pub fn parse_line(&self, address1: &str) -> ParsedAddress {
        self.parse(address1, "")
    }

    /// Parse a two-line address.
    ///
    /// Never fails: an address that cannot be split up comes back with
    /// `valid == false` and the first line as its normalized form.
    #[must_use]
    pub fn parse(&self, address1: &str, address2: &str) -> ParsedAddress {
        let mut address = self.extract(
            ParsedAddress::new(address1, address2),
            address1,
            address2,
            address2,
        );

        if !address.valid && !address2.trim().is_empty() {
            trace!("Retrying with address lines swapped: {address2:?} {address1:?}");

            let swapped = self.extract(
                ParsedAddress::new(address1, address2),
                &format!("{address2} {address1}"),
                "",
                "",
            );
            if swapped.valid {
                address = swapped;
            }
        }

        if !address.valid {
            self.log_rejected(&address);
        }

        normalize(&mut address, &self.tables, &self.patterns);

        debug!(
            "Parsed address {:?}: {} (valid: {})",
            address.raw_address1, address.normalized_address, address.valid
        );

        address
    }

    /// Stages 1-5 on one orientation of the input; sets `valid`.
    ///
    /// `secondary` is consulted for a unit number the street did not carry.
    fn extract(
        &self,
        mut address: ParsedAddress,
        line1: &str,
        line2: &str,
        secondary: &str,
    ) -> ParsedAddress {
        let mut working = self.patterns.sanitize.replace_all(line1, "").trim().to_string();

        if !line2.is_empty() {
            working.push(' ');
            working.push_str(line2);
        }
        let mut working = working.trim().to_string();

        if self.take_po_box(&mut address, &mut working) {
            address.valid = !address.street_name.is_empty() && !address.house_number.is_empty();
            return address;
        }

        let number_found = self.take_house_number(&mut address, &mut working);
        let street_found = number_found && self.take_street(&mut address, &working, secondary);

        trace!(
            "Extracted number {:?} (found: {number_found}), street {:?} (found: {street_found})",
            address.house_number, address.street_name
        );

        address.valid = number_found && street_found;
        address
    }

    fn take_po_box(&self, address: &mut ParsedAddress, working: &mut String) -> bool {
        let Some(caps) = self.patterns.po_box.captures(working.as_str()) else {
            return false;
        };

        address.street_name = group(&caps, "street").to_string();
        address.house_number = group(&caps, "number").to_string();
        address.is_po_box = true;

        let end = caps.get(0).map_or(0, |m| m.end());
        let rest = working[end..].trim().to_string();
        *working = rest;

        trace!(
            "Found box {:?} number {:?}",
            address.street_name, address.house_number
        );
        true
    }

    fn take_house_number(&self, address: &mut ParsedAddress, working: &mut String) -> bool {
        if self.take_leading_number(address, working) {
            return true;
        }

        // "APT H 968 MOOTY BRIDGE RD"
        self.take_leading_unit(address, working) && self.take_leading_number(address, working)
    }

    fn take_leading_number(&self, address: &mut ParsedAddress, working: &mut String) -> bool {
        let Some((number, end)) = self.patterns.house_number(working.as_str()) else {
            return false;
        };

        address.house_number = number.to_string();
        let rest = working[end..].trim().to_string();
        *working = rest;
        true
    }

    /// Strip a unit designator and value, or failing that a bare number, from
    /// the start of `text`.
    fn take_leading_unit(&self, address: &mut ParsedAddress, text: &mut String) -> bool {
        let padded = format!("{text} ");

        if let Some(caps) = self.patterns.leading_unit.captures(&padded) {
            address.unit_type = group(&caps, "type").to_string();
            address.unit_number = group(&caps, "number").to_string();
            let end = caps.get(0).map_or(0, |m| m.end());
            *text = padded[end..].trim().to_string();
            return true;
        }

        if let Some(caps) = self.patterns.leading_digits.captures(&padded) {
            address.unit_number = group(&caps, "number").to_string();
            let end = caps.get(0).map_or(0, |m| m.end());
            *text = padded[end..].trim().to_string();
            return true;
        }

        false
    }

    /// Street name, type, directions and unit from the text before the
    /// first comma.
    fn take_street(&self, address: &mut ParsedAddress, working: &str, secondary: &str) -> bool {
        let p = &self.patterns;
        let mut part = working.split(',').next().unwrap_or_default().to_string();

        // anything after the unit is dropped
        if let Some(caps) = p.unit.captures(&part) {
            address.unit_type = group(&caps, "type").to_string();
            address.unit_number = group(&caps, "number").to_string();

            let end = caps.get(0).map_or(part.len(), |m| m.end());
            if part.len() > end + 1 {
                part.truncate(end);
            }
            part = p.unit.replace_all(&part, "").into_owned();
        }

        if address.unit_number.is_empty() && !secondary.is_empty() {
            let mut second = secondary.to_string();
            self.take_leading_unit(address, &mut second);
        }

        if let Some(caps) = p.direction_prefix.captures(&part) {
            let direction = group(&caps, "dir").to_string();
            let end = caps.get(0).map_or(0, |m| m.end());
            part = part[end..].to_string();

            // "North Street": the direction is the name, unless a second
            // street type follows ("4 W Grove Ave")
            if !p.is_highway(&part)
                && let Some(t) = p.type_prefix.captures(&part)
            {
                let end = t.get(0).map_or(0, |m| m.end());
                if !p.type_anywhere.is_match(part[end..].trim()) {
                    address.street_type = group(&t, "type").to_string();
                    address.street_name = direction;
                    return true;
                }
            }

            address.pre_direction = direction;
        }

        self.take_post_direction(address, &mut part);

        let mut street_type = None;
        if let Some(caps) = p.type_suffix.captures(&part) {
            street_type = Some(group(&caps, "type").to_string());
            let start = caps.get(0).map_or(part.len(), |m| m.start());
            part.truncate(start);

            // "... Ave N"
            self.take_post_direction(address, &mut part);
        } else if let Some(caps) = p.type_infix.captures(&part) {
            street_type = Some(group(&caps, "type").to_string());
            let end = caps.get(0).map_or(part.len(), |m| m.end());

            if !p.is_highway(&part) {
                if part.len() > end {
                    part.truncate(end);
                }
                part = p.type_infix.replace_all(&part, " ").into_owned();
                self.take_post_direction(address, &mut part);
            }
        }

        if let Some(street_type) = street_type
            && address.street_type.is_empty()
        {
            address.street_type = street_type;
        }

        address.street_name = drop_stray_initial(part.trim());
        !address.street_name.is_empty()
    }

    fn take_post_direction(&self, address: &mut ParsedAddress, part: &mut String) {
        if let Some(caps) = self.patterns.direction_suffix.captures(part.as_str()) {
            address.post_direction = group(&caps, "dir").to_string();
            let start = caps.get(0).map_or(part.len(), |m| m.start());
            part.truncate(start);
        }
    }

    fn log_rejected(&self, address: &ParsedAddress) {
        if let Some(log) = &self.reject_log
            && let Err(e) = log.record(address)
        {
            warn!(
                "Failed to record rejected address {:?}: {}",
                address.raw_address1, e
            );
        }
    }
}

impl fmt::Debug for AddressParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressParser")
            .field("tables", &self.tables)
            .field("patterns", &self.patterns)
            .field("reject_log", &self.reject_log.is_some())
            .finish()
    }
}

/// "F LONDONDERRY" → "LONDONDERRY"
fn drop_stray_initial(name: &str) -> String {
    let words: Vec<&str> = name.split(' ').collect();

    match words.as_slice() {
        [first, rest @ ..]
            if !rest.is_empty()
                && first.chars().count() == 1
                && !first.starts_with(char::is_numeric) =>
        {
            rest.join(" ").trim().to_string()
        }
        _ => name.to_string(),
    }
}
