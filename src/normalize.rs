//! Canonical forms and the single-line rendering of a parsed address

use crate::helpers::{extract_numeric_street_name, is_numeric_street_name};
use crate::patterns::PatternLibrary;
use crate::tables::CanonicalizationTables;
use crate::types::ParsedAddress;

/// Rewrite every component into canonical, uppercase form and build the
/// normalized address. `valid` must already be set.
pub fn normalize(
    address: &mut ParsedAddress,
    tables: &CanonicalizationTables,
    patterns: &PatternLibrary,
) {
    address.street_type = tables
        .canonical_street_type(&address.street_type)
        .to_string();
    address.pre_direction = normalize_direction(tables, &address.pre_direction);
    address.post_direction = normalize_direction(tables, &address.post_direction);
    address.unit_type = tables
        .canonical_unit_type(address.unit_type.trim())
        .to_string();

    if address.is_po_box {
        address.street_name = normalize_box(patterns, &address.street_name);
    } else if is_numeric_street_name(&address.street_name) {
        address.numeric_street_name = extract_numeric_street_name(&address.street_name);
    }

    for field in address.text_fields_mut() {
        *field = field.trim().to_uppercase();
    }

    address.normalized_address = render(address, patterns);
}

fn normalize_direction(tables: &CanonicalizationTables, direction: &str) -> String {
    let bare = direction.replace('.', "");
    tables.canonical_direction(&bare).to_string()
}

/// Canonical names for the box family; rural routes are checked first, then
/// highway contracts, then plain PO boxes.
fn normalize_box(patterns: &PatternLibrary, street: &str) -> String {
    if patterns.rural_route.is_match(street) {
        patterns
            .rural_route_prefix
            .replace(street, "RR")
            .into_owned()
    } else if patterns.highway_contract.is_match(street) {
        let hc = patterns.highway_contract.replace(street, "HC");
        patterns.box_word.replace_all(&hc, "").into_owned()
    } else if patterns.post_office.is_match(street) {
        patterns
            .post_office
            .replace(street, "PO BOX")
            .into_owned()
    } else {
        street.to_string()
    }
}

fn render(address: &ParsedAddress, patterns: &PatternLibrary) -> String {
    if !address.valid {
        return address.raw_address1.clone();
    }

    if address.is_po_box {
        return collapse(&[&address.street_name, &address.house_number]);
    }

    let unit = address.unit();

    // highway names carry their own designator, so the type is left out
    if patterns.is_highway(&address.street_name) {
        collapse(&[
            &address.house_number,
            &address.pre_direction,
            &address.street_name,
            &address.post_direction,
            &unit,
        ])
    } else {
        collapse(&[
            &address.house_number,
            &address.pre_direction,
            &address.street_name,
            &address.street_type,
            &address.post_direction,
            &unit,
        ])
    }
}

fn collapse(parts: &[&str]) -> String {
    parts
        .iter()
        .flat_map(|p| p.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}
