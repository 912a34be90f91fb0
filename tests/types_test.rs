use pretty_assertions::assert_eq;
use street_address::{AddressParser, ParsedAddress};

fn suite_address() -> ParsedAddress {
    AddressParser::new()
        .unwrap()
        .parse("350 Fifth Avenue South", "Suite 4")
}

#[test]
fn test_default_is_empty_and_invalid() {
    let address = ParsedAddress::default();

    assert!(!address.valid);
    assert!(!address.is_po_box);
    assert!(address.normalized_address.is_empty());
    assert_eq!(address.unit(), "");
    assert_eq!(address.to_string(), "");
}

#[test]
fn test_display_is_normalized_address() {
    let address = suite_address();
    assert_eq!(address.to_string(), "350 FIFTH AVE S STE 4");
}

#[test]
fn test_unit_joins_type_and_number() {
    let address = suite_address();
    assert_eq!(address.unit(), "STE 4");

    let bare = ParsedAddress {
        unit_number: "12".to_string(),
        ..ParsedAddress::default()
    };
    assert_eq!(bare.unit(), "12");
}

#[test]
fn test_fields_in_declaration_order() {
    let address = suite_address();
    let fields = address.fields();

    let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        vec![
            "raw_address1",
            "raw_address2",
            "normalized_address",
            "house_number",
            "pre_direction",
            "street_name",
            "numeric_street_name",
            "post_direction",
            "street_type",
            "unit_type",
            "unit_number",
            "is_po_box",
            "valid",
        ]
    );
    assert_eq!(fields[1].1, "Suite 4");
    assert_eq!(fields[12].1, "true");
}

#[test]
fn test_text_fields_mut_skips_raw_lines() {
    let mut address = suite_address();

    for field in address.text_fields_mut() {
        field.clear();
    }

    assert_eq!(address.raw_address1, "350 Fifth Avenue South");
    assert_eq!(address.normalized_address, "350 FIFTH AVE S STE 4");
    assert!(address.street_name.is_empty());
    assert!(address.unit_number.is_empty());
}

#[test]
fn test_json_round_trip() {
    let address = suite_address();

    let json = serde_json::to_string(&address).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["street_type"], "AVE");
    assert_eq!(value["is_po_box"], false);

    let back: ParsedAddress = serde_json::from_str(&json).unwrap();
    assert_eq!(back, address);
}
