use street_address::*;

// --- Numeric street names ---

#[test]
fn test_is_numeric_street_name() {
    assert!(is_numeric_street_name("42ND"));
    assert!(is_numeric_street_name("4th"));
    assert!(is_numeric_street_name("101"));
    assert!(!is_numeric_street_name("MAIN"));
    assert!(!is_numeric_street_name("FIFTH"));
}

#[test]
fn test_extract_numeric_street_name() {
    assert_eq!(extract_numeric_street_name("42ND"), "42");
    assert_eq!(extract_numeric_street_name("1st"), "1");
    assert_eq!(extract_numeric_street_name("23RD"), "23");
    assert_eq!(extract_numeric_street_name("101"), "101");
}

#[test]
fn test_extract_numeric_street_name_leaves_words() {
    assert_eq!(extract_numeric_street_name("MAIN"), "MAIN");
    assert_eq!(extract_numeric_street_name("WEST"), "WEST");
}

// --- New York City ---

#[test]
fn test_is_new_york_city() {
    assert!(is_new_york_city("NYC"));
    assert!(is_new_york_city("N.Y.C."));
    assert!(is_new_york_city("New York"));
    assert!(is_new_york_city("new york city"));
    assert!(is_new_york_city("New York, NY"));
    assert!(is_new_york_city("Brooklyn NYC"));
}

#[test]
fn test_is_not_new_york_city() {
    assert!(!is_new_york_city("Newark"));
    assert!(!is_new_york_city("York"));
    assert!(!is_new_york_city("New Jersey"));
    assert!(!is_new_york_city(""));
}

// --- ZIP codes ---

#[test]
fn test_parse_zip_code_plus_four() {
    assert_eq!(
        parse_zip_code("95472-1234"),
        ("95472".to_string(), "1234".to_string())
    );
}

#[test]
fn test_parse_zip_code_five_digits() {
    assert_eq!(parse_zip_code("20500"), ("20500".to_string(), String::new()));
}

#[test]
fn test_parse_zip_code_short_and_noisy() {
    assert_eq!(parse_zip_code(" 0 21 "), ("021".to_string(), String::new()));
    assert_eq!(parse_zip_code(""), (String::new(), String::new()));
    assert_eq!(
        parse_zip_code("ZIP: 10001 0002"),
        ("10001".to_string(), "0002".to_string())
    );
}
