use std::sync::{Arc, Mutex};
use street_address::{AddressParser, JsonLinesRejectLog, ParsedAddress, RejectLog, Result};

#[derive(Default)]
struct MemoryLog {
    rejected: Mutex<Vec<ParsedAddress>>,
}

impl RejectLog for MemoryLog {
    fn record(&self, address: &ParsedAddress) -> Result<()> {
        self.rejected.lock().unwrap().push(address.clone());
        Ok(())
    }
}

#[test]
fn test_only_invalid_addresses_are_logged() {
    let log = Arc::new(MemoryLog::default());
    let parser = AddressParser::new().unwrap().with_reject_log(Arc::clone(&log));

    let _ = parser.parse_line("1600 Pennsylvania Ave");
    let _ = parser.parse_line("General Delivery");

    let rejected = log.rejected.lock().unwrap();
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].raw_address1, "General Delivery");
    assert!(!rejected[0].valid);
}

#[test]
fn test_logged_record_is_not_normalized() {
    let log = Arc::new(MemoryLog::default());
    let parser = AddressParser::new().unwrap().with_reject_log(Arc::clone(&log));

    let parsed = parser.parse_line("101ST Street");

    let rejected = log.rejected.lock().unwrap();
    assert!(rejected[0].normalized_address.is_empty());
    assert_eq!(parsed.normalized_address, "101ST Street");
}

#[test]
fn test_json_lines_log_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rejected.jsonl");
    let parser = AddressParser::new()
        .unwrap()
        .with_reject_log(JsonLinesRejectLog::new(&path));

    let _ = parser.parse_line("General Delivery");
    let _ = parser.parse("Acme Corp", "Attn: Billing");
    let _ = parser.parse_line("742 Evergreen Terrace");

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["raw_address1"], "General Delivery");
    assert_eq!(first["valid"], false);
    assert!(first["logged_at"].is_string());

    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["raw_address2"], "Attn: Billing");
}

#[test]
fn test_log_failure_does_not_change_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("rejected.jsonl");
    let parser = AddressParser::new()
        .unwrap()
        .with_reject_log(JsonLinesRejectLog::new(&path));

    let address = parser.parse_line("General Delivery");

    assert!(!address.valid);
    assert_eq!(address.normalized_address, "General Delivery");
    assert!(!path.exists());
}

#[test]
fn test_json_lines_log_path() {
    let log = JsonLinesRejectLog::new("/tmp/rejected.jsonl");
    assert_eq!(log.path().to_str(), Some("/tmp/rejected.jsonl"));
}
