//! Integration tests for the record model against realistic payloads.

use eoxide_core::Record;

#[test]
fn test_parse_eox_record_list() {
    let json = r#"[
        {
            "EOLProductID": "WS-C3750X-48PF-S",
            "ProductIDDescription": "Catalyst 3750X 48 Port Full PoE IP Base",
            "EndOfSaleDate": {"value": "2016-10-30", "dateFormat": "YYYY-MM-DD"},
            "LastDateOfSupport": {"value": "2021-10-31", "dateFormat": "YYYY-MM-DD"},
            "LinkToProductBulletinURL": "https://www.cisco.com/..."
        },
        {
            "EOLProductID": "",
            "EOXError": {
                "ErrorID": "SSA_ERR_026",
                "ErrorDescription": "EOX information does not exist"
            }
        }
    ]"#;

    let records: Vec<Record> = serde_json::from_str(json).unwrap();
    assert_eq!(records.len(), 2);

    let eol = &records[0];
    assert_eq!(eol.get_str("EOLProductID"), Some("WS-C3750X-48PF-S"));
    assert_eq!(eol.display_value("EndOfSaleDate"), Some("2016-10-30"));
    assert_eq!(eol.require_str("LastDateOfSupport").unwrap(), "2021-10-31");

    // Unmatched PIDs come back as records carrying an EOXError object.
    let miss = &records[1];
    assert!(miss.get("EOXError").is_some());
    assert!(miss.require_str("LastDateOfSupport").is_err());
}
