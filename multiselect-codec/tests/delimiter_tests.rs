use multiselect_codec::{Delimiter, Error};
use std::str::FromStr;

#[test]
fn default_is_comma() {
    assert_eq!(Delimiter::default().as_str(), ",");
    assert_eq!(Delimiter::default().as_str(), Delimiter::DEFAULT);
}

#[test]
fn new_rejects_empty() {
    assert_eq!(Delimiter::new(""), Err(Error::EmptyDelimiter));
}

#[test]
fn new_accepts_multi_char() {
    let d = Delimiter::new("::").unwrap();
    assert_eq!(d.as_str(), "::");
}

#[test]
fn new_accepts_whitespace() {
    assert!(Delimiter::new(" ").is_ok());
}

#[test]
fn display_and_from_str() {
    let d = Delimiter::from_str(";").unwrap();
    assert_eq!(d.to_string(), ";");
    assert!(Delimiter::from_str("").is_err());
}

#[test]
fn error_message() {
    assert_eq!(Error::EmptyDelimiter.to_string(), "delimiter must not be empty");
}

#[test]
fn serde_as_plain_string() {
    let d = Delimiter::new("|").unwrap();
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, r#""|""#);
    let parsed: Delimiter = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, d);
}

#[test]
fn serde_rejects_empty_string() {
    assert!(serde_json::from_str::<Delimiter>(r#""""#).is_err());
}
