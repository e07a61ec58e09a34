use super::*;

#[test]
fn port_defaults_when_unset() {
    assert_eq!(parse_port(None).unwrap(), 3000);
}

#[test]
fn port_parses_valid_value() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
}

#[test]
fn port_rejects_non_numeric_value() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "eighty"));
}

#[test]
fn port_rejects_out_of_range_value() {
    assert!(parse_port(Some("70000")).is_err());
}
