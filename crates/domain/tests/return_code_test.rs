use ferrous_doh_domain::ReturnCode;

#[test]
fn test_display_mnemonics() {
    assert_eq!(ReturnCode::SUCCESS.to_string(), "NOERROR");
    assert_eq!(ReturnCode::SERVER_FAILURE.to_string(), "SERVFAIL");
    assert_eq!(ReturnCode::NAME_ERROR.to_string(), "NXDOMAIN");
    assert_eq!(ReturnCode::BAD_COOKIE.to_string(), "BADCOOKIE");
}

#[test]
fn test_display_unknown() {
    assert_eq!(ReturnCode(11).to_string(), "UNKNOWN");
    assert_eq!(ReturnCode(4096).to_string(), "UNKNOWN");
    assert_eq!(ReturnCode(-1).to_string(), "UNKNOWN");
}

#[test]
fn test_shared_code_renders_first_mnemonic() {
    assert_eq!(ReturnCode::BAD_SIG, ReturnCode::BAD_VERS);
    assert_eq!(ReturnCode::BAD_VERS.to_string(), "BADSIG");
}

#[test]
fn test_json_is_numeric() {
    assert_eq!(serde_json::to_string(&ReturnCode::REFUSED).unwrap(), "5");
    let rc: ReturnCode = serde_json::from_str("3").unwrap();
    assert_eq!(rc, ReturnCode::NAME_ERROR);
}
