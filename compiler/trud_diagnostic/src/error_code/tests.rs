use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E6031.as_str(), "E6031");
}

#[test]
fn test_codes_are_grouped_by_stage() {
    for code in [ErrorCode::E0001, ErrorCode::E0002, ErrorCode::E0003] {
        assert!(code.as_str().starts_with("E0"), "{code}");
    }
    for code in [
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
    ] {
        assert!(code.as_str().starts_with("E1"), "{code}");
    }
    for code in [ErrorCode::E6001, ErrorCode::E6007, ErrorCode::E6031] {
        assert!(code.as_str().starts_with("E6"), "{code}");
    }
}
