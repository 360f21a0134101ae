use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E2004.as_str(), "E2004");
}

#[test]
fn test_phase_predicates() {
    assert!(ErrorCode::E0001.is_lexer_error());
    assert!(ErrorCode::E1002.is_syntax_error());
    assert!(ErrorCode::E2009.is_resolution_error());
    assert!(ErrorCode::E3003.is_validation_error());
    assert!(ErrorCode::E4002.is_parcel_error());

    assert!(!ErrorCode::E2001.is_syntax_error());
    assert!(!ErrorCode::E3001.is_resolution_error());
}

#[test]
fn test_all_codes_unique_and_ordered() {
    let strs: Vec<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    let mut sorted = strs.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(strs, sorted);
}

#[test]
fn test_every_code_is_explained() {
    for code in ErrorCode::ALL {
        assert!(!code.description().is_empty(), "{code} has no description");
        assert!(!code.kind_name().is_empty());
    }
}

#[test]
fn test_from_str_roundtrip() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
    assert_eq!("e3004".parse::<ErrorCode>(), Ok(ErrorCode::E3004));
    assert!("E9999".parse::<ErrorCode>().is_err());
}

#[test]
fn test_final_violations_share_kind() {
    assert_eq!(ErrorCode::E3003.kind_name(), "FinalViolation");
    assert_eq!(ErrorCode::E3004.kind_name(), "FinalViolation");
}
