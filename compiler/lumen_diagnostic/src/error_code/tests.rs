use super::*;

#[test]
fn codes_render_as_written() {
    assert_eq!(ErrorCode::E2101.to_string(), "E2101");
    assert_eq!(ErrorCode::E9102.as_str(), "E9102");
}

#[test]
fn all_is_sorted_and_unique() {
    let strs: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    let mut sorted = strs.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(strs, sorted);
}

#[test]
fn internal_codes_are_e9() {
    assert!(ErrorCode::E9101.is_internal());
    assert!(!ErrorCode::E2101.is_internal());
}
