use super::*;

#[test]
fn format_session_id_combines_prefix_time_and_suffix() {
    assert_eq!(
        format_session_id(1_755_900_000_000.0, "abc123def"),
        "session-1755900000000-abc123def"
    );
}

#[test]
fn format_session_id_truncates_fractional_milliseconds() {
    assert_eq!(format_session_id(42.9, "x"), "session-42-x");
}

#[test]
fn generate_produces_expected_shape() {
    let id = generate();
    let parts: Vec<&str> = id.splitn(3, '-').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "session");
    assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(parts[2].len(), SUFFIX_LEN);
}

#[test]
fn generate_produces_distinct_identifiers() {
    assert_ne!(generate(), generate());
}
