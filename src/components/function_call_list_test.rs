use super::*;
use serde_json::json;

#[test]
fn expand_icon_matches_panel_state() {
    assert_eq!(expand_icon(true), "▼");
    assert_eq!(expand_icon(false), "▶");
}

#[test]
fn format_payload_pretty_prints_objects() {
    let formatted = format_payload(&json!({ "orderId": "o-42" }));
    assert_eq!(formatted, "{\n  \"orderId\": \"o-42\"\n}");
}

#[test]
fn format_payload_handles_scalars_and_null() {
    assert_eq!(format_payload(&json!(null)), "null");
    assert_eq!(format_payload(&json!("shipped")), "\"shipped\"");
    assert_eq!(format_payload(&json!(3)), "3");
}
