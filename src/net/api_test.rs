use super::*;

#[test]
fn chat_endpoint_appends_api_chat_path() {
    assert_eq!(
        chat_endpoint("http://localhost:8082"),
        "http://localhost:8082/api/chat"
    );
    assert_eq!(
        chat_endpoint("https://support.example.com"),
        "https://support.example.com/api/chat"
    );
}

#[test]
fn chat_request_failed_message_formats_status() {
    assert_eq!(chat_request_failed_message(500), "chat request failed: 500");
    assert_eq!(chat_request_failed_message(404), "chat request failed: 404");
}

#[test]
fn api_base_url_is_a_plain_http_origin() {
    let base = api_base_url();
    assert!(base.starts_with("http"));
    assert!(!base.ends_with('/'));
}
