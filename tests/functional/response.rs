use http_message::{HeaderValues, Headers, Response, StatusCode, Stream, Version};

fn new_response(status: StatusCode, body: &str) -> Response {
    Response::new(Version::Http11, status, Headers::new(), Stream::from(body))
}

#[test]
fn status_and_derived_reason() {
    let response = new_response(StatusCode::OK, "");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.reason_phrase(), Some("OK"));
}

#[test]
fn with_status_derives_the_reason() {
    let response = new_response(StatusCode::OK, "").with_status(StatusCode::NOT_FOUND, "");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.reason_phrase(), Some("Not Found"));
}

#[test]
fn with_status_keeps_an_explicit_reason() {
    let response = new_response(StatusCode::OK, "").with_status(StatusCode::NOT_FOUND, "Custom");
    assert_eq!(response.reason_phrase(), Some("Custom"));
}

#[test]
fn with_status_resets_an_explicit_reason() {
    let response = new_response(StatusCode::OK, "")
        .with_status(StatusCode::NOT_FOUND, "Custom")
        .with_status(StatusCode::GONE, "");
    assert_eq!(response.reason_phrase(), Some("Gone"));
}

#[test]
fn unregistered_status_has_no_reason() {
    let response = new_response(StatusCode::new(599).unwrap(), "");
    assert_eq!(response.reason_phrase(), None);
}

#[test]
fn invalid_status_codes_are_rejected_at_construction() {
    assert!(StatusCode::new(99).is_err());
    assert!(StatusCode::new(600).is_err());
    assert!("600".parse::<StatusCode>().is_err());
}

#[test]
fn message_operations() {
    let mut response = new_response(StatusCode::OK, "")
        .with_version(Version::Http10)
        .with_header("X-Foo", "a")
        .with_body(Stream::from("hello"));

    assert_eq!(response.version(), Version::Http10);
    assert_eq!(response.header("x-foo").unwrap(), &["a".to_owned()]);
    assert_eq!(response.body_mut().text(), "hello");
}

#[test]
fn send_writes_the_wire_format() {
    let response = new_response(StatusCode::OK, "hello")
        .with_header("Content-Type", "text/plain")
        .with_header("Content-Length", "5")
        // A date contains a comma, so it must not go through the splitting
        // string conversion.
        .with_header("Date", HeaderValues::single("Thu, 01 Jan 1970 00:00:00 GMT"));

    let mut sink = Vec::new();
    response.send(&mut sink).unwrap();

    let got = std::str::from_utf8(&sink).unwrap();
    assert_eq!(
        got,
        "HTTP/1.1 200 OK\r\n\
         Content-Type: text/plain\r\n\
         Content-Length: 5\r\n\
         Date: Thu, 01 Jan 1970 00:00:00 GMT\r\n\
         \r\n\
         hello",
    );
}

#[test]
fn send_writes_one_line_per_header_value() {
    let response = new_response(StatusCode::OK, "")
        .with_header("Date", HeaderValues::single("Thu, 01 Jan 1970 00:00:00 GMT"))
        .with_header("X-Multi", vec!["a".to_owned(), "b".to_owned()]);

    let mut sink = Vec::new();
    response.send(&mut sink).unwrap();

    let got = std::str::from_utf8(&sink).unwrap();
    assert!(got.contains("X-Multi: a\r\nX-Multi: b\r\n"), "got: {got:?}");
}

#[test]
fn send_adds_date_and_content_length_headers() {
    let response = new_response(StatusCode::OK, "hello");

    let mut sink = Vec::new();
    response.send(&mut sink).unwrap();

    let got = std::str::from_utf8(&sink).unwrap();
    assert!(got.starts_with("HTTP/1.1 200 OK\r\n"), "got: {got:?}");
    assert!(got.contains("Date: "), "got: {got:?}");
    assert!(got.contains("Content-Length: 5\r\n"), "got: {got:?}");
    assert!(got.ends_with("\r\n\r\nhello"), "got: {got:?}");
}

#[test]
fn send_skips_an_empty_body() {
    let response = new_response(StatusCode::NO_CONTENT, "");

    let mut sink = Vec::new();
    response.send(&mut sink).unwrap();

    let got = std::str::from_utf8(&sink).unwrap();
    assert!(got.starts_with("HTTP/1.1 204 No Content\r\n"), "got: {got:?}");
    assert!(got.ends_with("\r\n\r\n"), "got: {got:?}");
}

#[test]
fn send_uses_the_explicit_reason() {
    let response = new_response(StatusCode::NOT_FOUND, "").with_status(StatusCode::NOT_FOUND, "Gone Fishing");

    let mut sink = Vec::new();
    response.send(&mut sink).unwrap();

    let got = std::str::from_utf8(&sink).unwrap();
    assert!(got.starts_with("HTTP/1.1 404 Gone Fishing\r\n"), "got: {got:?}");
}
