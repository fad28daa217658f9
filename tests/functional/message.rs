use http_message::{Headers, Message, Stream, Version};

fn new_message() -> Message {
    Message::new(Version::Http11, Headers::new(), Stream::from("body"))
}

#[test]
fn version() {
    let message = new_message();
    assert_eq!(message.version(), Version::Http11);
    let message = message.with_version(Version::Http2);
    assert_eq!(message.version(), Version::Http2);
}

#[test]
fn with_header_replaces() {
    let message = new_message().with_header("X-Foo", "a");
    assert!(message.contains_header("x-foo"));
    assert_eq!(message.header("X-FOO").unwrap(), &["a".to_owned()]);

    let message = message.with_header("x-foo", "b");
    assert_eq!(message.header("X-Foo").unwrap(), &["b".to_owned()]);
    assert_eq!(message.headers().len(), 1);
}

#[test]
fn with_added_header_appends() {
    let message = new_message()
        .with_header("Foo", "a")
        .with_added_header("foo", "b");

    let header = message.headers().iter().next().unwrap();
    assert_eq!(header.name().as_ref(), "Foo");
    assert_eq!(header.values(), &["a".to_owned(), "b".to_owned()]);
}

#[test]
fn without_header() {
    let message = new_message().with_header("X-Foo", "a");
    let message = message.without_header("x-FOO");
    assert!(!message.contains_header("X-Foo"));
    // Removing a missing header is a no-op.
    let message = message.without_header("X-Foo");
    assert!(message.headers().is_empty());
}

#[test]
fn header_mutation_does_not_touch_other_state() {
    let headers_before = {
        let message = new_message().with_header("X-Foo", "a");
        message.headers().clone()
    };

    let mut message = new_message()
        .with_header("X-Foo", "a")
        .with_header("X-Bar", "b")
        .without_header("X-Bar");
    assert_eq!(*message.headers(), headers_before);
    assert_eq!(message.version(), Version::Http11);
    assert_eq!(message.body_mut().text(), "body");
}

#[test]
fn with_body_replaces_the_body() {
    let mut message = new_message().with_body(Stream::from("other"));
    assert_eq!(message.body_mut().text(), "other");
}

#[test]
fn into_body() {
    let mut body = new_message().into_body();
    assert_eq!(body.text(), "body");
}

#[test]
fn header_line() {
    let message = new_message().with_header("Accept", "text/html,text/plain");
    assert_eq!(message.header_line("accept"), "text/html,text/plain");
    assert_eq!(message.header_line("missing"), "");
}
