use http_message::header::{HeaderName, HeaderValues, Headers};

#[test]
fn empty() {
    let headers = Headers::EMPTY;
    assert_eq!(headers.len(), 0);
    assert!(headers.is_empty());
    assert!(!headers.contains("Host"));
    assert_eq!(headers.get("Host"), None);
    assert_eq!(headers.line("Host"), "");
}

#[test]
fn insert_and_get_is_case_insensitive() {
    let mut headers = Headers::new();
    headers.insert("X-Foo", "a");
    assert!(headers.contains("x-foo"));
    assert!(headers.contains("X-FOO"));
    assert_eq!(headers.get("X-FOO").unwrap(), &["a".to_owned()]);
    assert_eq!(headers.get("x-foo").unwrap(), &["a".to_owned()]);
}

#[test]
fn insert_replaces_case_insensitively() {
    let mut headers = Headers::new();
    headers.insert("Accept", "text/html");
    headers.insert("ACCEPT", "text/plain");
    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get("accept").unwrap(), &["text/plain".to_owned()]);
    // The entry is stored under the casing of the replacement.
    let header = headers.iter().next().unwrap();
    assert_eq!(header.name().as_ref(), "ACCEPT");
}

#[test]
fn insert_keeps_the_order_of_other_entries() {
    let mut headers = Headers::new();
    headers.insert("One", "1");
    headers.insert("Two", "2");
    headers.insert("Three", "3");
    headers.insert("one", "replaced");

    let names: Vec<&str> = headers.iter().map(|h| h.name().as_ref()).collect();
    assert_eq!(names, &["Two", "Three", "one"]);
}

#[test]
fn append_keeps_original_casing_and_position() {
    let mut headers = Headers::new();
    headers.insert("Foo", "a");
    headers.insert("Bar", "b");
    headers.append("foo", "b");

    assert_eq!(headers.len(), 2);
    let header = headers.iter().next().unwrap();
    assert_eq!(header.name().as_ref(), "Foo");
    assert_eq!(header.values(), &["a".to_owned(), "b".to_owned()]);
}

#[test]
fn append_new_entry() {
    let mut headers = Headers::new();
    headers.append("Foo", "a");
    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get("foo").unwrap(), &["a".to_owned()]);
}

#[test]
fn remove() {
    let mut headers = Headers::new();
    headers.insert("Foo", "a");
    headers.remove("FOO");
    assert!(headers.is_empty());
    // Removing a missing header is a no-op.
    headers.remove("FOO");
    assert!(headers.is_empty());
}

#[test]
fn string_values_are_split_on_commas() {
    let mut headers = Headers::new();
    headers.insert("Accept", "text/html,text/plain");
    assert_eq!(
        headers.get("Accept").unwrap(),
        &["text/html".to_owned(), "text/plain".to_owned()],
    );
    // Empty fields are kept as empty values.
    headers.insert("X-Empty", "a,,b");
    assert_eq!(
        headers.get("X-Empty").unwrap(),
        &["a".to_owned(), String::new(), "b".to_owned()],
    );
}

#[test]
fn single_value_is_not_split() {
    let mut headers = Headers::new();
    headers.insert("Cookie", HeaderValues::single("a=1, b=2"));
    assert_eq!(headers.get("Cookie").unwrap(), &["a=1, b=2".to_owned()]);
}

#[test]
fn explicit_list_is_not_split() {
    let mut headers = Headers::new();
    headers.insert("X-List", vec!["a,b".to_owned(), "c".to_owned()]);
    assert_eq!(
        headers.get("X-List").unwrap(),
        &["a,b".to_owned(), "c".to_owned()],
    );
}

#[test]
fn line_joins_values_with_commas() {
    let mut headers = Headers::new();
    headers.insert("Accept", vec!["text/html".to_owned(), "text/plain".to_owned()]);
    assert_eq!(headers.line("accept"), "text/html,text/plain");
}

#[test]
fn iter_in_insertion_order() {
    let mut headers = Headers::new();
    headers.insert("One", "1");
    headers.insert("Two", "2");
    headers.insert("Three", "3");

    let mut iter = headers.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next().unwrap().name().as_ref(), "One");
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next().unwrap().name().as_ref(), "Two");
    assert_eq!(iter.next().unwrap().name().as_ref(), "Three");
    assert!(iter.next().is_none());
}

#[test]
fn name_from_str_known_headers() {
    let known_headers = &[
        "Allow",
        "Content-Length",
        "Content-Type",
        "Date",
        "Host",
        "User-Agent",
    ];
    for name in known_headers {
        let header_name = HeaderName::from_str(name);
        assert!(!header_name.is_heap_allocated(), "header: {name}");
    }
}

#[test]
fn name_from_str_custom() {
    // Known names in a different casing are stored as supplied.
    let unknown_headers = &["host", "My-Header", "CONTENT-LENGTH"];
    for name in unknown_headers {
        let header_name = HeaderName::from_str(name);
        assert!(header_name.is_heap_allocated(), "header: {name}");
        assert_eq!(header_name.as_ref(), *name);
    }
}

#[test]
fn name_compare_is_case_insensitive() {
    let name = HeaderName::from_str("My-Header");
    assert_eq!(name, "My-Header");
    assert_eq!(name, "my-header");
    assert_eq!(name, "mY-hEaDeR");
    assert_eq!(name, HeaderName::from_str("MY-HEADER"));
    assert_eq!(name.as_ref(), "My-Header");
}

#[test]
fn name_fmt_display() {
    assert_eq!(HeaderName::from_str("My-Header").to_string(), "My-Header");
    assert_eq!(HeaderName::HOST.to_string(), "Host");
}
