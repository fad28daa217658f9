use http_message::Method::{self, *};

#[test]
fn from_str() {
    let tests = &[
        (Get, "GET"),
        (Head, "HEAD"),
        (Post, "POST"),
        (Put, "PUT"),
        (Delete, "DELETE"),
        (Connect, "CONNECT"),
        (Options, "OPTIONS"),
        (Trace, "TRACE"),
        (Patch, "PATCH"),
    ];
    for (expected, input) in tests {
        let got: Method = input.parse().unwrap();
        assert_eq!(got, *expected);
    }
}

#[test]
fn from_str_is_case_sensitive() {
    // The method set is a fixed set of upper-case tokens.
    let tests = &["get", "Get", "pOST", "delete"];
    for input in tests {
        assert!(input.parse::<Method>().is_err(), "method: {input}");
    }
}

#[test]
fn from_str_unknown() {
    let tests = &["", "MOVE", "GETT", "G ET"];
    for input in tests {
        assert!(input.parse::<Method>().is_err(), "method: {input}");
    }
}

#[test]
fn fmt_display() {
    let tests = &[
        (Get, "GET"),
        (Head, "HEAD"),
        (Post, "POST"),
        (Put, "PUT"),
        (Delete, "DELETE"),
        (Connect, "CONNECT"),
        (Options, "OPTIONS"),
        (Trace, "TRACE"),
        (Patch, "PATCH"),
    ];
    for (method, expected) in tests {
        assert_eq!(method.to_string(), **expected);
        assert_eq!(method.as_str(), *expected);
    }
}
