use std::io::{Cursor, SeekFrom};

use http_message::{Metadata, Stream, StreamError};

fn read_only(bytes: &str) -> Stream {
    Stream::new(
        Cursor::new(bytes.as_bytes().to_vec()),
        Metadata::new("r", true),
    )
}

#[test]
fn read() {
    let mut stream = Stream::from("hello world");
    assert_eq!(stream.read(5).unwrap(), b"hello");
    assert_eq!(stream.read(6).unwrap(), b" world");
    assert!(!stream.eof());

    // Reading past the end is not an error; it raises the EOF flag.
    assert_eq!(stream.read(1).unwrap(), b"");
    assert!(stream.eof());
}

#[test]
fn write() {
    let mut stream = Stream::from("");
    assert_eq!(stream.write(b"hello").unwrap(), 5);
    assert_eq!(stream.text(), "hello");
}

#[test]
fn seek_and_tell() {
    let mut stream = Stream::from("hello");
    assert_eq!(stream.tell().unwrap(), 0);
    assert_eq!(stream.seek(SeekFrom::Start(3)).unwrap(), 3);
    assert_eq!(stream.tell().unwrap(), 3);
    assert_eq!(stream.read(2).unwrap(), b"lo");

    stream.rewind().unwrap();
    assert_eq!(stream.tell().unwrap(), 0);
}

#[test]
fn seek_clears_the_eof_flag() {
    let mut stream = Stream::from("hi");
    let _ = stream.contents().unwrap();
    assert!(stream.eof());
    stream.rewind().unwrap();
    assert!(!stream.eof());
}

#[test]
fn contents_reads_from_the_current_position() {
    let mut stream = Stream::from("hello world");
    stream.seek(SeekFrom::Start(6)).unwrap();
    assert_eq!(stream.contents().unwrap(), b"world");
    assert!(stream.eof());
}

#[test]
fn size() {
    let stream = Stream::from("hello");
    assert_eq!(stream.size(), Some(5));
}

#[test]
fn mode_gates_reading() {
    // Opened write-only: the resource could be read, the mode says no.
    let mut stream = Stream::new(Cursor::new(Vec::new()), Metadata::new("w", true));
    assert!(matches!(stream.read(1), Err(StreamError::NotReadable)));
    assert!(stream.write(b"x").is_ok());
}

#[test]
fn mode_gates_writing() {
    let mut stream = read_only("hello");
    assert!(matches!(stream.write(b"x"), Err(StreamError::NotWritable)));
    assert_eq!(stream.read(5).unwrap(), b"hello");
}

#[test]
fn read_write_modes() {
    let tests = &["w+", "r+", "x+", "c+", "w+b", "r+b", "a+"];
    for mode in tests {
        let mut stream = Stream::new(Cursor::new(Vec::new()), Metadata::new(mode, true));
        assert!(stream.write(b"x").is_ok(), "mode: {mode}");
        stream.rewind().unwrap();
        assert!(stream.read(1).is_ok(), "mode: {mode}");
    }
}

#[test]
fn append_mode_is_write_only() {
    let mut stream = Stream::new(Cursor::new(Vec::new()), Metadata::new("a", true));
    assert!(stream.write(b"x").is_ok());
    assert!(matches!(stream.read(1), Err(StreamError::NotReadable)));
}

#[test]
fn non_seekable_stream() {
    let mut stream = Stream::new(
        Cursor::new(b"hello".to_vec()),
        Metadata::new("r", false),
    );
    assert!(matches!(
        stream.seek(SeekFrom::Start(0)),
        Err(StreamError::NotSeekable)
    ));
    assert!(matches!(stream.rewind(), Err(StreamError::NotSeekable)));
    // Reading is unaffected.
    assert_eq!(stream.read(5).unwrap(), b"hello");
}

#[test]
fn detach_empties_the_stream() {
    let mut stream = Stream::from("hello");
    let resource = stream.detach().unwrap();
    assert_eq!(resource.size(), Some(5));

    assert!(matches!(stream.read(1), Err(StreamError::Detached)));
    assert!(matches!(stream.write(b"x"), Err(StreamError::Detached)));
    assert!(matches!(stream.tell(), Err(StreamError::Detached)));
    assert!(matches!(stream.contents(), Err(StreamError::Detached)));
    assert_eq!(stream.size(), None);

    // A second detach has nothing left to return.
    assert!(stream.detach().is_none());
}

#[test]
fn close_releases_the_resource() {
    let mut stream = Stream::from("hello");
    stream.close();
    assert!(matches!(stream.read(1), Err(StreamError::Detached)));
}

#[test]
fn text_reads_from_the_start() {
    let mut stream = Stream::from("hello");
    stream.seek(SeekFrom::Start(3)).unwrap();
    assert_eq!(stream.text(), "hello");
}

#[test]
fn text_suppresses_resource_errors() {
    let mut stream = Stream::from("hello");
    stream.close();
    assert_eq!(stream.text(), "");

    // Not readable still yields the contents: the mode only gates `read`,
    // the conversion reads the resource directly.
    let mut stream = read_only("hello");
    assert_eq!(stream.text(), "hello");
}

#[test]
fn text_on_a_non_seekable_stream_reads_the_remainder() {
    let mut stream = Stream::new(
        Cursor::new(b"hello".to_vec()),
        Metadata::new("r", false),
    );
    assert_eq!(stream.read(3).unwrap(), b"hel");
    assert_eq!(stream.text(), "lo");
}

#[test]
fn metadata() {
    let stream = Stream::new(
        Cursor::new(Vec::new()),
        Metadata::new("r+b", true).with_uri("/tmp/body"),
    );
    let meta = stream.metadata();
    assert_eq!(meta.mode(), "r+b");
    assert!(meta.seekable());
    assert_eq!(meta.uri(), Some("/tmp/body"));

    assert_eq!(meta.get("mode").as_deref(), Some("r+b"));
    assert_eq!(meta.get("seekable").as_deref(), Some("true"));
    assert_eq!(meta.get("uri").as_deref(), Some("/tmp/body"));
    assert_eq!(meta.get("unknown"), None);
}

#[test]
fn in_memory_stream_is_read_write() {
    let mut stream = Stream::from("abc");
    assert!(stream.is_readable());
    assert!(stream.is_writable());
    assert!(stream.is_seekable());
    assert_eq!(stream.metadata().mode(), "w+b");
    assert_eq!(stream.read(3).unwrap(), b"abc");
}
