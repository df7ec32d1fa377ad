use vsh_runtime::{Error, ErrorKind, IndexFault, Indexable, Text, Value};

fn idx(s: &str) -> Value {
    Value::from(s)
}

#[test]
fn len_counts_codepoints_not_bytes() {
    let t = Text::from_str("héllo");
    assert_eq!(Indexable::len(&t), 5);
    assert_eq!(t.len(), 6);
    let v = Value::from("你好世界");
    assert_eq!(v.as_indexable().map(|s| s.len()), Some(4));
}

#[test]
fn text_indexing_and_slicing_work() {
    let s = Value::from("你好世界");
    assert_eq!(s.index_one(&idx("0")), Ok(Value::from("你")));
    assert_eq!(s.index_one(&idx("3")), Ok(Value::from("好")));
    assert_eq!(s.index_one(&idx("3:9")), Ok(Value::from("好世")));

    let t = Value::from("中a文");
    assert_eq!(t.index_one(&idx("0")), Ok(Value::from("中")));
    assert_eq!(t.index_one(&idx("3")), Ok(Value::from("a")));
    assert_eq!(t.index_one(&idx("4:")), Ok(Value::from("文")));
}

#[test]
fn negative_index_reads_from_end() {
    let s = Value::from("hello");
    assert_eq!(s.index_one(&idx("-1")), Ok(Value::from("o")));
    assert_eq!(s.index_one(&idx("-5")), Ok(Value::from("h")));
    assert_eq!(Value::from("héllo").index_one(&idx("-1")), Ok(Value::from("o")));
}

#[test]
fn index_inside_a_codepoint_is_rejected() {
    let s = Value::from("héllo");
    assert_eq!(s.index_one(&idx("1")), Ok(Value::from("é")));
    assert_eq!(s.index_one(&idx("2")), Err(Error::BadIndex(IndexFault::NotBoundary)));
    assert_eq!(s.index_one(&idx("0:2")), Err(Error::BadIndex(IndexFault::NotBoundary)));
    assert_eq!(s.index_one(&idx("2:4")), Err(Error::BadIndex(IndexFault::NotBoundary)));
    assert_eq!(
        s.assoc(&idx("2"), Value::from("x")),
        Err(Error::BadIndex(IndexFault::NotBoundary))
    );
}

#[test]
fn text_indexing_out_of_range_errors() {
    let s = Value::from("hello");
    assert_eq!(s.index_one(&idx("5")), Err(Error::BadIndex(IndexFault::OutOfRange)));
    assert_eq!(s.index_one(&idx("3:1")), Err(Error::BadIndex(IndexFault::OutOfRange)));
    assert_eq!(s.index_one(&idx("one")), Err(Error::BadIndex(IndexFault::NotInteger)));
    let err = Value::from("").index_one(&idx("0")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadIndex);
}

#[test]
fn slice_must_start_on_a_codepoint() {
    let s = Value::from("hello");
    assert_eq!(s.index_one(&idx("2:2")), Ok(Value::from("")));
    // Nothing to decode at the very end of the text.
    assert_eq!(s.index_one(&idx("5:5")), Err(Error::BadIndex(IndexFault::NotBoundary)));
    assert_eq!(
        Value::from("").index_one(&idx(":")),
        Err(Error::BadIndex(IndexFault::NotBoundary))
    );
}

#[test]
fn assoc_replaces_one_codepoint() {
    let s = Value::from("hello");
    assert_eq!(s.assoc(&idx("1"), Value::from("E")), Ok(Value::from("hEllo")));
    assert_eq!(s, Value::from("hello"));

    let s = Value::from("héllo");
    assert_eq!(s.assoc(&idx("1"), Value::from("e")), Ok(Value::from("hello")));
    assert_eq!(s.assoc(&idx("-1"), Value::from("ö!")), Ok(Value::from("héllö!")));
}

#[test]
fn assoc_replaces_a_range() {
    let s = Value::from("hello");
    assert_eq!(s.assoc(&idx("1:3"), Value::from("EL")), Ok(Value::from("hELlo")));
    assert_eq!(s.assoc(&idx(":"), Value::from("bye")), Ok(Value::from("bye")));
    assert_eq!(s.assoc(&idx("1:4"), Value::from("")), Ok(Value::from("ho")));

    let long = Value::from("a long enough text to live on the heap");
    assert_eq!(
        long.assoc(&idx("0:6"), Value::from("A")),
        Ok(Value::from("A enough text to live on the heap"))
    );
}

#[test]
fn assoc_requires_text_replacement() {
    let s = Value::from("hello");
    assert_eq!(
        s.assoc(&idx("0"), Value::list([Value::from("x")])),
        Err(Error::ReplacementMustBeText)
    );
    assert_eq!(s.assoc(&idx("0"), Value::Bool(true)), Err(Error::ReplacementMustBeText));
}

#[test]
fn index_value_is_converted_to_text() {
    let s = Value::from("hello");
    let err = s.index_one(&Value::list([])).unwrap_err();
    assert_eq!(err, Error::BadIndex(IndexFault::NotInteger));
}

#[test]
fn iterate_yields_each_codepoint_and_restarts() {
    let t = Text::from_str("héllo");
    let first: Vec<Value> = t.iterate().collect();
    let expected: Vec<Value> = ["h", "é", "l", "l", "o"].into_iter().map(Value::from).collect();
    assert_eq!(first, expected);
    let second: Vec<Value> = t.iterate().collect();
    assert_eq!(first, second);
    assert_eq!(Text::from_str("").iterate().count(), 0);
}
