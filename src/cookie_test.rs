use super::*;
use crate::memory::MemoryHost;

#[test]
fn finds_token_among_other_cookies() {
    assert_eq!(read_cookie("a=1; csrftoken=XYZ; b=2", "csrftoken"), Some("XYZ".to_owned()));
}

#[test]
fn empty_jar_yields_none() {
    assert_eq!(read_cookie("", "csrftoken"), None);
}

#[test]
fn absent_name_yields_none() {
    assert_eq!(read_cookie("a=1; b=2", "csrftoken"), None);
}

#[test]
fn key_must_match_exactly() {
    assert_eq!(read_cookie("xcsrftoken=bad; csrftokenx=bad", "csrftoken"), None);
    assert_eq!(read_cookie("csrftokenx=bad; csrftoken=good", "csrftoken"), Some("good".to_owned()));
}

#[test]
fn first_entry_wins() {
    assert_eq!(read_cookie("t=1; t=2", "t"), Some("1".to_owned()));
}

#[test]
fn value_is_url_decoded() {
    assert_eq!(read_cookie("msg=hello%20world%21", "msg"), Some("hello world!".to_owned()));
}

#[test]
fn value_may_contain_equals_sign() {
    assert_eq!(read_cookie("b64=YWJj==", "b64"), Some("YWJj==".to_owned()));
}

#[test]
fn empty_value_is_present() {
    assert_eq!(read_cookie("t=; u=1", "t"), Some(String::new()));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(read_cookie("  a=1 ;   csrftoken=XYZ  ", "csrftoken"), Some("XYZ".to_owned()));
}

#[test]
fn host_cookie_reads_live_jar() {
    let host = MemoryHost::new();
    assert_eq!(host_cookie(&host, "csrftoken"), None);
    host.set_cookies("csrftoken=abc123");
    assert_eq!(host_cookie(&host, "csrftoken"), Some("abc123".to_owned()));
    host.set_cookies("csrftoken=rotated");
    assert_eq!(host_cookie(&host, "csrftoken"), Some("rotated".to_owned()));
}

