use std::fs;
use std::io::Write;

use flate2::{write::ZlibEncoder, Compression};
use predicates::prelude::*;

mod common;

const MISSING_SHA1: &str = "3cd9329ac53613a0bfa198ae28f3af957e49573c";

fn write_raw_loose_object(dir: &std::path::Path, hex: &str, raw: &[u8]) {
    let fan_out = dir.join(".git/objects").join(&hex[..2]);
    fs::create_dir_all(&fan_out).unwrap();
    fs::write(fan_out.join(&hex[2..]), raw).unwrap();
}

fn zlib(data: &[u8]) -> Vec<u8> {
    let mut e = ZlibEncoder::new(Vec::new(), Compression::default());
    e.write_all(data).unwrap();
    e.finish().unwrap()
}

#[test]
fn hello_round_trip() {
    let dir = common::init_empty_store();
    let id = common::write_blob(dir.path(), common::HELLO_CONTENT);

    common::odb(dir.path())
        .args(&["cat-file", "-p", id.as_str()])
        .assert()
        .success()
        .stdout("hello\n");

    common::odb(dir.path())
        .args(&["cat-file", "-t", id.as_str()])
        .assert()
        .success()
        .stdout("blob\n");

    common::odb(dir.path())
        .args(&["cat-file", "-s", id.as_str()])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn empty_blob() {
    let dir = common::init_empty_store();
    let id = common::write_blob(dir.path(), b"");
    assert_eq!(id, "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391");

    common::odb(dir.path())
        .args(&["cat-file", "-s", id.as_str()])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn binary_content_is_byte_exact() {
    let dir = common::init_empty_store();
    let content: Vec<u8> = (0u8..=255).collect();
    let id = common::write_blob(dir.path(), &content);

    common::odb(dir.path())
        .args(&["cat-file", "-p", id.as_str()])
        .assert()
        .success()
        .stdout(content);
}

#[test]
fn exists() {
    let dir = common::init_empty_store();
    common::write_blob(dir.path(), common::HELLO_CONTENT);

    common::odb(dir.path())
        .args(&["cat-file", "-e", common::HELLO_SHA1])
        .assert()
        .success()
        .stdout("");

    common::odb(dir.path())
        .args(&["cat-file", "-e", MISSING_SHA1])
        .assert()
        .code(common::EXIT_NOT_FOUND)
        .stdout("");
}

#[test]
fn error_not_found() {
    let dir = common::init_empty_store();

    common::odb(dir.path())
        .args(&["cat-file", "-p", MISSING_SHA1])
        .assert()
        .code(common::EXIT_NOT_FOUND)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn error_invalid_id() {
    let dir = common::init_empty_store();

    for bad in &["xyz", "ce01", "CE013625030BA8DBA906F756967F9E9CA394464A"] {
        common::odb(dir.path())
            .args(&["cat-file", "-p", *bad])
            .assert()
            .code(common::EXIT_INVALID_ID)
            .stderr(predicate::str::contains("invalid object ID"));
    }
}

#[test]
fn error_corrupt_stream() {
    let dir = common::init_empty_store();
    write_raw_loose_object(dir.path(), MISSING_SHA1, b"definitely not zlib");

    common::odb(dir.path())
        .args(&["cat-file", "-p", MISSING_SHA1])
        .assert()
        .code(common::EXIT_CORRUPT_STREAM)
        .stdout("");
}

#[test]
fn error_truncated_stream() {
    let dir = common::init_empty_store();
    let mut raw = zlib(b"blob 6\0hello\n");
    raw.truncate(raw.len() - 6);
    write_raw_loose_object(dir.path(), MISSING_SHA1, &raw);

    common::odb(dir.path())
        .args(&["cat-file", "-p", MISSING_SHA1])
        .assert()
        .code(common::EXIT_CORRUPT_STREAM);
}

#[test]
fn error_malformed_header() {
    let dir = common::init_empty_store();
    write_raw_loose_object(dir.path(), MISSING_SHA1, &zlib(b"blob6hello"));

    common::odb(dir.path())
        .args(&["cat-file", "-t", MISSING_SHA1])
        .assert()
        .code(common::EXIT_MALFORMED_HEADER);
}

#[test]
fn error_invalid_size() {
    let dir = common::init_empty_store();
    write_raw_loose_object(dir.path(), MISSING_SHA1, &zlib(b"blob six\0hello\n"));

    common::odb(dir.path())
        .args(&["cat-file", "-s", MISSING_SHA1])
        .assert()
        .code(common::EXIT_MALFORMED_HEADER)
        .stderr(predicate::str::contains("six"));
}
