use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

pub const HELLO_CONTENT: &[u8; 6] = b"hello\n";
pub const HELLO_SHA1: &str = "ce013625030ba8dba906f756967f9e9ca394464a";

// Exit codes, one per class of store error.
pub const EXIT_INVALID_ID: i32 = 2;
pub const EXIT_NOT_FOUND: i32 = 3;
pub const EXIT_CORRUPT_STREAM: i32 = 4;
pub const EXIT_MALFORMED_HEADER: i32 = 5;
pub const EXIT_MALFORMED_TREE: i32 = 6;

/// A `loose-odb` command already pointed at `path` via `--work-dir`.
pub fn odb(path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("loose-odb").unwrap();
    cmd.arg("--work-dir").arg(path);
    cmd
}

/// Create a temporary directory holding an empty store.
/// The directory is deleted when the returned value is dropped.
pub fn init_empty_store() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    odb(dir.path()).arg("init").assert().success();
    dir
}

/// Store `content` as a blob and return its ID as printed by `hash-object`.
#[allow(dead_code)]
pub fn write_blob(path: &Path, content: &[u8]) -> String {
    let output = odb(path)
        .args(&["hash-object", "-w", "--stdin"])
        .write_stdin(content.to_vec())
        .output()
        .unwrap();

    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim_end().to_string()
}

/// Build a packed tree entry from its textual parts.
#[allow(dead_code)]
pub fn tree_entry(mode: &str, name: &str, hex_id: &str) -> Vec<u8> {
    let mut entry = format!("{} {}\0", mode, name).into_bytes();
    for pair in hex_id.as_bytes().chunks(2) {
        let pair = std::str::from_utf8(pair).unwrap();
        entry.push(u8::from_str_radix(pair, 16).unwrap());
    }
    entry
}
