//! Packed tree entries: `<octal mode> <name>\0<20-byte object ID>`, repeated
//! back-to-back with no padding.

use std::borrow::Cow;
use std::str;

use super::{parse_utils, Error, FileMode, Id, Result, ID_LEN};

/// One named child of a tree object.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeEntry {
    mode: u32,
    name: Vec<u8>,
    id: Id,
}

impl TreeEntry {
    /// Create an entry from a numeric mode (as written in octal, e.g.
    /// `0o100644`), a name, and the child's object ID.
    pub fn new<N: Into<Vec<u8>>>(mode: u32, name: N, id: Id) -> TreeEntry {
        TreeEntry {
            mode,
            name: name.into(),
            id,
        }
    }

    /// The numeric mode exactly as stored.
    pub fn mode(&self) -> u32 {
        self.mode
    }

    /// The symbolic mode, or `None` if the stored mode isn't one git recognizes.
    pub fn file_mode(&self) -> Option<FileMode> {
        FileMode::from_value(self.mode)
    }

    /// The entry name as raw bytes. Git does not require names to be UTF-8.
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// The entry name, with invalid UTF-8 replaced.
    pub fn name_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    /// ID of the object this entry points at.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Append this entry's packed form to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(format!("{:o}", self.mode).as_bytes());
        out.push(b' ');
        out.extend_from_slice(&self.name);
        out.push(0);
        out.extend_from_slice(self.id.as_bytes());
    }
}

/// Decode every entry in a tree payload, in stored order.
///
/// The payload must be an exact concatenation of whole entries. Anything
/// left over that cannot form a complete entry is reported as
/// [`Error::TruncatedEntry`] rather than skipped.
pub fn parse_tree(payload: &[u8]) -> Result<Vec<TreeEntry>> {
    let mut entries = Vec::new();
    let mut cursor = 0;

    while cursor < payload.len() {
        let (entry, next) = parse_entry(payload, cursor)?;
        entries.push(entry);
        cursor = next;
    }

    Ok(entries)
}

/// Pack entries into a tree payload. Entries are written in the order given.
pub fn encode_tree(entries: &[TreeEntry]) -> Vec<u8> {
    let mut out = Vec::new();
    for entry in entries {
        entry.write_to(&mut out);
    }
    out
}

// Parses the entry starting at `start` and returns it along with the offset
// just past its object ID.
fn parse_entry(payload: &[u8], start: usize) -> Result<(TreeEntry, usize)> {
    let nul = parse_utils::find_nul(payload, start).ok_or(Error::TruncatedEntry { offset: start })?;

    let (mode, name) = parse_utils::split_once(&payload[start..nul], b' ')
        .ok_or(Error::MalformedEntry { offset: start })?;
    let mode = parse_mode(mode).ok_or(Error::MalformedEntry { offset: start })?;

    let id_end = nul + 1 + ID_LEN;
    if id_end > payload.len() {
        return Err(Error::TruncatedEntry { offset: start });
    }

    let id = Id::new(&payload[nul + 1..id_end]).map_err(|_| Error::TruncatedEntry { offset: start })?;

    Ok((TreeEntry::new(mode, name, id), id_end))
}

fn parse_mode(mode: &[u8]) -> Option<u32> {
    if mode.is_empty() || !mode.iter().all(|b| (b'0'..=b'7').contains(b)) {
        return None;
    }

    str::from_utf8(mode)
        .ok()
        .and_then(|m| u32::from_str_radix(m, 8).ok())
}
