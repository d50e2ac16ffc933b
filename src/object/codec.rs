//! Framing of object content as `<type> <size>\0<payload>`.

use std::str;

use super::{parse_utils, Error, Result};

/// The parts of a framed object, borrowed from the framed buffer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Framed<'a> {
    /// Type tag from the header (`blob`, `tree`, ...).
    pub type_tag: &'a str,

    /// Size as written in the header. Not checked against `payload.len()`.
    pub declared_size: usize,

    /// Everything after the header's NUL terminator.
    pub payload: &'a [u8],
}

/// Build the `<type> <size>\0` header for a payload of `len` bytes.
pub fn header(type_tag: &str, len: usize) -> Vec<u8> {
    let size = len.to_string();

    let mut header = Vec::with_capacity(type_tag.len() + size.len() + 2);
    header.extend_from_slice(type_tag.as_bytes());
    header.push(b' ');
    header.extend_from_slice(size.as_bytes());
    header.push(0);
    header
}

/// Frame `payload` with its header.
///
/// Any type tag is accepted; callers that care should check it against
/// [`Kind`](super::Kind) first.
pub fn encode(type_tag: &str, payload: &[u8]) -> Vec<u8> {
    let mut framed = header(type_tag, payload.len());
    framed.reserve_exact(payload.len());
    framed.extend_from_slice(payload);
    framed
}

/// Split framed bytes back into type tag, declared size, and payload.
///
/// The header ends at the first NUL byte. The declared size is parsed but
/// not compared against the payload length.
pub fn decode(framed: &[u8]) -> Result<Framed<'_>> {
    let nul = parse_utils::find_nul(framed, 0).ok_or(Error::MalformedHeader)?;

    let (type_tag, size) =
        parse_utils::split_once(&framed[..nul], b' ').ok_or(Error::MalformedHeader)?;

    if type_tag.is_empty() {
        return Err(Error::MalformedHeader);
    }
    let type_tag = str::from_utf8(type_tag).map_err(|_| Error::MalformedHeader)?;

    Ok(Framed {
        type_tag,
        declared_size: parse_size(size)?,
        payload: &framed[nul + 1..],
    })
}

fn parse_size(size: &[u8]) -> Result<usize> {
    let invalid = || Error::InvalidSize(String::from_utf8_lossy(size).into_owned());

    // `usize::from_str` would also take a leading `+`.
    if size.is_empty() || !size.iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }

    str::from_utf8(size)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(invalid)
}
