//! SHA-1 object IDs. The hash always covers the framed bytes
//! (header plus payload), never the payload alone.

use sha1::{Digest, Sha1};

use super::{codec, Id, ID_LEN};

/// Compute the ID of already-framed object bytes.
pub fn digest(framed: &[u8]) -> Id {
    let mut hasher = Sha1::new();
    hasher.update(framed);
    finish(hasher)
}

/// Compute the ID `payload` would have when framed as `type_tag`,
/// without building the framed buffer.
///
/// This is functionally equivalent to the
/// [`git hash-object`](https://git-scm.com/docs/git-hash-object) command
/// without the `-w` option that would write the object to the repo.
pub fn hash_object(type_tag: &str, payload: &[u8]) -> Id {
    let mut hasher = Sha1::new();
    hasher.update(codec::header(type_tag, payload.len()));
    hasher.update(payload);
    finish(hasher)
}

fn finish(hasher: Sha1) -> Id {
    let mut id = [0u8; ID_LEN];
    id.copy_from_slice(hasher.finalize().as_slice());
    Id::from(id)
}
