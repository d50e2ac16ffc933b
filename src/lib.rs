//! A content-addressed store for git-style loose objects.
//!
//! Content is framed with a `<type> <size>\0` header, identified by the SHA-1
//! of the framed bytes, and kept zlib-compressed under
//! `.git/objects/<2 hex>/<38 hex>`. Tree objects can be decoded into their
//! entries.
//!
//! The [`object`] module holds the pure codecs (identifier, framing, hashing,
//! compression, tree entries). The [`repo`] module persists objects through
//! the [`repo::Repo`] trait, with [`repo::OnDisk`] as the local file system
//! implementation.

pub mod object;
pub mod repo;
