//! Represents the git concept of an "object" which is a tuple of
//! object type and binary data identified by the hash of the framed data.

pub mod codec;
pub mod compression;

mod error;
pub use error::{Error, Result};

mod file_mode;
pub use file_mode::FileMode;

pub mod hasher;

mod id;
pub use id::{Id, ParseIdError, HEX_LEN, ID_LEN};

mod kind;
pub use kind::{Kind, ParseKindError};

pub(crate) mod parse_utils;

mod tree;
pub use tree::{encode_tree, parse_tree, TreeEntry};

/// Describes a single object read from (or about to be written to) a
/// repository: a type tag plus its payload.
///
/// The type tag is kept as text so that tags outside the four git kinds
/// survive a round trip.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Object {
    type_tag: String,
    payload: Vec<u8>,
}

impl Object {
    /// Create a new Object.
    pub fn new<T, P>(type_tag: T, payload: P) -> Object
    where
        T: Into<String>,
        P: Into<Vec<u8>>,
    {
        Object {
            type_tag: type_tag.into(),
            payload: payload.into(),
        }
    }

    /// Create a new blob.
    pub fn blob<P: Into<Vec<u8>>>(payload: P) -> Object {
        Object::new(Kind::Blob.as_str(), payload)
    }

    /// Return the type tag of the object.
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// Return the kind of the object, if the tag is one git knows.
    pub fn kind(&self) -> Option<Kind> {
        self.type_tag.parse().ok()
    }

    /// Return the content of the object.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Consume the object and return its content.
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    /// Return the size (in bytes) of the object.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// Returns true if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Computes the object's ID from its content, size, and type.
    pub fn id(&self) -> Id {
        hasher::hash_object(&self.type_tag, &self.payload)
    }

    /// The framed bytes (`<type> <size>\0<payload>`) that get hashed and stored.
    pub fn to_framed(&self) -> Vec<u8> {
        codec::encode(&self.type_tag, &self.payload)
    }
}
