//! Represents an abstract git object store.
//!
//! ## Design Goals
//!
//! Objects may be stored by different mechanisms. The crate includes
//! support for local on-disk stores (see `loose_odb::repo::on_disk`), but
//! you could envision objects stored entirely in memory, or on a remote
//! file system or database.

mod error;
pub use error::{Error, Result};

pub mod on_disk;
pub use on_disk::OnDisk;

use crate::object::{parse_tree, Id, Kind, Object, TreeEntry};

/// A struct that implements the `Repo` trait represents a particular mechanism
/// for storing and accessing git objects.
///
/// The required methods on this trait represent the most primitive operations
/// which must be defined for a given storage architecture.
///
/// The provided methods build on those to offer the common read paths,
/// regardless of storage mechanism.
pub trait Repo {
    /// Store an object and return its ID.
    ///
    /// Storing an object that is already present is a successful no-op.
    fn put_loose_object(&mut self, object: &Object) -> Result<Id>;

    /// Fetch and decode the object with the given ID.
    fn get_loose_object(&self, id: &Id) -> Result<Object>;

    /// Returns true if an object with this ID is stored. Does not decode it.
    fn has_loose_object(&self, id: &Id) -> bool;

    /// Fetch an object given the 40-digit hex form of its ID.
    fn read_object(&self, hex_id: &str) -> Result<Object> {
        let id = Id::from_hex(hex_id)?;
        self.get_loose_object(&id)
    }

    /// Fetch a tree object and decode its entries.
    fn read_tree(&self, id: &Id) -> Result<Vec<TreeEntry>> {
        let object = self.get_loose_object(id)?;
        if object.kind() != Some(Kind::Tree) {
            return Err(Error::NotATree {
                id: *id,
                type_tag: object.type_tag().to_string(),
            });
        }

        Ok(parse_tree(object.payload())?)
    }
}
