//! An object store that keeps content on the local file system.
//!
//! It intentionally uses the same `.git/objects` loose object layout as
//! command-line git so that results may be compared for similar operations.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, trace};

use super::{Error, Repo, Result};
use crate::object::{codec, compression, hasher, Id, Object};

/// Implementation of `Repo` that stores content on the local file system.
///
/// The store root is always passed in explicitly; nothing is discovered from
/// the process's current directory.
#[derive(Debug)]
pub struct OnDisk {
    work_dir: PathBuf,
    git_dir: PathBuf,
}

impl OnDisk {
    /// Open an existing on-disk store.
    ///
    /// `work_dir` should be the top-level working directory. A `.git` directory should
    /// exist at this path. Use the `init` function to create an empty store if
    /// necessary.
    pub fn new(work_dir: &Path) -> Result<Self> {
        let work_dir = work_dir.to_path_buf();
        if !work_dir.exists() {
            return Err(Error::WorkDirDoesntExist(work_dir));
        }

        let git_dir = work_dir.join(".git");
        if !git_dir.exists() {
            return Err(Error::GitDirDoesntExist(git_dir));
        }

        Ok(OnDisk { work_dir, git_dir })
    }

    /// Creates a new, empty store on the local file system.
    ///
    /// Lays out `.git/objects`, `.git/refs`, and a `HEAD` pointing at
    /// `refs/heads/main`.
    pub fn init(work_dir: &Path) -> Result<Self> {
        let git_dir = work_dir.join(".git");
        if git_dir.exists() {
            return Err(Error::GitDirShouldntExist(git_dir));
        }

        fs::create_dir_all(&git_dir)?;

        create_objects_dir(&git_dir)?;
        create_refs_dir(&git_dir)?;
        create_head(&git_dir)?;

        debug!(git_dir = %git_dir.display(), "initialized object store");

        Ok(OnDisk {
            work_dir: work_dir.to_path_buf(),
            git_dir,
        })
    }

    /// Return the working directory for this store.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    /// Return the path to the `.git` directory.
    pub fn git_dir(&self) -> &Path {
        self.git_dir.as_path()
    }

    /// Return the path to the `.git/objects` directory.
    pub fn objects_dir(&self) -> PathBuf {
        self.git_dir.join("objects")
    }

    /// Where the loose object with this ID lives:
    /// `objects/<first 2 hex digits>/<remaining 38>`.
    pub fn loose_object_path(&self, id: &Id) -> PathBuf {
        let (dir, file) = id.loose_path_parts();
        let mut path = self.objects_dir();
        path.push(dir);
        path.push(file);
        path
    }
}

impl Repo for OnDisk {
    fn put_loose_object(&mut self, object: &Object) -> Result<Id> {
        let framed = codec::encode(object.type_tag(), object.payload());
        let id = hasher::digest(&framed);

        let (dir, file) = id.loose_path_parts();
        let fan_out_dir = self.objects_dir().join(dir);
        let path = fan_out_dir.join(file);

        if path.is_file() {
            trace!(%id, "loose object already present");
            return Ok(id);
        }

        fs::create_dir_all(&fan_out_dir)?;

        // Readers must never see a partially written object, so write beside
        // the final path and rename into place.
        let temp = NamedTempFile::new_in(&fan_out_dir)?;
        let temp = compression::compress_to(temp, &framed)?;
        make_read_only(&temp)?;
        temp.persist(&path).map_err(|err| err.error)?;

        debug!(%id, type_tag = object.type_tag(), len = object.len(), "wrote loose object");
        Ok(id)
    }

    fn get_loose_object(&self, id: &Id) -> Result<Object> {
        let path = self.loose_object_path(id);

        let compressed = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                trace!(%id, "loose object not found");
                return Err(Error::NotFound(*id));
            }
            Err(err) => return Err(err.into()),
        };

        let framed = compression::decompress(&compressed)?;
        let decoded = codec::decode(&framed)?;

        if decoded.declared_size != decoded.payload.len() {
            debug!(
                %id,
                declared = decoded.declared_size,
                actual = decoded.payload.len(),
                "loose object size mismatch"
            );
        }

        Ok(Object::new(decoded.type_tag, decoded.payload))
    }

    fn has_loose_object(&self, id: &Id) -> bool {
        self.loose_object_path(id).is_file()
    }
}

#[cfg(unix)]
fn make_read_only(file: &NamedTempFile) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.as_file()
        .set_permissions(fs::Permissions::from_mode(0o444))
}

#[cfg(not(unix))]
fn make_read_only(file: &NamedTempFile) -> io::Result<()> {
    let mut permissions = file.as_file().metadata()?.permissions();
    permissions.set_readonly(true);
    file.as_file().set_permissions(permissions)
}

fn create_head(git_dir: &Path) -> Result<()> {
    let head_path = git_dir.join("HEAD");
    let head_txt = "ref: refs/heads/main\n";

    fs::write(head_path, head_txt).map_err(|e| e.into())
}

fn create_objects_dir(git_dir: &Path) -> Result<()> {
    let objects_dir = git_dir.join("objects");
    fs::create_dir_all(&objects_dir).map_err(|e| e.into())
}

fn create_refs_dir(git_dir: &Path) -> Result<()> {
    let refs_dir = git_dir.join("refs");
    fs::create_dir_all(&refs_dir).map_err(|e| e.into())
}
