// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Read-only access to the archive bundled with the running program.
//!
//! A release build carries its native tools as a zip archive, either appended
//! to the executable itself or shipped as a separate file. The lookup code
//! only needs to list, inspect and read entries, so it works against the
//! [`ResourceTree`] trait rather than the zip format directly.

mod zip_tree;

#[cfg(test)]
pub(crate) mod memory;

pub use zip_tree::ZipResourceTree;

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use zip::result::ZipError;

/// A file or directory inside a bundled archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path as the archive reports it, without a trailing separator.
    pub path: String,
    pub is_dir: bool,
    /// Uncompressed size in bytes; always 0 for directories.
    pub len: u64,
}

impl ArchiveEntry {
    pub fn file(path: impl Into<String>, len: u64) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
            len,
        }
    }

    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
            len: 0,
        }
    }
}

/// Minimal hierarchical view of packaged resources.
///
/// Paths use `/` as separator. Leading and trailing separators are ignored on
/// lookup, so `/linux`, `linux` and `linux/` name the same entry.
pub trait ResourceTree {
    /// Returns the entry at `path`, or `None` when nothing is stored there.
    fn entry(&self, path: &str) -> Option<ArchiveEntry>;

    /// Lists the direct children of the directory at `path`, sorted by path.
    fn children(&self, path: &str) -> io::Result<Vec<ArchiveEntry>>;

    /// Opens the file at `path` for reading.
    fn open(&mut self, path: &str) -> io::Result<Box<dyn Read + '_>>;
}

/// The zip tree backing a real bundle.
pub type BundleTree = ZipResourceTree<BufReader<File>>;

/// Where the bundled archive is read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BundleSource {
    /// The running executable, which release builds ship with a zip appended.
    #[default]
    CurrentExe,
    /// A standalone archive file.
    Archive(PathBuf),
}

impl BundleSource {
    /// Opens the bundle.
    ///
    /// Returns `Ok(None)` when there is no bundle to read: the archive file does
    /// not exist, or the file does not parse as a zip archive (a development
    /// build running from loose files). Other I/O failures are returned as
    /// errors.
    pub fn open(&self) -> io::Result<Option<BundleTree>> {
        let path = match self {
            BundleSource::CurrentExe => match std::env::current_exe() {
                Ok(path) => path,
                Err(e) => {
                    log::debug!("Cannot resolve the running executable: {e}");
                    return Ok(None);
                }
            },
            BundleSource::Archive(path) => path.clone(),
        };

        open_zip(&path)
    }

    pub fn describe(&self) -> String {
        match self {
            BundleSource::CurrentExe => match std::env::current_exe() {
                Ok(path) => format!("bundled archive in {}", path.display()),
                Err(_) => "bundled archive in the running executable".to_string(),
            },
            BundleSource::Archive(path) => format!("bundled archive {}", path.display()),
        }
    }
}

fn open_zip(path: &Path) -> io::Result<Option<BundleTree>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No bundle at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    match ZipResourceTree::new(BufReader::new(file)) {
        Ok(tree) => {
            log::debug!("Opened bundle {}", path.display());
            Ok(Some(tree))
        }
        Err(ZipError::Io(e)) if e.kind() != io::ErrorKind::UnexpectedEof => Err(e),
        // A stray end-of-directory signature in a plain binary can point past
        // the end of the file, so a short read counts as "no archive" too.
        Err(e) => {
            log::debug!("{} is not packaged as an archive: {e}", path.display());
            Ok(None)
        }
    }
}
