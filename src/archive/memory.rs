//! In-memory [`ResourceTree`] for exercising walk logic without building zips.

use super::{ArchiveEntry, ResourceTree};
use std::collections::BTreeMap;
use std::io::{self, Cursor, Read};

/// Entries are stored exactly as given, leading separators included. Parent
/// directories are not implied; declare them with [`Self::with_dir`].
#[derive(Default)]
pub(crate) struct MemoryResourceTree {
    nodes: BTreeMap<String, (ArchiveEntry, Vec<u8>)>,
}

impl MemoryResourceTree {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_dir(mut self, path: &str) -> Self {
        self.nodes.insert(
            path.trim_matches('/').to_string(),
            (ArchiveEntry::dir(path), Vec::new()),
        );
        self
    }

    pub(crate) fn with_file(mut self, path: &str, contents: &[u8]) -> Self {
        self.nodes.insert(
            path.trim_matches('/').to_string(),
            (
                ArchiveEntry::file(path, contents.len() as u64),
                contents.to_vec(),
            ),
        );
        self
    }
}

impl ResourceTree for MemoryResourceTree {
    fn entry(&self, path: &str) -> Option<ArchiveEntry> {
        self.nodes
            .get(path.trim_matches('/'))
            .map(|(entry, _)| entry.clone())
    }

    fn children(&self, path: &str) -> io::Result<Vec<ArchiveEntry>> {
        let prefix = format!("{}/", path.trim_matches('/'));
        Ok(self
            .nodes
            .iter()
            .filter(|(k, _)| k.starts_with(&prefix) && !k[prefix.len()..].contains('/'))
            .map(|(_, (entry, _))| entry.clone())
            .collect())
    }

    fn open(&mut self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        match self.nodes.get(path.trim_matches('/')) {
            Some((entry, contents)) if !entry.is_dir => Ok(Box::new(Cursor::new(contents.as_slice()))),
            _ => Err(io::Error::new(io::ErrorKind::NotFound, path.to_string())),
        }
    }
}
