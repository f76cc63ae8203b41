use super::{ArchiveEntry, ResourceTree};
use std::collections::BTreeMap;
use std::io::{self, Read, Seek};
use zip::ZipArchive;
use zip::result::ZipResult;

struct Node {
    entry: ArchiveEntry,
    /// Index in the zip central directory; `None` for directories, including
    /// ones only implied by the paths of their descendants.
    index: Option<usize>,
}

/// [`ResourceTree`] over a zip archive.
///
/// The central directory is indexed once on construction. Zip files are not
/// required to carry explicit directory entries, so every ancestor of a stored
/// file is recorded as a directory as well.
pub struct ZipResourceTree<R: Read + Seek> {
    archive: ZipArchive<R>,
    nodes: BTreeMap<String, Node>,
}

impl<R: Read + Seek> ZipResourceTree<R> {
    pub fn new(reader: R) -> ZipResult<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut nodes = BTreeMap::new();

        for index in 0..archive.len() {
            let file = archive.by_index_raw(index)?;
            let name = file.name().trim_end_matches('/').to_string();
            let is_dir = file.is_dir();
            let len = file.size();
            drop(file);

            let key = normalize(&name).to_string();
            if key.is_empty() {
                continue;
            }

            let mut ancestor = key.as_str();
            while let Some((parent, _)) = ancestor.rsplit_once('/') {
                nodes.entry(parent.to_string()).or_insert_with(|| Node {
                    entry: ArchiveEntry::dir(implied_path(&name, &key, parent)),
                    index: None,
                });
                ancestor = parent;
            }

            let node = if is_dir {
                Node {
                    entry: ArchiveEntry::dir(name),
                    index: None,
                }
            } else {
                Node {
                    entry: ArchiveEntry::file(name, len),
                    index: Some(index),
                }
            };
            nodes.insert(key, node);
        }

        log::trace!("Indexed {} zip entries", nodes.len());
        Ok(Self { archive, nodes })
    }
}

impl<R: Read + Seek> ResourceTree for ZipResourceTree<R> {
    fn entry(&self, path: &str) -> Option<ArchiveEntry> {
        self.nodes.get(normalize(path)).map(|node| node.entry.clone())
    }

    fn children(&self, path: &str) -> io::Result<Vec<ArchiveEntry>> {
        let key = normalize(path);
        match self.nodes.get(key) {
            Some(node) if node.entry.is_dir => {}
            Some(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("'{path}' is not a directory"),
                ));
            }
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("'{path}' not found in archive"),
                ));
            }
        }

        let prefix = format!("{key}/");
        Ok(self
            .nodes
            .range(prefix.clone()..)
            .take_while(|(k, _)| k.starts_with(&prefix))
            .filter(|(k, _)| !k[prefix.len()..].contains('/'))
            .map(|(_, node)| node.entry.clone())
            .collect())
    }

    fn open(&mut self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        let index = self
            .nodes
            .get(normalize(path))
            .and_then(|node| node.index)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("'{path}' is not a file in archive"),
                )
            })?;

        Ok(Box::new(self.archive.by_index(index)?))
    }
}

fn normalize(path: &str) -> &str {
    path.trim_matches('/')
}

/// Path for a directory implied by `name`, keeping whatever leading separator
/// the stored entry used.
fn implied_path(name: &str, key: &str, parent_key: &str) -> String {
    let leading = &name[..name.len() - key.len()];
    format!("{leading}{parent_key}")
}
