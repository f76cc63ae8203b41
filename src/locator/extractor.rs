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

use crate::archive::{ArchiveEntry, ResourceTree};
use crate::error::{LocatorError, Result};
use crate::platform::{PlatformTag, ToolName, file_ops};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// How many directory levels are extracted below the platform directory, and
/// searched below the output root. aapt2 is not statically linked and its
/// shared libraries may sit in subdirectories next to it.
pub const MAX_SEARCH_DEPTH: usize = 3;

/// Extracts the platform directory of `tree` into `output_root` and returns
/// the single `tool` binary found in it, marked executable.
///
/// Returns `Ok(None)` without touching the filesystem when the tree has no
/// entry for the platform.
pub fn extract_tool(
    tree: &mut dyn ResourceTree,
    platform: PlatformTag,
    tool: ToolName,
    output_root: &Path,
) -> Result<Option<PathBuf>> {
    let sub_path = platform.archive_sub_path();
    let Some(root) = tree.entry(&sub_path) else {
        log::debug!("Bundled archive has no {sub_path} directory");
        return Ok(None);
    };

    let files = collect_files(tree, &root, MAX_SEARCH_DEPTH)
        .map_err(|e| extraction_error(tool, format!("failed to list {sub_path}"), e))?;
    log::debug!(
        "Extracting {} files from {sub_path} to {}",
        files.len(),
        output_root.display()
    );

    for entry in &files {
        extract_entry(tree, entry, output_root)
            .map_err(|e| extraction_error(tool, format!("failed to extract {}", entry.path), e))?;
    }

    // The platform directory itself counts as the first level
    let candidates = find_candidates(output_root, tool).map_err(|e| {
        extraction_error(
            tool,
            format!("failed to search {}", output_root.display()),
            e,
        )
    })?;
    let tool_path = select_single(tool, output_root, candidates)?;

    file_ops::make_executable(&tool_path).map_err(|source| LocatorError::PermissionFailure {
        path: tool_path.clone(),
        source,
    })?;

    let tool_path = std::path::absolute(&tool_path)?;
    log::debug!("Extracted {tool} to {}", tool_path.display());
    Ok(Some(tool_path))
}

/// Walks `root` and returns the regular files at most `max_depth` levels
/// below it, in tree order.
fn collect_files(
    tree: &dyn ResourceTree,
    root: &ArchiveEntry,
    max_depth: usize,
) -> io::Result<Vec<ArchiveEntry>> {
    let mut files = Vec::new();
    let mut pending = vec![(root.clone(), 0usize)];

    while let Some((entry, depth)) = pending.pop() {
        if entry.is_dir {
            if depth < max_depth {
                // Reverse so entries come off the stack in sorted order
                for child in tree.children(&entry.path)?.into_iter().rev() {
                    pending.push((child, depth + 1));
                }
            }
            continue;
        }

        // Some archive readers hand out directory streams that look like
        // empty regular files. A zero-length entry is therefore treated as a
        // directory and skipped, even when the tree reports it as a file.
        if entry.len == 0 {
            log::trace!("Skipping zero-length entry {}", entry.path);
            continue;
        }

        files.push(entry);
    }

    Ok(files)
}

fn extract_entry(
    tree: &mut dyn ResourceTree,
    entry: &ArchiveEntry,
    output_root: &Path,
) -> io::Result<()> {
    let target = resolve_target(output_root, &entry.path)?;

    // Ensure all parent directories exist
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut reader = tree.open(&entry.path)?;
    // Never overwrite: the output directory is owned by this extraction
    let mut outfile = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)?;
    let copied = io::copy(&mut reader, &mut outfile)?;

    log::trace!("Extracted {} ({copied} bytes)", target.display());
    Ok(())
}

/// Maps an archive path onto `output_root`.
///
/// Leading separators are stripped first; joining an absolute path would
/// otherwise replace `output_root` entirely. Paths that still could leave
/// `output_root` are rejected.
fn resolve_target(output_root: &Path, entry_path: &str) -> io::Result<PathBuf> {
    let relative = Path::new(entry_path.trim_start_matches(['/', '\\']));

    for component in relative.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("archive entry would extract outside the output directory: {entry_path:?}"),
                ));
            }
        }
    }

    Ok(output_root.join(relative))
}

fn find_candidates(search_root: &Path, tool: ToolName) -> io::Result<Vec<PathBuf>> {
    if !search_root.is_dir() {
        return Ok(Vec::new());
    }

    let mut candidates = Vec::new();
    for entry in WalkDir::new(search_root)
        .max_depth(MAX_SEARCH_DEPTH)
        .sort_by_file_name()
    {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file() && tool.matches(entry.file_name()) {
            candidates.push(entry.into_path());
        }
    }
    Ok(candidates)
}

fn select_single(
    tool: ToolName,
    search_root: &Path,
    mut candidates: Vec<PathBuf>,
) -> Result<PathBuf> {
    match candidates.len() {
        0 => Err(LocatorError::ToolMissing {
            tool: tool.to_string(),
            searched: search_root.to_path_buf(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(LocatorError::AmbiguousTool {
            tool: tool.to_string(),
            candidates,
        }),
    }
}

fn extraction_error(tool: ToolName, message: String, source: io::Error) -> LocatorError {
    LocatorError::Extraction {
        tool: tool.to_string(),
        message,
        source,
    }
}
