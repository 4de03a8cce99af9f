//! The `path:` dimension: filesystem glob expansion under the project root.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::iter::IncludedNodes;
use crate::manifest::{Manifest, UniqueId};
use dbt_common::{ErrorCode, FsResult, err};

/// Expands `selector` as a glob relative to `project_root` and returns the
/// matching paths, relative to the root.
fn expand_paths(project_root: &Path, selector: &str) -> FsResult<HashSet<PathBuf>> {
    let pattern = project_root.join(selector);
    let pattern_str = pattern.to_string_lossy().into_owned();

    let entries = glob::glob(&pattern_str).map_err(|e| {
        dbt_common::fs_err!(ErrorCode::SelectorError, "Invalid path selector \"{}\": {}", selector, e)
    })?;

    let mut paths = HashSet::new();
    for entry in entries {
        match entry {
            Ok(path) => {
                if let Ok(rel) = path.strip_prefix(project_root) {
                    paths.insert(rel.to_path_buf());
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "path: glob entry could not be read, skipping");
            }
        }
    }
    Ok(paths)
}

pub fn search(
    manifest: &Manifest,
    included: &IncludedNodes,
    project_root: Option<&Path>,
    selector: &str,
) -> FsResult<Vec<UniqueId>> {
    let cwd;
    let root = match project_root {
        Some(root) => root,
        None => {
            cwd = std::env::current_dir()
                .map_err(|e| dbt_common::fs_err!(ErrorCode::IoError, "Could not resolve cwd: {}", e))?;
            &cwd
        }
    };

    let paths = expand_paths(root, selector)?;

    let mut out = Vec::new();
    for (id, node) in manifest.all_nodes(included) {
        let common = node.common();
        let ofp = Path::new(&common.original_file_path);

        let matched_path = paths.contains(ofp);
        let matched_patch = node
            .patch_path()
            .map(|p| match p.split_once("://") {
                Some((_, rel)) => paths.contains(Path::new(rel)),
                None => paths.contains(Path::new(p)),
            })
            .unwrap_or(false);
        let matched_ancestor = ofp.ancestors().skip(1).any(|p| paths.contains(p));

        if matched_path || matched_patch || matched_ancestor {
            out.push(id.clone());
        }
    }
    Ok(out)
}
