//! The single-field glob/literal dimension matchers: `tag`, `group`,
//! `access`, `package`, `file`, `resource_type`.

use std::path::Path;
use std::str::FromStr;

use glob::Pattern;

use crate::iter::IncludedNodes;
use crate::manifest::{Manifest, ResourceType, UniqueId};
use dbt_common::{ErrorCode, FsResult, err};

fn fnmatch(text: &str, pattern: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(text))
        .unwrap_or(false)
}

pub fn tag(manifest: &Manifest, included: &IncludedNodes, selector: &str) -> Vec<UniqueId> {
    manifest
        .all_nodes(included)
        .filter(|(_, node)| node.common().tags.iter().any(|t| fnmatch(t, selector)))
        .map(|(id, _)| id.clone())
        .collect()
}

pub fn group(manifest: &Manifest, included: &IncludedNodes, selector: &str) -> Vec<UniqueId> {
    manifest
        .groupable_nodes(included)
        .filter(|(_, node)| {
            node.common()
                .config
                .get("group")
                .and_then(|v| v.as_str())
                .is_some_and(|g| fnmatch(g, selector))
        })
        .map(|(id, _)| id.clone())
        .collect()
}

pub fn access(manifest: &Manifest, included: &IncludedNodes, selector: &str) -> Vec<UniqueId> {
    manifest
        .parsed_nodes(included)
        .filter_map(|(id, node)| node.as_model().map(|m| (id, m)))
        .filter(|(_, model)| model.access.to_string() == selector)
        .map(|(id, _)| id.clone())
        .collect()
}

pub fn package(manifest: &Manifest, included: &IncludedNodes, selector: &str) -> Vec<UniqueId> {
    let selector = if selector == "this" {
        manifest.project_name.as_deref().unwrap_or(selector)
    } else {
        selector
    };
    manifest
        .all_nodes(included)
        .filter(|(_, node)| fnmatch(&node.common().package_name, selector))
        .map(|(id, _)| id.clone())
        .collect()
}

pub fn file(manifest: &Manifest, included: &IncludedNodes, selector: &str) -> Vec<UniqueId> {
    manifest
        .all_nodes(included)
        .filter(|(_, node)| {
            let path = Path::new(&node.common().original_file_path);
            let name = path.file_name().and_then(|n| n.to_str());
            let stem = path.file_stem().and_then(|n| n.to_str());
            name.is_some_and(|n| fnmatch(n, selector)) || stem.is_some_and(|s| fnmatch(s, selector))
        })
        .map(|(id, _)| id.clone())
        .collect()
}

pub fn resource_type(
    manifest: &Manifest,
    included: &IncludedNodes,
    selector: &str,
) -> FsResult<Vec<UniqueId>> {
    let Ok(target) = ResourceType::from_str(selector) else {
        return err!(
            ErrorCode::SelectorError,
            "Invalid resource_type selector \"{}\"",
            selector
        );
    };
    Ok(manifest
        .all_nodes(included)
        .filter(|(_, node)| node.common().resource_type == target)
        .map(|(id, _)| id.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_type_rejects_unknown() {
        let manifest = Manifest::new();
        let included = IncludedNodes::new();
        assert!(resource_type(&manifest, &included, "not-a-kind").is_err());
    }

    #[test]
    fn empty_included_yields_empty() {
        let manifest = Manifest::new();
        let included = IncludedNodes::new();
        assert!(tag(&manifest, &included, "*").is_empty());
        assert!(package(&manifest, &included, "*").is_empty());
    }
}
