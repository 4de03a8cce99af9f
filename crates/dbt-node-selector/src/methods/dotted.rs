//! Dotted-name dimension matchers: `source`, `exposure`, `metric`,
//! `semantic_model`, `saved_query`, `unit_test`.

use glob::Pattern;

use crate::iter::IncludedNodes;
use crate::manifest::{Manifest, UniqueId};
use dbt_common::{ErrorCode, FsResult, err};

fn fnmatch(text: &str, pattern: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(text))
        .unwrap_or(false)
}

const GLOB: &str = "*";

struct NamedParts<'a> {
    package: &'a str,
    name: &'a str,
}

fn parse_named(selector: &str, kind: &str) -> FsResult<NamedParts<'_>> {
    let parts: Vec<&str> = selector.split('.').collect();
    match parts.as_slice() {
        [name] => Ok(NamedParts { package: GLOB, name }),
        [package, name] => Ok(NamedParts { package, name }),
        _ => err!(
            ErrorCode::SelectorError,
            "Invalid {} selector value \"{}\". Must be of the form `${{name}}` or `${{package}}.${{name}}`",
            kind,
            selector
        ),
    }
}

fn search_named<'a>(
    selector: &str,
    kind: &str,
    nodes: impl Iterator<Item = (&'a UniqueId, &'a crate::manifest::NodeCommon)>,
) -> FsResult<Vec<UniqueId>> {
    let parts = parse_named(selector, kind)?;
    Ok(nodes
        .filter(|(_, common)| {
            fnmatch(&common.package_name, parts.package) && fnmatch(&common.name, parts.name)
        })
        .map(|(id, _)| id.clone())
        .collect())
}

pub fn exposure(manifest: &Manifest, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
    search_named(
        selector,
        "exposure",
        manifest.exposures.iter().filter(|(id, _)| included.contains(*id)).map(|(id, n)| (id, &n.common)),
    )
}

pub fn metric(manifest: &Manifest, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
    search_named(
        selector,
        "metric",
        manifest.metrics.iter().filter(|(id, _)| included.contains(*id)).map(|(id, n)| (id, &n.common)),
    )
}

pub fn semantic_model(
    manifest: &Manifest,
    included: &IncludedNodes,
    selector: &str,
) -> FsResult<Vec<UniqueId>> {
    search_named(
        selector,
        "semantic model",
        manifest
            .semantic_models
            .iter()
            .filter(|(id, _)| included.contains(*id))
            .map(|(id, n)| (id, &n.common)),
    )
}

pub fn saved_query(
    manifest: &Manifest,
    included: &IncludedNodes,
    selector: &str,
) -> FsResult<Vec<UniqueId>> {
    search_named(
        selector,
        "saved query",
        manifest
            .saved_queries
            .iter()
            .filter(|(id, _)| included.contains(*id))
            .map(|(id, n)| (id, &n.common)),
    )
}

pub fn unit_test(manifest: &Manifest, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
    search_named(
        selector,
        "unit test",
        manifest
            .unit_tests
            .iter()
            .filter(|(id, _)| included.contains(*id))
            .map(|(id, n)| (id, &n.common)),
    )
}

pub fn source(manifest: &Manifest, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
    let parts: Vec<&str> = selector.split('.').collect();
    let (target_package, target_source, target_table) = match parts.as_slice() {
        [source] => (GLOB, *source, GLOB),
        [source, table] => (GLOB, *source, *table),
        [package, source, table] => (*package, *source, *table),
        _ => {
            return err!(
                ErrorCode::SelectorError,
                "Invalid source selector value \"{}\". Sources must be of the form `${{source_name}}`, `${{source_name}}.${{table_name}}`, or `${{package_name}}.${{source_name}}.${{table_name}}`",
                selector
            );
        }
    };

    Ok(manifest
        .sources
        .iter()
        .filter(|(id, _)| included.contains(*id))
        .filter(|(_, node)| {
            fnmatch(&node.common.package_name, target_package)
                && fnmatch(&node.source_name, target_source)
                && fnmatch(&node.common.name, target_table)
        })
        .map(|(id, _)| id.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{NodeCommon, ResourceType, SourceNode};

    fn source_node(id: &str, package: &str, source_name: &str, table: &str) -> (UniqueId, SourceNode) {
        (
            UniqueId::new(id),
            SourceNode {
                common: NodeCommon {
                    unique_id: UniqueId::new(id),
                    name: table.to_string(),
                    package_name: package.to_string(),
                    original_file_path: String::new(),
                    resource_type: ResourceType::Source,
                    fqn: vec![],
                    config: serde_json::json!({}),
                    tags: vec![],
                },
                source_name: source_name.to_string(),
            },
        )
    }

    #[test]
    fn source_dotted_forms() {
        let mut manifest = Manifest::new();
        let (id, node) = source_node("source.analytics.stripe.charges", "analytics", "stripe", "charges");
        manifest.sources.insert(id.clone(), node);
        let mut included = IncludedNodes::new();
        included.insert(id.clone());

        assert_eq!(source(&manifest, &included, "stripe.charges").unwrap(), vec![id.clone()]);
        assert_eq!(
            source(&manifest, &included, "analytics.stripe.charges").unwrap(),
            vec![id.clone()]
        );
        assert_eq!(source(&manifest, &included, "stripe").unwrap(), vec![id]);
        assert!(source(&manifest, &included, "a.b.c.d").is_err());
    }
}
