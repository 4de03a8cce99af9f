//! The `fqn:` dimension matcher, wrapping [`crate::fqn::node_is_match`] over
//! non-source nodes (models, tests, exposures, metrics, semantic models,
//! saved queries, unit tests -- everything but sources, which have their own
//! dotted `source:` dimension instead of an fqn-shaped name).

use crate::fqn::node_is_match;
use crate::iter::IncludedNodes;
use crate::manifest::{Manifest, ParsedNode, UniqueId};

fn is_versioned(target: &crate::manifest::SelectorTarget<'_>) -> bool {
    match target {
        crate::manifest::SelectorTarget::Parsed(ParsedNode::Model(m)) => m.is_versioned,
        _ => false,
    }
}

pub fn search(manifest: &Manifest, included: &IncludedNodes, selector: &str) -> Vec<UniqueId> {
    manifest
        .non_source_nodes(included)
        .filter(|(_, target)| node_is_match(selector, &target.common().fqn, is_versioned(target)))
        .map(|(id, _)| id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{NodeCommon, ResourceType, SingularTestNode};

    fn node(id: &str, fqn: &[&str]) -> (UniqueId, ParsedNode) {
        let uid = UniqueId::new(id);
        (
            uid.clone(),
            ParsedNode::SingularTest(SingularTestNode {
                common: NodeCommon {
                    unique_id: uid,
                    name: fqn.last().unwrap().to_string(),
                    package_name: fqn[0].to_string(),
                    original_file_path: String::new(),
                    resource_type: ResourceType::Test,
                    fqn: fqn.iter().map(|s| s.to_string()).collect(),
                    config: serde_json::json!({}),
                    tags: vec![],
                },
            }),
        )
    }

    #[test]
    fn glob_tail_matches_within_included() {
        let mut manifest = Manifest::new();
        let (id, n) = node("test.pkg.orders_not_null", &["pkg", "staging", "orders_not_null"]);
        manifest.nodes.insert(id.clone(), n);
        let mut included = IncludedNodes::new();
        included.insert(id.clone());

        pretty_assertions::assert_eq!(search(&manifest, &included, "pkg.staging.*"), vec![id.clone()]);
        assert!(search(&manifest, &included, "nope.*").is_empty());
    }

    #[test]
    fn excludes_ids_outside_included() {
        let mut manifest = Manifest::new();
        let (id, n) = node("test.pkg.orders_not_null", &["pkg", "orders_not_null"]);
        manifest.nodes.insert(id, n);
        let included = IncludedNodes::new();
        assert!(search(&manifest, &included, "orders_not_null").is_empty());
    }
}
