//! The `version:` dimension: `latest`, `prerelease`, `old`, `none`.

use crate::iter::IncludedNodes;
use crate::manifest::{Manifest, ParsedNode, UniqueId};
use dbt_common::{ErrorCode, FsResult, err};

pub fn search(manifest: &Manifest, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
    let mut out = Vec::new();
    for (id, node) in manifest.parsed_nodes(included) {
        let ParsedNode::Model(model) = node else {
            continue;
        };
        let matches = match selector {
            "latest" => model.is_latest_version,
            "prerelease" => match (&model.version, &model.latest_version) {
                (Some(v), Some(latest)) => v > latest,
                _ => false,
            },
            "old" => match (&model.version, &model.latest_version) {
                (Some(v), Some(latest)) => v < latest,
                _ => false,
            },
            "none" => model.version.is_none(),
            other => {
                return err!(
                    ErrorCode::SelectorError,
                    "Invalid version type selector {}: expected one of: \"latest\", \"prerelease\", \"old\", or \"none\"",
                    other
                );
            }
        };
        if matches {
            out.push(id.clone());
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{Access, DependsOn, ModelNode, ModelVersion, NodeCommon, ResourceType};

    fn model(id: &str, version: Option<&str>, latest: Option<&str>, is_latest: bool) -> (UniqueId, ParsedNode) {
        let uid = UniqueId::new(id);
        (
            uid.clone(),
            ParsedNode::Model(ModelNode {
                common: NodeCommon {
                    unique_id: uid,
                    name: id.to_string(),
                    package_name: "pkg".to_string(),
                    original_file_path: format!("models/{id}.sql"),
                    resource_type: ResourceType::Model,
                    fqn: vec!["pkg".to_string(), id.to_string()],
                    config: serde_json::json!({}),
                    tags: vec![],
                },
                access: Access::Protected,
                version: version.map(ModelVersion::new),
                latest_version: latest.map(ModelVersion::new),
                is_latest_version: is_latest,
                is_versioned: version.is_some(),
                depends_on: DependsOn::default(),
                patch_path: None,
                raw_code: String::new(),
                persisted_description: None,
                database_representation: String::new(),
                contract_checksum: None,
            }),
        )
    }

    #[test]
    fn numeric_ordering() {
        let mut manifest = Manifest::new();
        let (id, node) = model("orders.v1", Some("1"), Some("2"), false);
        manifest.nodes.insert(id.clone(), node);
        let mut included = IncludedNodes::new();
        included.insert(id.clone());

        assert_eq!(search(&manifest, &included, "old").unwrap(), vec![id]);
    }

    #[test]
    fn invalid_selector_errors() {
        let manifest = Manifest::new();
        let included = IncludedNodes::new();
        assert!(search(&manifest, &included, "bogus").is_err());
    }
}
