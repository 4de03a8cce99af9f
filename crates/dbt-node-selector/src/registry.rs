//! Maps a [`MethodName`] to the matcher that implements it.
//!
//! The registry is the crate's single entry point: the expression evaluator
//! (out of scope here) calls [`MethodRegistry::get_method`] once per atomic
//! selector term and invokes [`SelectorMethod::search`] on the result.

use std::path::Path;

use dbt_common::node_selector::MethodName;
use dbt_common::{FsResult, not_implemented_err};

use crate::manifest::{Manifest, PreviousState};
use crate::methods::{
    AccessMethod, ConfigMethod, ExposureMethod, FileMethod, FqnMethod, GroupMethod, MetricMethod,
    PackageMethod, PathMethod, ResourceTypeMethod, ResultMethod, SavedQueryMethod, SelectorMethod,
    SemanticModelMethod, SourceMethod, SourceStatusMethod, StateMethod, TagMethod, TestNameMethod,
    TestTypeMethod, UnitTestMethod, VersionMethod,
};

pub struct MethodRegistry<'a> {
    manifest: &'a Manifest,
    previous_state: Option<&'a PreviousState>,
    project_root: Option<&'a Path>,
}

impl<'a> MethodRegistry<'a> {
    pub fn new(
        manifest: &'a Manifest,
        previous_state: Option<&'a PreviousState>,
        project_root: Option<&'a Path>,
    ) -> Self {
        Self {
            manifest,
            previous_state,
            project_root,
        }
    }

    /// Constructs the matcher for `name`, closing over whatever context it
    /// needs (method arguments, previous state, project root). `Column` is
    /// the only `MethodName` variant with no constructor here -- it names an
    /// out-of-scope, in-table column selector, and reaching this registry
    /// with it is an internal error, since the expression parser is
    /// expected to have validated the method name already.
    pub fn get_method(
        &self,
        name: MethodName,
        method_args: &[String],
    ) -> FsResult<Box<dyn SelectorMethod + 'a>> {
        let manifest = self.manifest;
        let previous_state = self.previous_state;
        let project_root = self.project_root;

        let method: Box<dyn SelectorMethod + 'a> = match name {
            MethodName::Fqn => Box::new(FqnMethod { manifest }),
            MethodName::Tag => Box::new(TagMethod { manifest }),
            MethodName::Group => Box::new(GroupMethod { manifest }),
            MethodName::Access => Box::new(AccessMethod { manifest }),
            MethodName::Package => Box::new(PackageMethod { manifest }),
            MethodName::File => Box::new(FileMethod { manifest }),
            MethodName::ResourceType => Box::new(ResourceTypeMethod { manifest }),
            MethodName::Source => Box::new(SourceMethod { manifest }),
            MethodName::Exposure => Box::new(ExposureMethod { manifest }),
            MethodName::Metric => Box::new(MetricMethod { manifest }),
            MethodName::SemanticModel => Box::new(SemanticModelMethod { manifest }),
            MethodName::SavedQuery => Box::new(SavedQueryMethod { manifest }),
            MethodName::UnitTest => Box::new(UnitTestMethod { manifest }),
            MethodName::Path => Box::new(PathMethod { manifest, project_root }),
            MethodName::Config => Box::new(ConfigMethod {
                manifest,
                arguments: method_args.to_vec(),
            }),
            MethodName::TestName => Box::new(TestNameMethod { manifest }),
            MethodName::TestType => Box::new(TestTypeMethod { manifest }),
            MethodName::Version => Box::new(VersionMethod { manifest }),
            MethodName::State => Box::new(StateMethod {
                manifest,
                previous_state,
            }),
            MethodName::Result => Box::new(ResultMethod {
                manifest,
                previous_state,
            }),
            MethodName::SourceStatus => Box::new(SourceStatusMethod {
                manifest,
                previous_state,
            }),
            MethodName::Column => {
                return not_implemented_err!(
                    "Method name 'column' is not supported by the node-selection core; \
                     column selection is resolved by a different subsystem"
                );
            }
        };
        Ok(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::IncludedNodes;
    use crate::manifest::{NodeCommon, ResourceType, SingularTestNode, UniqueId};

    #[test]
    fn column_method_is_not_implemented() {
        let manifest = Manifest::new();
        let registry = MethodRegistry::new(&manifest, None, None);
        assert!(registry.get_method(MethodName::Column, &[]).is_err());
    }

    #[test]
    fn tag_method_round_trips_through_trait_object() {
        let mut manifest = Manifest::new();
        let id = UniqueId::new("test.pkg.t");
        manifest.nodes.insert(
            id.clone(),
            crate::manifest::ParsedNode::SingularTest(SingularTestNode {
                common: NodeCommon {
                    unique_id: id.clone(),
                    name: "t".to_string(),
                    package_name: "pkg".to_string(),
                    original_file_path: String::new(),
                    resource_type: ResourceType::Test,
                    fqn: vec!["pkg".to_string(), "t".to_string()],
                    config: serde_json::json!({}),
                    tags: vec!["nightly".to_string()],
                },
            }),
        );
        let mut included = IncludedNodes::new();
        included.insert(id.clone());

        let registry = MethodRegistry::new(&manifest, None, None);
        let method = registry.get_method(MethodName::Tag, &[]).unwrap();
        pretty_assertions::assert_eq!(method.search(&included, "night*").unwrap(), vec![id]);
    }
}
