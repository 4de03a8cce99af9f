//! One module per selection dimension, plus the [`SelectorMethod`] trait
//! that lets the registry hand callers a uniform handle regardless of which
//! dimension they asked for.
//!
//! Each submodule keeps its matching logic as plain functions over
//! `&Manifest`/`&IncludedNodes` (easy to unit test in isolation); the wrapper
//! types here just close over the extra context (previous state, project
//! root, method arguments) a given dimension needs and adapt it to the trait.

pub mod config;
pub mod dotted;
pub mod fqn;
pub mod path;
pub mod result;
pub mod simple;
pub mod state;
pub mod version;

use std::path::Path;

use crate::iter::IncludedNodes;
use crate::manifest::{Manifest, PreviousState, UniqueId};
use dbt_common::FsResult;

/// A single selection dimension: given the ids still under consideration and
/// a selector string, yields the matching subset.
pub trait SelectorMethod {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>>;
}

pub struct FqnMethod<'a> {
    pub manifest: &'a Manifest,
}

impl SelectorMethod for FqnMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        Ok(fqn::search(self.manifest, included, selector))
    }
}

pub struct TagMethod<'a> {
    pub manifest: &'a Manifest,
}

impl SelectorMethod for TagMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        Ok(simple::tag(self.manifest, included, selector))
    }
}

pub struct GroupMethod<'a> {
    pub manifest: &'a Manifest,
}

impl SelectorMethod for GroupMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        Ok(simple::group(self.manifest, included, selector))
    }
}

pub struct AccessMethod<'a> {
    pub manifest: &'a Manifest,
}

impl SelectorMethod for AccessMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        Ok(simple::access(self.manifest, included, selector))
    }
}

pub struct PackageMethod<'a> {
    pub manifest: &'a Manifest,
}

impl SelectorMethod for PackageMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        Ok(simple::package(self.manifest, included, selector))
    }
}

pub struct FileMethod<'a> {
    pub manifest: &'a Manifest,
}

impl SelectorMethod for FileMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        Ok(simple::file(self.manifest, included, selector))
    }
}

pub struct ResourceTypeMethod<'a> {
    pub manifest: &'a Manifest,
}

impl SelectorMethod for ResourceTypeMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        simple::resource_type(self.manifest, included, selector)
    }
}

pub struct SourceMethod<'a> {
    pub manifest: &'a Manifest,
}

impl SelectorMethod for SourceMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        dotted::source(self.manifest, included, selector)
    }
}

pub struct ExposureMethod<'a> {
    pub manifest: &'a Manifest,
}

impl SelectorMethod for ExposureMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        dotted::exposure(self.manifest, included, selector)
    }
}

pub struct MetricMethod<'a> {
    pub manifest: &'a Manifest,
}

impl SelectorMethod for MetricMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        dotted::metric(self.manifest, included, selector)
    }
}

pub struct SemanticModelMethod<'a> {
    pub manifest: &'a Manifest,
}

impl SelectorMethod for SemanticModelMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        dotted::semantic_model(self.manifest, included, selector)
    }
}

pub struct SavedQueryMethod<'a> {
    pub manifest: &'a Manifest,
}

impl SelectorMethod for SavedQueryMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        dotted::saved_query(self.manifest, included, selector)
    }
}

pub struct UnitTestMethod<'a> {
    pub manifest: &'a Manifest,
}

impl SelectorMethod for UnitTestMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        dotted::unit_test(self.manifest, included, selector)
    }
}

pub struct PathMethod<'a> {
    pub manifest: &'a Manifest,
    pub project_root: Option<&'a Path>,
}

impl SelectorMethod for PathMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        path::search(self.manifest, included, self.project_root, selector)
    }
}

pub struct ConfigMethod<'a> {
    pub manifest: &'a Manifest,
    pub arguments: Vec<String>,
}

impl SelectorMethod for ConfigMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        Ok(config::search(self.manifest, included, &self.arguments, selector))
    }
}

pub struct TestNameMethod<'a> {
    pub manifest: &'a Manifest,
}

impl SelectorMethod for TestNameMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        Ok(test::test_name(self.manifest, included, selector))
    }
}

pub struct TestTypeMethod<'a> {
    pub manifest: &'a Manifest,
}

impl SelectorMethod for TestTypeMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        test::test_type(self.manifest, included, selector)
    }
}

pub struct VersionMethod<'a> {
    pub manifest: &'a Manifest,
}

impl SelectorMethod for VersionMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        version::search(self.manifest, included, selector)
    }
}

pub struct StateMethod<'a> {
    pub manifest: &'a Manifest,
    pub previous_state: Option<&'a PreviousState>,
}

impl SelectorMethod for StateMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        state::search(self.manifest, included, self.previous_state, selector)
    }
}

pub struct ResultMethod<'a> {
    pub manifest: &'a Manifest,
    pub previous_state: Option<&'a PreviousState>,
}

impl SelectorMethod for ResultMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        result::result(self.manifest, included, self.previous_state, selector)
    }
}

pub struct SourceStatusMethod<'a> {
    pub manifest: &'a Manifest,
    pub previous_state: Option<&'a PreviousState>,
}

impl SelectorMethod for SourceStatusMethod<'_> {
    fn search(&self, included: &IncludedNodes, selector: &str) -> FsResult<Vec<UniqueId>> {
        result::source_status(self.manifest, included, self.previous_state, selector)
    }
}
