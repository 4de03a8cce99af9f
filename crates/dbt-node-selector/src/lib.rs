//! The node-selection core: given a manifest, an optional previous-run
//! state, a candidate id set and a selector string, resolve the subset of
//! nodes matching one selection dimension (`fqn`, `tag`, `group`, `access`,
//! `source`, `path`, `file`, `package`, `config`, `test_name`, `test_type`,
//! `resource_type`, `exposure`, `metric`, `semantic_model`, `saved_query`,
//! `unit_test`, `version`, `result`, `source_status`, `state`).
//!
//! This crate does not parse the surface selector expression language (set
//! algebra, `+`/`@`/`N+` graph operators) or walk the dependency graph for
//! ancestor/descendant expansion -- both live one layer up, in the
//! expression evaluator that calls [`registry::MethodRegistry::get_method`]
//! once per atomic term and combines results with set operations.

pub mod diff;
pub mod fqn;
pub mod iter;
pub mod manifest;
pub mod methods;
pub mod registry;

pub use iter::IncludedNodes;
pub use manifest::{Manifest, PreviousState, ResourceType, SelectorTarget, UniqueId};
pub use methods::SelectorMethod;
pub use registry::MethodRegistry;
