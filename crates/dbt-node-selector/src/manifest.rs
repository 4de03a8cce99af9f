//! The node and manifest data model consumed by the selection methods.
//!
//! This is deliberately a lightweight shadow of the real manifest produced by
//! project parsing: selection only ever reads the fields named here, never
//! the warehouse/compile-time surface a full manifest carries.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;
use strum_macros::{Display, EnumString};

/// Opaque identifier naming a node uniquely across all manifest mappings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UniqueId(String);

impl UniqueId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UniqueId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UniqueId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for UniqueId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The kind of resource a node represents.
///
/// Mirrors `dbt_common::node_selector::MethodName`'s sibling vocabulary: the
/// set of resource kinds that can appear as a node in the manifest, as
/// opposed to the set of selection dimensions one can filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResourceType {
    Model,
    Analysis,
    Test,
    Snapshot,
    Seed,
    Operation,
    Source,
    Exposure,
    Metric,
    Group,
    SemanticModel,
    SavedQuery,
    Unit,
    Macro,
}

/// Model access level, as configured via `access:` in a model's yaml config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Access {
    Private,
    #[default]
    Protected,
    Public,
}

/// A model version. Compares numerically when both sides parse as a finite
/// number, and lexicographically otherwise, so the ordering stays total.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelVersion(pub String);

impl ModelVersion {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialOrd for ModelVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ModelVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self.0.parse::<f64>(), other.0.parse::<f64>()) {
            (Ok(a), Ok(b)) => a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal),
            _ => self.0.cmp(&other.0),
        }
    }
}

/// Fields shared by every node variant.
#[derive(Debug, Clone)]
pub struct NodeCommon {
    pub unique_id: UniqueId,
    pub name: String,
    pub package_name: String,
    pub original_file_path: String,
    pub resource_type: ResourceType,
    /// Ordered sequence of path-like segments; `fqn[0]` is the owning package,
    /// `fqn[-1]` the node's local name (or version, for versioned models).
    pub fqn: Vec<String>,
    pub config: Value,
    pub tags: Vec<String>,
}

/// Dependency edges a node carries on macros (and, for the full graph,
/// other nodes -- but ref/source dependency resolution is out of scope here).
#[derive(Debug, Clone, Default)]
pub struct DependsOn {
    pub macros: Vec<UniqueId>,
}

#[derive(Debug, Clone)]
pub struct ModelNode {
    pub common: NodeCommon,
    pub access: Access,
    pub version: Option<ModelVersion>,
    pub latest_version: Option<ModelVersion>,
    pub is_latest_version: bool,
    pub is_versioned: bool,
    pub depends_on: DependsOn,
    /// `package://relative/path.yml`, set when a yaml patch touched this model.
    pub patch_path: Option<String>,
    pub raw_code: String,
    pub persisted_description: Option<String>,
    pub database_representation: String,
    pub contract_checksum: Option<String>,
}

impl ModelNode {
    pub fn same_body(&self, old: &ModelNode) -> bool {
        self.raw_code == old.raw_code
    }

    pub fn same_config(&self, old: &ModelNode) -> bool {
        self.common.config == old.common.config && self.common.tags == old.common.tags
    }

    pub fn same_persisted_description(&self, old: &ModelNode) -> bool {
        self.persisted_description == old.persisted_description
    }

    pub fn same_database_representation(&self, old: &ModelNode) -> bool {
        self.database_representation == old.database_representation
    }

    /// `adapter_type` is accepted for parity with the capability a real
    /// adapter-aware contract comparison would need; this core only has a
    /// checksum to compare and never consults it.
    pub fn same_contract(&self, old: &ModelNode, _adapter_type: Option<&str>) -> bool {
        self.contract_checksum == old.contract_checksum
    }

    /// Whether a model's disappearance from the current manifest should
    /// itself count as a contract change: true when the old node had a
    /// contract enforced, so there's a checksum that's now gone missing.
    pub fn same_contract_removed(&self) -> bool {
        self.contract_checksum.is_some()
    }

    pub fn same_contents(&self, old: &ModelNode) -> bool {
        self.same_body(old)
            && self.same_config(old)
            && self.same_persisted_description(old)
            && self.same_database_representation(old)
    }
}

/// Baseline contents equality shared by every kind that has no bespoke
/// structural-equality fields of its own: same name, package, config, tags
/// and file path.
fn common_same_contents(a: &NodeCommon, b: &NodeCommon) -> bool {
    a.name == b.name
        && a.package_name == b.package_name
        && a.config == b.config
        && a.tags == b.tags
        && a.original_file_path == b.original_file_path
}

#[derive(Debug, Clone)]
pub struct GenericTestNode {
    pub common: NodeCommon,
    pub test_metadata_name: Option<String>,
}

impl GenericTestNode {
    pub fn same_contents(&self, old: &GenericTestNode) -> bool {
        self.test_metadata_name == old.test_metadata_name
            && common_same_contents(&self.common, &old.common)
    }
}

#[derive(Debug, Clone)]
pub struct SingularTestNode {
    pub common: NodeCommon,
}

impl SingularTestNode {
    pub fn same_contents(&self, old: &SingularTestNode) -> bool {
        common_same_contents(&self.common, &old.common)
    }
}

/// Seeds, snapshots, analyses and operations: resource kinds with no bespoke
/// selection fields beyond the shared common block.
#[derive(Debug, Clone)]
pub struct OtherParsedNode {
    pub common: NodeCommon,
}

impl OtherParsedNode {
    pub fn same_contents(&self, old: &OtherParsedNode) -> bool {
        common_same_contents(&self.common, &old.common)
    }
}

/// A parsed resource living in `Manifest::nodes`.
#[derive(Debug, Clone)]
pub enum ParsedNode {
    Model(ModelNode),
    GenericTest(GenericTestNode),
    SingularTest(SingularTestNode),
    Other(OtherParsedNode),
}

impl ParsedNode {
    pub fn common(&self) -> &NodeCommon {
        match self {
            ParsedNode::Model(n) => &n.common,
            ParsedNode::GenericTest(n) => &n.common,
            ParsedNode::SingularTest(n) => &n.common,
            ParsedNode::Other(n) => &n.common,
        }
    }

    pub fn as_model(&self) -> Option<&ModelNode> {
        match self {
            ParsedNode::Model(n) => Some(n),
            _ => None,
        }
    }

    pub fn depends_on_macros(&self) -> &[UniqueId] {
        match self {
            ParsedNode::Model(n) => &n.depends_on.macros,
            _ => &[],
        }
    }

    /// Structural-content equality, dispatched by variant. A node whose kind
    /// changed between `old` and `self` (e.g. a model recreated as a seed
    /// under the same id) is never "same" -- there's nothing comparable.
    pub fn same_contents(&self, old: &ParsedNode) -> bool {
        match (self, old) {
            (ParsedNode::Model(n), ParsedNode::Model(o)) => n.same_contents(o),
            (ParsedNode::GenericTest(n), ParsedNode::GenericTest(o)) => n.same_contents(o),
            (ParsedNode::SingularTest(n), ParsedNode::SingularTest(o)) => n.same_contents(o),
            (ParsedNode::Other(n), ParsedNode::Other(o)) => n.same_contents(o),
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SourceNode {
    pub common: NodeCommon,
    pub source_name: String,
}

impl SourceNode {
    pub fn same_contents(&self, old: &SourceNode) -> bool {
        self.source_name == old.source_name && common_same_contents(&self.common, &old.common)
    }
}

#[derive(Debug, Clone)]
pub struct ExposureNode {
    pub common: NodeCommon,
}

impl ExposureNode {
    pub fn same_contents(&self, old: &ExposureNode) -> bool {
        common_same_contents(&self.common, &old.common)
    }
}

#[derive(Debug, Clone)]
pub struct MetricNode {
    pub common: NodeCommon,
}

impl MetricNode {
    pub fn same_contents(&self, old: &MetricNode) -> bool {
        common_same_contents(&self.common, &old.common)
    }
}

#[derive(Debug, Clone)]
pub struct SemanticModelNode {
    pub common: NodeCommon,
}

impl SemanticModelNode {
    pub fn same_contents(&self, old: &SemanticModelNode) -> bool {
        common_same_contents(&self.common, &old.common)
    }
}

#[derive(Debug, Clone)]
pub struct SavedQueryNode {
    pub common: NodeCommon,
}

impl SavedQueryNode {
    pub fn same_contents(&self, old: &SavedQueryNode) -> bool {
        common_same_contents(&self.common, &old.common)
    }
}

#[derive(Debug, Clone)]
pub struct UnitTestNode {
    pub common: NodeCommon,
}

impl UnitTestNode {
    pub fn same_contents(&self, old: &UnitTestNode) -> bool {
        common_same_contents(&self.common, &old.common)
    }
}

#[derive(Debug, Clone)]
pub struct MacroNode {
    pub unique_id: UniqueId,
    pub macro_sql: String,
    pub depends_on: DependsOn,
}

/// A view over any node reachable through `all_nodes`/`non_source_nodes`/etc,
/// used by the dimension matchers that don't care which kind they're looking at.
#[derive(Debug, Clone, Copy)]
pub enum SelectorTarget<'a> {
    Parsed(&'a ParsedNode),
    Source(&'a SourceNode),
    Exposure(&'a ExposureNode),
    Metric(&'a MetricNode),
    SemanticModel(&'a SemanticModelNode),
    UnitTest(&'a UnitTestNode),
    SavedQuery(&'a SavedQueryNode),
}

impl<'a> SelectorTarget<'a> {
    pub fn common(&self) -> &'a NodeCommon {
        match self {
            SelectorTarget::Parsed(n) => n.common(),
            SelectorTarget::Source(n) => &n.common,
            SelectorTarget::Exposure(n) => &n.common,
            SelectorTarget::Metric(n) => &n.common,
            SelectorTarget::SemanticModel(n) => &n.common,
            SelectorTarget::UnitTest(n) => &n.common,
            SelectorTarget::SavedQuery(n) => &n.common,
        }
    }

    /// `package://relative/path.yml`, present only on versioned/patched models.
    pub fn patch_path(&self) -> Option<&'a str> {
        match self {
            SelectorTarget::Parsed(ParsedNode::Model(m)) => m.patch_path.as_deref(),
            _ => None,
        }
    }
}

/// Read-only view of the project graph selection runs over.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub nodes: IndexMap<UniqueId, ParsedNode>,
    pub sources: IndexMap<UniqueId, SourceNode>,
    pub exposures: IndexMap<UniqueId, ExposureNode>,
    pub metrics: IndexMap<UniqueId, MetricNode>,
    pub semantic_models: IndexMap<UniqueId, SemanticModelNode>,
    pub unit_tests: IndexMap<UniqueId, UnitTestNode>,
    pub saved_queries: IndexMap<UniqueId, SavedQueryNode>,
    pub macros: IndexMap<UniqueId, MacroNode>,
    /// Nodes disabled out of the build; the value is the list of shells that
    /// were disabled under that id (a config toggle can disable a whole
    /// overload set). Consumers take the first shell.
    pub disabled: IndexMap<UniqueId, Vec<ParsedNode>>,
    pub project_name: Option<String>,
    pub adapter_type: Option<String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a node by id across every mapping, ignoring `included_nodes`.
    ///
    /// Used by the state differ to look up a candidate's previous-manifest
    /// counterpart, which may live in any kind of mapping regardless of
    /// which kind the current-manifest node belongs to.
    pub fn lookup(&self, id: &UniqueId) -> Option<SelectorTarget<'_>> {
        if let Some(n) = self.nodes.get(id) {
            return Some(SelectorTarget::Parsed(n));
        }
        if let Some(n) = self.sources.get(id) {
            return Some(SelectorTarget::Source(n));
        }
        if let Some(n) = self.exposures.get(id) {
            return Some(SelectorTarget::Exposure(n));
        }
        if let Some(n) = self.metrics.get(id) {
            return Some(SelectorTarget::Metric(n));
        }
        if let Some(n) = self.semantic_models.get(id) {
            return Some(SelectorTarget::SemanticModel(n));
        }
        if let Some(n) = self.unit_tests.get(id) {
            return Some(SelectorTarget::UnitTest(n));
        }
        if let Some(n) = self.saved_queries.get(id) {
            return Some(SelectorTarget::SavedQuery(n));
        }
        None
    }
}

#[derive(Debug, Clone)]
pub struct ResultRecord {
    pub unique_id: UniqueId,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct FreshnessRecord {
    pub unique_id: UniqueId,
    pub max_loaded_at: Option<chrono::DateTime<chrono::Utc>>,
    /// True when the freshness check raised at runtime rather than
    /// completing: such a record carries no usable timestamp.
    pub is_runtime_error: bool,
}

/// Previous-run state, consumed by `state:`, `result:` and `source_status:`.
#[derive(Debug, Clone, Default)]
pub struct PreviousState {
    pub manifest: Option<Manifest>,
    pub results: Vec<ResultRecord>,
    pub previous_sources: Vec<FreshnessRecord>,
    pub current_sources: Vec<FreshnessRecord>,
}

impl PreviousState {
    pub fn new() -> Self {
        Self::default()
    }
}
