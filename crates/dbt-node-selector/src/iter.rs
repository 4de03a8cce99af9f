//! Kind-filtered node iteration.
//!
//! Every matcher works over the intersection of `included_nodes` with one or
//! more of the manifest's per-kind mappings. Iteration order is the
//! manifest's insertion order within a kind, and the fixed order below across
//! kinds -- this is part of the observable contract (see testable property 4).

use indexmap::IndexSet;

use crate::manifest::{Manifest, ParsedNode, SelectorTarget, SourceNode, UniqueId};

pub type IncludedNodes = IndexSet<UniqueId>;

fn filter_kind<'a, V>(
    map: &'a indexmap::IndexMap<UniqueId, V>,
    included: &'a IncludedNodes,
) -> impl Iterator<Item = (&'a UniqueId, &'a V)> {
    map.iter().filter(move |(id, _)| included.contains(*id))
}

impl Manifest {
    pub fn parsed_nodes<'a>(
        &'a self,
        included: &'a IncludedNodes,
    ) -> impl Iterator<Item = (&'a UniqueId, &'a ParsedNode)> {
        filter_kind(&self.nodes, included)
    }

    pub fn source_nodes<'a>(
        &'a self,
        included: &'a IncludedNodes,
    ) -> impl Iterator<Item = (&'a UniqueId, &'a SourceNode)> {
        filter_kind(&self.sources, included)
    }

    pub fn parsed_and_unit_nodes<'a>(
        &'a self,
        included: &'a IncludedNodes,
    ) -> impl Iterator<Item = (&'a UniqueId, SelectorTarget<'a>)> {
        self.parsed_nodes(included)
            .map(|(id, n)| (id, SelectorTarget::Parsed(n)))
            .chain(
                filter_kind(&self.unit_tests, included)
                    .map(|(id, n)| (id, SelectorTarget::UnitTest(n))),
            )
    }

    /// parsed, sources, exposures, metrics, unit_tests, semantic_models, saved_queries
    pub fn all_nodes<'a>(
        &'a self,
        included: &'a IncludedNodes,
    ) -> impl Iterator<Item = (&'a UniqueId, SelectorTarget<'a>)> {
        self.parsed_nodes(included)
            .map(|(id, n)| (id, SelectorTarget::Parsed(n)))
            .chain(
                filter_kind(&self.sources, included).map(|(id, n)| (id, SelectorTarget::Source(n))),
            )
            .chain(
                filter_kind(&self.exposures, included)
                    .map(|(id, n)| (id, SelectorTarget::Exposure(n))),
            )
            .chain(
                filter_kind(&self.metrics, included).map(|(id, n)| (id, SelectorTarget::Metric(n))),
            )
            .chain(
                filter_kind(&self.unit_tests, included)
                    .map(|(id, n)| (id, SelectorTarget::UnitTest(n))),
            )
            .chain(
                filter_kind(&self.semantic_models, included)
                    .map(|(id, n)| (id, SelectorTarget::SemanticModel(n))),
            )
            .chain(
                filter_kind(&self.saved_queries, included)
                    .map(|(id, n)| (id, SelectorTarget::SavedQuery(n))),
            )
    }

    /// parsed + sources
    pub fn configurable_nodes<'a>(
        &'a self,
        included: &'a IncludedNodes,
    ) -> impl Iterator<Item = (&'a UniqueId, SelectorTarget<'a>)> {
        self.parsed_nodes(included)
            .map(|(id, n)| (id, SelectorTarget::Parsed(n)))
            .chain(
                filter_kind(&self.sources, included).map(|(id, n)| (id, SelectorTarget::Source(n))),
            )
    }

    /// parsed + exposures + metrics + unit_tests + semantic_models + saved_queries
    pub fn non_source_nodes<'a>(
        &'a self,
        included: &'a IncludedNodes,
    ) -> impl Iterator<Item = (&'a UniqueId, SelectorTarget<'a>)> {
        self.parsed_nodes(included)
            .map(|(id, n)| (id, SelectorTarget::Parsed(n)))
            .chain(
                filter_kind(&self.exposures, included)
                    .map(|(id, n)| (id, SelectorTarget::Exposure(n))),
            )
            .chain(
                filter_kind(&self.metrics, included).map(|(id, n)| (id, SelectorTarget::Metric(n))),
            )
            .chain(
                filter_kind(&self.unit_tests, included)
                    .map(|(id, n)| (id, SelectorTarget::UnitTest(n))),
            )
            .chain(
                filter_kind(&self.semantic_models, included)
                    .map(|(id, n)| (id, SelectorTarget::SemanticModel(n))),
            )
            .chain(
                filter_kind(&self.saved_queries, included)
                    .map(|(id, n)| (id, SelectorTarget::SavedQuery(n))),
            )
    }

    /// parsed + metrics
    pub fn groupable_nodes<'a>(
        &'a self,
        included: &'a IncludedNodes,
    ) -> impl Iterator<Item = (&'a UniqueId, SelectorTarget<'a>)> {
        self.parsed_nodes(included)
            .map(|(id, n)| (id, SelectorTarget::Parsed(n)))
            .chain(
                filter_kind(&self.metrics, included).map(|(id, n)| (id, SelectorTarget::Metric(n))),
            )
    }
}
