//! Cross-kind structural-equality dispatch used by the state differ.
//!
//! Each node kind knows how to compare itself against its own previous
//! version (`manifest::*Node::same_contents`); this module just routes a
//! pair of [`SelectorTarget`]s to the right comparison, matching §9's
//! "capability, not guarantee" framing: a kind mismatch between `old` and
//! `new` is never "same", since there's nothing comparable.

use crate::manifest::SelectorTarget;

/// True when `old` and `new` are the same kind and have identical contents.
pub fn same_contents(old: SelectorTarget<'_>, new: SelectorTarget<'_>) -> bool {
    match (old, new) {
        (SelectorTarget::Parsed(o), SelectorTarget::Parsed(n)) => n.same_contents(o),
        (SelectorTarget::Source(o), SelectorTarget::Source(n)) => n.same_contents(o),
        (SelectorTarget::Exposure(o), SelectorTarget::Exposure(n)) => n.same_contents(o),
        (SelectorTarget::Metric(o), SelectorTarget::Metric(n)) => n.same_contents(o),
        (SelectorTarget::SemanticModel(o), SelectorTarget::SemanticModel(n)) => n.same_contents(o),
        (SelectorTarget::UnitTest(o), SelectorTarget::UnitTest(n)) => n.same_contents(o),
        (SelectorTarget::SavedQuery(o), SelectorTarget::SavedQuery(n)) => n.same_contents(o),
        _ => false,
    }
}
