//! The `state:` dimension: structural diff between the current manifest and
//! a previous-run manifest, including transitive macro-dependency reachability.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::diff;
use crate::iter::IncludedNodes;
use crate::manifest::{Manifest, ParsedNode, PreviousState, SelectorTarget, UniqueId};
use dbt_common::{ErrorCode, FsResult, err, unexpected_err};

const VALID_SELECTORS: [&str; 10] = [
    "new",
    "old",
    "modified",
    "unmodified",
    "modified.body",
    "modified.configs",
    "modified.persisted_descriptions",
    "modified.relation",
    "modified.macros",
    "modified.contract",
];

fn depends_on_macros(target: SelectorTarget<'_>) -> &[UniqueId] {
    match target {
        SelectorTarget::Parsed(n) => n.depends_on_macros(),
        _ => &[],
    }
}

struct StateMatcher<'a> {
    previous: &'a Manifest,
    adapter_type: Option<&'a str>,
    modified_macros: RefCell<Option<HashSet<UniqueId>>>,
}

impl<'a> StateMatcher<'a> {
    fn new(previous: &'a Manifest, adapter_type: Option<&'a str>) -> Self {
        Self {
            previous,
            adapter_type,
            modified_macros: RefCell::new(None),
        }
    }

    /// The set of macro ids whose body differs between manifests, plus any
    /// added or removed outright. Computed once per matcher instance.
    fn modified_macros(&self, current: &Manifest) -> HashSet<UniqueId> {
        if let Some(cached) = self.modified_macros.borrow().as_ref() {
            return cached.clone();
        }
        let mut modified = HashSet::new();
        for (id, new_macro) in &current.macros {
            match self.previous.macros.get(id) {
                Some(old_macro) if old_macro.macro_sql != new_macro.macro_sql => {
                    modified.insert(id.clone());
                }
                None => {
                    modified.insert(id.clone());
                }
                _ => {}
            }
        }
        for id in self.previous.macros.keys() {
            if !current.macros.contains_key(id) {
                modified.insert(id.clone());
            }
        }
        *self.modified_macros.borrow_mut() = Some(modified.clone());
        modified
    }

    /// Iterative reachability over the current macro graph, starting from
    /// `start`: is any transitively-reachable macro id a modified one?
    fn upstream_macro_changed(&self, current: &Manifest, start: &[UniqueId]) -> bool {
        let modified = self.modified_macros(current);
        let mut visited: HashSet<UniqueId> = HashSet::new();
        let mut stack: Vec<UniqueId> = start.to_vec();
        while let Some(id) = stack.pop() {
            if modified.contains(&id) {
                return true;
            }
            if !visited.insert(id.clone()) {
                continue;
            }
            if let Some(macro_node) = current.macros.get(&id) {
                for dep in &macro_node.depends_on.macros {
                    if !visited.contains(dep) {
                        stack.push(dep.clone());
                    }
                }
            }
        }
        false
    }

    fn different_contents(&self, id: &UniqueId, new: SelectorTarget<'_>) -> bool {
        match self.previous.lookup(id) {
            None => true,
            Some(old) => !diff::same_contents(old, new),
        }
    }

    fn modified_contract(&self, id: &UniqueId, new: SelectorTarget<'_>) -> bool {
        let SelectorTarget::Parsed(ParsedNode::Model(n)) = new else {
            return false;
        };
        match self.previous.lookup(id) {
            None => true,
            Some(SelectorTarget::Parsed(ParsedNode::Model(o))) => !n.same_contract(o, self.adapter_type),
            Some(_) => true,
        }
    }

    fn is_modified(&self, current: &Manifest, id: &UniqueId, new: SelectorTarget<'_>) -> bool {
        self.different_contents(id, new)
            || self.upstream_macro_changed(current, depends_on_macros(new))
            || self.modified_contract(id, new)
    }

    fn modified_body(&self, id: &UniqueId, new: SelectorTarget<'_>) -> bool {
        let SelectorTarget::Parsed(ParsedNode::Model(n)) = new else {
            return false;
        };
        match self.previous.lookup(id) {
            None => true,
            Some(SelectorTarget::Parsed(ParsedNode::Model(o))) => !n.same_body(o),
            Some(_) => true,
        }
    }

    fn modified_configs(&self, id: &UniqueId, new: SelectorTarget<'_>) -> bool {
        let SelectorTarget::Parsed(ParsedNode::Model(n)) = new else {
            return false;
        };
        match self.previous.lookup(id) {
            None => true,
            Some(SelectorTarget::Parsed(ParsedNode::Model(o))) => !n.same_config(o),
            Some(_) => true,
        }
    }

    fn modified_persisted_description(&self, id: &UniqueId, new: SelectorTarget<'_>) -> bool {
        let SelectorTarget::Parsed(ParsedNode::Model(n)) = new else {
            return false;
        };
        match self.previous.lookup(id) {
            None => true,
            Some(SelectorTarget::Parsed(ParsedNode::Model(o))) => !n.same_persisted_description(o),
            Some(_) => true,
        }
    }

    fn modified_relation(&self, id: &UniqueId, new: SelectorTarget<'_>) -> bool {
        let SelectorTarget::Parsed(ParsedNode::Model(n)) = new else {
            return false;
        };
        match self.previous.lookup(id) {
            None => true,
            Some(SelectorTarget::Parsed(ParsedNode::Model(o))) => !n.same_database_representation(o),
            Some(_) => true,
        }
    }

    fn matches(&self, current: &Manifest, selector: &str, id: &UniqueId, new: SelectorTarget<'_>) -> bool {
        match selector {
            "new" => self.previous.lookup(id).is_none(),
            "old" => self.previous.lookup(id).is_some(),
            "modified" => self.is_modified(current, id, new),
            "unmodified" => !self.is_modified(current, id, new),
            "modified.body" => self.modified_body(id, new),
            "modified.configs" => self.modified_configs(id, new),
            "modified.persisted_descriptions" => self.modified_persisted_description(id, new),
            "modified.relation" => self.modified_relation(id, new),
            "modified.macros" => self.upstream_macro_changed(current, depends_on_macros(new)),
            "modified.contract" => self.modified_contract(id, new),
            _ => unreachable!("selector validated before matching"),
        }
    }

    /// Gives contract predicates a chance to run on nodes removed since the
    /// previous manifest, for diagnostics only -- removed nodes can't be
    /// executed downstream, so they're never added to the result set.
    fn log_removed_diagnostics(&self, current: &Manifest) {
        for (id, old) in &self.previous.nodes {
            let removed = current.disabled.contains_key(id) || !current.nodes.contains_key(id);
            if !removed {
                continue;
            }
            if let ParsedNode::Model(old_model) = old {
                if old_model.same_contract_removed() {
                    tracing::debug!(
                        unique_id = %id,
                        "model removed from the manifest while a contract was enforced"
                    );
                }
            }
        }
    }
}

fn validate_selector(selector: &str) -> FsResult<()> {
    if VALID_SELECTORS.contains(&selector) {
        Ok(())
    } else {
        err!(
            ErrorCode::SelectorError,
            "Got an invalid state selector \"{}\", expected one of {:?}",
            selector,
            VALID_SELECTORS
        )
    }
}

pub fn search(
    manifest: &Manifest,
    included: &IncludedNodes,
    previous_state: Option<&PreviousState>,
    selector: &str,
) -> FsResult<Vec<UniqueId>> {
    let Some(state) = previous_state else {
        return unexpected_err!("Got a state selector method, but no comparison manifest");
    };
    let Some(previous) = state.manifest.as_ref() else {
        return unexpected_err!("Got a state selector method, but no comparison manifest");
    };
    validate_selector(selector)?;

    let matcher = StateMatcher::new(previous, manifest.adapter_type.as_deref());
    let mut out = Vec::new();
    for (id, target) in manifest.all_nodes(included) {
        if matcher.matches(manifest, selector, id, target) {
            out.push(id.clone());
        }
    }
    matcher.log_removed_diagnostics(manifest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{Access, DependsOn, ModelNode, NodeCommon, ResourceType};

    fn model(id: &str, raw_code: &str, macros: Vec<&str>) -> (UniqueId, ParsedNode) {
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
                version: None,
                latest_version: None,
                is_latest_version: false,
                is_versioned: false,
                depends_on: DependsOn {
                    macros: macros.into_iter().map(UniqueId::new).collect(),
                },
                patch_path: None,
                raw_code: raw_code.to_string(),
                persisted_description: None,
                database_representation: String::new(),
                contract_checksum: None,
            }),
        )
    }

    fn macro_node(id: &str, sql: &str, depends_on: Vec<&str>) -> (UniqueId, crate::manifest::MacroNode) {
        (
            UniqueId::new(id),
            crate::manifest::MacroNode {
                unique_id: UniqueId::new(id),
                macro_sql: sql.to_string(),
                depends_on: DependsOn {
                    macros: depends_on.into_iter().map(UniqueId::new).collect(),
                },
            },
        )
    }

    #[test]
    fn transitive_macro_change_marks_modified() {
        let mut previous = Manifest::new();
        let (a_id, a) = macro_node("macro.pkg.a", "X", vec![]);
        let (b_id, b) = macro_node("macro.pkg.b", "same", vec!["macro.pkg.a"]);
        previous.macros.insert(a_id, a);
        previous.macros.insert(b_id, b);

        let mut current = Manifest::new();
        let (a_id, a) = macro_node("macro.pkg.a", "Y", vec![]);
        let (b_id, b) = macro_node("macro.pkg.b", "same", vec!["macro.pkg.a"]);
        current.macros.insert(a_id, a);
        current.macros.insert(b_id, b);
        let (m_id, m) = model("model.pkg.m", "select 1", vec!["macro.pkg.b"]);
        current.nodes.insert(m_id.clone(), m);

        let mut included = IncludedNodes::new();
        included.insert(m_id.clone());

        let mut previous_state = PreviousState::new();
        previous_state.manifest = Some(previous);

        let got = search(&current, &included, Some(&previous_state), "modified.macros").unwrap();
        assert_eq!(got, vec![m_id]);
    }

    #[test]
    fn unmodified_partitions_with_modified() {
        let mut previous = Manifest::new();
        let (id, n) = model("model.pkg.m", "select 1", vec![]);
        previous.nodes.insert(id.clone(), n);

        let mut current = Manifest::new();
        let (id2, n2) = model("model.pkg.m", "select 1", vec![]);
        current.nodes.insert(id2.clone(), n2);

        let mut included = IncludedNodes::new();
        included.insert(id2.clone());

        let mut previous_state = PreviousState::new();
        previous_state.manifest = Some(previous);

        let modified = search(&current, &included, Some(&previous_state), "modified").unwrap();
        let unmodified = search(&current, &included, Some(&previous_state), "unmodified").unwrap();
        assert!(modified.is_empty());
        pretty_assertions::assert_eq!(unmodified, vec![id2]);
    }

    #[test]
    fn new_node_is_modified_and_new() {
        let previous = Manifest::new();
        let mut current = Manifest::new();
        let (id, n) = model("model.pkg.m", "select 1", vec![]);
        current.nodes.insert(id.clone(), n);

        let mut included = IncludedNodes::new();
        included.insert(id.clone());

        let mut previous_state = PreviousState::new();
        previous_state.manifest = Some(previous);

        assert_eq!(search(&current, &included, Some(&previous_state), "new").unwrap(), vec![id.clone()]);
        assert_eq!(
            search(&current, &included, Some(&previous_state), "modified").unwrap(),
            vec![id]
        );
    }

    #[test]
    fn missing_previous_manifest_is_internal_error() {
        let manifest = Manifest::new();
        let included = IncludedNodes::new();
        assert!(search(&manifest, &included, None, "modified").is_err());
        let empty_state = PreviousState::new();
        assert!(search(&manifest, &included, Some(&empty_state), "modified").is_err());
    }

    #[test]
    fn unknown_selector_errors() {
        let manifest = Manifest::new();
        let included = IncludedNodes::new();
        let mut previous_state = PreviousState::new();
        previous_state.manifest = Some(Manifest::new());
        assert!(search(&manifest, &included, Some(&previous_state), "bogus").is_err());
    }

    #[test]
    fn cyclic_macro_graph_terminates() {
        let mut previous = Manifest::new();
        let (a_id, a) = macro_node("macro.pkg.a", "X", vec!["macro.pkg.b"]);
        let (b_id, b) = macro_node("macro.pkg.b", "Y", vec!["macro.pkg.a"]);
        previous.macros.insert(a_id, a);
        previous.macros.insert(b_id, b);

        let mut current = Manifest::new();
        let (a_id, a) = macro_node("macro.pkg.a", "X", vec!["macro.pkg.b"]);
        let (b_id, b) = macro_node("macro.pkg.b", "Y-changed", vec!["macro.pkg.a"]);
        current.macros.insert(a_id, a);
        current.macros.insert(b_id, b);
        let (m_id, m) = model("model.pkg.m", "select 1", vec!["macro.pkg.a"]);
        current.nodes.insert(m_id.clone(), m);

        let mut included = IncludedNodes::new();
        included.insert(m_id.clone());
        let mut previous_state = PreviousState::new();
        previous_state.manifest = Some(previous);

        let got = search(&current, &included, Some(&previous_state), "modified.macros").unwrap();
        assert_eq!(got, vec![m_id]);
    }
}
