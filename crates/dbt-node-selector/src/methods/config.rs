//! The `config:` dimension: dotted attribute/key descent into `node.config`.

use serde_json::Value;

use crate::iter::IncludedNodes;
use crate::manifest::Manifest;

/// Descends `parts` into `value`, treating each step as an object key first
/// and an array index second. Returns `None` the moment a step can't be
/// resolved -- callers treat that as "skip this candidate", not an error.
fn getattr_descend<'a>(value: &'a Value, parts: &[String]) -> Option<&'a Value> {
    let mut current = value;
    for part in parts {
        current = match current {
            Value::Object(map) => map.get(part)?,
            Value::Array(items) => {
                let idx: usize = part.parse().ok()?;
                items.get(idx)?
            }
            _ => return None,
        };
    }
    Some(current)
}

fn case_insensitive_eq(a: &str, b: &str) -> bool {
    a.to_ascii_uppercase() == b.to_ascii_uppercase()
}

fn value_matches(selector: &str, value: &Value, case_insensitive: bool) -> bool {
    let selector_is_true = case_insensitive_eq(selector, "true");
    let selector_is_false = case_insensitive_eq(selector, "false");

    match value {
        Value::Array(items) => {
            let member = items.iter().any(|v| scalar_eq(v, selector, case_insensitive));
            let true_member = selector_is_true && items.iter().any(|v| v == &Value::Bool(true));
            let false_member = selector_is_false && items.iter().any(|v| v == &Value::Bool(false));
            member || true_member || false_member
        }
        other => {
            scalar_eq(other, selector, case_insensitive)
                || (selector_is_true && other == &Value::Bool(true))
                || (selector_is_false && other == &Value::Bool(false))
        }
    }
}

fn scalar_eq(value: &Value, selector: &str, case_insensitive: bool) -> bool {
    let as_str = match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        _ => return false,
    };
    if case_insensitive {
        case_insensitive_eq(&as_str, selector)
    } else {
        as_str == selector
    }
}

pub fn search(
    manifest: &Manifest,
    included: &IncludedNodes,
    arguments: &[String],
    selector: &str,
) -> Vec<crate::manifest::UniqueId> {
    let case_insensitive = arguments == ["severity"];
    let mut out = Vec::new();
    for (id, target) in manifest.configurable_nodes(included) {
        let config = &target.common().config;
        let Some(value) = getattr_descend(config, arguments) else {
            continue;
        };
        if value_matches(selector, value, case_insensitive) {
            out.push(id.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn severity_case_folds() {
        let config = json!({"severity": "WARN"});
        assert!(value_matches("warn", config.get("severity").unwrap(), true));
        assert!(!value_matches("error", config.get("severity").unwrap(), true));
    }

    #[test]
    fn boolean_true_branch() {
        assert!(value_matches("true", &Value::Bool(true), false));
        assert!(value_matches("True", &Value::Bool(true), false));
        assert!(!value_matches("true", &Value::Bool(false), false));
    }

    #[test]
    fn boolean_false_branch() {
        assert!(value_matches("false", &Value::Bool(false), false));
        assert!(!value_matches("false", &Value::Bool(true), false));
    }

    #[test]
    fn list_membership() {
        let v = json!(["a", "b"]);
        assert!(value_matches("a", &v, false));
        assert!(!value_matches("c", &v, false));
    }

    #[test]
    fn list_boolean_membership() {
        let v = json!([true, "x"]);
        assert!(value_matches("true", &v, false));
    }
}
