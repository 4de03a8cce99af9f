//! The `fqn:` dimension: hierarchical dotted matching over a node's fully
//! qualified name, with glob tails and versioned-model special casing.

use glob::Pattern;

const WILDCARD_CHARS: [char; 4] = ['*', '?', '[', ']'];

fn fnmatch(text: &str, pattern: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(text))
        .unwrap_or(false)
}

/// Mirrors `is_selected_node`: does `fqn` match the dotted/glob selector
/// `node_selector`, given whether the node is a versioned model?
pub fn is_selected_node(fqn: &[String], node_selector: &str, is_versioned: bool) -> bool {
    if is_versioned && fqn.len() >= 2 {
        let flat_node_selector: Vec<&str> = node_selector.split('.').collect();
        if fqn[fqn.len() - 2] == node_selector {
            return true;
        }
        let fqn_tail = fqn[fqn.len() - 2..].join("_");
        let selector_tail_len = flat_node_selector.len().min(2);
        let selector_tail = flat_node_selector[flat_node_selector.len() - selector_tail_len..]
            .join("_");
        if fqn_tail == selector_tail {
            return true;
        }
    } else if fqn.last().map(|s| s.as_str()) == Some(node_selector) {
        return true;
    }

    // Flatten node parts. Dots in model names act as namespace separators.
    let flat_fqn: Vec<&str> = fqn.iter().flat_map(|segment| segment.split('.')).collect();
    let selector_parts: Vec<&str> = node_selector.split('.').collect();
    if flat_fqn.len() < selector_parts.len() {
        return false;
    }

    let mut slurp_from_ix: Option<usize> = None;
    for (i, part) in selector_parts.iter().enumerate() {
        if part.chars().any(|c| WILDCARD_CHARS.contains(&c)) {
            slurp_from_ix = Some(i);
            break;
        } else if flat_fqn[i] == *part {
            continue;
        } else {
            return false;
        }
    }

    if let Some(ix) = slurp_from_ix {
        return fnmatch(&flat_fqn[ix..].join("."), &selector_parts[ix..].join("."));
    }

    true
}

/// Matches both the full `fqn` and the package-stripped `fqn[1:]`, so a
/// selector can name a node without repeating its owning package.
pub fn node_is_match(qualified_name: &str, fqn: &[String], is_versioned: bool) -> bool {
    if is_selected_node(fqn, qualified_name, is_versioned) {
        return true;
    }
    if fqn.len() > 1 {
        let unscoped = &fqn[1..];
        if is_selected_node(unscoped, qualified_name, is_versioned) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fqn(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn versioned_leaf_shortcut() {
        let f = fqn(&["pkg", "orders", "v2"]);
        assert!(node_is_match("orders.v2", &f, true));
        assert!(node_is_match("orders_v2", &f, true));
        assert!(node_is_match("orders", &f, true));
    }

    #[test]
    fn glob_tail() {
        let f = fqn(&["pkg", "orders", "v2"]);
        assert!(node_is_match("pkg.*", &f, true));
    }

    #[test]
    fn plain_leaf() {
        let f = fqn(&["pkg", "staging", "orders"]);
        assert!(node_is_match("orders", &f, false));
        assert!(!node_is_match("shipments", &f, false));
    }

    #[test]
    fn cross_package_match() {
        let f = fqn(&["pkg", "staging", "orders"]);
        assert!(node_is_match("staging.orders", &f, false));
    }

    #[test]
    fn too_many_selector_parts_fails() {
        let f = fqn(&["pkg", "orders"]);
        assert!(!node_is_match("a.b.c.d", &f, false));
    }

    #[test]
    fn literal_mismatch_short_circuits() {
        let f = fqn(&["pkg", "staging", "orders"]);
        assert!(!node_is_match("pkg.marts.orders", &f, false));
    }
}
