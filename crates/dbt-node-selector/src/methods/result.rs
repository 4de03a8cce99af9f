//! `result:` and `source_status:` -- matchers driven by a previous run's
//! results and source-freshness records rather than the current manifest.

use std::collections::HashSet;

use crate::iter::IncludedNodes;
use crate::manifest::{Manifest, PreviousState, UniqueId};
use dbt_common::{FsResult, unexpected_err};

pub fn result(
    manifest: &Manifest,
    included: &IncludedNodes,
    previous_state: Option<&PreviousState>,
    selector: &str,
) -> FsResult<Vec<UniqueId>> {
    let Some(state) = previous_state else {
        return unexpected_err!("No comparison run_results");
    };

    let matches: HashSet<&UniqueId> = state
        .results
        .iter()
        .filter(|r| r.status == selector)
        .map(|r| &r.unique_id)
        .collect();

    Ok(manifest
        .all_nodes(included)
        .filter(|(id, _)| matches.contains(id))
        .map(|(id, _)| id.clone())
        .collect())
}

pub fn source_status(
    manifest: &Manifest,
    included: &IncludedNodes,
    previous_state: Option<&PreviousState>,
    selector: &str,
) -> FsResult<Vec<UniqueId>> {
    let Some(state) = previous_state else {
        return unexpected_err!("No previous state comparison freshness results in sources.json");
    };
    if selector != "fresher" {
        return Ok(Vec::new());
    }

    let previous_by_id: std::collections::HashMap<&UniqueId, &crate::manifest::FreshnessRecord> =
        state.previous_sources.iter().map(|r| (&r.unique_id, r)).collect();

    let mut matches = HashSet::new();
    for current in &state.current_sources {
        let fresher = match previous_by_id.get(&current.unique_id) {
            None => true,
            Some(previous) => match (current.max_loaded_at, previous.max_loaded_at) {
                (Some(cur), Some(prev)) => cur > prev,
                (Some(_), None) => true,
                _ => false,
            },
        };
        if fresher {
            matches.insert(current.unique_id.clone());
        }
    }

    // A runtime error in either state excludes the id entirely, per
    // `ErrorCode::Unexpected` avoidance -- errored freshness carries no
    // usable timestamp, so the candidate is simply not selectable.
    for current in &state.current_sources {
        if current.is_runtime_error {
            matches.remove(&current.unique_id);
        }
    }
    for previous in &state.previous_sources {
        if previous.is_runtime_error {
            matches.remove(&previous.unique_id);
        }
    }

    Ok(manifest
        .all_nodes(included)
        .filter(|(id, _)| matches.contains(*id))
        .map(|(id, _)| id.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{FreshnessRecord, NodeCommon, ResourceType, SourceNode};
    use chrono::{TimeZone, Utc};

    fn src(id: &str) -> (UniqueId, SourceNode) {
        let uid = UniqueId::new(id);
        (
            uid.clone(),
            SourceNode {
                common: NodeCommon {
                    unique_id: uid,
                    name: id.to_string(),
                    package_name: "pkg".to_string(),
                    original_file_path: String::new(),
                    resource_type: ResourceType::Source,
                    fqn: vec![],
                    config: serde_json::json!({}),
                    tags: vec![],
                },
                source_name: "src".to_string(),
            },
        )
    }

    #[test]
    fn fresher_scenarios() {
        let mut manifest = Manifest::new();
        let mut included = IncludedNodes::new();
        for id in ["s1", "s2", "s3"] {
            let (uid, node) = src(id);
            included.insert(uid.clone());
            manifest.sources.insert(uid, node);
        }

        let t = |h: i64| Some(Utc.timestamp_opt(h * 3600, 0).unwrap());

        let mut state = PreviousState::new();
        state.previous_sources = vec![FreshnessRecord {
            unique_id: UniqueId::new("s1"),
            max_loaded_at: t(100),
            is_runtime_error: false,
        }];
        state.current_sources = vec![
            FreshnessRecord {
                unique_id: UniqueId::new("s1"),
                max_loaded_at: t(150),
                is_runtime_error: false,
            },
            FreshnessRecord {
                unique_id: UniqueId::new("s2"),
                max_loaded_at: t(10),
                is_runtime_error: false,
            },
            FreshnessRecord {
                unique_id: UniqueId::new("s3"),
                max_loaded_at: None,
                is_runtime_error: true,
            },
        ];

        let mut got = source_status(&manifest, &included, Some(&state), "fresher").unwrap();
        got.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(got, vec![UniqueId::new("s1"), UniqueId::new("s2")]);
    }

    #[test]
    fn missing_previous_state_is_internal_error() {
        let manifest = Manifest::new();
        let included = IncludedNodes::new();
        assert!(source_status(&manifest, &included, None, "fresher").is_err());
        assert!(result(&manifest, &included, None, "success").is_err());
    }
}
