use serde::Serialize;

use crate::types::{FetchOutcome, RepoStats, SegmentData, SkipReason};

#[derive(Serialize)]
struct SegmentView<'a> {
    available: bool,
    branch: Option<&'a str>,
    dirty: bool,
    stats: Option<&'a RepoStats>,
    fetch: FetchView,
}

#[derive(Serialize)]
struct FetchView {
    state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    age_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
}

impl From<FetchOutcome> for FetchView {
    fn from(outcome: FetchOutcome) -> Self {
        let (state, age, reason) = match outcome {
            FetchOutcome::Disabled => ("disabled", None, None),
            FetchOutcome::Fresh { age } => ("fresh", Some(age), None),
            FetchOutcome::Launched { age } => ("launched", Some(age), None),
            FetchOutcome::Skipped(reason) => ("skipped", None, Some(reason_name(reason))),
        };
        Self {
            state,
            age_secs: age.map(|d| d.as_secs()),
            reason,
        }
    }
}

fn reason_name(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::TopLevelUnavailable => "top_level_unavailable",
        SkipReason::MarkerUnavailable => "marker_unavailable",
        SkipReason::SpawnFailed => "spawn_failed",
    }
}

#[must_use]
pub fn to_json(data: &SegmentData) -> String {
    let stats = data.status.stats();
    let view = SegmentView {
        available: stats.is_some(),
        branch: data.status.branch(),
        dirty: stats.is_some_and(RepoStats::dirty),
        stats,
        fetch: data.fetch.into(),
    };
    serde_json::to_string(&view).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::{Value, json};

    use super::*;
    use crate::types::{RepoStatus, Unavailable};

    #[test]
    fn available_segment_serializes_stats() {
        let data = SegmentData {
            status: RepoStatus::Available {
                stats: RepoStats {
                    new: 1,
                    ahead: Some(2),
                    ..RepoStats::default()
                },
                branch: "main".to_string(),
            },
            fetch: FetchOutcome::Fresh {
                age: Duration::from_secs(61),
            },
        };
        let value: Value = serde_json::from_str(&to_json(&data)).unwrap();
        assert_eq!(
            value,
            json!({
                "available": true,
                "branch": "main",
                "dirty": true,
                "stats": {
                    "new": 1, "changed": 0, "staged": 0, "conflicted": 0,
                    "ahead": 2, "behind": null
                },
                "fetch": { "state": "fresh", "age_secs": 61 }
            })
        );
    }

    #[test]
    fn unavailable_segment_has_nulls() {
        let data = SegmentData {
            status: RepoStatus::Unavailable(Unavailable::Failed { code: Some(128) }),
            fetch: FetchOutcome::Skipped(SkipReason::TopLevelUnavailable),
        };
        let value: Value = serde_json::from_str(&to_json(&data)).unwrap();
        assert_eq!(value["available"], json!(false));
        assert_eq!(value["branch"], Value::Null);
        assert_eq!(value["stats"], Value::Null);
        assert_eq!(
            value["fetch"],
            json!({ "state": "skipped", "reason": "top_level_unavailable" })
        );
    }
}
