use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Hydration context of a practice page, kept as the raw JSON tree.
///
/// Expected shape is `{"data": {"user": {...}, "passed": [...], "submitted": [...]}}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct LentilleContext(pub Value);

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PracticeUser {
    pub uid: Option<u64>,
    pub name: String,
    pub avatar: String,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PassedProblem {
    pub pid: String,
    pub title: String,
    pub difficulty: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Problems solved by a user.
///
/// `passed_count` is derived from `passed` on construction and cannot drift.
#[derive(Serialize, Getters, CopyGetters, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PracticeResult {
    #[get = "pub"]
    user: Option<PracticeUser>,
    #[get = "pub"]
    passed: Vec<PassedProblem>,
    #[get_copy = "pub"]
    passed_count: usize,
}

impl PracticeResult {
    pub fn new(user: Option<PracticeUser>, passed: Vec<PassedProblem>) -> Self {
        Self {
            user,
            passed_count: passed.len(),
            passed,
        }
    }

    /// Result for a user with no readable practice data.
    pub fn empty() -> Self {
        Self::default()
    }
}
