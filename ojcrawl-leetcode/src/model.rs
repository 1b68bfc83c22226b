use chrono::{Local, TimeZone as _};
use ojcrawl_util::serde_ext::null_as_default;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Open Graph summary of a profile page.
///
/// The Open Graph fields are only present when the profile exists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileMeta {
    pub exists: bool,
    pub url_final: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ProfileMeta {
    pub fn found(
        url_final: impl Into<String>,
        og_title: impl Into<String>,
        og_description: impl Into<String>,
    ) -> Self {
        Self {
            exists: true,
            url_final: url_final.into(),
            og_title: Some(og_title.into()),
            og_description: Some(og_description.into()),
            reason: None,
        }
    }

    pub fn missing(status: StatusCode, url_final: impl Into<String>) -> Self {
        Self {
            exists: false,
            url_final: url_final.into(),
            og_title: None,
            og_description: None,
            reason: Some(format!("HTTP {}", status.as_u16())),
        }
    }
}

/// One accepted submission.
///
/// Only built from complete upstream entries; see `extract::recent_ac_submissions`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AcSubmission {
    pub title: String,
    pub slug: String,
    /// Seconds since the unix epoch.
    pub timestamp: u64,
}

impl AcSubmission {
    /// Submission time in local time, formatted as `%Y-%m-%d %H:%M:%S`.
    pub fn local_time(&self) -> String {
        Local
            .timestamp_opt(self.timestamp as i64, 0)
            .single()
            .map(|time| time.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitStats {
    #[serde(deserialize_with = "null_as_default")]
    pub user_profile_user_question_submit_stats: SubmitCounts,
    #[serde(deserialize_with = "null_as_default")]
    pub user_profile_user_question_progress: QuestionProgress,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub ac_submission_num: Vec<DifficultyCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_submission_num: Vec<DifficultyCount>,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionProgress {
    #[serde(deserialize_with = "null_as_default")]
    pub num_accepted_questions: Vec<DifficultyCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub num_failed_questions: Vec<DifficultyCount>,
    #[serde(deserialize_with = "null_as_default")]
    pub num_untouched_questions: Vec<DifficultyCount>,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct DifficultyCount {
    #[serde(deserialize_with = "null_as_default")]
    pub difficulty: String,
    #[serde(deserialize_with = "null_as_default")]
    pub count: u64,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub user_slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub real_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_avatar: String,
}

impl SubmitStats {
    /// Accepted question count summed over all difficulties.
    pub fn total_accepted(&self) -> u64 {
        self.user_profile_user_question_progress
            .num_accepted_questions
            .iter()
            .map(|c| c.count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_meta_missing() {
        let meta = ProfileMeta::missing(StatusCode::NOT_FOUND, "https://leetcode.cn/u/x/");
        assert!(!meta.exists);
        assert_eq!(meta.reason.as_deref(), Some("HTTP 404"));
    }

    #[test]
    fn test_profile_meta_serialization() -> anyhow::Result<()> {
        let missing = ProfileMeta::missing(StatusCode::NOT_FOUND, "https://leetcode.cn/u/x/");
        assert_eq!(
            serde_json::to_value(&missing)?,
            serde_json::json!({
                "exists": false,
                "url_final": "https://leetcode.cn/u/x/",
                "reason": "HTTP 404",
            })
        );

        let found = ProfileMeta::found("https://leetcode.cn/u/y/", "", "");
        assert_eq!(
            serde_json::to_value(&found)?,
            serde_json::json!({
                "exists": true,
                "url_final": "https://leetcode.cn/u/y/",
                "og_title": "",
                "og_description": "",
            })
        );
        Ok(())
    }

    #[test]
    fn test_submit_stats_defaults() -> anyhow::Result<()> {
        let stats: SubmitStats = serde_json::from_str(
            r#"{
                "userProfileUserQuestionSubmitStats": null,
                "userProfileUserQuestionProgress": {
                    "numAcceptedQuestions": [
                        {"difficulty": "EASY", "count": 10},
                        {"difficulty": "MEDIUM", "count": null},
                        {"difficulty": "HARD", "count": 2}
                    ]
                }
            }"#,
        )?;
        assert_eq!(stats.user_profile_user_question_submit_stats, SubmitCounts::default());
        let progress = &stats.user_profile_user_question_progress;
        assert_eq!(progress.num_accepted_questions.len(), 3);
        assert_eq!(progress.num_accepted_questions[1].count, 0);
        assert!(progress.num_failed_questions.is_empty());
        assert_eq!(stats.total_accepted(), 12);
        Ok(())
    }

    #[test]
    fn test_local_time_format() {
        let sub = AcSubmission {
            title: "Two Sum".into(),
            slug: "two-sum".into(),
            timestamp: 1_700_000_000,
        };
        let time = sub.local_time();
        assert_eq!(time.len(), "2023-11-14 22:13:20".len());
        assert!(time.starts_with("2023-11-1"));
    }
}
