//! Normalization of raw GraphQL payloads.

use ojcrawl_util::serde_ext::null_as_default;
use serde::Deserialize;
use serde_json::Value;

use crate::model::{AcSubmission, PublicProfile};

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RecentAcData {
    #[serde(rename = "recentACSubmissions", deserialize_with = "null_as_default")]
    submissions: Vec<RawSubmission>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct RawSubmission {
    submit_time: Value,
    #[serde(deserialize_with = "null_as_default")]
    question: RawQuestion,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct RawQuestion {
    title: Option<String>,
    translated_title: Option<String>,
    title_slug: Option<String>,
}

impl RawQuestion {
    /// Localized title if any, the original one otherwise.
    fn title(&self) -> Option<&str> {
        fn non_empty(title: &Option<String>) -> Option<&str> {
            title.as_deref().filter(|title| !title.is_empty())
        }
        non_empty(&self.translated_title).or_else(|| non_empty(&self.title))
    }
}

/// Accepts both `1700000000` and `"1700000000"`. Zero is not a timestamp.
fn parse_timestamp(val: &Value) -> Option<u64> {
    match val {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|&ts| ts > 0)
}

/// Keeps entries having a title, a slug and a positive timestamp; drops the rest.
pub fn recent_ac_submissions(data: RecentAcData) -> Vec<AcSubmission> {
    data.submissions
        .into_iter()
        .filter_map(|sub| {
            let title = sub.question.title()?.to_owned();
            let slug = sub
                .question
                .title_slug
                .filter(|slug| !slug.is_empty())?;
            let timestamp = parse_timestamp(&sub.submit_time)?;
            Some(AcSubmission {
                title,
                slug,
                timestamp,
            })
        })
        .collect()
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicProfileData {
    #[serde(deserialize_with = "null_as_default")]
    user_profile_public_profile: PublicProfileRoot,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct PublicProfileRoot {
    #[serde(deserialize_with = "null_as_default")]
    profile: PublicProfile,
}

pub fn public_profile(data: PublicProfileData) -> PublicProfile {
    data.user_profile_public_profile.profile
}
