use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, REFERER};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::console::Console;
use crate::query::Operation;
use crate::service::{ResponseExt as _, Session};
use crate::{FetchError, Result};

static CSRF_TOKEN_HEADER: &str = "x-csrftoken";

pub type Variables = HashMap<&'static str, String>;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GraphqlRequest<'a> {
    operation_name: &'a str,
    query: &'a str,
    variables: &'a Variables,
}

/// Runs one GraphQL operation and returns its `data` payload.
pub struct Executor<'a> {
    pub session: &'a mut Session,
    pub base_url: &'a Url,
    pub sleep: Duration,
}

impl Executor<'_> {
    pub fn execute<T: DeserializeOwned>(
        &mut self,
        op: &Operation,
        referer: &Url,
        variables: &Variables,
        token: Option<&str>,
        cnsl: &mut Console,
    ) -> Result<T> {
        let url = self.base_url.join(op.endpoint)?;
        let payload = GraphqlRequest {
            operation_name: op.name,
            query: op.query.trim(),
            variables,
        };
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_str(referer.as_str())?);
        if let Some(token) = token {
            headers.insert(
                HeaderName::from_static(CSRF_TOKEN_HEADER),
                HeaderValue::from_str(token)?,
            );
        }

        thread::sleep(self.sleep);
        let body = self
            .session
            .post_json(url, &payload, headers, cnsl)?
            .check_status()?
            .text()?;
        unwrap_envelope(&body)
    }
}

/// Extracts `data` from a GraphQL response body.
///
/// An `errors` entry fails the whole call even when `data` is present.
pub fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> Result<T> {
    let mut envelope: Value =
        serde_json::from_str(body).map_err(|err| FetchError::parse("graphql response", err))?;
    if let Some(errors) = envelope.get("errors").filter(|errors| !errors.is_null()) {
        return Err(FetchError::Graphql(errors.to_string()));
    }
    let data = match envelope.get_mut("data").map(Value::take) {
        Some(Value::Null) | None => Value::Object(Default::default()),
        Some(data) => data,
    };
    serde_json::from_value(data).map_err(|err| FetchError::parse("graphql data", err))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize, Debug, Default, PartialEq, Eq)]
    #[serde(default)]
    struct Data {
        answer: u32,
    }

    #[test]
    fn test_unwrap_envelope() -> anyhow::Result<()> {
        let data: Data = unwrap_envelope(r#"{"data": {"answer": 42}}"#)?;
        assert_eq!(data.answer, 42);
        let data: Data = unwrap_envelope(r#"{"data": null}"#)?;
        assert_eq!(data, Data::default());
        let data: Data = unwrap_envelope(r#"{}"#)?;
        assert_eq!(data, Data::default());
        Ok(())
    }

    #[test]
    fn test_unwrap_envelope_errors_win_over_data() {
        let body = r#"{"data": {"answer": 42}, "errors": [{"message": "user not found"}]}"#;
        match unwrap_envelope::<Data>(body) {
            Err(FetchError::Graphql(errors)) => {
                assert_eq!(errors, r#"[{"message":"user not found"}]"#)
            }
            res => panic!("unexpected result: {:?}", res),
        }
    }

    #[test]
    fn test_unwrap_envelope_malformed() {
        assert!(matches!(
            unwrap_envelope::<Data>("<html>"),
            Err(FetchError::Parse { .. })
        ));
    }

    #[test]
    fn test_request_serialization() -> anyhow::Result<()> {
        let variables = maplit::hashmap! { "userSlug" => "alice".to_owned() };
        let req = GraphqlRequest {
            operation_name: "userPublicProfile",
            query: "query {}",
            variables: &variables,
        };
        let json = serde_json::to_value(&req)?;
        assert_eq!(
            json,
            serde_json::json!({
                "operationName": "userPublicProfile",
                "query": "query {}",
                "variables": {"userSlug": "alice"},
            })
        );
        Ok(())
    }
}
