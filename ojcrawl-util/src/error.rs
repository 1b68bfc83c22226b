use reqwest::header::InvalidHeaderValue;
use reqwest::StatusCode;

/// Max number of characters of a response body kept in an error.
pub const SNIPPET_MAX_CHARS: usize = 800;

/// Failure of a single fetch against a remote service.
///
/// Soft not-found outcomes are never represented here;
/// they are returned as ordinary values by the clients.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request timed out")]
    Timeout(#[source] reqwest::Error),
    #[error("Could not send request")]
    Transport(#[source] reqwest::Error),
    #[error("Received HTTP {} : {snippet}", .status.as_u16())]
    HttpStatus { status: StatusCode, snippet: String },
    #[error("Received GraphQL errors : {0}")]
    Graphql(String),
    #[error("Could not parse {what}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Too many redirects : {0}")]
    TooManyRedirects(reqwest::Url),
    #[error("Could not build url")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Could not build header value")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

impl FetchError {
    pub fn http_status(status: StatusCode, body: &str) -> Self {
        let snippet = body
            .replace('\r', " ")
            .replace('\n', " ")
            .chars()
            .take(SNIPPET_MAX_CHARS)
            .collect();
        Self::HttpStatus { status, snippet }
    }

    pub fn parse(what: &'static str, source: serde_json::Error) -> Self {
        Self::Parse { what, source }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Transport(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_snippet() {
        let body = format!("line1\r\nline2\n{}", "x".repeat(1000));
        match FetchError::http_status(StatusCode::BAD_GATEWAY, &body) {
            FetchError::HttpStatus { status, snippet } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(snippet.chars().count(), SNIPPET_MAX_CHARS);
                assert!(snippet.starts_with("line1  line2 xxx"));
                assert!(!snippet.contains('\n'));
            }
            err => panic!("unexpected error: {:?}", err),
        }
    }

    #[test]
    fn test_http_status_display() {
        let err = FetchError::http_status(StatusCode::INTERNAL_SERVER_ERROR, "oops");
        assert_eq!(err.to_string(), "Received HTTP 500 : oops");
    }

    #[test]
    fn test_parse_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FetchError::parse("embedded context", source);
        assert_eq!(err.to_string(), "Could not parse embedded context");
        assert!(!err.is_timeout());
    }
}
