use std::time::{Duration, Instant};

use ojcrawl_config::ClientConfig;
use ojcrawl_luogu::{LentilleContext, LuoguClient, PracticeResult};
use ojcrawl_util::model::{Lookup, Uid};
use ojcrawl_util::{Console, ConsoleConfig, FetchError};
use reqwest::{StatusCode, Url};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_conf(base_url: &str, sleep: Duration) -> ClientConfig {
    let base_url = Url::parse(base_url).unwrap();
    ClientConfig::new(base_url, Duration::from_secs(5), sleep, "ojcrawl-test")
}

async fn with_client<T, F>(server: &MockServer, f: F) -> T
where
    T: Send + 'static,
    F: FnOnce(&mut LuoguClient, &mut Console) -> T + Send + 'static,
{
    run_client(client_conf(&server.uri(), Duration::from_millis(0)), f).await
}

/// Runs `f` with a fresh client built from `conf`, off the async worker threads.
async fn run_client<T, F>(conf: ClientConfig, f: F) -> T
where
    T: Send + 'static,
    F: FnOnce(&mut LuoguClient, &mut Console) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut client = LuoguClient::new(conf).unwrap();
        let mut cnsl = Console::buf(ConsoleConfig::default());
        f(&mut client, &mut cnsl)
    })
    .await
    .unwrap()
}

fn uid(s: &str) -> Uid {
    s.parse().unwrap()
}

fn practice_json() -> serde_json::Value {
    json!({
        "data": {
            "user": {"uid": 108, "name": "kkksc03", "avatar": "https://example.com/a.png"},
            "passed": [
                {"pid": "P1001", "title": "A+B Problem", "difficulty": 1, "type": "P"},
                {"pid": "P1002", "title": "Crossing the River", "difficulty": 2, "type": "P"}
            ],
            "submitted": []
        }
    })
}

#[tokio::test]
async fn json_response_is_used_directly() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/108/practice"))
        .and(header("x-lentille-request", "content-only"))
        .respond_with(ResponseTemplate::new(200).set_body_json(practice_json()))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = with_client(&server, |client, cnsl| {
        client.fetch_lentille_context(uid("108"), cnsl)
    })
    .await
    .unwrap();

    assert_eq!(ctx, Lookup::Found(LentilleContext(practice_json())));
}

#[tokio::test]
async fn html_response_falls_back_to_embedded_context() {
    let server = MockServer::start().await;
    let html = format!(
        r#"<!DOCTYPE html><html><head><title>Practice</title></head><body>
        <script id="lentille-context" type="application/json">{}</script>
        </body></html>"#,
        practice_json()
    );
    Mock::given(method("GET"))
        .and(path("/user/108/practice"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html; charset=utf-8"))
        .mount(&server)
        .await;

    let practice = with_client(&server, |client, cnsl| {
        client.fetch_user_practice(uid("108"), cnsl)
    })
    .await
    .unwrap();

    assert_eq!(practice.passed_count(), 2);
    assert_eq!(practice.passed()[0].pid, "P1001");
    assert_eq!(practice.passed()[1].title, "Crossing the River");
    assert_eq!(practice.user().as_ref().unwrap().name, "kkksc03");
}

#[tokio::test]
async fn html_without_context_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/7/practice"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html><body>login required</body></html>", "text/html"),
        )
        .mount(&server)
        .await;

    let (ctx, practice) = with_client(&server, |client, cnsl| {
        let ctx = client.fetch_lentille_context(uid("7"), cnsl).unwrap();
        let practice = client.fetch_user_practice(uid("7"), cnsl).unwrap();
        (ctx, practice)
    })
    .await;

    assert_eq!(ctx, Lookup::NotFound);
    assert_eq!(practice, PracticeResult::empty());
}

#[tokio::test]
async fn not_found_is_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/999999999/practice"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let practice = with_client(&server, |client, cnsl| {
        client.fetch_user_practice(uid("999999999"), cnsl)
    })
    .await
    .unwrap();

    assert_eq!(practice.user(), &None);
    assert!(practice.passed().is_empty());
    assert_eq!(practice.passed_count(), 0);
}

#[tokio::test]
async fn server_error_is_http_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/108/practice"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let result = with_client(&server, |client, cnsl| {
        client.fetch_user_practice(uid("108"), cnsl)
    })
    .await;

    match result {
        Err(FetchError::HttpStatus { status, snippet }) => {
            assert_eq!(status, StatusCode::BAD_GATEWAY);
            assert_eq!(snippet, "bad gateway");
        }
        res => panic!("unexpected result: {:?}", res),
    }
}

#[tokio::test]
async fn malformed_json_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/108/practice"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"data\":", "application/json"))
        .mount(&server)
        .await;

    let result = with_client(&server, |client, cnsl| {
        client.fetch_lentille_context(uid("108"), cnsl)
    })
    .await;

    assert!(matches!(result, Err(FetchError::Parse { .. })));
}

#[tokio::test]
async fn default_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/108/practice"))
        .and(header("user-agent", "ojcrawl-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(practice_json()))
        .expect(1)
        .mount(&server)
        .await;

    with_client(&server, |client, cnsl| {
        client.fetch_user_practice(uid("108"), cnsl)
    })
    .await
    .unwrap();

    let requests = server.received_requests().await.unwrap();
    let accept = requests[0].headers.get("accept").unwrap();
    assert_eq!(accept.to_str().unwrap(), "text/html,application/json");
}

#[tokio::test]
async fn practice_waits_before_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/108/practice"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let sleep = Duration::from_millis(300);
    let elapsed = run_client(client_conf(&server.uri(), sleep), |client, cnsl| {
        let started = Instant::now();
        client.fetch_user_practice(uid("108"), cnsl).unwrap();
        started.elapsed()
    })
    .await;

    assert!(elapsed >= sleep, "elapsed: {:?}", elapsed);
}

#[tokio::test]
async fn base_url_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mirror/user/108/practice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(practice_json()))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = format!("{}/mirror", server.uri());
    let conf = client_conf(&base_url, Duration::from_millis(0));
    let (url, practice) = run_client(conf, |client, cnsl| {
        let url = client.practice_url(uid("108")).unwrap();
        (url, client.fetch_user_practice(uid("108"), cnsl).unwrap())
    })
    .await;

    assert_eq!(url.as_str(), format!("{}/user/108/practice", base_url));
    assert_eq!(practice.passed_count(), 2);
}
