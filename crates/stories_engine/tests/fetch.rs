use pretty_assertions::assert_eq;
use serde_json::json;
use stories_core::Story;
use stories_engine::{search_url, FetchError, ReqwestStoryFetcher, StoryFetcher};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn hits_body() -> serde_json::Value {
    json!({
        "hits": [
            {
                "objectID": "1",
                "title": "The Rust Programming Language",
                "url": "https://www.rust-lang.org/",
                "author": "steve",
                "num_comments": 2,
                "points": 120,
                "created_at": "2024-05-01T00:00:00Z",
                "_tags": ["story"]
            },
            {
                "objectID": "2",
                "title": "Rust in production",
                "url": "https://example.com/rust",
                "author": "carol",
                "num_comments": 7,
                "points": 55
            }
        ],
        "nbHits": 2,
        "page": 0
    })
}

#[test]
fn search_url_encodes_the_term() {
    let url = search_url("https://example.com/search", "rust lang").unwrap();
    assert_eq!(url.as_str(), "https://example.com/search?query=rust+lang");
}

#[test]
fn search_url_rejects_a_bad_base() {
    let err = search_url("not a url", "rust").unwrap_err();
    assert!(matches!(err, FetchError::InvalidUrl(_)));
}

#[tokio::test]
async fn fetcher_parses_the_hits_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("query", "Rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(hits_body()))
        .mount(&server)
        .await;

    let fetcher = ReqwestStoryFetcher::new();
    let url = search_url(&server.uri(), "Rust").unwrap();

    let stories = fetcher.fetch(url).await.expect("fetch ok");
    assert_eq!(
        stories,
        vec![
            Story {
                id: "1".to_string(),
                title: "The Rust Programming Language".to_string(),
                url: "https://www.rust-lang.org/".to_string(),
                author: "steve".to_string(),
                comment_count: 2,
                points: 120,
            },
            Story {
                id: "2".to_string(),
                title: "Rust in production".to_string(),
                url: "https://example.com/rust".to_string(),
                author: "carol".to_string(),
                comment_count: 7,
                points: 55,
            },
        ]
    );
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = ReqwestStoryFetcher::new();
    let url = search_url(&server.uri(), "Rust").unwrap();

    let err = fetcher.fetch(url).await.unwrap_err();
    assert_eq!(err, FetchError::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_fails_on_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let fetcher = ReqwestStoryFetcher::new();
    let url = search_url(&server.uri(), "Rust").unwrap();

    let err = fetcher.fetch(url).await.unwrap_err();
    assert!(matches!(err, FetchError::MalformedBody(_)));
}

#[tokio::test]
async fn fetcher_fails_on_a_hit_missing_required_fields() {
    let server = MockServer::start().await;
    let body = json!({
        "hits": [
            { "objectID": "1", "title": "No comment count", "url": "https://example.com",
              "author": "dev", "points": 3 }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let fetcher = ReqwestStoryFetcher::new();
    let url = search_url(&server.uri(), "Rust").unwrap();

    let err = fetcher.fetch(url).await.unwrap_err();
    assert!(matches!(err, FetchError::MalformedBody(_)));
}
