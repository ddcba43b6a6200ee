use async_trait::async_trait;
use serde::Deserialize;
use stories_core::Story;

use crate::FetchError;

/// Where searches are sent.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub base_url: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: "https://hn.algolia.com/api/v1/search".to_string(),
        }
    }
}

/// Builds `<base>?query=<urlencoded term>` for one search round-trip.
pub fn search_url(base_url: &str, term: &str) -> Result<reqwest::Url, FetchError> {
    let mut url = reqwest::Url::parse(base_url)
        .map_err(|err| FetchError::InvalidUrl(err.to_string()))?;
    url.query_pairs_mut().append_pair("query", term);
    Ok(url)
}

#[async_trait]
pub trait StoryFetcher: Send + Sync {
    /// One GET against the index: no retry, no timeout, no cancellation of
    /// earlier in-flight calls.
    async fn fetch(&self, url: reqwest::Url) -> Result<Vec<Story>, FetchError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestStoryFetcher {
    client: reqwest::Client,
}

impl ReqwestStoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoryFetcher for ReqwestStoryFetcher {
    async fn fetch(&self, url: reqwest::Url) -> Result<Vec<Story>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        let envelope: SearchEnvelope = serde_json::from_str(&body)
            .map_err(|err| FetchError::MalformedBody(err.to_string()))?;

        Ok(envelope.hits.into_iter().map(Story::from).collect())
    }
}

/// Response envelope of the search endpoint. Unknown fields are ignored; the
/// listed ones are required, and a record missing any of them fails the whole
/// fetch.
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    hits: Vec<HitRecord>,
}

#[derive(Debug, Deserialize)]
struct HitRecord {
    #[serde(rename = "objectID")]
    object_id: String,
    title: String,
    url: String,
    author: String,
    num_comments: u32,
    points: i64,
}

impl From<HitRecord> for Story {
    fn from(hit: HitRecord) -> Self {
        Story {
            id: hit.object_id,
            title: hit.title,
            url: hit.url,
            author: hit.author,
            comment_count: hit.num_comments,
            points: hit.points,
        }
    }
}
