use std::time::Duration;

use stories_logging::stories_debug;

use crate::{FetchError, StoryRecord};

/// Latency of the simulated fetch, matching the dataset's original source.
pub const SEED_FETCH_DELAY: Duration = Duration::from_millis(2000);

/// Default endpoint for [`HnSearchFetcher`].
pub const HN_SEARCH_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Source of the story dataset. Resolves all-or-nothing; no partial lists.
#[async_trait::async_trait]
pub trait StoryFetcher: Send + Sync {
    async fn fetch(&self) -> Result<Vec<StoryRecord>, FetchError>;
}

/// In-memory fetcher that resolves with a fixed dataset after a fixed delay.
#[derive(Debug, Clone)]
pub struct SeedFetcher {
    delay: Duration,
    stories: Vec<StoryRecord>,
}

impl SeedFetcher {
    pub fn new() -> Self {
        Self {
            delay: SEED_FETCH_DELAY,
            stories: seed_stories(),
        }
    }

    /// Same dataset, custom latency. Used by tests to keep runs fast.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::new()
        }
    }

    pub fn with_stories(delay: Duration, stories: Vec<StoryRecord>) -> Self {
        Self { delay, stories }
    }
}

impl Default for SeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl StoryFetcher for SeedFetcher {
    // The error path exists in the signature but no seed input produces it;
    // only a real network substitute exercises it.
    async fn fetch(&self) -> Result<Vec<StoryRecord>, FetchError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.stories.clone())
    }
}

/// The seed dataset delivered by [`SeedFetcher`].
pub fn seed_stories() -> Vec<StoryRecord> {
    vec![
        StoryRecord {
            title: "React".to_string(),
            url: "https://reactjs.org/".to_string(),
            author: "Jordan Clarke".to_string(),
            num_comments: 3,
            points: 4,
            object_id: 0,
        },
        StoryRecord {
            title: "Redux".to_string(),
            url: "https://redux.js.org".to_string(),
            author: "Dan Abramov, Andrew Clark".to_string(),
            num_comments: 2,
            points: 5,
            object_id: 1,
        },
    ]
}

/// Real-network fetcher against the Hacker News Algolia search API, behind
/// the same contract as [`SeedFetcher`].
#[derive(Debug, Clone)]
pub struct HnSearchFetcher {
    endpoint: String,
    query: String,
    settings: FetchSettings,
}

impl HnSearchFetcher {
    pub fn new(query: impl Into<String>, settings: FetchSettings) -> Self {
        Self {
            endpoint: HN_SEARCH_ENDPOINT.to_string(),
            query: query.into(),
            settings,
        }
    }

    /// Points the fetcher at a different endpoint. Used by tests.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl StoryFetcher for HnSearchFetcher {
    async fn fetch(&self) -> Result<Vec<StoryRecord>, FetchError> {
        let client = self.build_client()?;

        let response = client
            .get(&self.endpoint)
            .query(&[("query", self.query.as_str())])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        let parsed: SearchResponse = serde_json::from_str(&body)
            .map_err(|err| FetchError::Malformed(err.to_string()))?;

        let hit_count = parsed.hits.len();
        let stories: Vec<StoryRecord> = parsed
            .hits
            .into_iter()
            .filter_map(SearchHit::into_record)
            .collect();
        stories_debug!(
            "search fetch decoded {} of {} hits as stories",
            stories.len(),
            hit_count
        );
        Ok(stories)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::Timeout;
    }
    FetchError::Network(err.to_string())
}

#[derive(Debug, serde::Deserialize)]
struct SearchResponse {
    hits: Vec<SearchHit>,
}

/// Raw API hit. Comments and dead links arrive with null fields; anything
/// short of a complete story is skipped rather than failing the batch.
#[derive(Debug, serde::Deserialize)]
struct SearchHit {
    title: Option<String>,
    url: Option<String>,
    author: Option<String>,
    num_comments: Option<u32>,
    points: Option<u32>,
    #[serde(rename = "objectID")]
    object_id: String,
}

impl SearchHit {
    fn into_record(self) -> Option<StoryRecord> {
        Some(StoryRecord {
            title: self.title?,
            url: self.url?,
            author: self.author?,
            num_comments: self.num_comments.unwrap_or(0),
            points: self.points.unwrap_or(0),
            object_id: self.object_id.parse().ok()?,
        })
    }
}
