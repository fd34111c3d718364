use thiserror::Error;

pub type StoryId = u64;

/// One story as delivered by a fetcher. The app layer maps this into its own
/// story type; the engine does not depend on the core crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRecord {
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u32,
    pub points: u32,
    pub object_id: StoryId,
}

/// Events delivered by [`crate::RepositoryHandle::try_recv`].
#[derive(Debug)]
pub enum RepoEvent {
    FetchCompleted {
        result: Result<Vec<StoryRecord>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}
