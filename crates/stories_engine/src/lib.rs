//! Stories engine: asynchronous story acquisition behind a session handle.
mod fetch;
mod repository;
mod types;

pub use fetch::{
    seed_stories, FetchSettings, HnSearchFetcher, SeedFetcher, StoryFetcher, HN_SEARCH_ENDPOINT,
    SEED_FETCH_DELAY,
};
pub use repository::RepositoryHandle;
pub use types::{FetchError, RepoEvent, StoryId, StoryRecord};
