use std::sync::Arc;

use stories_core::{Effect, Msg, StoragePort, Story, SEARCH_KEY};
use stories_engine::{RepoEvent, RepositoryHandle, StoryFetcher, StoryRecord};
use stories_logging::{stories_debug, stories_info, stories_warn};

/// Executes effects emitted by the core and translates repository events
/// back into messages.
pub struct EffectRunner {
    repo: RepositoryHandle,
    storage: Box<dyn StoragePort + Send>,
    fetch_started: bool,
}

impl EffectRunner {
    pub fn new(fetcher: Arc<dyn StoryFetcher>, storage: Box<dyn StoragePort + Send>) -> Self {
        Self {
            repo: RepositoryHandle::new(fetcher),
            storage,
            fetch_started: false,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchStories => {
                    if self.fetch_started {
                        stories_warn!("ignoring repeated fetch request; the dataset loads once per session");
                        continue;
                    }
                    self.fetch_started = true;
                    stories_info!("starting dataset fetch");
                    self.repo.start();
                }
                Effect::PersistSearchTerm { value } => {
                    stories_debug!("persisting search term ({} chars)", value.len());
                    // Fire-and-forget: the port logs failures internally.
                    self.storage.set(SEARCH_KEY, &value);
                }
            }
        }
    }

    /// Drains completed repository events into messages for the session loop.
    pub fn poll(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.repo.try_recv() {
            match event {
                RepoEvent::FetchCompleted { result } => match result {
                    Ok(records) => {
                        stories_info!("fetch resolved with {} stories", records.len());
                        msgs.push(Msg::StoriesFetched(
                            records.into_iter().map(map_record).collect(),
                        ));
                    }
                    Err(err) => {
                        stories_warn!("fetch failed: {}", err);
                        msgs.push(Msg::FetchFailed);
                    }
                },
            }
        }
        msgs
    }
}

fn map_record(record: StoryRecord) -> Story {
    Story {
        title: record.title,
        url: record.url,
        author: record.author,
        num_comments: record.num_comments,
        points: record.points,
        object_id: record.object_id,
    }
}
