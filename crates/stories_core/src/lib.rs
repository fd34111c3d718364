//! Stories core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod storage;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, AsyncStatus, Story, StoryId};
pub use storage::{initial_search_term, StoragePort, DEFAULT_SEARCH_TERM, SEARCH_KEY};
pub use update::update;
pub use view_model::{filter_stories, AppViewModel, StoryRowView};
