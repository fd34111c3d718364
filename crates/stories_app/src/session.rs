use std::sync::{mpsc, Arc};

use stories_core::{
    initial_search_term, update, AppState, AppViewModel, Msg, StoragePort, Story,
    DEFAULT_SEARCH_TERM, SEARCH_KEY,
};
use stories_engine::StoryFetcher;
use stories_logging::stories_info;

use crate::effects::EffectRunner;

/// Seam to the rendering collaborator.
pub trait ViewPort {
    /// Called exactly once, before the first render. Implementations give
    /// their search input focus here.
    fn mount(&mut self, view: &AppViewModel);
    fn render(&mut self, view: &AppViewModel);
}

/// Interaction callbacks handed to the rendering layer. Cheap to clone;
/// every call becomes a message on the session loop.
#[derive(Clone)]
pub struct SessionHandle {
    msg_tx: mpsc::Sender<Msg>,
}

impl SessionHandle {
    /// Search-box edit callback, invoked with the full current text.
    pub fn search_changed(&self, value: impl Into<String>) {
        let _ = self.msg_tx.send(Msg::SearchChanged(value.into()));
    }

    /// Dismiss-button callback for one listed story.
    pub fn dismiss(&self, story: Story) {
        let _ = self.msg_tx.send(Msg::StoryDismissed(story));
    }
}

/// One UI session: state, message loop, and effect execution. All state
/// mutation funnels through [`Session::pump`] on the owning thread; dropping
/// the session cancels the in-flight fetch so a late result cannot land
/// after teardown.
pub struct Session {
    state: AppState,
    msg_rx: mpsc::Receiver<Msg>,
    msg_tx: mpsc::Sender<Msg>,
    effects: EffectRunner,
}

impl Session {
    pub fn new(storage: Box<dyn StoragePort + Send>, fetcher: Arc<dyn StoryFetcher>) -> Self {
        let search_term = initial_search_term(storage.as_ref(), SEARCH_KEY, DEFAULT_SEARCH_TERM);
        stories_info!("session starting with search term {:?}", search_term);

        let (msg_tx, msg_rx) = mpsc::channel();
        let effects = EffectRunner::new(fetcher, storage);
        let mut session = Self {
            state: AppState::with_search_term(search_term),
            msg_rx,
            msg_tx,
            effects,
        };

        // The dataset loads exactly once, at session start.
        session.dispatch(Msg::FetchRequested);
        session
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            msg_tx: self.msg_tx.clone(),
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    /// Applies pending repository events and queued messages, returning
    /// whether the view changed and should be re-rendered.
    pub fn pump(&mut self) -> bool {
        for msg in self.effects.poll() {
            self.dispatch(msg);
        }
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
        }
        self.state.consume_dirty()
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects);
    }
}
