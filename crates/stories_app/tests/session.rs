use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};
use std::time::{Duration, Instant};

use stories_app::session::Session;
use stories_app::view::story_from_row;
use stories_core::{AppViewModel, StoragePort, SEARCH_KEY};
use stories_engine::{FetchError, SeedFetcher, StoryFetcher, StoryRecord};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(stories_logging::initialize_for_tests);
}

/// Storage double the test can keep observing after the session takes the
/// boxed port.
#[derive(Clone, Default)]
struct SharedStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl SharedStorage {
    fn seeded(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .lock()
            .expect("lock storage")
            .insert(key.to_string(), value.to_string());
        storage
    }

    fn entry(&self, key: &str) -> Option<String> {
        self.entries.lock().expect("lock storage").get(key).cloned()
    }
}

impl StoragePort for SharedStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entry(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("lock storage")
            .insert(key.to_string(), value.to_string());
    }
}

struct FailingFetcher;

#[async_trait::async_trait]
impl StoryFetcher for FailingFetcher {
    async fn fetch(&self) -> Result<Vec<StoryRecord>, FetchError> {
        Err(FetchError::Network("connection refused".to_string()))
    }
}

fn pump_until(
    session: &mut Session,
    timeout: Duration,
    pred: impl Fn(&AppViewModel) -> bool,
) -> AppViewModel {
    let deadline = Instant::now() + timeout;
    loop {
        session.pump();
        let view = session.view();
        if pred(&view) {
            return view;
        }
        assert!(
            Instant::now() < deadline,
            "condition not reached before timeout; last view: {view:?}"
        );
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn full_session_from_empty_storage() {
    init_logging();
    let storage = SharedStorage::default();
    let fetcher = Arc::new(SeedFetcher::with_delay(Duration::from_millis(40)));
    let mut session = Session::new(Box::new(storage.clone()), fetcher);
    let handle = session.handle();

    // Immediately after start: loading, default term, nothing visible.
    let view = session.view();
    assert_eq!(view.search_term, "React");
    assert!(view.is_loading);
    assert!(!view.is_error);
    assert_eq!(view.story_count, 0);
    assert!(view.visible.is_empty());

    // Fetch resolution lands both seed stories; the default term shows one.
    let view = pump_until(&mut session, Duration::from_secs(5), |v| !v.is_loading);
    assert_eq!(view.story_count, 2);
    assert!(!view.is_error);
    assert_eq!(view.visible.len(), 1);
    assert_eq!(view.visible[0].title, "React");

    // Narrow the search to the Redux story.
    handle.search_changed("Redux");
    let view = pump_until(&mut session, Duration::from_secs(1), |v| {
        v.search_term == "Redux"
    });
    assert_eq!(view.visible.len(), 1);
    assert_eq!(view.visible[0].title, "Redux");
    assert_eq!(storage.entry(SEARCH_KEY).as_deref(), Some("Redux"));

    // Dismissing it leaves the React story held but nothing visible.
    handle.dismiss(story_from_row(&view.visible[0]));
    let view = pump_until(&mut session, Duration::from_secs(1), |v| v.story_count == 1);
    assert!(view.visible.is_empty());
    assert_eq!(view.search_term, "Redux");
}

#[test]
fn persisted_term_survives_into_the_next_session() {
    init_logging();
    let storage = SharedStorage::seeded(SEARCH_KEY, "Redux");
    let fetcher = Arc::new(SeedFetcher::with_delay(Duration::from_millis(1)));

    let session = Session::new(Box::new(storage), fetcher);

    assert_eq!(session.view().search_term, "Redux");
}

#[test]
fn fetch_failure_raises_error_and_leaves_loading_set() {
    init_logging();
    let storage = SharedStorage::default();
    let mut session = Session::new(Box::new(storage), Arc::new(FailingFetcher));

    let view = pump_until(&mut session, Duration::from_secs(5), |v| v.is_error);

    // The loading flag stays up alongside the error flag.
    assert!(view.is_loading);
    assert_eq!(view.story_count, 0);
}
