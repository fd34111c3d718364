use std::sync::Arc;
use std::time::{Duration, Instant};

use stories_engine::{seed_stories, RepoEvent, RepositoryHandle, SeedFetcher};

fn wait_for_event(handle: &RepositoryHandle, timeout: Duration) -> Option<RepoEvent> {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if let Some(event) = handle.try_recv() {
            return Some(event);
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    None
}

#[test]
fn handle_delivers_the_fetch_result() {
    let fetcher = Arc::new(SeedFetcher::with_delay(Duration::from_millis(30)));
    let handle = RepositoryHandle::new(fetcher);

    handle.start();

    let event = wait_for_event(&handle, Duration::from_secs(5)).expect("fetch event");
    let RepoEvent::FetchCompleted { result } = event;
    assert_eq!(result.expect("seed fetch ok"), seed_stories());
}

#[test]
fn handle_is_quiet_until_started() {
    let fetcher = Arc::new(SeedFetcher::with_delay(Duration::from_millis(1)));
    let handle = RepositoryHandle::new(fetcher);

    std::thread::sleep(Duration::from_millis(100));

    assert!(handle.try_recv().is_none());
}

#[test]
fn cancelled_handle_never_delivers() {
    let fetcher = Arc::new(SeedFetcher::with_delay(Duration::from_millis(100)));
    let handle = RepositoryHandle::new(fetcher);

    handle.start();
    handle.cancel();

    // Give the worker long enough that an uncancelled fetch would have
    // resolved several times over.
    assert!(wait_for_event(&handle, Duration::from_millis(500)).is_none());
}
