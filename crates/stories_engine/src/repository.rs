use std::sync::{mpsc, Arc};
use std::thread;

use tokio_util::sync::CancellationToken;

use crate::{RepoEvent, StoryFetcher};

enum RepoCommand {
    Start,
}

/// Session-side handle to the story repository. Owns a worker thread hosting
/// the async runtime; results come back over [`RepositoryHandle::try_recv`].
pub struct RepositoryHandle {
    cmd_tx: mpsc::Sender<RepoCommand>,
    event_rx: mpsc::Receiver<RepoEvent>,
    cancel: CancellationToken,
}

impl RepositoryHandle {
    pub fn new(fetcher: Arc<dyn StoryFetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                let cancel = worker_cancel.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx, cancel).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx,
            cancel,
        }
    }

    /// Triggers the dataset fetch. The session fires this exactly once; the
    /// handle never re-fires on its own.
    pub fn start(&self) {
        let _ = self.cmd_tx.send(RepoCommand::Start);
    }

    pub fn try_recv(&self) -> Option<RepoEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Suppresses delivery of any still-outstanding fetch result.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Drop for RepositoryHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn handle_command(
    fetcher: &dyn StoryFetcher,
    command: RepoCommand,
    event_tx: mpsc::Sender<RepoEvent>,
    cancel: CancellationToken,
) {
    match command {
        RepoCommand::Start => {
            tokio::select! {
                _ = cancel.cancelled() => {}
                result = fetcher.fetch() => {
                    // A cancel landing between completion and delivery still
                    // wins; the stale result is dropped, never delivered.
                    if !cancel.is_cancelled() {
                        let _ = event_tx.send(RepoEvent::FetchCompleted { result });
                    }
                }
            }
        }
    }
}
