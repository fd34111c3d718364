use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use stories_app::logging::{initialize, LogDestination};
use stories_app::persistence::FileStorage;
use stories_app::session::{Session, ViewPort};
use stories_app::view::{parse_command, story_from_row, Command, TerminalView};
use stories_engine::SeedFetcher;

fn main() {
    initialize(LogDestination::File);

    let storage = Box::new(FileStorage::new("."));
    let fetcher = Arc::new(SeedFetcher::new());
    let mut session = Session::new(storage, fetcher);
    let handle = session.handle();

    // Stdin reader; the session loop stays non-blocking.
    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            match stdin.read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    if line_tx.send(line.clone()).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut view = TerminalView::default();
    view.mount(&session.view());

    loop {
        if session.pump() {
            view.render(&session.view());
        }

        match line_rx.try_recv() {
            Ok(line) => match parse_command(&line) {
                Some(Command::Quit) => break,
                Some(Command::Search(term)) => handle.search_changed(term),
                Some(Command::Remove(id)) => {
                    let current = session.view();
                    match current.visible.iter().find(|row| row.object_id == id) {
                        Some(row) => handle.dismiss(story_from_row(row)),
                        None => println!("no visible story with id {id}"),
                    }
                }
                None => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        println!("unknown command: {trimmed}");
                    }
                }
            },
            Err(mpsc::TryRecvError::Empty) => thread::sleep(Duration::from_millis(20)),
            Err(mpsc::TryRecvError::Disconnected) => break,
        }
    }
}
