use stories_core::{AppViewModel, Story, StoryId, StoryRowView};

use crate::session::ViewPort;

/// Parsed line commands for the terminal driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Remove(StoryId),
    Quit,
}

/// Parses one input line. `search` with no argument clears the term.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line == "quit" || line == "q" {
        return Some(Command::Quit);
    }
    if let Some(rest) = line.strip_prefix("search") {
        if rest.is_empty() || rest.starts_with(' ') {
            return Some(Command::Search(rest.trim().to_string()));
        }
    }
    if let Some(rest) = line.strip_prefix("rm ") {
        return rest.trim().parse().ok().map(Command::Remove);
    }
    None
}

/// Rebuilds the story a row was rendered from, for the dismissal callback.
pub fn story_from_row(row: &StoryRowView) -> Story {
    Story {
        title: row.title.clone(),
        url: row.url.clone(),
        author: row.author.clone(),
        num_comments: row.num_comments,
        points: row.points,
        object_id: row.object_id,
    }
}

/// Plain-text stand-in for the rendering collaborator.
#[derive(Default)]
pub struct TerminalView;

impl ViewPort for TerminalView {
    fn mount(&mut self, view: &AppViewModel) {
        println!("My Hacker Stories");
        println!("commands: search <text> | rm <id> | quit");
        self.render(view);
    }

    fn render(&mut self, view: &AppViewModel) {
        let mut status = format!("Searching for {:?}", view.search_term);
        if view.is_loading {
            status.push_str(" [loading]");
        }
        if view.is_error {
            status.push_str(" [error]");
        }
        println!("{status}");

        for row in &view.visible {
            println!(
                "  [{}] {} <{}> by {} ({} comments, {} points)",
                row.object_id, row.title, row.url, row.author, row.num_comments, row.points
            );
        }
        println!(
            "({} of {} stories shown)",
            view.visible.len(),
            view.story_count
        );
    }
}
