use crate::view_model::{filter_stories, AppViewModel, StoryRowView};

pub type StoryId = u64;

/// One listed record. Immutable once obtained; `object_id` is unique within
/// the active list (an input precondition, not enforced here).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u32,
    pub points: u32,
    pub object_id: StoryId,
}

/// Fetch status as two independently settable flags.
///
/// A failed fetch sets `is_error` without clearing `is_loading`; both flags
/// then stay set for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AsyncStatus {
    pub is_loading: bool,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    stories: Vec<Story>,
    search_term: String,
    status: AsyncStatus,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the search term read from storage at session start.
    pub fn with_search_term(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..Self::default()
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn status(&self) -> AsyncStatus {
        self.status
    }

    /// Derives the renderable snapshot: status flags plus the visible subset
    /// of stories, recomputed from scratch on every call.
    pub fn view(&self) -> AppViewModel {
        let visible = filter_stories(&self.stories, &self.search_term)
            .into_iter()
            .map(|story| StoryRowView {
                object_id: story.object_id,
                title: story.title.clone(),
                url: story.url.clone(),
                author: story.author.clone(),
                num_comments: story.num_comments,
                points: story.points,
            })
            .collect();

        AppViewModel {
            search_term: self.search_term.clone(),
            is_loading: self.status.is_loading,
            is_error: self.status.is_error,
            story_count: self.stories.len(),
            visible,
        }
    }

    /// Returns whether the state changed since the last call, resetting the
    /// flag. The session loop uses this to coalesce re-renders.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        self.search_term = term;
        self.dirty = true;
    }

    /// Replaces the story list wholesale, discarding whatever was there.
    pub(crate) fn set_stories(&mut self, stories: Vec<Story>) {
        self.stories = stories;
        self.dirty = true;
    }

    /// Removes every story whose `object_id` matches. Under the uniqueness
    /// precondition that is at most one; duplicates are all removed.
    pub(crate) fn dismiss_story(&mut self, object_id: StoryId) {
        self.stories.retain(|story| story.object_id != object_id);
        self.dirty = true;
    }

    pub(crate) fn begin_loading(&mut self) {
        self.status.is_loading = true;
        self.dirty = true;
    }

    pub(crate) fn finish_loading(&mut self) {
        self.status.is_loading = false;
        self.dirty = true;
    }

    /// `is_loading` is deliberately left untouched here; failure is surfaced
    /// through `is_error` alone.
    pub(crate) fn mark_failed(&mut self) {
        self.status.is_error = true;
        self.dirty = true;
    }
}
