#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Kick off the one-time dataset fetch. Dispatched once at session start.
    FetchRequested,
    /// The repository resolved with the complete dataset.
    StoriesFetched(Vec<crate::Story>),
    /// The repository fetch failed; no partial list is delivered.
    FetchFailed,
    /// User edited the search box (full current text).
    SearchChanged(String),
    /// User dismissed a story from the list.
    StoryDismissed(crate::Story),
}
