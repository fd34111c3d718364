use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FetchRequested => {
            state.begin_loading();
            vec![Effect::FetchStories]
        }
        Msg::StoriesFetched(stories) => {
            // The list replacement lands before the loading flag clears.
            state.set_stories(stories);
            state.finish_loading();
            Vec::new()
        }
        Msg::FetchFailed => {
            state.mark_failed();
            Vec::new()
        }
        Msg::SearchChanged(value) => {
            state.set_search_term(value.clone());
            vec![Effect::PersistSearchTerm { value }]
        }
        Msg::StoryDismissed(story) => {
            state.dismiss_story(story.object_id);
            Vec::new()
        }
    };

    (state, effects)
}
