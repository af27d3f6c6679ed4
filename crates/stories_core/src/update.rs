use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchInputChanged(term) => {
            if term == state.search_term() {
                // Unchanged value: no state change, no write-through.
                Vec::new()
            } else {
                state.set_search_term(term.clone());
                vec![Effect::PersistSearchTerm { value: term }]
            }
        }
        Msg::SearchSubmitted => {
            let (request_id, url) = state.submit_search();
            vec![Effect::FetchStories { request_id, url }]
        }
        Msg::Stories(action) => {
            state.apply_stories(action);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
