use std::sync::Once;

use stories_core::{
    update, AppState, Effect, Msg, StoriesAction, Story, API_ENDPOINT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn story(object_id: &str, title: &str) -> Story {
    Story {
        object_id: object_id.to_string(),
        title: title.to_string(),
        url: format!("https://example.com/{object_id}"),
        author: "Dan Abramov".to_string(),
        num_comments: 2,
        points: 5,
    }
}

#[test]
fn changed_input_updates_term_and_emits_persist_effect() {
    init_logging();
    let state = AppState::new(API_ENDPOINT, "React");

    let (next, effects) = update(state, Msg::SearchInputChanged("Redux".to_string()));

    assert_eq!(next.search_term(), "Redux");
    assert_eq!(
        effects,
        vec![Effect::PersistSearchTerm {
            value: "Redux".to_string(),
        }]
    );
}

#[test]
fn unchanged_input_is_ignored() {
    init_logging();
    let state = AppState::new(API_ENDPOINT, "React");

    let (next, effects) = update(state.clone(), Msg::SearchInputChanged("React".to_string()));

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn submit_derives_an_encoded_url_and_emits_fetch_effect() {
    init_logging();
    let state = AppState::new(API_ENDPOINT, "rust lang");

    let (next, effects) = update(state, Msg::SearchSubmitted);

    let expected_url = "https://hn.algolia.com/api/v1/search?query=rust+lang";
    assert_eq!(next.url(), expected_url);
    assert_eq!(
        effects,
        vec![Effect::FetchStories {
            request_id: 1,
            url: expected_url.to_string(),
        }]
    );
}

#[test]
fn resubmitting_allocates_fresh_request_ids() {
    init_logging();
    let state = AppState::new(API_ENDPOINT, "React");

    let (state, _) = update(state, Msg::SearchSubmitted);
    let (state, _) = update(state, Msg::SearchInputChanged("Redux".to_string()));
    let (_, effects) = update(state, Msg::SearchSubmitted);

    assert_eq!(
        effects,
        vec![Effect::FetchStories {
            request_id: 2,
            url: "https://hn.algolia.com/api/v1/search?query=Redux".to_string(),
        }]
    );
}

#[test]
fn editing_the_term_does_not_change_the_committed_url() {
    init_logging();
    let state = AppState::new(API_ENDPOINT, "React");
    let (state, _) = update(state, Msg::SearchSubmitted);
    let committed = state.url().to_string();

    let (next, _) = update(state, Msg::SearchInputChanged("Redux".to_string()));

    // The URL only moves on submit, like the original form flow.
    assert_eq!(next.url(), committed);
}

#[test]
fn stories_actions_are_routed_to_the_reducer() {
    init_logging();
    let state = AppState::new(API_ENDPOINT, "React");

    let (state, effects) = update(state, Msg::Stories(StoriesAction::FetchInit));
    assert!(effects.is_empty());
    assert!(state.stories().is_loading);

    let payload = vec![story("0", "React"), story("1", "Redux")];
    let (state, _) = update(
        state,
        Msg::Stories(StoriesAction::FetchSuccess(payload.clone())),
    );
    assert!(!state.stories().is_loading);
    assert_eq!(state.stories().data, payload);

    let (state, _) = update(state, Msg::Stories(StoriesAction::Remove(story("0", "React"))));
    assert_eq!(state.stories().data, vec![story("1", "Redux")]);
}

#[test]
fn view_model_mirrors_the_story_list() {
    init_logging();
    let state = AppState::new(API_ENDPOINT, "React");
    let (state, _) = update(
        state,
        Msg::Stories(StoriesAction::FetchSuccess(vec![story("0", "React")])),
    );

    let view = state.view();

    assert_eq!(view.search_term, "React");
    assert!(!view.is_loading);
    assert!(!view.is_error);
    assert_eq!(view.stories.len(), 1);
    assert_eq!(view.stories[0].object_id, "0");
    assert_eq!(view.stories[0].title, "React");
}
