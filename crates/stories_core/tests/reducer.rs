use std::sync::Once;

use stories_core::{reduce, StoriesAction, StoriesState, Story};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn story(object_id: &str, title: &str) -> Story {
    Story {
        object_id: object_id.to_string(),
        title: title.to_string(),
        url: format!("https://example.com/{object_id}"),
        author: "Jordan Walke".to_string(),
        num_comments: 3,
        points: 4,
    }
}

fn loaded(data: Vec<Story>) -> StoriesState {
    StoriesState {
        data,
        is_loading: false,
        is_error: false,
    }
}

#[test]
fn fetch_init_sets_loading_and_clears_error() {
    init_logging();
    let state = StoriesState {
        data: vec![story("0", "React")],
        is_loading: false,
        is_error: true,
    };

    let next = reduce(state, StoriesAction::FetchInit);

    assert!(next.is_loading);
    assert!(!next.is_error);
    assert_eq!(next.data, vec![story("0", "React")]);
}

#[test]
fn fetch_success_replaces_data_in_payload_order() {
    init_logging();
    let state = StoriesState {
        data: vec![story("9", "stale")],
        is_loading: true,
        is_error: false,
    };
    let payload = vec![story("0", "React"), story("1", "Redux")];

    let next = reduce(state, StoriesAction::FetchSuccess(payload.clone()));

    assert_eq!(next.data, payload);
    assert!(!next.is_loading);
    assert!(!next.is_error);
}

#[test]
fn fetch_failure_sets_error_and_keeps_data() {
    init_logging();
    let state = StoriesState {
        data: vec![story("0", "React")],
        is_loading: true,
        is_error: false,
    };

    let next = reduce(state, StoriesAction::FetchFailure);

    assert!(!next.is_loading);
    assert!(next.is_error);
    assert_eq!(next.data, vec![story("0", "React")]);
}

#[test]
fn remove_drops_the_matching_story() {
    init_logging();
    let story_one = story("0", "React");
    let story_two = story("1", "Redux");
    let state = loaded(vec![story_one.clone(), story_two.clone()]);

    let next = reduce(state, StoriesAction::Remove(story_one));

    assert_eq!(next, loaded(vec![story_two]));
}

#[test]
fn remove_matches_on_object_id_not_on_record_equality() {
    init_logging();
    let state = loaded(vec![story("0", "React"), story("1", "Redux")]);

    // Same id, different fields: still removed.
    let stale_copy = story("0", "an older title");
    let next = reduce(state, StoriesAction::Remove(stale_copy));

    assert_eq!(next.data, vec![story("1", "Redux")]);
}

#[test]
fn remove_drops_all_duplicate_ids() {
    init_logging();
    let state = loaded(vec![story("0", "first"), story("1", "keep"), story("0", "second")]);

    let next = reduce(state, StoriesAction::Remove(story("0", "first")));

    assert_eq!(next.data, vec![story("1", "keep")]);
}

#[test]
fn remove_is_idempotent() {
    init_logging();
    let state = loaded(vec![story("0", "React"), story("1", "Redux")]);

    let once = reduce(state, StoriesAction::Remove(story("0", "React")));
    let twice = reduce(once.clone(), StoriesAction::Remove(story("0", "React")));

    assert_eq!(once, twice);
}

#[test]
fn remove_of_unknown_id_is_a_noop() {
    init_logging();
    let state = loaded(vec![story("0", "React")]);

    let next = reduce(state.clone(), StoriesAction::Remove(story("7", "absent")));

    assert_eq!(next, state);
}

#[test]
fn reducer_is_referentially_transparent() {
    init_logging();
    let state = StoriesState {
        data: vec![story("0", "React")],
        is_loading: true,
        is_error: false,
    };
    let action = StoriesAction::FetchSuccess(vec![story("1", "Redux")]);

    let first = reduce(state.clone(), action.clone());
    let second = reduce(state, action);

    assert_eq!(first, second);
}

#[test]
fn terminal_transitions_never_leave_both_flags_set() {
    init_logging();
    let mut state = StoriesState::new();
    let script = vec![
        StoriesAction::FetchInit,
        StoriesAction::FetchFailure,
        StoriesAction::FetchInit,
        StoriesAction::FetchSuccess(vec![story("0", "React")]),
        StoriesAction::Remove(story("0", "React")),
    ];

    for action in script {
        state = reduce(state, action);
        assert!(!(state.is_loading && state.is_error));
    }
}
