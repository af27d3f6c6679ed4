use crate::{StoriesAction, StoriesState};

/// Pure reducer for the story list.
///
/// Referentially transparent: the same (state, action) pair always yields an
/// equal next state. The input is consumed, never mutated through a shared
/// reference. `is_loading` and `is_error` are never both true after a
/// terminal transition; `data` only changes on `FetchSuccess` and `Remove`.
pub fn reduce(state: StoriesState, action: StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInit => StoriesState {
            is_loading: true,
            is_error: false,
            ..state
        },
        StoriesAction::FetchSuccess(data) => StoriesState {
            data,
            is_loading: false,
            is_error: false,
        },
        StoriesAction::FetchFailure => StoriesState {
            is_loading: false,
            is_error: true,
            ..state
        },
        StoriesAction::Remove(story) => {
            // Identity equality on object_id, not structural equality on the
            // record. Drops every match, defensive against duplicate ids.
            let data = state
                .data
                .into_iter()
                .filter(|entry| entry.object_id != story.object_id)
                .collect();
            StoriesState {
                data,
                is_loading: state.is_loading,
                is_error: state.is_error,
            }
        }
    }
}
