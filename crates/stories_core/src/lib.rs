//! Stories core: pure state machine for the search flow and the
//! persistent search-term store.
mod effect;
mod msg;
mod persistent;
mod reducer;
mod state;
mod story;
mod update;
mod view_model;

pub use effect::{Effect, RequestId};
pub use msg::{Msg, StoriesAction};
pub use persistent::{PersistentValue, StorageError, StoragePort};
pub use reducer::reduce;
pub use state::{search_url, AppState, StoriesState, API_ENDPOINT};
pub use story::Story;
pub use update::update;
pub use view_model::{AppViewModel, StoryRowView};
