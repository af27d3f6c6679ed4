//! Stories engine: network IO against the search API and effect execution.
mod engine;
mod fetch;
mod persist;
mod types;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, ReqwestSearchClient, SearchClient};
pub use persist::{ensure_state_dir, write_atomically, PersistError};
pub use types::{
    EngineEvent, FailureKind, FetchError, RequestId, SearchHit, SearchResponse,
};
