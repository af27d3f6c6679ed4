use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use app_logging::{app_info, app_warn};
use stories_core::{Effect, Msg, PersistentValue, StoragePort, StoriesAction, Story};
use stories_engine::{EngineEvent, EngineHandle, FetchSettings, SearchHit};

/// Executes the effects emitted by the core update function: fetches go to
/// the engine, persistence goes to the injected key-value store.
pub struct EffectRunner<S: StoragePort> {
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Msg>,
    search_term: PersistentValue<S>,
}

impl<S: StoragePort> EffectRunner<S> {
    pub fn new(search_term: PersistentValue<S>, msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(FetchSettings::default());
        spawn_event_loop(engine.clone(), msg_tx.clone());
        Self {
            engine,
            msg_tx,
            search_term,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchStories { request_id, url } => {
                    app_info!("FetchStories request_id={} url={}", request_id, url);
                    // The reducer marks the list loading before the request
                    // goes out, like the original dispatch order.
                    let _ = self.msg_tx.send(Msg::Stories(StoriesAction::FetchInit));
                    self.engine.search(request_id, url);
                }
                Effect::PersistSearchTerm { value } => {
                    self.search_term.set_value(value);
                }
            }
        }
    }
}

fn spawn_event_loop(engine: EngineHandle, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || loop {
        if let Some(event) = engine.try_recv() {
            match event {
                EngineEvent::SearchCompleted { request_id, result } => {
                    let action = match result {
                        Ok(hits) => {
                            StoriesAction::FetchSuccess(hits.into_iter().map(map_hit).collect())
                        }
                        Err(err) => {
                            // The failure kind is logged and then discarded;
                            // the core only sees the terminal action.
                            app_warn!("Search request {} failed: {}", request_id, err);
                            StoriesAction::FetchFailure
                        }
                    };
                    if msg_tx.send(Msg::Stories(action)).is_err() {
                        break;
                    }
                }
            }
        } else {
            thread::sleep(Duration::from_millis(20));
        }
    });
}

fn map_hit(hit: SearchHit) -> Story {
    Story {
        object_id: hit.object_id,
        title: hit.title.unwrap_or_default(),
        url: hit.url.unwrap_or_default(),
        author: hit.author.unwrap_or_default(),
        num_comments: hit.num_comments.unwrap_or_default(),
        points: hit.points.unwrap_or_default(),
    }
}
