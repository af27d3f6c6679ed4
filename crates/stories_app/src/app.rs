use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::time::Duration;

use app_logging::app_info;
use stories_core::{
    update, AppState, AppViewModel, Msg, PersistentValue, StoragePort, StoriesAction, API_ENDPOINT,
};

use crate::effects::EffectRunner;
use crate::logging::{self, LogDestination};
use crate::storage::FileKeyValueStore;

const SEARCH_KEY: &str = "search";
const DEFAULT_TERM: &str = "React";
const FETCH_DEADLINE: Duration = Duration::from_secs(15);

/// Headless front-end: reads search terms from stdin, renders the story
/// list to stdout, and feeds user input into the core update loop.
pub fn run() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let store = FileKeyValueStore::open(std::env::current_dir()?);
    let search_term = PersistentValue::new(store, SEARCH_KEY, DEFAULT_TERM);
    app_info!("Restored search term {:?}", search_term.value());

    let mut state = AppState::new(API_ENDPOINT, search_term.value());
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut runner = EffectRunner::new(search_term, msg_tx);

    println!("My Hacker Stories");
    println!("Enter a term to search, 'rm <objectID>' to drop a story, 'q' to quit.");

    // First mount: fetch with the restored term right away.
    let (next, effects) = update(state, Msg::SearchSubmitted);
    state = next;
    runner.run(effects);
    state = pump_until_settled(state, &msg_rx, &mut runner);
    render(&state.view());

    let stdin = io::stdin();
    loop {
        print!("search [{}]> ", state.search_term());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        if input == "q" || input == "quit" {
            break;
        }

        if let Some(id) = input.strip_prefix("rm ") {
            let id = id.trim();
            let found = state
                .stories()
                .data
                .iter()
                .find(|story| story.object_id == id)
                .cloned();
            match found {
                Some(story) => {
                    let (next, effects) =
                        update(state, Msg::Stories(StoriesAction::Remove(story)));
                    state = next;
                    runner.run(effects);
                }
                None => println!("No story with id {id}"),
            }
            render(&state.view());
            continue;
        }

        if !input.is_empty() {
            let (next, effects) = update(state, Msg::SearchInputChanged(input.to_string()));
            state = next;
            runner.run(effects);
        }

        let (next, effects) = update(state, Msg::SearchSubmitted);
        state = next;
        runner.run(effects);

        state = pump_until_settled(state, &msg_rx, &mut runner);
        render(&state.view());
    }

    Ok(())
}

/// Applies engine messages until a fetch that started loading reaches a
/// terminal state, or the deadline passes with nothing pending.
fn pump_until_settled<S: StoragePort>(
    mut state: AppState,
    msg_rx: &mpsc::Receiver<Msg>,
    runner: &mut EffectRunner<S>,
) -> AppState {
    let mut saw_loading = false;
    loop {
        let msg = match msg_rx.recv_timeout(FETCH_DEADLINE) {
            Ok(msg) => msg,
            Err(_) => break,
        };
        let (next, effects) = update(state, msg);
        state = next;
        runner.run(effects);

        if state.stories().is_loading {
            saw_loading = true;
        } else if saw_loading {
            break;
        }
    }
    state
}

fn render(view: &AppViewModel) {
    println!();
    if view.is_error {
        println!("Something went wrong ...");
    }
    if view.is_loading {
        println!("Loading ...");
        return;
    }
    for row in &view.stories {
        println!(
            "{:>10}  {:<50.50} {:<24.24} comments:{:>4} points:{:>5}  {}",
            row.object_id, row.title, row.author, row.num_comments, row.points, row.url
        );
    }
    println!("{} stories", view.stories.len());
}
