use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use advisor_api::{ClientHandle, HttpRecommendationApi};
use advisor_core::{update, AppState, Msg};
use advisor_logging::advisor_info;

use super::config;
use super::console::{self, ConsoleCommand};
use super::effects::EffectRunner;

pub fn run_app() -> anyhow::Result<()> {
    let config = config::load_from_env()?;
    advisor_logging::initialize(config.log_destination);

    let api = HttpRecommendationApi::new(config.api)?;
    let (client, events) = ClientHandle::new(Arc::new(api));

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut runner = EffectRunner::new(client, events, msg_tx.clone());

    spawn_input_thread(msg_tx);

    println!("Recommendation advisor console.");
    println!("Type customer ids (comma-separated); /fetch, /sim, /quit.");

    let mut state = AppState::new();
    for msg in msg_rx.iter() {
        let shutdown = matches!(msg, Msg::Shutdown);
        let (next, effects) = update(state, msg);
        state = next;
        runner.run(effects);

        if state.consume_dirty() {
            print!("{}", console::render(&state.view()));
            let _ = io::stdout().flush();
        }

        if shutdown {
            break;
        }
    }

    advisor_info!("shutting down");
    Ok(())
}

fn spawn_input_thread(msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let msg = match console::parse_line(&line) {
                ConsoleCommand::Quit => {
                    let _ = msg_tx.send(Msg::Shutdown);
                    return;
                }
                ConsoleCommand::Fetch => Msg::FetchRequested,
                ConsoleCommand::Simulate => Msg::SimulateRequested,
                ConsoleCommand::InputChanged(raw) => Msg::InputChanged(raw),
            };
            if msg_tx.send(msg).is_err() {
                return;
            }
        }
        // stdin closed; shut the app down.
        let _ = msg_tx.send(Msg::Shutdown);
    });
}
