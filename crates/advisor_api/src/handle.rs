use std::sync::{mpsc, Arc};
use std::thread;

use crate::{ClientEvent, RecommendationApi};

enum ClientCommand {
    Fetch { customer_id: String },
    Simulate { customers: Option<Vec<String>> },
}

/// Command side of the api runtime. Requests run on a dedicated tokio
/// runtime thread; each command produces exactly one `ClientEvent` on the
/// receiver returned by [`ClientHandle::new`].
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    pub fn new(api: Arc<dyn RecommendationApi>) -> (Self, mpsc::Receiver<ClientEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn fetch(&self, customer_id: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Fetch {
            customer_id: customer_id.into(),
        });
    }

    pub fn simulate(&self, customers: Option<Vec<String>>) {
        let _ = self.cmd_tx.send(ClientCommand::Simulate { customers });
    }
}

async fn handle_command(
    api: &dyn RecommendationApi,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Fetch { customer_id } => {
            let result = api.fetch_recommendations(&customer_id).await;
            // The completion event goes out on every path so the caller's
            // loading flag cannot stay latched.
            let _ = event_tx.send(ClientEvent::FetchCompleted {
                customer_id,
                result,
            });
        }
        ClientCommand::Simulate { customers } => {
            let result = api.start_simulation(customers.as_deref()).await;
            let _ = event_tx.send(ClientEvent::SimulationCompleted { result });
        }
    }
}
