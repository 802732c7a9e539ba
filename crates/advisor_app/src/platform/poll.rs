use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use advisor_core::Msg;
use advisor_logging::advisor_debug;

/// Owns the recurring poll timer. At most one timer thread is live; arming
/// always cancels the previous one first, and dropping the owner cancels
/// whatever is left.
pub struct PollTimer {
    live: Option<TimerHandle>,
}

struct TimerHandle {
    stop_tx: mpsc::Sender<()>,
    customer_id: String,
}

impl PollTimer {
    pub fn new() -> Self {
        Self { live: None }
    }

    /// Cancel any previous timer and start a recurring one that sends
    /// `Msg::PollTick` for `customer_id` every `period`.
    pub fn arm(&mut self, customer_id: String, period: Duration, msg_tx: mpsc::Sender<Msg>) {
        self.cancel();

        let (stop_tx, stop_rx) = mpsc::channel();
        let armed_id = customer_id.clone();
        thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    let tick = Msg::PollTick {
                        customer_id: armed_id.clone(),
                    };
                    if msg_tx.send(tick).is_err() {
                        break;
                    }
                }
                // Stop signal, or the owning handle was dropped.
                Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        });

        advisor_debug!("poll armed for {customer_id}");
        self.live = Some(TimerHandle {
            stop_tx,
            customer_id,
        });
    }

    /// Stop the live timer, if any. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.live.take() {
            let _ = handle.stop_tx.send(());
            advisor_debug!("poll cancelled for {}", handle.customer_id);
        }
    }
}

impl Drop for PollTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
