use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::api::AccidentSource;
use crate::app::report::{FetchOutcome, FetchTicket};

/// Runs report fetches off the UI loop and hands the outcomes back through
/// a channel. At most one request is in flight: dispatching a new ticket
/// aborts the previous task.
pub struct FetchActions {
    source: Arc<dyn AccidentSource>,
    sender: UnboundedSender<FetchOutcome>,
    receiver: UnboundedReceiver<FetchOutcome>,
    in_flight: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for FetchActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchActions")
            .field("in_flight", &self.in_flight.is_some())
            .finish_non_exhaustive()
    }
}

impl FetchActions {
    pub fn new(source: Arc<dyn AccidentSource>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            source,
            sender,
            receiver,
            in_flight: None,
        }
    }

    /// Starts the request for `ticket`. Must be called from inside a tokio
    /// runtime.
    pub fn dispatch(&mut self, ticket: FetchTicket) {
        self.cancel();

        let request = self.source.fetch(ticket.year);
        let sender = self.sender.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = request.await;
            // The receiver lives as long as the app; a closed channel only
            // happens during shutdown.
            let _ = sender.send(FetchOutcome { ticket, result });
        }));
    }

    /// Aborts the in-flight request, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                log::debug!("aborting in-flight fetch");
            }
            handle.abort();
        }
    }

    pub fn try_next(&mut self) -> Option<FetchOutcome> {
        self.receiver.try_recv().ok()
    }

    pub async fn next(&mut self) -> Option<FetchOutcome> {
        self.receiver.recv().await
    }
}

impl Drop for FetchActions {
    fn drop(&mut self) {
        self.cancel();
    }
}
