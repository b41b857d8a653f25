use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;
use tracing::debug;

use super::TaskResult;
use crate::{
    carousel::{
        CardSource,
        RefreshTicket,
    },
    core::PrismError,
};

/// Runs async work off the UI thread and hands results back through a
/// channel that the UI drains once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Result<Self, PrismError> {
        let runtime = Runtime::new()
            .map_err(|e| PrismError::Custom(format!("Failed to create task runtime: {e}")))?;

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime: Arc::new(runtime), receiver, sender })
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// Fetches cards for `ticket` and calls `notify` once the result is queued.
    pub fn generate_theme_cards<S>(
        &self,
        ticket: RefreshTicket,
        source: Arc<S>,
        notify: impl FnOnce() + Send + 'static,
    ) where
        S: CardSource + Send + Sync + 'static,
    {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            debug!(ticket = ticket.id, "Theme card task started");
            let result = runtime.block_on(source.fetch_cards(ticket.theme, ticket.count));

            let _ = sender.send(TaskResult::ThemeCards { ticket: ticket.id, result });
            notify();
        });
    }
}
