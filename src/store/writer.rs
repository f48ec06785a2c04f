use super::*;

use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Single background task that applies snapshots in the order they were queued.
/// Nothing waits on a write, so the last queued snapshot is what ends up on disk.
pub struct WriteBehind {
    medium: String,
    sender: Option<UnboundedSender<Vec<Contact>>>,
    handle: Option<JoinHandle<()>>,
}

impl WriteBehind {
    /// Must be called from within a tokio runtime.
    pub fn spawn(store: Arc<dyn ContactStore>) -> Self {
        let medium = store.get_medium().to_string();
        let (sender, mut receiver) = mpsc::unbounded_channel::<Vec<Contact>>();

        let handle = tokio::spawn(async move {
            while let Some(snapshot) = receiver.recv().await {
                let store = Arc::clone(&store);
                let count = snapshot.len();
                match tokio::task::spawn_blocking(move || store.save(&snapshot)).await {
                    Ok(Ok(())) => info!(contacts = count, "Contacts saved to file."),
                    Ok(Err(e)) => error!(error = %e, "Error saving contacts"),
                    Err(e) => error!(error = %e, "contact writer panicked"),
                }
            }
        });

        Self {
            medium,
            sender: Some(sender),
            handle: Some(handle),
        }
    }

    pub fn enqueue(&self, snapshot: Vec<Contact>) -> Result<(), AppError> {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| AppError::Persistence("contact writer is closed".to_string()))?;

        sender
            .send(snapshot)
            .map_err(|_| AppError::Persistence("contact writer stopped".to_string()))
    }

    pub fn medium(&self) -> &str {
        &self.medium
    }

    /// Stops accepting snapshots and waits for the queued ones to be written.
    pub async fn close(&mut self) {
        self.sender.take();
        if let Some(handle) = self.handle.take()
            && let Err(e) = handle.await
        {
            error!(error = %e, "contact writer did not finish cleanly");
        }
    }
}
