//! Runs session requests against the backend off the event thread.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use crate::remote::LibrarianClient;
use crate::session::{Completion, Request};

/// Performs one request synchronously and tags the outcome.
pub fn execute(client: &LibrarianClient, req: Request) -> Completion {
    match req {
        Request::Search { generation, query } => Completion::Search {
            generation,
            outcome: client.search(&query),
        },
        Request::Command { ticket, payload } => Completion::Command {
            ticket,
            outcome: client.run_command(&payload),
        },
        Request::Metadata { ticket, key } => {
            let outcome = client.metadata(&key);
            Completion::Metadata {
                ticket,
                key,
                outcome,
            }
        }
        Request::Preview { ticket, key } => {
            let outcome = client.preview(&key);
            Completion::Preview {
                ticket,
                key,
                outcome,
            }
        }
    }
}

/// Fire-and-forget executor. Every request gets its own thread and nothing
/// is cancelled; ordering is the session's job.
pub struct Worker {
    client: Arc<LibrarianClient>,
    tx: Sender<Completion>,
}

impl Worker {
    pub fn new(client: Arc<LibrarianClient>, tx: Sender<Completion>) -> Self {
        Self { client, tx }
    }

    pub fn submit(&self, req: Request) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let label = req.label();
        let spawned = std::thread::Builder::new()
            .name(format!("librarian-{}", label))
            .spawn(move || {
                let completion = execute(&client, req);
                // The receiver is gone only when the shell is shutting down.
                let _ = tx.send(completion);
            });
        if let Err(err) = spawned {
            tracing::error!(label, error = %err, "failed to spawn request thread");
        }
    }

    pub fn submit_all(&self, reqs: impl IntoIterator<Item = Request>) {
        for r in reqs {
            self.submit(r);
        }
    }
}
