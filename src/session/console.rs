use super::*;
use crate::model::{CommandRequest, CommandResult};
use crate::remote::RemoteError;

#[derive(Clone, Debug)]
struct PendingCommand {
    ticket: u64,
    payload: CommandRequest,
    // Console instance that dispatched it.
    epoch: u64,
}

/// Free-form command console.
#[derive(Clone, Debug, Default)]
pub struct ConsoleState {
    open: bool,
    // Bumped on every open so a late result can't dismiss a newer console.
    epoch: u64,
    output: Option<ConsoleMessage>,
    pending: Option<PendingCommand>,
    dismiss_at: Option<Instant>,
}

impl ConsoleState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn output(&self) -> Option<&ConsoleMessage> {
        self.output.as_ref()
    }

    /// Payload of the command currently in flight.
    pub fn pending(&self) -> Option<&CommandRequest> {
        self.pending.as_ref().map(|p| &p.payload)
    }

    pub fn dismiss_at(&self) -> Option<Instant> {
        self.dismiss_at
    }
}

pub const METADATA_NEEDS_SELECTION: &str = "select items before running annex metadata";

impl Session {
    /// Header shown above the console input, e.g. `"2 items selected"`.
    pub fn console_status_line(&self) -> String {
        format!("{} items selected", self.selection.len())
    }

    /// Opens a fresh console. Refused while a command is in flight.
    pub fn open_console(&mut self) -> bool {
        if self.console.pending.is_some() {
            tracing::debug!("command in flight; console stays as is");
            return false;
        }
        self.console.open = true;
        self.console.epoch += 1;
        self.console.output = None;
        self.console.dismiss_at = None;
        true
    }

    pub fn close_console(&mut self) {
        self.console.open = false;
        self.console.dismiss_at = None;
    }

    /// Submits typed text. A non-empty selection scopes it as a metadata
    /// command over the selected keys. Returns `None` while another command
    /// is still in flight, and when the text names the metadata subcommand
    /// with nothing selected; the latter leaves a message in the console.
    pub fn dispatch(&mut self, cmd_text: &str) -> Option<Request> {
        if self.console.pending.is_some() {
            tracing::debug!("command already in flight; ignoring dispatch");
            return None;
        }

        let keys = self.selected_keys();
        if keys.is_empty() && CommandRequest::targets_metadata(cmd_text) {
            tracing::info!(cmd = cmd_text, "refusing unscoped metadata command");
            self.console.output = Some(ConsoleMessage {
                text: METADATA_NEEDS_SELECTION.to_string(),
                ok: false,
            });
            return None;
        }

        let payload = CommandRequest::scoped(cmd_text, keys);
        let ticket = self.take_ticket();
        tracing::info!(cmd = %payload.cmd, keys = payload.key_count(), ticket, "dispatching command");

        self.console.pending = Some(PendingCommand {
            ticket,
            payload: payload.clone(),
            epoch: self.console.epoch,
        });
        self.console.output = None;
        self.console.dismiss_at = None;
        Some(Request::Command { ticket, payload })
    }

    /// Closes the console once a scheduled auto-dismiss is due. Returns true
    /// when it closed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.console.dismiss_at {
            Some(at) if now >= at => {
                self.close_console();
                true
            }
            _ => false,
        }
    }

    pub(super) fn apply_command(
        &mut self,
        ticket: u64,
        outcome: Result<CommandResult, RemoteError>,
        now: Instant,
    ) -> Vec<Effect> {
        let Some(sent) = self.console.pending.take_if(|p| p.ticket == ticket) else {
            tracing::debug!(ticket, "discarding stale command response");
            return vec![Effect::Discarded];
        };

        match outcome {
            Err(err) => {
                tracing::warn!(error = %err, "command failed");
                self.console.output = Some(ConsoleMessage {
                    text: err.user_message(),
                    ok: false,
                });
                Vec::new()
            }
            Ok(res) => {
                // Batch scoping is one-shot, whatever the backend reported,
                // but only for the selection the command was scoped to.
                if self.selection.to_vec() == sent.payload.keys.unwrap_or_default() {
                    self.selection.clear();
                } else {
                    tracing::debug!(ticket, "selection changed while command ran; keeping it");
                }
                self.console.output = Some(ConsoleMessage {
                    text: res.message,
                    ok: res.result,
                });
                if res.result && self.console.open && self.console.epoch == sent.epoch {
                    self.console.dismiss_at = Some(now + self.dismiss_delay);
                }
                vec![Effect::Submit(self.refresh())]
            }
        }
    }
}
