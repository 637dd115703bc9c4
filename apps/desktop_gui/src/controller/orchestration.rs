//! Command orchestration from UI actions to the backend command queue.

use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::reducer::ViewState;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), UiError> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err(UiError::from_message(
                UiErrorContext::Dispatch,
                "ui command queue is full",
            ))
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            Err(UiError::from_message(
                UiErrorContext::Dispatch,
                "backend command processor disconnected",
            ))
        }
    }
}

/// Owns the view state and both ends of the UI side of the bridge.
pub struct ViewController {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: ViewState,
}

impl ViewController {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Handles a click on the fetch control. Ignored while a fetch is outstanding.
    pub fn trigger_fetch(&mut self) {
        let Some(cmd) = self.state.begin_fetch() else {
            tracing::debug!("fetch already in flight; ignoring trigger");
            return;
        };
        if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.state.abort_fetch(&err);
        }
    }

    /// Drains pending backend events. Returns whether any arrived.
    pub fn process_ui_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.ui_rx.try_recv() {
            changed = true;
            let Some(follow_up) = self.state.apply(event) else {
                continue;
            };
            if let Err(err) = dispatch_backend_command(&self.cmd_tx, follow_up.clone()) {
                if let BackendCommand::FetchPoster { url } = follow_up {
                    self.state.apply(UiEvent::PosterFailed {
                        url,
                        error: UiError::from_message(UiErrorContext::FetchPoster, err.message()),
                    });
                }
            }
        }
        changed
    }
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
