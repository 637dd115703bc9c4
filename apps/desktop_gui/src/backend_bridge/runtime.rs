//! Runtime bridge between the UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::MovieSource;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::media::decode_poster;

pub fn launch(
    source: Arc<dyn MovieSource>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendStopped(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        tracing::info!("backend worker ready");
        // Commands run concurrently; whichever completion is delivered last wins.
        while let Ok(cmd) = cmd_rx.recv() {
            let source = source.clone();
            let ui_tx = ui_tx.clone();
            runtime.spawn(async move {
                handle_command(source.as_ref(), cmd, &ui_tx).await;
            });
        }
        tracing::info!("ui command queue closed; backend worker exiting");
    });
}

pub async fn handle_command(source: &dyn MovieSource, cmd: BackendCommand, ui_tx: &Sender<UiEvent>) {
    let event = match cmd {
        BackendCommand::FetchMovie => match source.fetch_movie().await {
            Ok(record) => UiEvent::MovieLoaded(record),
            Err(err) => {
                tracing::debug!(kind = err.kind(), "movie fetch returned an error");
                UiEvent::MovieFetchFailed(UiError::from_fetch(UiErrorContext::FetchMovie, &err))
            }
        },
        BackendCommand::FetchPoster { url } => match source.fetch_poster(&url).await {
            Ok(bytes) => match decode_poster(&bytes) {
                Ok(image) => UiEvent::PosterLoaded { url, image },
                Err(err) => UiEvent::PosterFailed {
                    url,
                    error: UiError::from_message(
                        UiErrorContext::FetchPoster,
                        format!("poster decode failed: {err}"),
                    ),
                },
            },
            Err(err) => UiEvent::PosterFailed {
                url,
                error: UiError::from_fetch(UiErrorContext::FetchPoster, &err),
            },
        },
    };

    if ui_tx.send(event).is_err() {
        tracing::debug!("ui event receiver dropped; discarding backend result");
    }
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
