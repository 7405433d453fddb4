//! Ordered persistence of locale changes.
//!
//! In background mode a dedicated thread drains a FIFO channel, so writes
//! never block the caller of `set_locale` and still land in call order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;

use serde::{Deserialize, Serialize};

use crate::preferences::{PreferenceStore, LOCALE_KEY};

/// Where persistence writes run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistMode {
    /// On a dedicated writer thread, off the caller's path.
    #[default]
    Background,
    /// On the calling thread, before `set_locale` returns.
    Inline,
}

enum WriterCommand {
    Write(String),
    Flush(mpsc::SyncSender<()>),
}

struct Worker {
    sender: Sender<WriterCommand>,
    handle: JoinHandle<()>,
}

pub(crate) struct PreferenceWriter {
    preferences: Arc<dyn PreferenceStore>,
    failures: Arc<AtomicU64>,
    worker: Option<Worker>,
}

impl PreferenceWriter {
    pub(crate) fn new(preferences: Arc<dyn PreferenceStore>, mode: PersistMode) -> Self {
        let failures = Arc::new(AtomicU64::new(0));
        let worker = match mode {
            PersistMode::Inline => None,
            PersistMode::Background => spawn_worker(Arc::clone(&preferences), Arc::clone(&failures)),
        };

        Self {
            preferences,
            failures,
            worker,
        }
    }

    /// Queue (or perform) one write of `tag` under the locale key.
    pub(crate) fn write(&self, tag: &str) {
        if let Some(worker) = &self.worker {
            match worker.sender.send(WriterCommand::Write(tag.to_string())) {
                Ok(()) => return,
                Err(_) => {
                    tracing::warn!("Locale writer thread is gone, persisting inline");
                }
            }
        }
        persist(self.preferences.as_ref(), &self.failures, tag);
    }

    /// Block until every write queued so far has been applied.
    pub(crate) fn flush(&self) {
        let Some(worker) = &self.worker else {
            return;
        };
        let (done_tx, done_rx) = mpsc::sync_channel(1);
        if worker.sender.send(WriterCommand::Flush(done_tx)).is_ok() {
            let _ = done_rx.recv();
        }
    }

    pub(crate) fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}

impl Drop for PreferenceWriter {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            // Closing the channel lets the thread drain queued writes and exit.
            drop(worker.sender);
            if worker.handle.join().is_err() {
                tracing::warn!("Locale writer thread panicked");
            }
        }
    }
}

fn spawn_worker(preferences: Arc<dyn PreferenceStore>, failures: Arc<AtomicU64>) -> Option<Worker> {
    let (sender, receiver) = mpsc::channel();
    let spawned = std::thread::Builder::new()
        .name("locale-writer".to_string())
        .spawn(move || writer_loop(receiver, preferences, failures));

    match spawned {
        Ok(handle) => Some(Worker { sender, handle }),
        Err(error) => {
            tracing::warn!(%error, "Failed to spawn locale writer thread, persisting inline");
            None
        }
    }
}

fn writer_loop(
    receiver: Receiver<WriterCommand>,
    preferences: Arc<dyn PreferenceStore>,
    failures: Arc<AtomicU64>,
) {
    while let Ok(command) = receiver.recv() {
        match command {
            WriterCommand::Write(tag) => persist(preferences.as_ref(), &failures, &tag),
            WriterCommand::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
}

fn persist(preferences: &dyn PreferenceStore, failures: &AtomicU64, tag: &str) {
    match preferences.set(LOCALE_KEY, tag) {
        Ok(()) => tracing::debug!(locale = %tag, "Locale preference saved"),
        Err(error) => {
            failures.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(locale = %tag, %error, "Failed to persist locale preference");
        }
    }
}
