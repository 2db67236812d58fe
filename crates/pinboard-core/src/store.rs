//! The pin store: in-memory pin set synchronized with a collaborator.
//!
//! All mutating operations go through a single command channel consumed by
//! one worker thread that owns the backend, so overlapping operations resolve
//! in issuance order rather than completion order. Results come back on a
//! completion channel and are committed by [`PinStore::poll`] on the UI
//! thread; nothing is committed optimistically.

use crate::backend::{BackendError, BackendResult, PinBackend};
use crate::notify::{Confirm, NoticeKind, Notifier};
use crate::pin::Pin;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};
use thiserror::Error;

/// Errors raised while constructing the store.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The acting identity is required; the widget must not run without one.
    #[error("identity must be a non-empty string")]
    MissingIdentity,
}

/// Work shipped to the backend worker.
enum Command {
    Load { page: String, owner: String },
    Create { pin: Pin },
    Update { pin: Pin },
    Delete { id: String },
    ClearPage { page: String, owner: String },
}

/// Outcome of one command, carried back to the UI thread for commit.
enum Completion {
    Loaded(BackendResult<Vec<Pin>>),
    Created(Pin, BackendResult<()>),
    Updated(Pin, BackendResult<()>),
    Deleted(String, BackendResult<()>),
    ClearedPage(String, BackendResult<()>),
}

/// Client-side holder of the annotation set.
pub struct PinStore {
    pins: Vec<Pin>,
    identity: String,
    /// Page of the most recent `load`, re-fetched by `reload`.
    current_page: Option<String>,
    /// Operations issued but not yet committed. Nonzero drives the advisory
    /// loading overlay.
    outstanding: usize,
    cmd_tx: Sender<Command>,
    done_rx: Receiver<Completion>,
    notifier: Box<dyn Notifier>,
    _worker: Option<JoinHandle<()>>,
}

impl PinStore {
    /// Create a store acting as `identity` against the given collaborator.
    ///
    /// Fails when the identity is empty after trimming; this is the one fatal
    /// configuration error, raised before anything renders.
    pub fn new(
        backend: Box<dyn PinBackend>,
        identity: impl Into<String>,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self, ConfigError> {
        let identity = identity.into();
        if identity.trim().is_empty() {
            return Err(ConfigError::MissingIdentity);
        }

        let (cmd_tx, cmd_rx) = channel::<Command>();
        let (done_tx, done_rx) = channel::<Completion>();

        let worker = thread::spawn(move || {
            // Commands arrive and complete strictly in issuance order.
            while let Ok(cmd) = cmd_rx.recv() {
                let completion = match cmd {
                    Command::Load { page, owner } => {
                        Completion::Loaded(backend.fetch_pins(&page, &owner))
                    }
                    Command::Create { pin } => {
                        let result = backend.save_pin(&pin);
                        Completion::Created(pin, result)
                    }
                    Command::Update { pin } => {
                        let result = backend.save_pin(&pin);
                        Completion::Updated(pin, result)
                    }
                    Command::Delete { id } => {
                        let result = backend.delete_pin(&id);
                        Completion::Deleted(id, result)
                    }
                    Command::ClearPage { page, owner } => {
                        let result = backend.delete_pins_by_page(&page, &owner);
                        Completion::ClearedPage(page, result)
                    }
                };
                if done_tx.send(completion).is_err() {
                    break;
                }
            }
            log::debug!("pin store worker exiting");
        });

        Ok(Self {
            pins: Vec::new(),
            identity,
            current_page: None,
            outstanding: 0,
            cmd_tx,
            done_rx,
            notifier,
            _worker: Some(worker),
        })
    }

    /// The configured acting identity.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Every pin currently held.
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Whether any operation is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.outstanding > 0
    }

    /// Pins belonging to the given page. Pure filter on exact path equality;
    /// calling it twice without an intervening mutation yields equal results.
    pub fn pins_by_path(&self, page: &str) -> Vec<Pin> {
        self.pins
            .iter()
            .filter(|pin| pin.path == page)
            .cloned()
            .collect()
    }

    /// Fetch the full pin set for a page, replacing the in-memory set on
    /// success. On failure the set is left as it was and the error is
    /// surfaced; the initial set is empty.
    pub fn load(&mut self, page: impl Into<String>) {
        let page = page.into();
        self.current_page = Some(page.clone());
        self.send(Command::Load {
            page,
            owner: self.identity.clone(),
        });
    }

    /// Re-issue the last `load`, if any. The host calls this when the window
    /// regains focus so a long-idle session catches up without polling.
    pub fn reload(&mut self) {
        if let Some(page) = self.current_page.clone() {
            self.load(page);
        }
    }

    /// Persist a new pin, appending it to the set on success only. The
    /// caller's `owner_id` is discarded and replaced with the store identity.
    pub fn create(&mut self, mut pin: Pin) {
        pin.owner_id = self.identity.clone();
        self.send(Command::Create { pin });
    }

    /// Persist a full-record replacement, swapping the matching record by id
    /// on success only. The caller's `owner_id` is discarded here too.
    pub fn update(&mut self, mut pin: Pin) {
        pin.owner_id = self.identity.clone();
        self.send(Command::Update { pin });
    }

    /// Delete one pin, removing it from the set on success only.
    pub fn delete(&mut self, id: impl Into<String>) {
        self.send(Command::Delete { id: id.into() });
    }

    /// Delete every pin on a page, removing them from the set on success
    /// only.
    pub fn delete_all_by_path(&mut self, page: impl Into<String>) {
        self.send(Command::ClearPage {
            page: page.into(),
            owner: self.identity.clone(),
        });
    }

    /// Bulk-clear decision logic for the shell: count first, then an
    /// informational notice when there is nothing to remove, or a
    /// confirmation prompt naming the exact count before anything is issued.
    pub fn clear_page(&mut self, page: &str, confirm: &dyn Confirm) {
        let count = self.pins_by_path(page).len();
        if count == 0 {
            self.notifier
                .notify(NoticeKind::Info, "No pins to remove on this page.");
            return;
        }

        let prompt =
            format!("Are you sure you want to remove all {count} pins from this page?");
        if confirm.confirm(&prompt) {
            self.delete_all_by_path(page);
        }
    }

    /// Drain completed operations and commit them. Call once per frame.
    /// Returns true when anything changed, so the host can request a repaint.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(done) = self.done_rx.try_recv() {
            self.outstanding = self.outstanding.saturating_sub(1);
            changed = true;
            self.commit(done);
        }
        changed
    }

    fn send(&mut self, cmd: Command) {
        self.outstanding += 1;
        if self.cmd_tx.send(cmd).is_err() {
            // Worker gone; can only happen while tearing down.
            self.outstanding -= 1;
            log::error!("pin store worker unavailable, operation dropped");
        }
    }

    fn commit(&mut self, done: Completion) {
        match done {
            Completion::Loaded(Ok(pins)) => {
                self.pins = pins;
            }
            Completion::Loaded(Err(err)) => {
                self.fail("Failed to load pins", "loading pins", &err);
            }
            Completion::Created(pin, Ok(())) => {
                self.pins.push(pin);
                self.succeed("Pin added successfully");
            }
            Completion::Created(_, Err(err)) => {
                self.fail("Failed to add pin", "adding pin", &err);
            }
            Completion::Updated(pin, Ok(())) => {
                if let Some(existing) = self.pins.iter_mut().find(|p| p.id == pin.id) {
                    *existing = pin;
                }
                self.succeed("Pin updated successfully");
            }
            Completion::Updated(_, Err(err)) => {
                self.fail("Failed to update pin", "updating pin", &err);
            }
            Completion::Deleted(id, Ok(())) => {
                self.pins.retain(|pin| pin.id != id);
                self.succeed("Pin removed successfully");
            }
            Completion::Deleted(_, Err(err)) => {
                self.fail("Failed to remove pin", "removing pin", &err);
            }
            Completion::ClearedPage(page, Ok(())) => {
                self.pins.retain(|pin| pin.path != page);
                self.succeed("All pins removed successfully");
            }
            Completion::ClearedPage(_, Err(err)) => {
                self.fail("Failed to remove pins", "removing pins for page", &err);
            }
        }
    }

    fn succeed(&self, message: &str) {
        self.notifier.notify(NoticeKind::Success, message);
    }

    fn fail(&self, fallback: &str, context: &str, err: &BackendError) {
        log::error!("error {context}: {err}");
        self.notifier
            .notify(NoticeKind::Error, &err.user_message(fallback));
    }
}
