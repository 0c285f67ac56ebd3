//! The users list component. Mounting starts exactly one fetch and returns a
//! [`Mounted`] handle; the handle is the only way to observe or render the state,
//! and dropping it cancels the fetch so no update lands after unmount.

use crate::{
    render,
    state::{duplicate_ids, FetchState},
    users::UserSource,
};
use std::sync::Arc;
use tokio::{sync::watch, task::AbortHandle};
use tracing::{debug, warn};

/// Fetches users from `S` on mount and renders the lifecycle.
pub struct UserList<S> {
    source: Arc<S>,
}

impl<S> Clone for UserList<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: UserSource> UserList<S> {
    pub fn new(source: S) -> Self {
        Self::from_arc(Arc::new(source))
    }

    pub fn from_arc(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Starts the single fetch for this mount and returns immediately in `Loading`.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use = "dropping the handle unmounts the list and cancels the fetch"]
    pub fn mount(&self) -> Mounted {
        let (state_tx, state_rx) = watch::channel(FetchState::Loading);
        let source = Arc::clone(&self.source);

        debug!("users list mounted; fetching");

        let fetch = tokio::spawn(async move { source.list_users().await });
        let fetch_abort = fetch.abort_handle();

        let settle = tokio::spawn(async move {
            let next = match fetch.await {
                Ok(outcome) => {
                    if let Err(err) = &outcome {
                        warn!(status = ?err.status(), error = %err, "failed to fetch users");
                    }
                    FetchState::from(outcome)
                }
                Err(err) if err.is_panic() => {
                    warn!("users fetch panicked");
                    FetchState::unknown_failure()
                }
                // Cancelled by unmount: leave the state untouched.
                Err(_) => return,
            };

            match &next {
                FetchState::Success(users) => {
                    for id in duplicate_ids(users) {
                        warn!(
                            id,
                            "duplicate user id in payload; keyed rendering is ambiguous"
                        );
                    }
                }
                FetchState::Failed(_) | FetchState::Loading => {}
            }

            let phase = next.phase();
            if state_tx.send_if_modified(|state| state.settle(next)) {
                debug!(phase, "users list settled");
            }
        });

        Mounted {
            state: state_rx,
            fetch: fetch_abort,
            settle: settle.abort_handle(),
        }
    }
}

/// A mounted users list. Dropping it (or calling [`Mounted::unmount`]) aborts the
/// in-flight fetch and suppresses any late state update.
#[derive(Debug)]
pub struct Mounted {
    state: watch::Receiver<FetchState>,
    fetch: AbortHandle,
    settle: AbortHandle,
}

impl Mounted {
    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every transition of this mount.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.clone()
    }

    /// Waits until the fetch settles and returns the final state.
    pub async fn settled(&mut self) -> FetchState {
        let settled = self
            .state
            .wait_for(FetchState::is_settled)
            .await
            .map(|state| (*state).clone());

        // The sender only goes away without settling if the fetch was cancelled.
        settled.unwrap_or_else(|_| self.state.borrow().clone())
    }

    /// Renders the current state as HTML markup. Never triggers a fetch.
    #[must_use]
    pub fn render_html(&self) -> String {
        render::html(&self.state.borrow())
    }

    /// Renders the current state as plain text. Never triggers a fetch.
    #[must_use]
    pub fn render_text(&self) -> String {
        render::text(&self.state.borrow())
    }

    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        if !self.settle.is_finished() {
            debug!("users list unmounted before the fetch settled; cancelling");
        }
        self.fetch.abort();
        self.settle.abort();
    }
}
