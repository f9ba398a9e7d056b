use super::token_store::TokenStore;
use crate::warn;
use std::fmt;
use std::sync::RwLock;

type UnauthorizedHandler = Box<dyn Fn() + Send + Sync>;

/// Authentication state shared by every request the client issues.
///
/// Owns the current bearer token, the [`TokenStore`] persisting it across
/// runs, and the handler invoked when the backend rejects the session with a
/// 401. The token is opaque to the client: no format validation, no expiry
/// tracking — it is trusted until the backend says otherwise.
pub struct Session {
    token: RwLock<Option<String>>,
    store: Box<dyn TokenStore>,
    on_unauthorized: Option<UnauthorizedHandler>,
}

impl Session {
    /// Opens a session over `store`, picking up a previously persisted token
    /// if one exists. A store that cannot be read counts as empty.
    pub fn new(store: Box<dyn TokenStore>) -> Session {
        let token = match store.load() {
            Ok(token) => token,
            Err(err) => {
                warn!("Could not read persisted token: {err}");
                None
            }
        };
        Session { token: RwLock::new(token), store, on_unauthorized: None }
    }

    /// Registers the handler invoked after a 401 purges the session. This is
    /// where a hosting application re-enters its login flow.
    #[must_use]
    pub fn with_unauthorized_handler<F>(mut self, handler: F) -> Session
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_unauthorized = Some(Box::new(handler));
        self
    }

    /// Snapshot of the current token. Requests read this when their headers
    /// are built; a token set afterwards does not affect calls in flight.
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    /// Replaces the token and persists it. The in-memory token stays
    /// authoritative even if persisting fails.
    pub fn set_token(&self, token: &str) {
        *self.token.write().unwrap() = Some(token.to_string());
        if let Err(err) = self.store.save(token) {
            warn!("Could not persist token: {err}");
        }
    }

    /// Purges the token from memory and from the store, then notifies the
    /// unauthorized handler. Called by the request layer on a 401 response.
    pub fn invalidate(&self) {
        *self.token.write().unwrap() = None;
        if let Err(err) = self.store.clear() {
            warn!("Could not clear persisted token: {err}");
        }
        if let Some(handler) = &self.on_unauthorized {
            handler();
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.read().unwrap().as_deref().map(|_| "<set>"))
            .finish_non_exhaustive()
    }
}
