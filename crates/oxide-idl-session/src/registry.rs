//! Dialect session registry.
//!
//! The registry owns one [`DialectSession`] per `(dialect, source)` key. A
//! session is built lazily on first request and reused afterwards until the
//! registry is closed. Sources are told apart by identity, not by URL: two
//! pools opened on the same `sqlite::memory:` URL are different databases.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use oxide_idl_core::dialect::{GBaseDialect, GenericDialect, SqlServerDialect};
use oxide_idl_core::naming::{IdentityNaming, NamingStrategy};
use oxide_idl_sqlite::SqliteDialect;
use tracing::{debug, info, warn};

use crate::error::{Result, SessionError};
use crate::factory::{DialectFactory, SessionContext, SessionFactory};
use crate::session::DialectSession;
use crate::source::ConnectionSource;

/// Dialect used when the caller does not name one.
pub const DEFAULT_DIALECT: &str = "default";

/// Key under which a session is stored.
///
/// Keys compare equal only for the same dialect and the same source object.
/// `source_id` is carried for display and logging.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionKey {
    /// Dialect identifier.
    pub dialect_id: String,
    /// Connection source identifier.
    pub source_id: String,
    source: usize,
}

impl SessionKey {
    /// Creates the key for a dialect and a source.
    #[must_use]
    pub fn new(dialect_id: impl Into<String>, source: &Arc<dyn ConnectionSource>) -> Self {
        Self {
            dialect_id: dialect_id.into(),
            source_id: String::from(source.source_id()),
            source: source_address(source),
        }
    }

    /// Returns true if the key was made for this source object.
    #[must_use]
    pub fn is_for(&self, source: &Arc<dyn ConnectionSource>) -> bool {
        self.source == source_address(source)
    }
}

// Stable while the key is stored: the session under it holds a clone of the
// source, so the allocation cannot be reused.
fn source_address(source: &Arc<dyn ConnectionSource>) -> usize {
    Arc::as_ptr(source).cast::<()>().addr()
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.dialect_id, self.source_id)
    }
}

#[derive(Default)]
struct RegistryState {
    factories: HashMap<String, Arc<dyn SessionFactory>>,
    sessions: HashMap<SessionKey, Arc<DialectSession>>,
    closed: bool,
}

/// Maps dialect identifiers and connection sources to sessions.
///
/// All state sits behind one mutex, so concurrent first requests for the same
/// key build exactly one session.
pub struct SessionRegistry {
    naming: Arc<dyn NamingStrategy>,
    state: Mutex<RegistryState>,
}

impl SessionRegistry {
    /// Creates a registry with the built-in dialects (`default`, `sqlite`,
    /// `sqlserver`, `gbase`) and identity naming.
    #[must_use]
    pub fn new() -> Self {
        let registry = Self::empty();
        let builtins = [
            (DEFAULT_DIALECT, DialectFactory::new(GenericDialect::new())),
            ("sqlite", DialectFactory::new(SqliteDialect::new())),
            ("sqlserver", DialectFactory::new(SqlServerDialect::new())),
            ("gbase", DialectFactory::new(GBaseDialect::new())),
        ];
        {
            let mut state = registry.lock();
            for (dialect_id, factory) in builtins {
                state
                    .factories
                    .insert(String::from(dialect_id), Arc::new(factory));
            }
        }
        registry
    }

    /// Creates a registry without any dialects.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            naming: Arc::new(IdentityNaming),
            state: Mutex::new(RegistryState::default()),
        }
    }

    /// Sets the naming strategy handed to every session created afterwards.
    #[must_use]
    pub fn with_naming(mut self, naming: impl NamingStrategy + 'static) -> Self {
        self.naming = Arc::new(naming);
        self
    }

    /// Returns the naming strategy.
    #[must_use]
    pub fn naming(&self) -> &dyn NamingStrategy {
        self.naming.as_ref()
    }

    /// Registers (or replaces) the factory for a dialect identifier.
    ///
    /// Sessions already created for the identifier are kept.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::RegistryClosed`] once the registry is closed.
    pub fn register_dialect(
        &self,
        dialect_id: impl Into<String>,
        factory: impl SessionFactory + 'static,
    ) -> Result<()> {
        let dialect_id = dialect_id.into();
        let mut state = self.lock();
        if state.closed {
            warn!(dialect = %dialect_id, "Dialect registration after close rejected");
            return Err(SessionError::RegistryClosed);
        }
        debug!(dialect = %dialect_id, "Registering dialect");
        state.factories.insert(dialect_id, Arc::new(factory));
        Ok(())
    }

    /// Returns the session for `dialect_id` and `source`, creating it on first
    /// use.
    ///
    /// # Errors
    ///
    /// - [`SessionError::RegistryClosed`] after [`close`](Self::close)
    /// - [`SessionError::UnsupportedDialect`] for unknown identifiers
    /// - whatever the dialect's factory returns
    pub fn session_for(
        &self,
        dialect_id: &str,
        source: Arc<dyn ConnectionSource>,
    ) -> Result<Arc<DialectSession>> {
        let mut state = self.lock();
        if state.closed {
            warn!(
                dialect = %dialect_id,
                source = %source.source_id(),
                "Session requested from closed registry"
            );
            return Err(SessionError::RegistryClosed);
        }

        let Some(factory) = state.factories.get(dialect_id).cloned() else {
            warn!(dialect = %dialect_id, "Unsupported dialect");
            return Err(SessionError::UnsupportedDialect {
                dialect_id: String::from(dialect_id),
            });
        };

        let key = SessionKey::new(dialect_id, &source);
        if let Some(session) = state.sessions.get(&key) {
            debug!(key = %key, "Reusing session");
            return Ok(Arc::clone(session));
        }

        let session = Arc::new(factory.create(SessionContext {
            dialect_id: key.dialect_id.clone(),
            source,
            naming: Arc::clone(&self.naming),
        })?);
        info!(key = %key, "Created session");
        state.sessions.insert(key, Arc::clone(&session));
        Ok(session)
    }

    /// Returns the session for `source` under the `default` dialect.
    ///
    /// # Errors
    ///
    /// Same as [`session_for`](Self::session_for).
    pub fn default_session_for(
        &self,
        source: Arc<dyn ConnectionSource>,
    ) -> Result<Arc<DialectSession>> {
        self.session_for(DEFAULT_DIALECT, source)
    }

    /// Returns the registered dialect identifiers, sorted.
    #[must_use]
    pub fn dialect_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.lock().factories.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Returns the keys of live sessions, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<SessionKey> {
        let mut keys: Vec<SessionKey> = self.lock().sessions.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Returns the number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().sessions.len()
    }

    /// Returns true if no session is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true once [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Closes the registry and releases every session it holds.
    ///
    /// Handles already given out stay usable; the connection sources behind
    /// them are owned by the caller and closed there. Returns how many
    /// sessions were released. Closing twice is a no-op.
    pub fn close(&self) -> usize {
        let mut state = self.lock();
        if state.closed {
            return 0;
        }
        state.closed = true;
        let released = state.sessions.len();
        for key in state.sessions.keys() {
            debug!(key = %key, "Releasing session");
        }
        state.sessions.clear();
        info!(released, "Session registry closed");
        released
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        // The state stays consistent across a panicking factory: nothing is
        // inserted until `create` has returned.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("SessionRegistry")
            .field("dialects", &state.factories.len())
            .field("sessions", &state.sessions.len())
            .field("closed", &state.closed)
            .finish()
    }
}
