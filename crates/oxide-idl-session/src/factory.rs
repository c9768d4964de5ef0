//! Session construction.

use std::fmt;
use std::sync::Arc;

use oxide_idl_core::dialect::Dialect;
use oxide_idl_core::naming::NamingStrategy;

use crate::error::Result;
use crate::session::DialectSession;
use crate::source::ConnectionSource;

/// Everything a factory receives to build one session.
pub struct SessionContext {
    /// The identifier the session is requested under.
    pub dialect_id: String,
    /// The connection source the session binds to.
    pub source: Arc<dyn ConnectionSource>,
    /// The registry's naming strategy.
    pub naming: Arc<dyn NamingStrategy>,
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("dialect_id", &self.dialect_id)
            .field("source", &self.source.source_id())
            .finish_non_exhaustive()
    }
}

/// Builds the session for one dialect.
///
/// The registry calls `create` while holding its lock, at most once per
/// `(dialect, source)` key. Implementations must not call back into the
/// registry.
pub trait SessionFactory: Send + Sync {
    /// Creates a session for the given context.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be built for this source.
    fn create(&self, context: SessionContext) -> Result<DialectSession>;
}

impl<F> SessionFactory for F
where
    F: Fn(SessionContext) -> Result<DialectSession> + Send + Sync,
{
    fn create(&self, context: SessionContext) -> Result<DialectSession> {
        self(context)
    }
}

/// Factory binding a fixed dialect to whatever source it is given.
#[derive(Clone)]
pub struct DialectFactory {
    dialect: Arc<dyn Dialect>,
}

impl DialectFactory {
    /// Creates a factory for the given dialect.
    #[must_use]
    pub fn new(dialect: impl Dialect + 'static) -> Self {
        Self {
            dialect: Arc::new(dialect),
        }
    }
}

impl fmt::Debug for DialectFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DialectFactory")
            .field(&self.dialect.name())
            .finish()
    }
}

impl SessionFactory for DialectFactory {
    fn create(&self, context: SessionContext) -> Result<DialectSession> {
        Ok(DialectSession::new(
            context.dialect_id,
            Arc::clone(&self.dialect),
            context.source,
            context.naming,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;
    use crate::source::UrlSource;
    use oxide_idl_core::dialect::GenericDialect;
    use oxide_idl_core::naming::IdentityNaming;

    fn context(dialect_id: &str) -> SessionContext {
        SessionContext {
            dialect_id: String::from(dialect_id),
            source: Arc::new(UrlSource::new("test://db")),
            naming: Arc::new(IdentityNaming),
        }
    }

    #[test]
    fn test_dialect_factory() {
        let factory = DialectFactory::new(GenericDialect::new());
        let session = factory.create(context("default")).unwrap();
        assert_eq!(session.dialect_id(), "default");
        assert_eq!(session.dialect().name(), "default");
    }

    #[test]
    fn test_closure_factory() {
        let refusing = |ctx: SessionContext| -> Result<DialectSession> {
            Err(SessionError::Construction {
                dialect_id: ctx.dialect_id,
                message: String::from("no driver"),
            })
        };
        let err = refusing.create(context("h2")).unwrap_err();
        assert_eq!(err.to_string(), "failed to create 'h2' session: no driver");
    }
}
