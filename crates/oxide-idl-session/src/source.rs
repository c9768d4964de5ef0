//! Connection sources.
//!
//! The registry never opens connections itself. Callers hand it a
//! [`ConnectionSource`], usually wrapping a pool they own, and the registry
//! only uses its identifier for keying.

use std::any::Any;
use std::fmt;

use sqlx::sqlite::SqlitePool;

use crate::error::Result;

/// An opaque source of database connections.
pub trait ConnectionSource: Any + Send + Sync {
    /// Stable identifier of this source, typically its connection URL.
    ///
    /// Two sources with the same identifier share sessions.
    fn source_id(&self) -> &str;

    /// Returns `self` for downcasting to the concrete source type.
    fn as_any(&self) -> &dyn Any;
}

impl fmt::Debug for dyn ConnectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConnectionSource")
            .field(&self.source_id())
            .finish()
    }
}

/// A connection URL for a pool managed outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlSource {
    url: String,
}

impl UrlSource {
    /// Creates a source for the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Returns the URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ConnectionSource for UrlSource {
    fn source_id(&self) -> &str {
        &self.url
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A sqlx SQLite pool.
#[derive(Debug, Clone)]
pub struct SqlitePoolSource {
    url: String,
    pool: SqlitePool,
}

impl SqlitePoolSource {
    /// Wraps an existing pool created from `url`.
    #[must_use]
    pub fn new(url: impl Into<String>, pool: SqlitePool) -> Self {
        Self {
            url: url.into(),
            pool,
        }
    }

    /// Creates a pool that connects on first use.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn connect_lazy(url: &str) -> Result<Self> {
        let pool = SqlitePool::connect_lazy(url)?;
        Ok(Self::new(url, pool))
    }

    /// Returns the pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl ConnectionSource for SqlitePoolSource {
    fn source_id(&self) -> &str {
        &self.url
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_source() {
        let source = UrlSource::new("jdbc:sqlserver://db:1433");
        assert_eq!(source.source_id(), "jdbc:sqlserver://db:1433");
        assert_eq!(source.url(), source.source_id());
    }

    #[test]
    fn test_downcast() {
        let source: Box<dyn ConnectionSource> = Box::new(UrlSource::new("gbase://db"));
        assert!(source.as_any().downcast_ref::<UrlSource>().is_some());
        assert!(source.as_any().downcast_ref::<SqlitePoolSource>().is_none());
        assert_eq!(format!("{source:?}"), "ConnectionSource(\"gbase://db\")");
    }

    #[tokio::test]
    async fn test_sqlite_pool_source() {
        let source = SqlitePoolSource::connect_lazy("sqlite::memory:").unwrap();
        assert_eq!(source.source_id(), "sqlite::memory:");
        let (one,): (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(source.pool())
            .await
            .unwrap();
        assert_eq!(one, 1);
    }
}
