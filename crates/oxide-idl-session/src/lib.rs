//! Dialect sessions for oxide model definitions.
//!
//! `oxide-idl-session` routes a parsed schema to a concrete backend:
//! - **Sources** - opaque [`ConnectionSource`]s handed in by the caller
//!   (a sqlx SQLite pool, or a URL for a pool managed elsewhere)
//! - **Factories** - per-dialect [`SessionFactory`]s building sessions
//! - **Sessions** - [`DialectSession`] handles exposing quoting, sequence
//!   access and physical naming for one `(dialect, source)` pair
//! - **Registry** - [`SessionRegistry`], creating each session once and
//!   reusing it until closed
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use oxide_idl_core::naming::SnakeCaseNaming;
//! use oxide_idl_session::prelude::*;
//!
//! let registry = SessionRegistry::new().with_naming(SnakeCaseNaming);
//! let source: Arc<dyn ConnectionSource> = Arc::new(UrlSource::new("mssql://db:1433"));
//!
//! let session = registry.session_for("sqlserver", source).unwrap();
//! assert_eq!(session.quote_identifier(&session.physical_table_name("OrderItem")), "[order_item]");
//!
//! registry.close();
//! ```

pub mod error;
pub mod factory;
pub mod registry;
pub mod session;
pub mod source;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{Result, SessionError};
    pub use crate::factory::{DialectFactory, SessionContext, SessionFactory};
    pub use crate::registry::{SessionKey, SessionRegistry, DEFAULT_DIALECT};
    pub use crate::session::{DialectSession, ResolvedNames};
    pub use crate::source::{ConnectionSource, SqlitePoolSource, UrlSource};
}

pub use error::{Result, SessionError};
pub use factory::{DialectFactory, SessionContext, SessionFactory};
pub use registry::{SessionKey, SessionRegistry, DEFAULT_DIALECT};
pub use session::{DialectSession, ResolvedNames};
pub use source::{ConnectionSource, SqlitePoolSource, UrlSource};
