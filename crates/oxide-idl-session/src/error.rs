//! Error types for the session layer.

/// Errors that can occur while obtaining or using a dialect session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No factory is registered for the dialect identifier.
    #[error("unsupported dialect '{dialect_id}'")]
    UnsupportedDialect {
        /// The identifier that was asked for.
        dialect_id: String,
    },

    /// The registry has been closed; no sessions are handed out any more.
    #[error("session registry is closed")]
    RegistryClosed,

    /// A session factory refused to build a session.
    #[error("failed to create '{dialect_id}' session: {message}")]
    Construction {
        /// Dialect of the failed session.
        dialect_id: String,
        /// Why construction failed.
        message: String,
    },

    /// An override resolved to an empty physical identifier.
    #[error("declaration '{declaration}' resolves to an empty identifier for dialect '{dialect_id}'")]
    EmptyIdentifier {
        /// Dialect the names were resolved for.
        dialect_id: String,
        /// Source name of the declaration.
        declaration: String,
    },

    /// A physical identifier exceeds the dialect's length limit.
    #[error("identifier '{identifier}' exceeds the {max}-character limit of dialect '{dialect_id}'")]
    IdentifierTooLong {
        /// Dialect enforcing the limit.
        dialect_id: String,
        /// The offending physical identifier.
        identifier: String,
        /// The limit.
        max: usize,
    },

    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
