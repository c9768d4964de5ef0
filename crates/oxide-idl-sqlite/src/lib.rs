//! # oxide-idl-sqlite
//!
//! SQLite dialect for `oxide-idl-core`.
//!
//! # How SQLite differs from other dialects
//!
//! - **No sequences**: SQLite has no `CREATE SEQUENCE`. Sequences are
//!   emulated with a single bookkeeping table, [`SEQUENCE_TABLE`], holding
//!   one row per physical sequence name. [`SqliteDialect::create_sequence_table_sql`]
//!   and [`SqliteDialect::register_sequence_sql`] prepare it, and
//!   `next_sequence_value_sql` bumps and returns the counter with
//!   `UPDATE ... RETURNING` (since SQLite 3.35.0, see [RETURNING]).
//! - **Identifier quoting**: SQLite uses double quotes (`"`) as
//!   the standard quoting style, though it also accepts backticks
//!   and square brackets. See [SQLite keywords].
//! - **Identifier length**: unbounded.
//!
//! [RETURNING]: https://www.sqlite.org/lang_returning.html
//! [SQLite keywords]: https://www.sqlite.org/lang_keywords.html
//!
//! ## Example
//!
//! ```rust
//! use oxide_idl_core::Dialect;
//! use oxide_idl_sqlite::SqliteDialect;
//!
//! let dialect = SqliteDialect::new();
//! assert_eq!(dialect.name(), "sqlite");
//! assert!(!dialect.supports_sequences());
//! ```

mod dialect;

pub use dialect::{SqliteDialect, SEQUENCE_TABLE};
