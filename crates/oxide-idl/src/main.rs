//! oxide-idl CLI
//!
//! Checks model definition files and shows the physical names they map to
//! under a dialect and naming strategy.

mod report;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_idl_core::naming::{NamingStrategy, NamingStrategyKind, PrefixedNaming};
use oxide_idl_core::{parse, CompilationUnit};
use oxide_idl_session::prelude::*;

use crate::report::DeclarationReport;

/// Compiler front-end for oxide model definitions.
#[derive(Parser)]
#[command(name = "oxide-idl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database URL the session binds to. `sqlite:` URLs open a pool.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite::memory:")]
    database_url: String,

    /// Dialect identifier.
    #[arg(short, long, env = "OXIDE_IDL_DIALECT", default_value = DEFAULT_DIALECT)]
    dialect: String,

    /// Physical naming strategy (identity, snake, upper-snake).
    #[arg(short, long, env = "OXIDE_IDL_NAMING", default_value_t = NamingStrategyKind::Identity)]
    naming: NamingStrategyKind,

    /// Prefix prepended to every physical table and sequence name.
    #[arg(long)]
    table_prefix: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the syntax of a definition file and list its declarations.
    Parse {
        /// Path to the `.idl` file.
        file: PathBuf,
    },

    /// Show the physical names of every declaration.
    Resolve {
        /// Path to the `.idl` file.
        file: PathBuf,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List the registered dialect identifiers.
    Dialects,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Parse { file } => {
            let unit = load_unit(&file)?;
            info!(file = %file.display(), declarations = unit.len(), "Parsed");
            for declaration in &unit {
                println!(
                    "{} {} ({} fields) at {}",
                    declaration.kind().as_str(),
                    declaration.name(),
                    declaration.fields().len(),
                    declaration.span()
                );
            }
        }

        Commands::Resolve { file, json } => {
            let unit = load_unit(&file)?;
            let registry = session_registry(cli.naming, cli.table_prefix.as_deref());
            let connection = open_source(&cli.database_url).await?;
            let reports = resolve_and_close(&registry, &cli.dialect, connection, &unit).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    println!("{report}");
                }
            }
        }

        Commands::Dialects => {
            let registry = session_registry(cli.naming, cli.table_prefix.as_deref());
            for dialect in registry.dialect_ids() {
                println!("{dialect}");
            }
        }
    }

    Ok(())
}

fn session_registry(kind: NamingStrategyKind, table_prefix: Option<&str>) -> SessionRegistry {
    SessionRegistry::new().with_naming(naming_strategy(kind, table_prefix))
}

fn naming_strategy(kind: NamingStrategyKind, table_prefix: Option<&str>) -> Box<dyn NamingStrategy> {
    let strategy = kind.build();
    match table_prefix {
        Some(prefix) => Box::new(PrefixedNaming::new(strategy, prefix)),
        None => strategy,
    }
}

/// Reads and parses a definition file.
fn load_unit(path: &Path) -> anyhow::Result<CompilationUnit> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse(&source).with_context(|| format!("failed to parse {}", path.display()))
}

/// Opens the connection source for a URL. SQLite URLs get a pool, which the
/// caller closes once the registry is done with it.
async fn open_source(
    url: &str,
) -> anyhow::Result<(Arc<dyn ConnectionSource>, Option<SqlitePool>)> {
    if url.starts_with("sqlite:") {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await
            .with_context(|| format!("failed to connect to {url}"))?;
        let source = SqlitePoolSource::new(url, pool.clone());
        Ok((Arc::new(source), Some(pool)))
    } else {
        Ok((Arc::new(UrlSource::new(url)), None))
    }
}

/// Resolves every declaration through the session for `dialect`, then closes
/// the registry and the pool whether or not resolution succeeded.
async fn resolve_and_close(
    registry: &SessionRegistry,
    dialect: &str,
    (source, pool): (Arc<dyn ConnectionSource>, Option<SqlitePool>),
    unit: &CompilationUnit,
) -> anyhow::Result<Vec<DeclarationReport>> {
    let result = registry
        .session_for(dialect, source)
        .map_err(anyhow::Error::from)
        .and_then(|session| {
            debug!(session = ?session, "Resolving declarations");
            resolve_all(&session, unit)
        });

    registry.close();
    if let Some(pool) = pool {
        pool.close().await;
    }
    result
}

fn resolve_all(
    session: &DialectSession,
    unit: &CompilationUnit,
) -> anyhow::Result<Vec<DeclarationReport>> {
    unit.iter()
        .map(|declaration| {
            let resolved = session
                .resolve(declaration)
                .with_context(|| format!("cannot resolve {}", declaration.name()))?;
            Ok(DeclarationReport::new(declaration, resolved))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn idl_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".idl").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["oxide-idl", "dialects"]).unwrap();
        assert_eq!(cli.dialect, "default");
        assert_eq!(cli.naming, NamingStrategyKind::Identity);
        assert!(cli.table_prefix.is_none());
    }

    #[test]
    fn test_cli_rejects_unknown_naming() {
        let result = Cli::try_parse_from(["oxide-idl", "--naming", "camel", "dialects"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_unit() {
        let file = idl_file("model Order { id: Long @id }\nembeddable Address { city: String }");
        let unit = load_unit(file.path()).unwrap();
        assert_eq!(unit.len(), 2);
    }

    #[test]
    fn test_load_unit_reports_position() {
        let file = idl_file("model Order {\n  id Long\n}");
        let err = load_unit(file.path()).unwrap_err();
        let parse_error = err.downcast_ref::<oxide_idl_core::ParseError>().unwrap();
        assert_eq!((parse_error.line(), parse_error.column()), (2, 6));
        assert!(format!("{err:#}").contains("failed to parse"));
    }

    #[test]
    fn test_load_unit_missing_file() {
        let err = load_unit(Path::new("/nonexistent/model.idl")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read"));
    }

    #[test]
    fn test_prefixed_naming() {
        let naming = naming_strategy(NamingStrategyKind::Snake, Some("app_"));
        assert_eq!(naming.physical_table_name("OrderItem"), "app_order_item");
        assert_eq!(naming.physical_sequence_name("OrderItem_seq"), "app_order_item_seq");
    }

    #[tokio::test]
    async fn test_resolve_against_sqlite_pool() {
        let (source, pool) = open_source("sqlite::memory:").await.unwrap();
        let pool = pool.unwrap();
        let registry = session_registry(NamingStrategyKind::Snake, None);

        let unit = parse("model OrderItem { unitPrice: Decimal }").unwrap();
        let reports = resolve_and_close(&registry, "sqlite", (source, Some(pool.clone())), &unit)
            .await
            .unwrap();
        assert_eq!(reports[0].table.as_deref(), Some("\"order_item\""));
        assert!(registry.is_closed());
        assert!(pool.is_closed());
    }

    #[tokio::test]
    async fn test_failed_resolve_still_closes() {
        let unit = parse("model Order { id: Long }").unwrap();

        let (source, pool) = open_source("sqlite::memory:").await.unwrap();
        let pool = pool.unwrap();
        let registry = session_registry(NamingStrategyKind::Identity, None);
        let err = resolve_and_close(&registry, "h2", (source, Some(pool.clone())), &unit)
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SessionError>(),
            Some(SessionError::UnsupportedDialect { .. })
        ));
        assert!(registry.is_closed());
        assert!(pool.is_closed());

        let unit = parse(r#"@table("") model Order { id: Long }"#).unwrap();
        let (source, pool) = open_source("sqlite::memory:").await.unwrap();
        let pool = pool.unwrap();
        let registry = session_registry(NamingStrategyKind::Identity, None);
        assert!(resolve_and_close(&registry, "sqlite", (source, Some(pool.clone())), &unit)
            .await
            .is_err());
        assert!(registry.is_closed());
        assert!(pool.is_closed());
    }

    #[test]
    fn test_session_registry_uses_prefix() {
        let registry = session_registry(NamingStrategyKind::UpperSnake, Some("APP_"));
        assert_eq!(registry.naming().physical_table_name("OrderItem"), "APP_ORDER_ITEM");
        assert_eq!(registry.dialect_ids(), vec!["default", "gbase", "sqlite", "sqlserver"]);
    }

    #[tokio::test]
    async fn test_non_sqlite_url_has_no_pool() {
        let (source, pool) = open_source("mssql://db:1433").await.unwrap();
        assert_eq!(source.source_id(), "mssql://db:1433");
        assert!(pool.is_none());
    }
}
