//! Naming strategy trait and built-in strategies.

use core::fmt;
use core::str::FromStr;

use super::case::{to_snake_case, to_upper_snake_case};

/// Maps logical names to physical identifiers.
///
/// Implementations must be pure: the same input always yields the same
/// output, with no I/O and no interior mutability, so results may be cached
/// and strategies shared across threads without locking.
pub trait NamingStrategy: Send + Sync {
    /// Returns the physical table name for a logical table name.
    fn physical_table_name(&self, logical: &str) -> String;

    /// Returns the physical sequence name for a logical sequence name.
    fn physical_sequence_name(&self, logical: &str) -> String;

    /// Returns the physical column name for a logical field name.
    fn physical_column_name(&self, logical: &str) -> String {
        self.physical_table_name(logical)
    }
}

impl<S: NamingStrategy + ?Sized> NamingStrategy for Box<S> {
    fn physical_table_name(&self, logical: &str) -> String {
        (**self).physical_table_name(logical)
    }

    fn physical_sequence_name(&self, logical: &str) -> String {
        (**self).physical_sequence_name(logical)
    }

    fn physical_column_name(&self, logical: &str) -> String {
        (**self).physical_column_name(logical)
    }
}

/// Leaves names untouched. This is the default strategy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IdentityNaming;

impl NamingStrategy for IdentityNaming {
    fn physical_table_name(&self, logical: &str) -> String {
        String::from(logical)
    }

    fn physical_sequence_name(&self, logical: &str) -> String {
        String::from(logical)
    }
}

/// `OrderItem` becomes `order_item`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SnakeCaseNaming;

impl NamingStrategy for SnakeCaseNaming {
    fn physical_table_name(&self, logical: &str) -> String {
        to_snake_case(logical)
    }

    fn physical_sequence_name(&self, logical: &str) -> String {
        to_snake_case(logical)
    }
}

/// `OrderItem` becomes `ORDER_ITEM`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpperSnakeCaseNaming;

impl NamingStrategy for UpperSnakeCaseNaming {
    fn physical_table_name(&self, logical: &str) -> String {
        to_upper_snake_case(logical)
    }

    fn physical_sequence_name(&self, logical: &str) -> String {
        to_upper_snake_case(logical)
    }
}

/// Wraps another strategy, adding a table prefix and a sequence suffix.
///
/// Columns are passed through to the inner strategy unprefixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixedNaming<S> {
    inner: S,
    table_prefix: String,
    sequence_suffix: String,
}

impl<S: NamingStrategy> PrefixedNaming<S> {
    /// Creates a decorator with the given table prefix and no sequence suffix.
    #[must_use]
    pub fn new(inner: S, table_prefix: impl Into<String>) -> Self {
        Self {
            inner,
            table_prefix: table_prefix.into(),
            sequence_suffix: String::new(),
        }
    }

    /// Sets the suffix appended to physical sequence names.
    #[must_use]
    pub fn with_sequence_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.sequence_suffix = suffix.into();
        self
    }
}

impl<S: NamingStrategy> NamingStrategy for PrefixedNaming<S> {
    fn physical_table_name(&self, logical: &str) -> String {
        format!("{}{}", self.table_prefix, self.inner.physical_table_name(logical))
    }

    fn physical_sequence_name(&self, logical: &str) -> String {
        format!(
            "{}{}{}",
            self.table_prefix,
            self.inner.physical_sequence_name(logical),
            self.sequence_suffix
        )
    }

    fn physical_column_name(&self, logical: &str) -> String {
        self.inner.physical_column_name(logical)
    }
}

/// The built-in strategies, selectable by name from configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingStrategyKind {
    /// [`IdentityNaming`]
    #[default]
    Identity,
    /// [`SnakeCaseNaming`]
    Snake,
    /// [`UpperSnakeCaseNaming`]
    UpperSnake,
}

impl NamingStrategyKind {
    /// All built-in kinds.
    pub const ALL: [Self; 3] = [Self::Identity, Self::Snake, Self::UpperSnake];

    /// Returns the configuration name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Snake => "snake",
            Self::UpperSnake => "upper-snake",
        }
    }

    /// Instantiates the strategy.
    #[must_use]
    pub fn build(&self) -> Box<dyn NamingStrategy> {
        match self {
            Self::Identity => Box::new(IdentityNaming),
            Self::Snake => Box::new(SnakeCaseNaming),
            Self::UpperSnake => Box::new(UpperSnakeCaseNaming),
        }
    }
}

impl fmt::Display for NamingStrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a configuration names a strategy that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown naming strategy `{0}` (expected identity, snake or upper-snake)")]
pub struct UnknownNamingStrategy(pub String);

impl FromStr for NamingStrategyKind {
    type Err = UnknownNamingStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownNamingStrategy(String::from(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_default() {
        let naming = IdentityNaming;
        assert_eq!(naming.physical_table_name("Order"), "Order");
        assert_eq!(naming.physical_sequence_name("Order_seq"), "Order_seq");
        assert_eq!(naming.physical_column_name("unitPrice"), "unitPrice");
    }

    #[test]
    fn test_snake_is_deterministic() {
        let naming = SnakeCaseNaming;
        for _ in 0..3 {
            assert_eq!(naming.physical_table_name("OrderItem"), "order_item");
        }
    }

    #[test]
    fn test_prefixed() {
        let naming = PrefixedNaming::new(SnakeCaseNaming, "app_").with_sequence_suffix("_sq");
        assert_eq!(naming.physical_table_name("OrderItem"), "app_order_item");
        assert_eq!(naming.physical_sequence_name("OrderItem"), "app_order_item_sq");
        assert_eq!(naming.physical_column_name("unitPrice"), "unit_price");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            "upper-snake".parse::<NamingStrategyKind>(),
            Ok(NamingStrategyKind::UpperSnake)
        );
        assert_eq!(
            "camel".parse::<NamingStrategyKind>(),
            Err(UnknownNamingStrategy(String::from("camel")))
        );
        let strategy = NamingStrategyKind::UpperSnake.build();
        assert_eq!(strategy.physical_table_name("OrderItem"), "ORDER_ITEM");
    }

    #[test]
    fn test_strategies_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IdentityNaming>();
        assert_send_sync::<PrefixedNaming<SnakeCaseNaming>>();
        assert_send_sync::<Box<dyn NamingStrategy>>();
    }
}
