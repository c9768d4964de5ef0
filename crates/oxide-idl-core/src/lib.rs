//! # oxide-idl-core
//!
//! Front-end for the oxide model definition language (`.idl` files).
//!
//! This crate provides:
//! - A hand-written lexer with exact line/column tracking
//! - A recursive descent parser producing an immutable [`CompilationUnit`]
//! - Pluggable physical naming strategies
//! - The [`Dialect`] trait with the generic, SQL Server and GBase dialects
//!
//! ## Parsing
//!
//! ```rust
//! use oxide_idl_core::{parse, DeclarationKind};
//!
//! let unit = parse(r#"
//!     @table("T_ORDER")
//!     model Order as "sales_order" {
//!         id: Long @id;
//!         lines: List<OrderLine>;
//!     }
//! "#).unwrap();
//!
//! let order = &unit.declarations[0];
//! assert_eq!(order.kind(), DeclarationKind::Model);
//! assert_eq!(order.logical_name(), "sales_order");
//! assert_eq!(order.fields().len(), 2);
//! ```
//!
//! ## Physical naming
//!
//! ```rust
//! use oxide_idl_core::naming::{NamingStrategy, SnakeCaseNaming, IdentityNaming};
//!
//! assert_eq!(IdentityNaming.physical_table_name("Order"), "Order");
//! assert_eq!(SnakeCaseNaming.physical_table_name("OrderItem"), "order_item");
//! ```

pub mod ast;
pub mod dialect;
pub mod lexer;
pub mod naming;
pub mod parser;

pub use ast::{CompilationUnit, Declaration, DeclarationKind, FieldDeclaration, TypeRef};
pub use dialect::Dialect;
pub use lexer::{LexError, LexErrorKind, Lexer, Span, Token, TokenKind};
pub use naming::{IdentityNaming, NamingStrategy, PhysicalNames};
pub use parser::{parse, ParseError, Parser};
