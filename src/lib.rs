//! Truth tables for propositional formulas.
//!
//! Formulas are built from variables (`p`, `rain`, `x_1`), the constants `T` and `F`, negation
//! `~`, and the connectives `and`, `or`, `xor`, `->` and `<->`. Negation binds tightest, then
//! `and`; the remaining connectives share one precedence level and group left to right, so
//! `p or q xor r` reads as `(p or q) xor r`.
//!
//! ```
//! use truthtable::TruthTable;
//!
//! let table = TruthTable::new(["p -> q"])?;
//! assert_eq!(table.variables(), ["p", "q"]);
//! assert_eq!(
//! 	table.column(0).unwrap().collect::<Vec<_>>(),
//! 	[true, true, false, true]
//! );
//! # Ok::<(), truthtable::Error>(())
//! ```
//!
//! A [`TruthTable`] is not synchronised; callers sharing one across threads must lock it.

#![deny(
	absolute_paths_not_starting_with_crate,
	future_incompatible,
	keyword_idents,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	missing_copy_implementations,
	non_ascii_idents,
	nonstandard_style,
	noop_method_call,
	rust_2018_idioms,
	unused_qualifications
)]
#![warn(clippy::pedantic)]
#![allow(clippy::let_underscore_drop)]
#![forbid(unsafe_code)]

use std::ops::Range;

pub mod error;
pub mod expr;
pub mod parser;
pub mod render;
pub mod table;
pub mod token;

pub use error::{Error, LexError, SyntaxError};
pub use expr::{BinaryOperator, Expr, UnaryOperator};
pub use parser::parse;
pub use table::{Classification, Proposition, TruthTable, MAX_VARIABLES};
pub use token::{tokenize, Token};

/// Character offsets into a formula.
pub type Span = Range<usize>;
