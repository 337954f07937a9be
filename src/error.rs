use std::fmt;

use chumsky::error::Simple;

use crate::token::Token;
use crate::Span;

/// A character that starts no token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
	/// Character offset into the formula.
	pub position: usize,
	/// `None` if the lexer ran out of input.
	pub found: Option<char>,
}

impl From<Simple<char>> for LexError {
	fn from(error: Simple<char>) -> Self {
		Self {
			position: error.span().start,
			found: error.found().copied(),
		}
	}
}

impl fmt::Display for LexError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.found {
			Some(c) => write!(f, "unrecognized character {c:?} at {}", self.position),
			None => write!(f, "unexpected end of formula at {}", self.position),
		}
	}
}

impl std::error::Error for LexError {}

/// A token sequence that does not form a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
	/// Character span of the offending token.
	pub span: Span,
	/// `None` if the formula ended early.
	pub found: Option<Token>,
}

impl From<Simple<Token>> for SyntaxError {
	fn from(error: Simple<Token>) -> Self {
		Self {
			span: error.span(),
			found: error.found().cloned(),
		}
	}
}

impl fmt::Display for SyntaxError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.found {
			Some(token) => write!(f, "unexpected `{token}` at {}", self.span.start),
			None => write!(f, "unexpected end of formula at {}", self.span.start),
		}
	}
}

impl std::error::Error for SyntaxError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
	Lex(LexError),
	Syntax(SyntaxError),
	/// Evaluation met a variable the assignment does not cover.
	UndefinedVariable(String),
	/// `index` is `None` when removing the last proposition of an empty table.
	NoSuchProposition { index: Option<usize>, len: usize },
	/// The propositions mention more variables than a table can enumerate.
	TooManyVariables { count: usize, max: usize },
}

impl From<LexError> for Error {
	fn from(error: LexError) -> Self {
		Self::Lex(error)
	}
}

impl From<SyntaxError> for Error {
	fn from(error: SyntaxError) -> Self {
		Self::Syntax(error)
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Lex(error) => write!(f, "lexical error: {error}"),
			Self::Syntax(error) => write!(f, "syntax error: {error}"),
			Self::UndefinedVariable(name) => write!(f, "undefined variable `{name}`"),
			Self::NoSuchProposition { index: Some(index), len } => {
				write!(f, "no proposition at index {index} (table has {len})")
			}
			Self::NoSuchProposition { index: None, .. } => f.write_str("table has no propositions"),
			Self::TooManyVariables { count, max } => {
				write!(f, "{count} variables is too many to tabulate (at most {max})")
			}
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Lex(error) => Some(error),
			Self::Syntax(error) => Some(error),
			Self::UndefinedVariable(_)
			| Self::NoSuchProposition { .. }
			| Self::TooManyVariables { .. } => None,
		}
	}
}
