use std::fmt;

use chumsky::prelude::*;
use chumsky::text;
use log::debug;

use crate::error::LexError;
use crate::expr::BinaryOperator;
use crate::Span;

/// A lexical unit of a formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
	Ident(String),
	Constant(bool),
	Binary(BinaryOperator),
	Not,
	Open,
	Close,
}

impl Token {
	/// Classifies a lowercase word: the connective keywords, or a variable name.
	fn word(word: String) -> Self {
		match word.as_str() {
			"and" => Self::Binary(BinaryOperator::And),
			"or" => Self::Binary(BinaryOperator::Or),
			"xor" => Self::Binary(BinaryOperator::Xor),
			_ => Self::Ident(word),
		}
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Ident(name) => f.write_str(name),
			Self::Constant(true) => f.write_str("T"),
			Self::Constant(false) => f.write_str("F"),
			Self::Binary(op) => f.write_str(op.symbol()),
			Self::Not => f.write_str("~"),
			Self::Open => f.write_str("("),
			Self::Close => f.write_str(")"),
		}
	}
}

fn lexer() -> impl Parser<char, Vec<(Token, Span)>, Error = Simple<char>> {
	// `<->` must win over `->`.
	let arrow = choice((
		just("<->").to(Token::Binary(BinaryOperator::Iff)),
		just("->").to(Token::Binary(BinaryOperator::Implies)),
	));
	let punct = choice((
		just('~').to(Token::Not),
		just('(').to(Token::Open),
		just(')').to(Token::Close),
	));
	let constant = choice((
		just('T').to(Token::Constant(true)),
		just('F').to(Token::Constant(false)),
	));
	let word = filter(|c: &char| c.is_ascii_lowercase())
		.chain::<char, Vec<char>, _>(filter(|c: &char| c.is_ascii_alphanumeric() || *c == '_').repeated())
		.collect::<String>()
		.map(Token::word);

	choice((arrow, punct, constant, word))
		.map_with_span(|token, span| (token, span))
		.padded()
		.repeated()
		// A failed attempt rewinds past its leading padding, so trailing whitespace is
		// skipped again here.
		.then_ignore(text::whitespace())
		.then_ignore(end())
}

/// Splits `source` into spanned tokens. Spans are character offsets.
///
/// # Errors
///
/// Returns a [`LexError`] at the first character that starts no token.
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, LexError> {
	let tokens = lexer().parse(source).map_err(|errors| {
		errors
			.into_iter()
			.next()
			.map_or(LexError { position: 0, found: None }, LexError::from)
	})?;
	debug!("lexed {} tokens from {source:?}", tokens.len());
	Ok(tokens)
}

#[cfg(test)]
mod tests {
	use super::*;

	use test_log::test;

	fn kinds(source: &str) -> Vec<Token> {
		tokenize(source)
			.unwrap()
			.into_iter()
			.map(|(token, _span)| token)
			.collect()
	}

	#[test]
	fn test_keywords_and_punctuation() {
		assert_eq!(
			kinds("~(p and q) or r xor T -> F <-> s"),
			vec![
				Token::Not,
				Token::Open,
				Token::Ident("p".into()),
				Token::Binary(BinaryOperator::And),
				Token::Ident("q".into()),
				Token::Close,
				Token::Binary(BinaryOperator::Or),
				Token::Ident("r".into()),
				Token::Binary(BinaryOperator::Xor),
				Token::Constant(true),
				Token::Binary(BinaryOperator::Implies),
				Token::Constant(false),
				Token::Binary(BinaryOperator::Iff),
				Token::Ident("s".into()),
			]
		);
	}

	#[test]
	fn test_no_whitespace_needed() {
		assert_eq!(
			kinds("p<->~q->r"),
			vec![
				Token::Ident("p".into()),
				Token::Binary(BinaryOperator::Iff),
				Token::Not,
				Token::Ident("q".into()),
				Token::Binary(BinaryOperator::Implies),
				Token::Ident("r".into()),
			]
		);
	}

	#[test]
	fn test_multi_character_identifiers() {
		assert_eq!(
			kinds("  rain_2   and wetGround "),
			vec![
				Token::Ident("rain_2".into()),
				Token::Binary(BinaryOperator::And),
				Token::Ident("wetGround".into()),
			]
		);
		// Keywords only match whole words.
		assert_eq!(kinds("order"), vec![Token::Ident("order".into())]);
	}

	#[test]
	fn test_spans() {
		let tokens = tokenize("p -> q").unwrap();
		let spans: Vec<_> = tokens.into_iter().map(|(_token, span)| span).collect();
		assert_eq!(spans, vec![0..1, 2..4, 5..6]);
	}

	#[test]
	fn test_empty_input() {
		assert_eq!(kinds(""), vec![]);
		assert_eq!(kinds("   "), vec![]);
		assert_eq!(kinds(" \t\n "), vec![]);
	}

	#[test]
	fn test_error_after_leading_whitespace() {
		let error = tokenize("   & p").unwrap_err();
		assert_eq!(error, LexError { position: 3, found: Some('&') });
	}

	#[test]
	fn test_unrecognized_character() {
		let error = tokenize("p & q").unwrap_err();
		assert_eq!(error, LexError { position: 2, found: Some('&') });

		let error = tokenize("P").unwrap_err();
		assert_eq!(error.found, Some('P'));

		assert!(tokenize("p <- q").is_err());
	}
}
