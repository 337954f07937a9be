use chumsky::prelude::*;
use chumsky::Stream;
use log::debug;

use crate::error::{Error, SyntaxError};
use crate::expr::{BinaryOperator, Expr, UnaryOperator};
use crate::token::{tokenize, Token};
use crate::Span;

fn binary_op(op: BinaryOperator) -> impl Parser<Token, BinaryOperator, Error = Simple<Token>> + Clone {
	just(Token::Binary(op)).to(op)
}

fn fold_binary(left: Expr, (op, right): (BinaryOperator, Expr)) -> Expr {
	let span = left.span().start..right.span().end;
	Expr::Binary(span, op, Box::new((left, right)))
}

/// Grammar, loosest first:
/// - `or`, `xor`, `->`, `<->`: equal precedence, left-associative
/// - `and`: left-associative
/// - `~`: prefix
/// - constants, variables, parenthesised formulas
fn parser() -> impl Parser<Token, Expr, Error = Simple<Token>> {
	recursive(|expr| {
		let constant = select! { Token::Constant(value) => value }
			.map_with_span(|value, span| Expr::Constant(span, value));
		let variable = select! { Token::Ident(name) => name }
			.map_with_span(|name, span| Expr::Variable(span, name));
		let group = expr
			.delimited_by(just(Token::Open), just(Token::Close))
			.map_with_span(Expr::with_span);
		let atom = choice((constant, variable, group));

		let negation = just(Token::Not)
			.map_with_span(|_, span: Span| span)
			.repeated()
			.then(atom)
			.foldr(|op_span, operand| {
				let span = op_span.start..operand.span().end;
				Expr::Unary(span, UnaryOperator::Not, Box::new(operand))
			});

		let conjunction = negation
			.clone()
			.then(binary_op(BinaryOperator::And).then(negation).repeated())
			.foldl(fold_binary);

		let connective = choice((
			binary_op(BinaryOperator::Or),
			binary_op(BinaryOperator::Xor),
			binary_op(BinaryOperator::Implies),
			binary_op(BinaryOperator::Iff),
		));

		conjunction
			.clone()
			.then(connective.then(conjunction).repeated())
			.foldl(fold_binary)
	})
	.then_ignore(end())
}

/// Parses an already tokenized formula. `len` is the formula's length in characters.
///
/// # Errors
///
/// Returns a [`SyntaxError`] at the first token that cannot continue a formula.
pub fn parse_tokens(tokens: Vec<(Token, Span)>, len: usize) -> Result<Expr, SyntaxError> {
	let stream = Stream::from_iter(len..len + 1, tokens.into_iter());
	parser().parse(stream).map_err(|errors| {
		errors
			.into_iter()
			.next()
			.map_or(SyntaxError { span: len..len + 1, found: None }, SyntaxError::from)
	})
}

/// Tokenizes and parses `source` into an expression tree.
///
/// # Errors
///
/// [`Error::Lex`] or [`Error::Syntax`] if `source` is not a well-formed formula.
pub fn parse(source: &str) -> Result<Expr, Error> {
	let tokens = tokenize(source)?;
	let expr = parse_tokens(tokens, source.chars().count())?;
	debug!("parsed {source:?} as {expr}");
	Ok(expr)
}
