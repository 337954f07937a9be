use std::collections::{BTreeSet, HashMap};
use std::fmt;

use indexmap::IndexSet;

use crate::error::Error;
use crate::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
	Not,
}

impl UnaryOperator {
	#[must_use]
	pub fn apply(self, b: bool) -> bool {
		match self {
			Self::Not => !b,
		}
	}

	#[must_use]
	pub fn symbol(self) -> &'static str {
		match self {
			Self::Not => "~",
		}
	}

	fn latex(self) -> &'static str {
		match self {
			Self::Not => r"\neg ",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
	And,
	Or,
	Xor,
	Implies,
	Iff,
}

impl BinaryOperator {
	#[must_use]
	pub fn apply(self, a: bool, b: bool) -> bool {
		match self {
			Self::And => a & b,
			Self::Or => a | b,
			Self::Xor => a ^ b,
			Self::Implies => !a | b,
			Self::Iff => a == b,
		}
	}

	/// The keyword this operator is written with.
	#[must_use]
	pub fn symbol(self) -> &'static str {
		match self {
			Self::And => "and",
			Self::Or => "or",
			Self::Xor => "xor",
			Self::Implies => "->",
			Self::Iff => "<->",
		}
	}

	fn latex(self) -> &'static str {
		match self {
			Self::And => r"\wedge",
			Self::Or => r"\vee",
			Self::Xor => r"\oplus",
			Self::Implies => r"\rightarrow",
			Self::Iff => r"\leftrightarrow",
		}
	}
}

/// A parsed formula.
///
/// Each node remembers the character span it was parsed from. Spans take no part in
/// equality or hashing, so two trees compare equal exactly when they have the same shape.
///
/// Parsing, evaluation and display recurse once per nesting level, so a formula nested
/// tens of thousands of levels deep can exhaust the stack.
#[derive(Debug, Clone, derivative::Derivative)]
#[derivative(PartialEq, Eq, Hash)]
pub enum Expr {
	Constant(
		#[derivative(PartialEq = "ignore", Hash = "ignore")] Span,
		bool,
	),
	Variable(
		#[derivative(PartialEq = "ignore", Hash = "ignore")] Span,
		String,
	),
	Unary(
		#[derivative(PartialEq = "ignore", Hash = "ignore")] Span,
		UnaryOperator,
		Box<Self>,
	),
	Binary(
		#[derivative(PartialEq = "ignore", Hash = "ignore")] Span,
		BinaryOperator,
		Box<(Self, Self)>,
	),
}

impl Expr {
	#[must_use]
	pub fn constant(value: bool) -> Self {
		Self::Constant(Span::default(), value)
	}

	#[must_use]
	pub fn variable(name: impl Into<String>) -> Self {
		Self::Variable(Span::default(), name.into())
	}

	#[must_use]
	pub fn not(child: Self) -> Self {
		Self::Unary(Span::default(), UnaryOperator::Not, Box::new(child))
	}

	#[must_use]
	pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
		Self::Binary(Span::default(), op, Box::new((left, right)))
	}

	#[must_use]
	pub fn span(&self) -> Span {
		match self {
			Self::Constant(span, ..)
			| Self::Variable(span, ..)
			| Self::Unary(span, ..)
			| Self::Binary(span, ..) => span.clone(),
		}
	}

	#[must_use]
	pub(crate) fn with_span(mut self, new: Span) -> Self {
		match &mut self {
			Self::Constant(span, ..)
			| Self::Variable(span, ..)
			| Self::Unary(span, ..)
			| Self::Binary(span, ..) => *span = new,
		}
		self
	}

	/// Evaluates the tree under `assignment`.
	///
	/// Both operands of a binary node are always evaluated.
	///
	/// # Errors
	///
	/// [`Error::UndefinedVariable`] if the tree mentions a name `assignment` lacks.
	pub fn evaluate(&self, assignment: &HashMap<&str, bool>) -> Result<bool, Error> {
		match self {
			Self::Constant(_span, value) => Ok(*value),
			Self::Variable(_span, name) => assignment
				.get(name.as_str())
				.copied()
				.ok_or_else(|| Error::UndefinedVariable(name.clone())),
			Self::Unary(_span, op, child) => Ok(op.apply(child.evaluate(assignment)?)),
			Self::Binary(_span, op, children) => {
				let left = children.0.evaluate(assignment)?;
				let right = children.1.evaluate(assignment)?;
				Ok(op.apply(left, right))
			}
		}
	}

	/// The distinct variable names in the tree, sorted.
	#[must_use]
	pub fn variables(&self) -> BTreeSet<&str> {
		let mut variables = BTreeSet::new();
		let mut stack = vec![self];
		while let Some(node) = stack.pop() {
			match node {
				Self::Constant(..) => {}
				Self::Variable(_span, name) => {
					variables.insert(name.as_str());
				}
				Self::Unary(_span, _op, child) => stack.push(child),
				Self::Binary(_span, _op, children) => stack.extend([&children.0, &children.1]),
			}
		}
		variables
	}

	/// Every compound sub-expression once, operands before the nodes that use them.
	/// The root, if compound, comes last.
	#[must_use]
	pub fn fragments(&self) -> IndexSet<&Self> {
		fn go<'a>(node: &'a Expr, fragments: &mut IndexSet<&'a Expr>) {
			match node {
				Expr::Constant(..) | Expr::Variable(..) => return,
				Expr::Unary(_span, _op, child) => go(child, fragments),
				Expr::Binary(_span, _op, children) => {
					go(&children.0, fragments);
					go(&children.1, fragments);
				}
			}
			fragments.insert(node);
		}

		let mut fragments = IndexSet::new();
		go(self, &mut fragments);
		fragments
	}

	/// Displays the tree with LaTeX connectives.
	#[must_use]
	pub fn latex(&self) -> Latex<'_> {
		Latex(self)
	}

	fn write(&self, f: &mut fmt::Formatter<'_>, latex: bool) -> fmt::Result {
		let (open, close) = if latex { (r"\left( ", r" \right)") } else { ("(", ")") };
		let operand = |f: &mut fmt::Formatter<'_>, child: &Self| -> fmt::Result {
			if let Self::Binary(..) = child {
				f.write_str(open)?;
				child.write(f, latex)?;
				f.write_str(close)
			} else {
				child.write(f, latex)
			}
		};

		match self {
			Self::Constant(_span, true) => f.write_str("T"),
			Self::Constant(_span, false) => f.write_str("F"),
			Self::Variable(_span, name) => f.write_str(name),
			Self::Unary(_span, op, child) => {
				f.write_str(if latex { op.latex() } else { op.symbol() })?;
				operand(f, child)
			}
			Self::Binary(_span, op, children) => {
				operand(f, &children.0)?;
				write!(f, " {} ", if latex { op.latex() } else { op.symbol() })?;
				operand(f, &children.1)
			}
		}
	}
}

impl fmt::Display for Expr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.write(f, false)
	}
}

/// See [`Expr::latex`].
#[derive(Debug, Clone, Copy)]
pub struct Latex<'a>(&'a Expr);

impl fmt::Display for Latex<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.write(f, true)
	}
}
