use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use log::{debug, trace};

use crate::error::Error;
use crate::expr::Expr;
use crate::parser::parse;

/// The most distinct variables a [`TruthTable`] will enumerate (`2^24` rows).
pub const MAX_VARIABLES: usize = 24;

/// A formula together with its parsed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposition {
	formula: String,
	expr: Expr,
}

impl Proposition {
	/// # Errors
	///
	/// [`Error::Lex`] or [`Error::Syntax`] if `formula` is malformed.
	pub fn parse(formula: &str) -> Result<Self, Error> {
		Ok(Self {
			formula: formula.to_owned(),
			expr: parse(formula)?,
		})
	}

	/// The text the proposition was written as.
	#[must_use]
	pub fn formula(&self) -> &str {
		&self.formula
	}

	#[must_use]
	pub fn expr(&self) -> &Expr {
		&self.expr
	}
}

impl From<Expr> for Proposition {
	fn from(expr: Expr) -> Self {
		Self {
			formula: expr.to_string(),
			expr,
		}
	}
}

impl FromStr for Proposition {
	type Err = Error;

	fn from_str(formula: &str) -> Result<Self, Self::Err> {
		Self::parse(formula)
	}
}

impl fmt::Display for Proposition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.formula)
	}
}

/// How a proposition behaves across every assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
	Tautology,
	Contradiction,
	Contingent,
}

/// An ordered set of propositions and the truth table over their variables.
///
/// The variables and rows are derived state: every mutation rebuilds them from scratch, which
/// costs `O(2^n * k * m)` for `n` variables, `k` propositions and trees of size `m`. Mutations
/// are all-or-nothing; a failed one leaves the table as it was.
///
/// Two tables are equal when they have the same variables and the same rows, whatever their
/// formulas look like.
#[derive(Debug, Clone, Default)]
pub struct TruthTable {
	propositions: Vec<Proposition>,
	variables: Vec<String>,
	rows: Vec<Vec<bool>>,
}

impl TruthTable {
	/// # Errors
	///
	/// The first parse error among `formulas`, or [`Error::TooManyVariables`].
	pub fn new<I>(formulas: I) -> Result<Self, Error>
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		let propositions = formulas
			.into_iter()
			.map(|formula| Proposition::parse(formula.as_ref()))
			.collect::<Result<Vec<_>, _>>()?;
		Self::from_propositions(propositions)
	}

	/// # Errors
	///
	/// [`Error::TooManyVariables`] past [`MAX_VARIABLES`].
	pub fn from_propositions(propositions: Vec<Proposition>) -> Result<Self, Error> {
		let (variables, rows) = tabulate(&propositions)?;
		Ok(Self {
			propositions,
			variables,
			rows,
		})
	}

	/// Parses `formula` and appends it as the last column.
	///
	/// # Errors
	///
	/// [`Error::Lex`], [`Error::Syntax`] or [`Error::TooManyVariables`]; the table is left
	/// unchanged.
	pub fn add(&mut self, formula: &str) -> Result<(), Error> {
		self.push(Proposition::parse(formula)?)
	}

	/// # Errors
	///
	/// [`Error::TooManyVariables`] past [`MAX_VARIABLES`]; the table is left unchanged.
	pub fn push(&mut self, proposition: Proposition) -> Result<(), Error> {
		let mut propositions = self.propositions.clone();
		propositions.push(proposition);
		self.commit(propositions)
	}

	/// Removes the proposition at `index`, or the last one if `index` is `None`.
	///
	/// # Errors
	///
	/// [`Error::NoSuchProposition`] if there is nothing at `index`.
	pub fn remove(&mut self, index: Option<usize>) -> Result<Proposition, Error> {
		let len = self.propositions.len();
		let index = match index {
			Some(index) if index < len => index,
			None if len > 0 => len - 1,
			_ => return Err(Error::NoSuchProposition { index, len }),
		};
		let mut propositions = self.propositions.clone();
		let removed = propositions.remove(index);
		self.commit(propositions)?;
		Ok(removed)
	}

	/// # Errors
	///
	/// [`Error::NoSuchProposition`] if the table is empty.
	pub fn pop(&mut self) -> Result<Proposition, Error> {
		self.remove(None)
	}

	/// Parses `formula` and puts it in place of the proposition at `index`, returning the old one.
	///
	/// # Errors
	///
	/// [`Error::NoSuchProposition`], [`Error::Lex`] or [`Error::Syntax`]; the table is left
	/// unchanged.
	pub fn replace(&mut self, index: usize, formula: &str) -> Result<Proposition, Error> {
		let len = self.propositions.len();
		if index >= len {
			return Err(Error::NoSuchProposition {
				index: Some(index),
				len,
			});
		}
		let mut propositions = self.propositions.clone();
		let old = std::mem::replace(&mut propositions[index], Proposition::parse(formula)?);
		self.commit(propositions)?;
		Ok(old)
	}

	/// Appends every proposition of `other`, in order.
	///
	/// # Errors
	///
	/// [`Error::TooManyVariables`] past [`MAX_VARIABLES`]; the table is left unchanged.
	pub fn extend_from(&mut self, other: &Self) -> Result<(), Error> {
		let mut propositions = self.propositions.clone();
		propositions.extend(other.propositions.iter().cloned());
		self.commit(propositions)
	}

	/// A new table with the propositions of `self` followed by those of `other`.
	///
	/// # Errors
	///
	/// [`Error::TooManyVariables`] past [`MAX_VARIABLES`].
	pub fn concat(&self, other: &Self) -> Result<Self, Error> {
		let mut table = self.clone();
		table.extend_from(other)?;
		Ok(table)
	}

	/// A new table where each proposition is preceded by the compound sub-formulas it is built
	/// from. Sub-formulas shared between propositions appear once, where first needed.
	///
	/// # Errors
	///
	/// [`Error::TooManyVariables`] past [`MAX_VARIABLES`].
	pub fn with_steps(&self) -> Result<Self, Error> {
		let mut steps: IndexMap<&Expr, Proposition> = IndexMap::new();
		for proposition in &self.propositions {
			let mut fragments = proposition.expr.fragments();
			// The root keeps its original spelling below.
			fragments.pop();
			for fragment in fragments {
				steps
					.entry(fragment)
					.or_insert_with(|| Proposition::from(fragment.clone()));
			}
			steps
				.entry(&proposition.expr)
				.or_insert_with(|| proposition.clone());
		}
		Self::from_propositions(steps.into_iter().map(|(_expr, proposition)| proposition).collect())
	}

	/// # Errors
	///
	/// [`Error::NoSuchProposition`] if there is no proposition at `index`.
	pub fn classify(&self, index: usize) -> Result<Classification, Error> {
		let column = self.column(index).ok_or(Error::NoSuchProposition {
			index: Some(index),
			len: self.propositions.len(),
		})?;
		let (mut any_true, mut any_false) = (false, false);
		for value in column {
			any_true |= value;
			any_false |= !value;
		}
		Ok(match (any_true, any_false) {
			(true, false) => Classification::Tautology,
			(false, true) => Classification::Contradiction,
			_ => Classification::Contingent,
		})
	}

	#[must_use]
	pub fn propositions(&self) -> &[Proposition] {
		&self.propositions
	}

	/// Every variable across all propositions, sorted.
	#[must_use]
	pub fn variables(&self) -> &[String] {
		&self.variables
	}

	/// One row per assignment: the variables' values, then each proposition's value.
	#[must_use]
	pub fn rows(&self) -> &[Vec<bool>] {
		&self.rows
	}

	/// The values of the proposition at `index`, top to bottom.
	#[must_use]
	pub fn column(&self, index: usize) -> Option<impl Iterator<Item = bool> + '_> {
		(index < self.propositions.len()).then(|| {
			let offset = self.variables.len() + index;
			self.rows.iter().map(move |row| row[offset])
		})
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.propositions.is_empty()
	}

	fn commit(&mut self, propositions: Vec<Proposition>) -> Result<(), Error> {
		*self = Self::from_propositions(propositions)?;
		Ok(())
	}
}

/// Builds the sorted variable list and every row for `propositions`.
///
/// Rows count from all-false to all-true in binary, with the first variable as the most
/// significant bit.
fn tabulate(propositions: &[Proposition]) -> Result<(Vec<String>, Vec<Vec<bool>>), Error> {
	if propositions.is_empty() {
		return Ok((Vec::new(), Vec::new()));
	}

	let variables: BTreeSet<&str> = propositions
		.iter()
		.flat_map(|proposition| proposition.expr.variables())
		.collect();
	let variables: Vec<&str> = variables.into_iter().collect();
	let num_variables = variables.len();
	if num_variables > MAX_VARIABLES {
		return Err(Error::TooManyVariables {
			count: num_variables,
			max: MAX_VARIABLES,
		});
	}
	debug!(
		"tabulating {} propositions over {num_variables} variables",
		propositions.len()
	);

	let mut context = HashMap::with_capacity(num_variables);
	let mut rows = Vec::with_capacity(1 << num_variables);
	for counter in 0..1_usize << num_variables {
		let mut row: Vec<bool> = (0..num_variables)
			.map(|idx| {
				let offset = num_variables - idx - 1;
				counter & (1 << offset) != 0
			})
			.collect();
		context.extend(variables.iter().copied().zip(row.iter().copied()));

		for proposition in propositions {
			row.push(proposition.expr.evaluate(&context)?);
		}
		trace!("row {counter}: {row:?}");
		rows.push(row);
	}

	let variables = variables.into_iter().map(str::to_owned).collect();
	Ok((variables, rows))
}

impl PartialEq for TruthTable {
	fn eq(&self, other: &Self) -> bool {
		self.variables == other.variables && self.rows == other.rows
	}
}

impl Eq for TruthTable {}

/// The formulas, separated by ` | `.
impl fmt::Display for TruthTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, proposition) in self.propositions.iter().enumerate() {
			if i > 0 {
				f.write_str(" | ")?;
			}
			f.write_str(&proposition.formula)?;
		}
		Ok(())
	}
}
