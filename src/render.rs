//! Text renderings of a [`TruthTable`].

use std::fmt::Write as _;

use crate::table::TruthTable;

fn tf(b: bool, binary: bool) -> char {
	match (b, binary) {
		(true, false) => 'T',
		(false, false) => 'F',
		(true, true) => '1',
		(false, true) => '0',
	}
}

fn rule(widths: &[usize], (left, middle, right): (char, char, char)) -> String {
	let mut line = String::new();
	line.push(left);
	for (i, width) in widths.iter().enumerate() {
		if i > 0 {
			line.push(middle);
		}
		line.extend(std::iter::repeat('─').take(width + 2));
	}
	line.push(right);
	line
}

fn boxed_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
	let mut line = String::from("│");
	for (cell, &width) in cells.zip(widths) {
		// Writing to a `String` cannot fail.
		let _ = write!(line, " {cell:^width$} │");
	}
	line
}

impl TruthTable {
	/// Draws the table in a box, one column per variable then one per proposition, each as wide
	/// as its header. Values are `T`/`F`, or `1`/`0` if `binary`.
	///
	/// ```text
	/// ┌───┬───┬─────────┐
	/// │ p │ q │ p xor q │
	/// ├───┼───┼─────────┤
	/// │ F │ F │    F    │
	/// ...
	/// └───┴───┴─────────┘
	/// ```
	#[must_use]
	pub fn render(&self, binary: bool) -> String {
		if self.is_empty() {
			return String::new();
		}

		let headers: Vec<&str> = self
			.variables()
			.iter()
			.map(String::as_str)
			.chain(self.propositions().iter().map(|proposition| proposition.formula()))
			.collect();
		let widths: Vec<usize> = headers
			.iter()
			.map(|header| header.chars().count().max(1))
			.collect();

		let mut lines = Vec::with_capacity(self.rows().len() + 4);
		lines.push(rule(&widths, ('┌', '┬', '┐')));
		lines.push(boxed_row(headers.iter().copied(), &widths));
		lines.push(rule(&widths, ('├', '┼', '┤')));
		for row in self.rows() {
			let cells: Vec<String> = row.iter().map(|&b| tf(b, binary).to_string()).collect();
			lines.push(boxed_row(cells.iter().map(String::as_str), &widths));
		}
		lines.push(rule(&widths, ('└', '┴', '┘')));
		lines.join("\n")
	}

	/// Writes the table as a LaTeX `tabular`, with the formulas typeset as math.
	#[must_use]
	pub fn render_latex(&self, binary: bool) -> String {
		if self.is_empty() {
			return String::new();
		}

		let mut out = String::new();
		// Writing to a `String` cannot fail.
		let _ = self.write_latex(&mut out, binary);
		out
	}

	fn write_latex(&self, out: &mut String, binary: bool) -> std::fmt::Result {
		let num_variables = self.variables().len();
		let num_propositions = self.propositions().len();

		out.push_str(r"\begin{tabular}{");
		for _ in 0..num_variables {
			out.push_str("c ");
		}
		out.push_str("| ");
		for _ in 0..num_propositions {
			out.push_str("c ");
		}
		out.push_str("}\n");

		let headers = self
			.variables()
			.iter()
			.map(|variable| format!("${variable}$"))
			.chain(
				self.propositions()
					.iter()
					.map(|proposition| format!("${}$", proposition.expr().latex())),
			);
		writeln!(out, r"{} \\", headers.collect::<Vec<_>>().join(" & "))?;
		out.push_str("\\hline\n");

		for row in self.rows() {
			let cells: Vec<String> = row.iter().map(|&b| tf(b, binary).to_string()).collect();
			writeln!(out, r"{} \\", cells.join(" & "))?;
		}

		out.push_str(r"\end{tabular}");
		Ok(())
	}
}
