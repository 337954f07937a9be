use std::collections::HashMap;

use test_log::test;

use truthtable::{parse, Error, TruthTable};

fn column(table: &TruthTable, index: usize) -> Vec<bool> {
	table.column(index).unwrap().collect()
}

#[test]
fn test_row_and_column_counts() {
	for (formulas, num_variables) in [
		(vec!["p"], 1),
		(vec!["p and q", "q or r"], 3),
		(vec!["a -> b", "~c", "d xor a"], 4),
		(vec!["T <-> F"], 0),
	] {
		let table = TruthTable::new(&formulas).unwrap();
		assert_eq!(table.variables().len(), num_variables);
		assert_eq!(table.rows().len(), 1 << num_variables);
		for row in table.rows() {
			assert_eq!(row.len(), num_variables + formulas.len());
		}
	}
}

#[test]
fn test_rows_are_distinct_and_counting() {
	let table = TruthTable::new(["a or b or c or d"]).unwrap();
	for (counter, row) in table.rows().iter().enumerate() {
		let value = row[..4]
			.iter()
			.fold(0, |acc, &bit| (acc << 1) | usize::from(bit));
		assert_eq!(value, counter);
	}
}

#[test]
fn test_implies_and_xor() {
	let table = TruthTable::new(["p -> q", "p xor q"]).unwrap();
	assert_eq!(column(&table, 0), [true, true, false, true]);
	assert_eq!(column(&table, 1), [false, true, true, false]);
}

#[test]
fn test_de_morgan() {
	assert_eq!(
		TruthTable::new(["~(p and q)"]).unwrap(),
		TruthTable::new(["~p or ~q"]).unwrap()
	);
	assert_eq!(
		TruthTable::new(["~(p or q)"]).unwrap(),
		TruthTable::new(["~p and ~q"]).unwrap()
	);
}

#[test]
fn test_nested_formula_rows() {
	let table = TruthTable::new(["p and (~q or (p and r))"]).unwrap();
	assert_eq!(table.variables(), ["p", "q", "r"]);
	// (p, q, r) = (T, F, F) is row 0b100, (F, F, F) is row 0.
	assert!(table.rows()[0b100][3]);
	assert!(!table.rows()[0][3]);
}

#[test]
fn test_equality_ignores_spelling() {
	let left = TruthTable::new(["p or (q and r)"]).unwrap();
	let right = TruthTable::new(["(p or q) and (p or r)"]).unwrap();
	assert_eq!(left, right);
	assert_ne!(left.to_string(), right.to_string());

	// Same results over different variables are different tables.
	assert_ne!(
		TruthTable::new(["p"]).unwrap(),
		TruthTable::new(["q"]).unwrap()
	);
}

#[test]
fn test_failed_add_keeps_state() {
	let mut table = TruthTable::new(["p", "q -> p"]).unwrap();
	let before = table.clone();
	let error = table.add("(p and q").unwrap_err();
	assert!(matches!(error, Error::Syntax(_)));
	assert_eq!(table, before);
	assert_eq!(table.to_string(), before.to_string());
}

#[test]
fn test_evaluate_is_pure() {
	let expr = parse("(p <-> q) xor ~r").unwrap();
	let assignment = HashMap::from([("p", true), ("q", false), ("r", false)]);
	let first = expr.evaluate(&assignment).unwrap();
	for _ in 0..10 {
		assert_eq!(expr.evaluate(&assignment).unwrap(), first);
	}
	assert!(first);

	let partial = HashMap::from([("p", true)]);
	assert_eq!(
		expr.evaluate(&partial),
		Err(Error::UndefinedVariable("q".into()))
	);
}

#[test]
fn test_pop_and_concat() {
	let mut table = TruthTable::new([
		"p and (~q or (p and r))",
		"p or (q and r)",
		"(p or q) and (p or r)",
	])
	.unwrap();
	let last = TruthTable::from_propositions(vec![table.pop().unwrap()]).unwrap();
	let middle = TruthTable::from_propositions(vec![table.pop().unwrap()]).unwrap();
	assert_eq!(last, middle);
	assert_eq!(last.to_string(), "(p or q) and (p or r)");

	let joined = table.concat(&last).unwrap();
	assert_eq!(
		joined.to_string(),
		"p and (~q or (p and r)) | (p or q) and (p or r)"
	);
}

#[test]
fn test_render_three_formulas() {
	let table = TruthTable::new([
		"p and (~q or (p and r))",
		"p or (q and r)",
		"(p or q) and (p or r)",
	])
	.unwrap();
	let expected = "\
┌───┬───┬───┬─────────────────────────┬────────────────┬───────────────────────┐
│ p │ q │ r │ p and (~q or (p and r)) │ p or (q and r) │ (p or q) and (p or r) │
├───┼───┼───┼─────────────────────────┼────────────────┼───────────────────────┤
│ F │ F │ F │            F            │       F        │           F           │
│ F │ F │ T │            F            │       F        │           F           │
│ F │ T │ F │            F            │       F        │           F           │
│ F │ T │ T │            F            │       T        │           T           │
│ T │ F │ F │            T            │       T        │           T           │
│ T │ F │ T │            T            │       T        │           T           │
│ T │ T │ F │            F            │       T        │           T           │
│ T │ T │ T │            T            │       T        │           T           │
└───┴───┴───┴─────────────────────────┴────────────────┴───────────────────────┘";
	assert_eq!(table.render(false), expected);
}
