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
#![forbid(unsafe_code)]

use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use truthtable::{Classification, TruthTable};

/// Print the truth table of one or more propositional formulas.
///
/// Connectives: `~`, `and`, `or`, `xor`, `->`, `<->`; constants `T` and `F`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
	/// Formulas, one column each. Quote formulas that contain spaces.
	#[arg(required = true)]
	formulas: Vec<String>,

	/// Show values as 1/0 instead of T/F.
	#[arg(short, long)]
	binary: bool,

	/// Emit a LaTeX tabular instead of a boxed table.
	#[arg(long)]
	latex: bool,

	/// Add a column for every compound sub-formula.
	#[arg(long)]
	steps: bool,

	/// Report whether each formula is a tautology, a contradiction or contingent.
	#[arg(long)]
	classify: bool,

	/// Log more; repeat for more detail.
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn level(verbose: u8) -> LevelFilter {
	match verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = Cli::parse();

	TermLogger::init(
		level(args.verbose),
		Config::default(),
		TerminalMode::Stderr,
		ColorChoice::Auto,
	)?;

	let mut table = TruthTable::new(&args.formulas)?;
	info!(
		"{} formulas over {} variables",
		table.propositions().len(),
		table.variables().len()
	);

	if args.classify {
		for (index, proposition) in table.propositions().iter().enumerate() {
			let verdict = match table.classify(index)? {
				Classification::Tautology => "tautology",
				Classification::Contradiction => "contradiction",
				Classification::Contingent => "contingent",
			};
			println!("{proposition}: {verdict}");
		}
	}

	if args.steps {
		table = table.with_steps()?;
	}

	if args.latex {
		println!("{}", table.render_latex(args.binary));
	} else {
		println!("{}", table.render(args.binary));
	}

	Ok(())
}
