//! Threshold Logic Identification - Command Line Interface
//!
//! Reads truth tables given as hex or binary strings (or a single-output PLA
//! file) and reports a linear form for each threshold function.

use clap::{Parser, ValueEnum};
use threshold_logic::identify::unate;
use threshold_logic::{
    identify_with, isop, Cover, ConstraintSystem, MicroLpSolver, Objective, PLAReader, PLAWriter,
    ThresholdConfig, TruthTable,
};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ObjectiveArg {
    /// Minimize the sum of weights and threshold (default)
    Sum,
    /// Accept any valid linear form
    Feasible,
}

impl From<ObjectiveArg> for Objective {
    fn from(val: ObjectiveArg) -> Self {
        match val {
            ObjectiveArg::Sum => Objective::MinimizeSum,
            ObjectiveArg::Feasible => Objective::Feasibility,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "threshold")]
#[command(about = "Threshold logic function identification", long_about = None)]
#[command(version)]
struct Args {
    /// Truth tables, most significant bit first
    #[arg(value_name = "FUNCTIONS")]
    functions: Vec<String>,

    /// Read truth tables as binary instead of hexadecimal strings
    #[arg(short = 'b', long = "binary")]
    binary: bool,

    /// Number of variables (inferred from the string length if omitted)
    #[arg(short = 'n', long = "num-vars")]
    num_vars: Option<usize>,

    /// Read a single-output PLA file
    #[arg(long = "pla", value_name = "FILE")]
    pla: Option<PathBuf>,

    /// Objective for the linear program
    #[arg(long = "objective", value_enum, default_value = "sum")]
    objective: ObjectiveArg,

    /// Upper bound of every weight and of the threshold
    #[arg(long = "max-weight", value_name = "N", default_value_t = i32::MAX,
          value_parser = clap::value_parser!(i32).range(0..))]
    max_weight: i32,

    /// Skip checking the form against every assignment
    #[arg(long = "no-verify")]
    no_verify: bool,

    /// Print the normalized ON-set and OFF-set covers as a PLA
    #[arg(long = "covers")]
    covers: bool,

    /// Provide a per-stage summary on stderr
    #[arg(short = 's', long = "summary")]
    summary: bool,
}

fn main() {
    let _ = env_logger::builder().try_init();
    let args = Args::parse();

    let config = ThresholdConfig {
        objective: args.objective.into(),
        verify: !args.no_verify,
    };
    let solver = MicroLpSolver::new(args.max_weight);

    let mut tables = Vec::new();

    if let Some(path) = &args.pla {
        let cover = match Cover::from_pla_file(path) {
            Ok(cover) => cover,
            Err(e) => {
                eprintln!("Error reading PLA file '{}': {}", path.display(), e);
                process::exit(1);
            }
        };
        match cover.to_truth_table() {
            Ok(tt) => tables.push(tt),
            Err(e) => {
                eprintln!("Error in PLA file '{}': {}", path.display(), e);
                process::exit(1);
            }
        }
    }

    for function in &args.functions {
        match parse_function(function, args.binary, args.num_vars) {
            Ok(tt) => tables.push(tt),
            Err(e) => {
                eprintln!("Error parsing '{}': {}", function, e);
                process::exit(1);
            }
        }
    }

    if tables.is_empty() {
        eprintln!("No functions given; pass truth tables or --pla FILE");
        process::exit(1);
    }

    for tt in &tables {
        if args.summary || args.covers {
            report_stages(tt, args.summary, args.covers);
        }
        match identify_with(tt, &config, &solver) {
            Ok(form) => println!("{}: threshold {}", tt.to_hex(), form),
            Err(e) => println!("{}: not threshold ({})", tt.to_hex(), e),
        }
    }
}

fn parse_function(
    text: &str,
    binary: bool,
    num_vars: Option<usize>,
) -> Result<TruthTable, String> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    let num_vars = match num_vars {
        Some(n) => n,
        None if binary => infer_num_vars(digits.len())
            .ok_or_else(|| format!("length {} is not a power of two", digits.len()))?,
        // one hex digit holds up to two variables
        None => infer_num_vars(digits.len() * 4)
            .ok_or_else(|| format!("{} hex digits do not form a truth table", digits.len()))?,
    };

    let parsed = if binary {
        TruthTable::from_binary(num_vars, digits)
    } else {
        TruthTable::from_hex(num_vars, digits)
    };
    parsed.map_err(|e| e.to_string())
}

fn infer_num_vars(num_bits: usize) -> Option<usize> {
    if num_bits.is_power_of_two() {
        Some(num_bits.trailing_zeros() as usize)
    } else {
        None
    }
}

fn report_stages(tt: &TruthTable, summary: bool, covers: bool) {
    let polarity = match unate::classify(tt) {
        Ok(polarity) => polarity,
        Err(e) => {
            if summary {
                eprintln!("{}: {}", tt.to_hex(), e);
            }
            return;
        }
    };
    let normalized = polarity.normalize(tt);
    let onset = isop(&normalized);
    let offset = isop(&normalized.not());

    if summary {
        let system = ConstraintSystem::from_covers(tt.num_vars(), &onset, &offset);
        let flipped: Vec<String> = polarity.flipped().map(|v| format!("x{}", v)).collect();
        eprintln!("{}:", tt.to_hex());
        eprintln!("  variables:    {}", tt.num_vars());
        eprintln!("  flipped:      [{}]", flipped.join(", "));
        eprintln!("  ON cubes:     {}", onset.num_cubes());
        eprintln!("  OFF cubes:    {}", offset.num_cubes());
        eprintln!("  constraints:  {}", system.rows().len());
    }

    if covers {
        match Cover::from_sets(&onset, &offset).to_pla_string() {
            Ok(text) => print!("{}", text),
            Err(e) => eprintln!("Error writing covers: {}", e),
        }
    }
}
