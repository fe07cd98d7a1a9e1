use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rpntab::{
    compile,
    interpreter::{
        lexer::{format_tokens, tokenize},
        tabulator::{Domain, Table, tabulate_rpn},
    },
};

/// rpntab tabulates a mathematical expression in `x` over an evenly spaced
/// range of values.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression, for example `2*sin(x) + x^2`.
    #[arg(allow_hyphen_values = true)]
    expression: String,

    /// Left end of the range.
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    from: String,

    /// Right end of the range, included in the samples.
    #[arg(short, long, default_value = "10", allow_hyphen_values = true)]
    to: String,

    /// Number of sample points.
    #[arg(short = 'n', long, default_value = "10", allow_hyphen_values = true)]
    samples: String,

    /// How the samples are printed.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Print the compiled postfix form instead of tabulating.
    #[arg(long)]
    rpn: bool,

    /// Write the token stream and postfix form to stderr.
    #[arg(long)]
    trace: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// Two aligned columns.
    Table,
    /// Comma-separated values with an `x,y` header.
    Csv,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.trace {
        let tokens = tokenize(&args.expression)?;
        eprintln!("tokens: {}", format_tokens(&tokens));
    }

    // The range is checked before the expression is compiled, as `tabulate`
    // does. `--rpn` prints without tabulating, so it skips the range.
    let domain = if args.rpn {
        None
    } else {
        Some(Domain::parse(&args.from, &args.to, &args.samples)?)
    };

    let rpn = compile(&args.expression)?;
    if args.trace {
        eprintln!("rpn: {rpn}");
    }
    let Some(domain) = domain else {
        println!("{rpn}");
        return Ok(());
    };

    let table = tabulate_rpn(&rpn, &domain)?;
    print_table(&table, args.format);
    Ok(())
}

fn print_table(table: &Table, format: Format) {
    match format {
        Format::Table => {
            println!("{:>24} {:>24}", "x", "y");
            for (x, y) in table.iter() {
                println!("{x:>24} {y:>24}");
            }
        },
        Format::Csv => {
            println!("x,y");
            for (x, y) in table.iter() {
                println!("{x},{y}");
            }
        },
    }
}
