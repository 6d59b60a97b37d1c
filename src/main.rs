use std::fs;

use clap::Parser;
use minic::{
    evaluate_with,
    interpreter::{
        evaluator::core::{DEFAULT_ENTRY, DEFAULT_MAX_CALL_DEPTH, EvalOptions},
        value::core::Value,
    },
    parse,
};

/// minic runs programs written in a small, statically typed, C-like language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minic to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the program back in canonical form instead of running it.
    #[arg(short, long)]
    parse: bool,

    /// The function to run.
    #[arg(short, long, default_value = DEFAULT_ENTRY)]
    entry: String,

    /// Calls nested deeper than this abort the program.
    #[arg(long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    contents: String,
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, if the variable is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if source.trim().is_empty() {
        if args.parse {
            println!("Nothing to parse!");
        } else {
            println!("Nothing to evaluate!");
        }
        return;
    }

    if args.parse {
        match parse(&source) {
            Ok(printed) => print!("{printed}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let options = EvalOptions { entry:          args.entry,
                                max_call_depth: args.max_call_depth,
                                echo_console:   true, };

    match evaluate_with(&source, &options) {
        Ok(result) => {
            if result.value != Value::Void {
                println!("{}", result.value);
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
