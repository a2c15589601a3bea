use std::{env, fs::read_to_string, process};

use minipar::errors::errors::ConsoleReporter;
use minipar::lexer::lexer::tokenize;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        println!("Usage: minipar <program>");
        process::exit(1);
    } else if args.len() == 2 {
        run_file(&args[1]);
    }

    // TODO: add run_prompt() for interactive use
}

fn run_file(path: &str) {
    let source = read_to_string(path).expect("Failed to read file!");

    let mut reporter = ConsoleReporter::new();
    let tokens = tokenize(source, &mut reporter);

    for token in &tokens {
        println!("{}", token);
    }

    if reporter.had_error() {
        process::exit(65);
    }
}
