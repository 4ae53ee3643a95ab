use std::io;

use clap::Parser;
use reckon::calculate;

/// reckon evaluates an arithmetic formula and prints the result.
///
/// On a parse failure the formula is echoed back with a caret pointing at the
/// offending character.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Formula to evaluate. When omitted, one line is read from standard
    /// input.
    #[arg(allow_negative_numbers = true)]
    formula: Option<String>,
}

fn main() {
    let args = Args::parse();

    let formula = args.formula.unwrap_or_else(|| {
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            eprintln!("Failed to read a formula from standard input.");
            std::process::exit(1);
        }
        line.trim_end_matches(['\r', '\n']).to_string()
    });

    match calculate(&formula) {
        Ok(result) => println!("{result}"),
        Err(error) => {
            // position + 1: the echoed line starts with a quote.
            eprintln!("Invalid input:");
            eprintln!("\"{formula}\"");
            eprintln!("{}^", " ".repeat(error.position() + 1));
            eprintln!("{error}");
            std::process::exit(1);
        },
    }
}
