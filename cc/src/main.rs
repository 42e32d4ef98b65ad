//! A thin CLI over `cc_grammar` (spec.md section 6, "cc"): read one file,
//! then either parse it and print the resulting AST as an s-expression or,
//! with `--tokens`, dump the raw token stream. Structured the way
//! `alapgen`'s CLI is structured: a `structopt` options struct and explicit
//! stderr/exit-code handling with no panics on user-facing errors.

use std::{fs, io::prelude::*, path::PathBuf};

use clap::crate_authors;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "cc",
    about = "K&R C parser: reads a translation unit and prints its parse tree",
    author = crate_authors!(),
)]
struct CLOptions {
    /// Write the output to this file instead of stdout.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
    /// Dump the token stream instead of parsing.
    #[structopt(long)]
    tokens: bool,
    /// The path of the C source file to read.
    #[structopt(parse(from_os_str))]
    source: PathBuf,
}

fn read_source(path: &PathBuf) -> String {
    let mut file = match fs::File::open(path) {
        Ok(file) => file,
        Err(error) => {
            writeln!(
                std::io::stderr(),
                "{}: error opening file: {}",
                path.to_string_lossy(),
                error
            )
            .unwrap();
            std::process::exit(1);
        }
    };
    let mut text = String::new();
    if let Err(error) = file.read_to_string(&mut text) {
        writeln!(
            std::io::stderr(),
            "{}: error reading file: {}",
            path.to_string_lossy(),
            error
        )
        .unwrap();
        std::process::exit(1);
    }
    text
}

fn emit(output: &Option<PathBuf>, text: &str) {
    match output {
        Some(path) => {
            if let Err(error) = fs::write(path, text.as_bytes()) {
                writeln!(
                    std::io::stderr(),
                    "{}: error writing file: {}",
                    path.to_string_lossy(),
                    error
                )
                .unwrap();
                std::process::exit(3);
            }
        }
        None => println!("{}", text),
    }
}

fn main() {
    let cl_options = CLOptions::from_args();
    let text = read_source(&cl_options.source);
    let label = cl_options.source.to_string_lossy().to_string();

    if cl_options.tokens {
        let (tokens, error) = cc_grammar::tokenize(text, label);
        let dump: Vec<String> = tokens
            .iter()
            .map(|token| format!("{} {:?} {}", token.tag(), token.lexeme(), token.location()))
            .collect();
        emit(&cl_options.output, &dump.join("\n"));
        if let Some(error) = error {
            writeln!(std::io::stderr(), "{}", error).unwrap();
            std::process::exit(2);
        }
        return;
    }

    let ast = match cc_grammar::parse(text, label) {
        Ok(ast) => ast,
        Err(error) => {
            writeln!(std::io::stderr(), "{}", error).unwrap();
            std::process::exit(2);
        }
    };
    emit(&cl_options.output, &ast.to_sexpr());
}
