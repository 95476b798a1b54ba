//! Lispy CLI.

use std::process::ExitCode;

use lispy::commands::{eval_expr, parse_expr, repl, run_file};
use lispy::ReplConfig;

fn main() -> ExitCode {
    lispy::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        return repl(ReplConfig::default());
    };

    match command.as_str() {
        "repl" => {
            let mut config = ReplConfig::default();
            if let Err(flag) = config.apply_flags(args[2..].iter().map(String::as_str)) {
                eprintln!("error: unknown option '{flag}'");
                eprintln!("Usage: lispy repl [--ast] [--quiet]");
                return ExitCode::FAILURE;
            }
            repl(config)
        }
        "eval" => {
            let mut expr = None;
            let mut show_ast = false;
            for arg in &args[2..] {
                if arg == "--ast" {
                    show_ast = true;
                } else if expr.is_none() {
                    expr = Some(arg.as_str());
                }
            }
            let Some(expr) = expr else {
                eprintln!("Usage: lispy eval <expr> [--ast]");
                eprintln!("Example: lispy eval \"(+ 1 (* 2 3))\"");
                return ExitCode::FAILURE;
            };
            eval_expr(expr, show_ast)
        }
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: lispy run <file>");
                return ExitCode::FAILURE;
            };
            run_file(path)
        }
        "parse" => {
            let Some(expr) = args.get(2) else {
                eprintln!("Usage: lispy parse <expr>");
                return ExitCode::FAILURE;
            };
            parse_expr(expr)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("lispy {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Lispy - S-expression calculator");
    println!();
    println!("Usage: lispy [command] [options]");
    println!();
    println!("Commands:");
    println!("  repl [--ast] [-q]   Interactive loop (default when no command is given)");
    println!("  eval <expr> [--ast] Evaluate one expression and print the result");
    println!("  run <file>          Evaluate each non-blank line of a file");
    println!("  parse <expr>        Print the syntax tree of an expression");
    println!("  help                Show this message");
    println!("  version             Show the version");
    println!();
    println!("Environment:");
    println!("  LISPY_LOG           Log filter, e.g. lispy_eval=trace (falls back to RUST_LOG)");
    println!("  LISPY_LOG_TREE      Draw log spans as an indented tree");
}
