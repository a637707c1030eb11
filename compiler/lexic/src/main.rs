//! Lexi command-line interface.
//!
//! `lexi` with no arguments starts the interactive shell; `lexi FILE` runs
//! a source file once.

use lexic::commands::run_file;
use lexic::repl::Shell;

fn main() {
    lexic::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let mut debug = false;
    let mut path = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" | "help" => {
                print_usage();
                return;
            }
            "-V" | "--version" | "version" => {
                println!("lexi {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-d" | "--debug" => debug = true,
            flag if flag.starts_with('-') => {
                eprintln!("error: unknown option '{flag}'");
                eprintln!("Run 'lexi --help' for usage.");
                std::process::exit(1);
            }
            file if path.is_none() => path = Some(file),
            extra => {
                eprintln!("error: unexpected argument '{extra}'");
                std::process::exit(1);
            }
        }
    }

    match path {
        Some(path) => run_file(path, debug),
        None => Shell::default().start(),
    }
}

fn print_usage() {
    println!("Lexi, an English-like scripting language");
    println!();
    println!("Usage: lexi [options] [file.lexi]");
    println!();
    println!("With no file, starts the interactive shell.");
    println!();
    println!("Options:");
    println!("  -d, --debug      Echo each line as it runs; show source context on errors");
    println!("  -h, --help       Show this help message");
    println!("  -V, --version    Show version information");
    println!();
    println!("Environment:");
    println!("  LEXI_LOG         Tracing filter, e.g. 'lexi_eval=debug' (falls back to RUST_LOG)");
    println!("  LEXI_LOG_TREE=1  Print spans as an indented tree");
}
