//! Vim Parity Report CLI (parity-report) - Main binary entry point

use parity_report::cli::args::{CliArgs, OutputMode, parse_args};
use parity_report::cli::output::{
    NO_FAILURES, format_aggregate, format_details, format_json, format_summary,
};
use parity_report::services::filter::{filter_by_feature, filter_by_keywords, sort_failures};
use std::process;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug parity-report report.json
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        process::exit(2);
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            print_version();
            return;
        }
        _ => {}
    }

    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    process::exit(run(&cli_args));
}

fn run(args: &CliArgs) -> i32 {
    let failures = match parity_report::load_failures(&args.report) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{e}");
            return e.exit_code();
        }
    };

    if failures.is_empty() {
        println!("{NO_FAILURES}");
        return 0;
    }

    let mut filtered = filter_by_keywords(failures, &args.keywords);
    filtered = filter_by_feature(filtered, args.feature.as_deref());
    if let Some(sort_by) = args.sort {
        filtered = sort_failures(filtered, sort_by);
    }

    match args.mode {
        OutputMode::Details => print!("{}", format_details(&filtered)),
        OutputMode::Json => println!("{}", format_json(&filtered)),
        OutputMode::Summary => {
            print!("{}", format_summary(&filtered, args.limit));
            print!("{}", format_aggregate(&filtered));
        }
    }

    0
}

fn print_help() {
    println!("Vim Parity Report CLI (parity-report) - Summarize failed parity test cases");
    println!();
    println!("USAGE:");
    println!("    parity-report <REPORT> [KEYWORD...] [OPTIONS]");
    println!();
    println!("ARGUMENTS:");
    println!("    <REPORT>                  Path to JSON report (Vitest --reporter=json)");
    println!("    [KEYWORD...]              Substring(s) to filter test names (case-insensitive)");
    println!();
    println!("OPTIONS:");
    println!("    --feature <TAG>           Filter by inferred feature bucket (e.g., paste-after-op)");
    println!("    --limit <N>               Failures shown in summary (default: 10)");
    println!("    --sort <FIELD>            Sort failures by name|feature|line");
    println!("    --details                 Show full failure details instead of summary");
    println!("    --json                    Emit machine-readable output");
    println!("    -h, --help                Show this help message");
    println!("    -v, --version             Show version information");
    println!();
    println!("FEATURES:");
    println!("    dot-repeat, insert-exit, paste-after-op, paste, yank, delete,");
    println!("    change, find, motion-word, undo-redo, other");
    println!();
    println!("EXAMPLES:");
    println!("    parity-report report.json");
    println!("    parity-report report.json paste delete --details");
    println!("    parity-report report.json --feature yank --sort line --limit 20");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("parity-report {VERSION}");
    println!("Commit: {GIT_HASH} ({GIT_DATE})");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
