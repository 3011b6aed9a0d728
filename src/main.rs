//! student-service entry point
//!
//! Parses arguments and dispatches through `cli::run`. Any error is fatal:
//! it is printed to stderr and the process exits with status 1.

use student_service::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
