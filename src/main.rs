//! docinv - documentation inventory for a collection of repositories

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = doc_inventory::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
