//! A command line interface to the multi-depot tick router.
//!

mod commands;

use clap::Command;
use commands::create_write_buffer;
use commands::simulate::{get_simulate_app, run_simulate};
use commands::solve::{get_solve_app, run_solve};
use std::process;

fn main() {
    let matches = Command::new("Multi-Depot Tick Router")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to route shops from depots once per simulation tick")
        .subcommand(get_solve_app())
        .subcommand(get_simulate_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        Some(("simulate", simulate_matches)) => run_simulate(simulate_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
