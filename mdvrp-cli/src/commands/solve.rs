#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use mdvrp_cli::core::Pipeline;
use mdvrp_cli::core::models::problem::create_cost_table;
use mdvrp_cli::extensions::formats::*;
use std::io::BufReader;

const SNAPSHOT_ARG_NAME: &str = "SNAPSHOT";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_FORMAT_ARG_NAME: &str = "out-format";
const OUT_ASSIGNMENT_ARG_NAME: &str = "out-assignment";
const OUT_COSTS_ARG_NAME: &str = "out-costs";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Routes a single tick snapshot and writes the leg table")
        .arg(Arg::new(SNAPSHOT_ARG_NAME).help("Sets the snapshot csv file to use").required(true).index(1))
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for leg table output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_FORMAT_ARG_NAME)
                .help("Specifies leg table format")
                .long(OUT_FORMAT_ARG_NAME)
                .value_parser(["csv", "json"])
                .default_value("csv"),
        )
        .arg(
            Arg::new(OUT_ASSIGNMENT_ARG_NAME)
                .help("Specifies path to file for depot assignment output")
                .long(OUT_ASSIGNMENT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_COSTS_ARG_NAME)
                .help("Specifies path to file for pairwise cost table output")
                .long(OUT_COSTS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether routing information is logged to stderr")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let snapshot_path = matches.get_one::<String>(SNAPSHOT_ARG_NAME).ok_or("snapshot path is not specified")?;
    let out_format = matches
        .get_one::<String>(OUT_FORMAT_ARG_NAME)
        .map(|format| format.parse::<OutputFormat>())
        .unwrap_or(Ok(OutputFormat::Csv))?;

    let snapshot = read_csv_snapshot(BufReader::new(open_file(snapshot_path, "snapshot")?))
        .map_err(|err| format!("cannot read snapshot: {err}"))?;

    let environment = create_environment(matches.get_flag(LOG_ARG_NAME));
    let solution = Pipeline::new(environment).run(&snapshot).map_err(|err| format!("cannot route snapshot: {err}"))?;

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    write_legs(out_writer_func(out_result), solution.legs.as_slice(), out_format).map_err(|err| err.to_string())?;

    if let Some(path) = matches.get_one::<String>(OUT_ASSIGNMENT_ARG_NAME) {
        let writer = BufWriter::new(create_file(path, "out assignment")?);
        write_assignment(writer, &solution.assignment, &snapshot).map_err(|err| err.to_string())?;
    }

    if let Some(path) = matches.get_one::<String>(OUT_COSTS_ARG_NAME) {
        let writer = BufWriter::new(create_file(path, "out costs")?);
        write_costs(writer, create_cost_table(&snapshot).as_slice()).map_err(|err| err.to_string())?;
    }

    Ok(())
}
