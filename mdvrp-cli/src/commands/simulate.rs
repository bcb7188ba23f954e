#[cfg(test)]
#[path = "../../tests/unit/commands/simulate_test.rs"]
mod simulate_test;

use super::*;
use clap::{Arg, Command};
use mdvrp_cli::extensions::formats::{TickLegsWriter, write_stock_series};
use mdvrp_cli::extensions::simulate::{Config, SimulationSettings, read_config, run_simulation};
use std::io::BufReader;

const CONFIG_ARG_NAME: &str = "config";
const TICKS_ARG_NAME: &str = "ticks";
const SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_STOCK_ARG_NAME: &str = "out-stock";

pub fn get_simulate_app() -> Command {
    Command::new("simulate")
        .about("Runs a tick simulation which routes generated snapshots")
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to simulation configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TICKS_ARG_NAME)
                .help("Specifies amount of ticks to run, overrides configuration")
                .short('t')
                .long(TICKS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random seed, overrides configuration")
                .short('s')
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for leg tables output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_STOCK_ARG_NAME)
                .help("Specifies path to file for aggregated stock series output")
                .long(OUT_STOCK_ARG_NAME)
                .required(false),
        )
}

pub fn run_simulate(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| -> Result<Config, String> {
            let file = open_file(path, "config")?;
            read_config(BufReader::new(file)).map_err(|err| err.to_string())
        })
        .transpose()?
        .unwrap_or_default();

    let settings = get_settings(matches, &config)?;
    let environment = create_environment(settings.is_logging);

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let mut legs_writer = TickLegsWriter::new(out_writer_func(out_result));

    let series = run_simulation(&settings, environment, |tick, _, solution| legs_writer.write(tick, &solution.legs))
        .map_err(|err| format!("simulation failed: {err}"))?;
    legs_writer.flush().map_err(|err| err.to_string())?;

    if let Some(path) = matches.get_one::<String>(OUT_STOCK_ARG_NAME) {
        let writer = BufWriter::new(create_file(path, "out stock")?);
        write_stock_series(writer, series.as_slice()).map_err(|err| err.to_string())?;
    }

    Ok(())
}

fn get_settings(matches: &ArgMatches, config: &Config) -> Result<SimulationSettings, String> {
    let mut settings = SimulationSettings::try_from(config).map_err(|err| format!("invalid config: {err}"))?;

    if let Some(ticks) = parse_int_value::<usize>(matches, TICKS_ARG_NAME, "ticks")? {
        settings.ticks = ticks;
    }

    if let Some(seed) = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")? {
        settings.seed = Some(seed);
    }

    Ok(settings)
}
