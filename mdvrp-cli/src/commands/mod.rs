use clap::ArgMatches;

pub mod simulate;
pub mod solve;

use mdvrp_cli::core::utils::Environment;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::str::FromStr;
use std::sync::Arc;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

/// Creates environment with a logger which writes to stderr, so stdout can be used for tables.
fn create_environment(is_logging: bool) -> Arc<Environment> {
    Arc::new(if is_logging {
        Environment::new(Arc::new(|msg: &str| eprintln!("{msg}")))
    } else {
        Environment::silent()
    })
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}
