#[path = "../../../mdvrp-core/tests/helpers/macros.rs"]
#[macro_use]
pub mod macros;

use mdvrp_core::models::problem::Snapshot;
use mdvrp_core::utils::Environment;
use std::io::BufReader;
use std::sync::Arc;

pub const SCENARIO_SNAPSHOT: &str = "ID,TYPE,X,Y,STOCK,DEMAND
d0,depot,0,0,100,0
s1,shop,10,0,5,4
s2,shop,0,10,5,6
";

pub fn create_scenario_snapshot() -> Snapshot {
    crate::extensions::formats::read_csv_snapshot(BufReader::new(SCENARIO_SNAPSHOT.as_bytes()))
        .expect("cannot read snapshot")
}

pub fn create_silent_environment() -> Arc<Environment> {
    Arc::new(Environment::silent())
}

pub fn write_to_string<F>(write_fn: F) -> String
where
    F: FnOnce(&mut Vec<u8>),
{
    let mut buffer = Vec::new();
    write_fn(&mut buffer);

    String::from_utf8(buffer).expect("cannot convert to string")
}
