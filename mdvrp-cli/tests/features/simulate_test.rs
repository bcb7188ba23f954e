use crate::extensions::formats::{TickLegsWriter, write_stock_series};
use crate::extensions::simulate::{SimulationSettings, read_config, run_simulation};
use crate::helpers::create_silent_environment;
use std::fs::File;
use std::io::BufReader;

#[test]
fn can_run_simulation_from_config_and_write_tables() {
    let config = read_config(BufReader::new(File::open("../data/config.json").unwrap())).unwrap();
    let settings = SimulationSettings { ticks: 3, ..SimulationSettings::try_from(&config).unwrap() };

    let mut buffer = Vec::new();
    let mut writer = TickLegsWriter::new(&mut buffer);
    let series = run_simulation(&settings, create_silent_environment(), |tick, _, solution| {
        writer.write(tick, solution.legs.as_slice())
    })
    .unwrap();
    writer.flush().unwrap();
    drop(writer);

    let content = String::from_utf8(buffer).unwrap();
    let rows = content.lines().skip(1).map(|line| line.split(',').collect::<Vec<_>>()).collect::<Vec<_>>();
    assert_eq!(content.lines().next(), Some("TICK,ROUTE_ID,LEG_ID,ORIGIN_ID,DEST_ID,QUANTITY"));
    assert_eq!(series.len(), 3);
    (1..=3).for_each(|tick| {
        let tick = tick.to_string();
        let tick_rows = rows.iter().filter(|row| row[0] == tick).collect::<Vec<_>>();
        let routes = tick_rows.iter().map(|row| row[1]).collect::<std::collections::HashSet<_>>();

        // every depot has a route and every shop is visited once per tick
        assert_eq!(routes.len(), 3);
        assert_eq!(tick_rows.len(), 10 + 3);
    });

    let mut stock = Vec::new();
    write_stock_series(&mut stock, series.as_slice()).unwrap();
    assert_eq!(String::from_utf8(stock).unwrap().lines().count(), 4);
}
