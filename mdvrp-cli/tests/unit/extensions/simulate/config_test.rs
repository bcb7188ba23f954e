use super::*;
use std::fs::File;

fn read_config_from_str(content: &str) -> GenericResult<Config> {
    read_config(BufReader::new(content.as_bytes()))
}

#[test]
fn can_read_full_config() {
    let file = File::open("../data/config.json").expect("cannot read config from file");

    let config = read_config(BufReader::new(file)).unwrap();

    let simulation = config.simulation.clone().expect("no simulation config");
    assert_eq!(simulation.depots, Some(3));
    assert_eq!(simulation.shops, Some(10));
    assert_eq!(simulation.ticks, Some(20));
    assert_eq!(simulation.seed, Some(42));
    let depot = config.depot.clone().expect("no depot config");
    assert_eq!(depot.initial_stock, Some(100.));
    assert_eq!(depot.consumption, Some(DistributionConfig { mean: 20., std_dev: 5. }));
    assert!(config.telemetry.clone().and_then(|telemetry| telemetry.logging).is_some_and(|logging| logging.enabled));

    let settings = SimulationSettings::try_from(&config).unwrap();
    assert_eq!(settings.ticks, 20);
    assert_eq!(settings.seed, Some(42));
    assert!(settings.is_logging);
}

#[test]
fn can_apply_defaults_for_empty_config() {
    let config = read_config_from_str("{}").unwrap();

    let settings = SimulationSettings::try_from(&config).unwrap();

    assert_eq!(settings, SimulationSettings::default());
    assert_eq!(settings.depots, 3);
    assert_eq!(settings.shops, 10);
    assert_eq!(settings.depot.initial_stock, 100.);
    assert_eq!(settings.shop.supply, DistributionConfig { mean: 5., std_dev: 2. });
    assert!(!settings.is_logging);
}

#[test]
fn can_override_partially() {
    let config =
        read_config_from_str(r#"{ "simulation": { "shops": 40 }, "shop": { "consumption": { "mean": 8, "stdDev": 1.5 } } }"#)
            .unwrap();

    let settings = SimulationSettings::try_from(&config).unwrap();

    assert_eq!(settings.shops, 40);
    assert_eq!(settings.depots, 3);
    assert_eq!(settings.shop.consumption, DistributionConfig { mean: 8., std_dev: 1.5 });
    assert_eq!(settings.shop.supply, DistributionConfig { mean: 5., std_dev: 2. });
    assert_eq!(settings.shop.initial_stock, 5.);
}

#[test]
fn can_reject_invalid_json() {
    let result = read_config_from_str(r#"{ "simulation": { "shops": -1 } }"#);

    assert!(result.is_err_and(|err| err.to_string().starts_with("cannot deserialize config")));
}

parameterized_test! {can_reject_invalid_settings, (content, expected), {
    let config = read_config_from_str(content).unwrap();

    let result = SimulationSettings::try_from(&config);

    assert_eq!(result.err(), Some(GenericError::from(expected)));
}}

can_reject_invalid_settings! {
    case00_no_depots: (r#"{ "simulation": { "depots": 0 } }"#, "simulation must have at least one depot"),
    case01_zero_width: (r#"{ "simulation": { "width": 0 } }"#, "area must have positive size, got 0x250"),
    case02_negative_deviation: (
        r#"{ "depot": { "supply": { "mean": 1, "stdDev": -1 } } }"#,
        "depot supply distribution must have finite mean and non-negative deviation"
    ),
}
