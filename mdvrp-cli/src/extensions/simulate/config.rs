//! Simulation configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/simulate/config_test.rs"]
mod config_test;

use mdvrp_core::models::common::Float;
use mdvrp_core::utils::{GenericError, GenericResult};
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A simulation configuration.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct Config {
    /// Specifies simulation size and duration.
    pub simulation: Option<SimulationConfig>,
    /// Specifies depot behavior.
    pub depot: Option<NodeConfig>,
    /// Specifies shop behavior.
    pub shop: Option<NodeConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// Specifies simulation size and duration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    /// Amount of depots. Default is 3.
    pub depots: Option<usize>,
    /// Amount of shops. Default is 10.
    pub shops: Option<usize>,
    /// Area width. Default is 250.
    pub width: Option<usize>,
    /// Area height. Default is 250.
    pub height: Option<usize>,
    /// Amount of ticks to run. Default is 10.
    pub ticks: Option<usize>,
    /// A random seed. When omitted, simulation is not reproducible.
    pub seed: Option<u64>,
}

/// Specifies behavior of one node kind.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NodeConfig {
    /// Initial stock.
    pub initial_stock: Option<Float>,
    /// Amount of products received per tick.
    pub supply: Option<DistributionConfig>,
    /// Amount of products dispatched per tick.
    pub consumption: Option<DistributionConfig>,
}

/// A normal distribution.
#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DistributionConfig {
    /// Mean value.
    pub mean: Float,
    /// Standard deviation.
    pub std_dev: Float,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
}

/// Reads simulation configuration from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| GenericError::from(format!("cannot deserialize config: '{err}'")))
}

/// Fully resolved behavior of one node kind.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSettings {
    /// Initial stock.
    pub initial_stock: Float,
    /// Amount of products received per tick.
    pub supply: DistributionConfig,
    /// Amount of products dispatched per tick.
    pub consumption: DistributionConfig,
}

/// Fully resolved simulation settings with defaults applied.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationSettings {
    /// Amount of depots.
    pub depots: usize,
    /// Amount of shops.
    pub shops: usize,
    /// Area width.
    pub width: usize,
    /// Area height.
    pub height: usize,
    /// Amount of ticks to run.
    pub ticks: usize,
    /// A random seed.
    pub seed: Option<u64>,
    /// Depot behavior.
    pub depot: NodeSettings,
    /// Shop behavior.
    pub shop: NodeSettings,
    /// Whether logging is enabled.
    pub is_logging: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            depots: 3,
            shops: 10,
            width: 250,
            height: 250,
            ticks: 10,
            seed: None,
            depot: NodeSettings {
                initial_stock: 100.,
                supply: DistributionConfig { mean: 10., std_dev: 5. },
                consumption: DistributionConfig { mean: 20., std_dev: 5. },
            },
            shop: NodeSettings {
                initial_stock: 5.,
                supply: DistributionConfig { mean: 5., std_dev: 2. },
                consumption: DistributionConfig { mean: 5., std_dev: 2. },
            },
            is_logging: false,
        }
    }
}

impl TryFrom<&Config> for SimulationSettings {
    type Error = GenericError;

    fn try_from(config: &Config) -> Result<Self, Self::Error> {
        let defaults = Self::default();
        let simulation = config.simulation.clone().unwrap_or_default();

        let settings = Self {
            depots: simulation.depots.unwrap_or(defaults.depots),
            shops: simulation.shops.unwrap_or(defaults.shops),
            width: simulation.width.unwrap_or(defaults.width),
            height: simulation.height.unwrap_or(defaults.height),
            ticks: simulation.ticks.unwrap_or(defaults.ticks),
            seed: simulation.seed,
            depot: resolve_node_settings(config.depot.as_ref(), defaults.depot),
            shop: resolve_node_settings(config.shop.as_ref(), defaults.shop),
            is_logging: config
                .telemetry
                .as_ref()
                .and_then(|telemetry| telemetry.logging.as_ref())
                .is_some_and(|logging| logging.enabled),
        };

        settings.validate()?;

        Ok(settings)
    }
}

impl SimulationSettings {
    fn validate(&self) -> GenericResult<()> {
        if self.depots == 0 {
            return Err("simulation must have at least one depot".into());
        }

        if self.width == 0 || self.height == 0 {
            return Err(format!("area must have positive size, got {}x{}", self.width, self.height).into());
        }

        [("depot", &self.depot), ("shop", &self.shop)].iter().try_for_each(|(name, settings)| {
            if !settings.initial_stock.is_finite() {
                return Err(GenericError::from(format!("{name} initial stock must be finite")));
            }

            [("supply", &settings.supply), ("consumption", &settings.consumption)].iter().try_for_each(
                |(kind, distribution)| {
                    if distribution.mean.is_finite() && distribution.std_dev.is_finite() && distribution.std_dev >= 0. {
                        Ok(())
                    } else {
                        Err(GenericError::from(format!(
                            "{name} {kind} distribution must have finite mean and non-negative deviation"
                        )))
                    }
                },
            )
        })
    }
}

fn resolve_node_settings(config: Option<&NodeConfig>, defaults: NodeSettings) -> NodeSettings {
    match config {
        Some(config) => NodeSettings {
            initial_stock: config.initial_stock.unwrap_or(defaults.initial_stock),
            supply: config.supply.clone().unwrap_or(defaults.supply),
            consumption: config.consumption.clone().unwrap_or(defaults.consumption),
        },
        None => defaults,
    }
}
