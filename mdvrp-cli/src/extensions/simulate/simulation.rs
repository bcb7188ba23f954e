#[cfg(test)]
#[path = "../../../tests/unit/extensions/simulate/simulation_test.rs"]
mod simulation_test;

use super::{DistributionConfig, NodeSettings, SimulationSettings};
use mdvrp_core::models::common::{Float, Point};
use mdvrp_core::models::problem::{Node, NodeId, NodeKind, Snapshot};
use mdvrp_core::utils::{Environment, GenericError, GenericResult};
use mdvrp_core::{Pipeline, TickSolution};
use rand::prelude::*;
use rand::rngs::SmallRng;
use rand_distr::Normal;
use std::sync::Arc;

/// Shop ids start from this offset to keep them apart from depot ids.
const SHOP_ID_OFFSET: usize = 1000;

struct Flow {
    supply: Normal<Float>,
    consumption: Normal<Float>,
}

impl Flow {
    fn new(settings: &NodeSettings) -> GenericResult<Self> {
        let create = |distribution: &DistributionConfig| {
            Normal::new(distribution.mean, distribution.std_dev)
                .map_err(|err| GenericError::from(format!("cannot create distribution: '{err}'")))
        };

        Ok(Self { supply: create(&settings.supply)?, consumption: create(&settings.consumption)? })
    }
}

struct NodeState {
    id: NodeId,
    kind: NodeKind,
    location: Point,
    stock: Float,
}

/// Keeps node states between ticks and produces a fresh snapshot on every step.
pub struct Simulation {
    nodes: Vec<NodeState>,
    depot_flow: Flow,
    shop_flow: Flow,
    rng: SmallRng,
    tick: usize,
}

impl Simulation {
    /// Creates a new simulation placing nodes randomly within the area.
    pub fn new(settings: &SimulationSettings) -> GenericResult<Self> {
        let mut rng = settings.seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);
        let (width, height) = (settings.width, settings.height);

        let mut create_node = |id: usize, kind: NodeKind, stock: Float| NodeState {
            id: id.to_string(),
            kind,
            location: Point::new(rng.gen_range(0..width) as Float, rng.gen_range(0..height) as Float),
            stock,
        };

        let mut nodes = Vec::with_capacity(settings.depots + settings.shops);
        nodes.extend((0..settings.depots).map(|idx| create_node(idx, NodeKind::Depot, settings.depot.initial_stock)));
        nodes.extend(
            (0..settings.shops)
                .map(|idx| create_node(SHOP_ID_OFFSET + idx, NodeKind::Shop, settings.shop.initial_stock)),
        );

        Ok(Self {
            nodes,
            depot_flow: Flow::new(&settings.depot)?,
            shop_flow: Flow::new(&settings.shop)?,
            rng,
            tick: 0,
        })
    }

    /// Returns amount of steps done.
    pub fn tick(&self) -> usize {
        self.tick
    }

    /// Advances simulation by one tick: every node receives and dispatches products, net
    /// consumption becomes its tick demand.
    pub fn step(&mut self) -> GenericResult<Snapshot> {
        let nodes = self
            .nodes
            .iter_mut()
            .map(|state| {
                let flow = match state.kind {
                    NodeKind::Depot => &self.depot_flow,
                    NodeKind::Shop => &self.shop_flow,
                };

                let supply = flow.supply.sample(&mut self.rng).round();
                let consumption = flow.consumption.sample(&mut self.rng).round();
                state.stock += supply - consumption;

                Node::new(state.id.clone(), state.kind, state.location.clone(), state.stock, consumption - supply)
            })
            .collect();

        self.tick += 1;

        Snapshot::new(nodes).map_err(GenericError::from)
    }
}

/// Runs simulation for configured amount of ticks routing every snapshot. The callback receives
/// each tick result. Returns aggregated stock series indexed by tick.
pub fn run_simulation<F>(
    settings: &SimulationSettings,
    environment: Arc<Environment>,
    mut on_tick: F,
) -> GenericResult<Vec<(usize, Float)>>
where
    F: FnMut(usize, &Snapshot, &TickSolution) -> GenericResult<()>,
{
    let logger = environment.logger.clone();
    let pipeline = Pipeline::new(environment);
    let mut simulation = Simulation::new(settings)?;

    (0..settings.ticks).try_fold(Vec::with_capacity(settings.ticks), |mut series, _| {
        let snapshot = simulation.step()?;
        let tick = simulation.tick();

        let solution = pipeline.run(&snapshot).map_err(|err| GenericError::from(format!("tick {tick}: {err}")))?;
        let stock = snapshot.total_stock();
        let distance = solution
            .total_distance(&snapshot)
            .ok_or_else(|| GenericError::from(format!("tick {tick}: cannot measure tours distance")))?;

        (logger)(
            format!(
                "tick {tick}: total stock {stock}, {} legs, distance {:.2}",
                solution.legs.len(),
                distance
            )
            .as_str(),
        );

        on_tick(tick, &snapshot, &solution)?;
        series.push((tick, stock));

        Ok(series)
    })
}
