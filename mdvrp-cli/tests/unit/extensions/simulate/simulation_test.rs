use super::*;
use crate::helpers::create_silent_environment;

fn create_settings(seed: u64) -> SimulationSettings {
    SimulationSettings { seed: Some(seed), ticks: 5, ..SimulationSettings::default() }
}

#[test]
fn can_place_nodes_with_original_ids() {
    let mut simulation = Simulation::new(&create_settings(1)).unwrap();

    let snapshot = simulation.step().unwrap();

    assert_eq!(simulation.tick(), 1);
    assert_eq!(snapshot.depots().map(|node| node.id.as_str()).collect::<Vec<_>>(), vec!["0", "1", "2"]);
    assert_eq!(
        snapshot.shops().map(|node| node.id.clone()).collect::<Vec<_>>(),
        (1000..1010).map(|id: usize| id.to_string()).collect::<Vec<_>>()
    );
    assert!(snapshot.nodes().iter().all(|node| {
        let (x, y) = (node.location.x, node.location.y);
        (0. ..250.).contains(&x) && (0. ..250.).contains(&y) && x.fract() == 0. && y.fract() == 0.
    }));
}

#[test]
fn can_keep_positions_and_update_stock_by_demand() {
    let mut simulation = Simulation::new(&create_settings(2)).unwrap();

    let first = simulation.step().unwrap();
    let second = simulation.step().unwrap();

    first.nodes().iter().zip(second.nodes()).for_each(|(before, after)| {
        assert_eq!(before.id, after.id);
        assert_eq!(before.location, after.location);
        assert_eq!(after.stock, before.stock - after.demand);
        assert_eq!(after.demand.fract(), 0.);
    });
}

#[test]
fn can_use_deterministic_draws_without_deviation() {
    let flow = |mean| DistributionConfig { mean, std_dev: 0. };
    let settings = SimulationSettings {
        seed: Some(3),
        depot: NodeSettings { initial_stock: 100., supply: flow(10.), consumption: flow(20.) },
        shop: NodeSettings { initial_stock: 5., supply: flow(5.), consumption: flow(7.) },
        ..SimulationSettings::default()
    };
    let mut simulation = Simulation::new(&settings).unwrap();

    let snapshot = simulation.step().unwrap();

    assert!(snapshot.depots().all(|node| node.stock == 90. && node.demand == 10.));
    assert!(snapshot.shops().all(|node| node.stock == 3. && node.demand == 2.));
}

#[test]
fn can_reproduce_simulation_with_same_seed() {
    let run = || {
        let mut legs = vec![];
        let series = run_simulation(&create_settings(7), create_silent_environment(), |tick, _, solution| {
            legs.push((tick, solution.legs.clone()));
            Ok(())
        })
        .unwrap();

        (series, legs)
    };

    let (first_series, first_legs) = run();
    let (second_series, second_legs) = run();

    assert_eq!(first_series, second_series);
    assert_eq!(first_legs, second_legs);
    assert_eq!(first_series.iter().map(|(tick, _)| *tick).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn can_route_every_tick() {
    let mut ticks = vec![];

    run_simulation(&create_settings(11), create_silent_environment(), |tick, snapshot, solution| {
        assert_eq!(solution.assignment.shops(), snapshot.shops().count());
        assert_eq!(solution.tours.len(), 3);
        ticks.push(tick);
        Ok(())
    })
    .unwrap();

    assert_eq!(ticks, vec![1, 2, 3, 4, 5]);
}

#[test]
fn can_fail_simulation_without_depots() {
    let settings = SimulationSettings { depots: 0, ..create_settings(5) };

    let result = run_simulation(&settings, create_silent_environment(), |_, _, _| Ok(()));

    assert_eq!(
        result.err(),
        Some(GenericError::from("tick 1: E0001, configuration error: 'no depot nodes present in snapshot'"))
    );
}

#[test]
fn can_propagate_callback_error() {
    let result = run_simulation(&create_settings(5), create_silent_environment(), |tick, _, _| {
        if tick == 2 { Err("cannot write".into()) } else { Ok(()) }
    });

    assert_eq!(result.err(), Some(GenericError::from("cannot write")));
}
