use super::*;
use crate::helpers::SnapshotBuilder;

fn create_cluster(depot_id: &str, shop_ids: &[&str]) -> Cluster {
    Cluster { depot_id: depot_id.to_string(), shop_ids: shop_ids.iter().map(|id| id.to_string()).collect() }
}

#[test]
fn can_lookup_depot_by_shop() {
    let assignment = Assignment::new(vec![create_cluster("d0", &["s1", "s2"]), create_cluster("d1", &[])]);

    assert_eq!(assignment.get_depot("s1").map(|id| id.as_str()), Some("d0"));
    assert_eq!(assignment.get_depot("s2").map(|id| id.as_str()), Some("d0"));
    assert_eq!(assignment.get_depot("d1"), None);
    assert_eq!(assignment.shops(), 2);
    assert_eq!(assignment.clusters().len(), 2);
    assert!(assignment.clusters()[1].is_empty());
}

#[test]
fn can_enumerate_assignment_pairs_in_cluster_order() {
    let assignment = Assignment::new(vec![create_cluster("d1", &["s3"]), create_cluster("d0", &["s1", "s2"])]);

    let pairs = assignment.pairs().map(|(depot, shop)| (depot.as_str(), shop.as_str())).collect::<Vec<_>>();

    assert_eq!(pairs, vec![("d1", "s3"), ("d0", "s1"), ("d0", "s2")]);
}

#[test]
fn can_calculate_closed_tour_distance() {
    let snapshot = SnapshotBuilder::default()
        .add_depot("d0", (0., 0.))
        .add_shop("s1", (3., 0.), 1.)
        .add_shop("s2", (3., 4.), 1.)
        .build();
    let mut tour = Tour::new("d0".to_string());
    tour.push("s1".to_string());
    tour.push("s2".to_string());

    assert_eq!(tour.distance(&snapshot), Some(12.));
    assert_eq!(tour.len(), 3);
    assert_eq!(tour.shops(), &["s1".to_string(), "s2".to_string()]);
    assert!(!tour.is_empty());
}

#[test]
fn can_handle_depot_only_tour_distance() {
    let snapshot = SnapshotBuilder::default().add_depot("d0", (7., 7.)).build();
    let tour = Tour::new("d0".to_string());

    assert_eq!(tour.distance(&snapshot), Some(0.));
    assert!(tour.is_empty());
}

#[test]
fn can_return_no_distance_for_unknown_node() {
    let snapshot = SnapshotBuilder::default().add_depot("d0", (0., 0.)).build();
    let mut tour = Tour::new("d0".to_string());
    tour.push("s9".to_string());

    assert_eq!(tour.distance(&snapshot), None);
}
