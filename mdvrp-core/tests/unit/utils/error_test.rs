use super::*;

#[test]
fn can_format_routing_errors() {
    let configuration = RoutingError::Configuration("no depots".to_string());
    let malformed = RoutingError::MalformedSnapshot("duplicate node id: 'a'".to_string());

    assert_eq!(configuration.to_string(), "E0001, configuration error: 'no depots'");
    assert_eq!(malformed.to_string(), "E0002, malformed snapshot: 'duplicate node id: 'a''");
}

#[test]
fn can_format_degenerate_cluster_warning() {
    let warning = RoutingWarning::DegenerateCluster { depot_id: "d0".to_string() };

    assert_eq!(warning.to_string(), "degenerate cluster: depot 'd0' has no assigned shops");
}

#[test]
fn can_convert_routing_error_into_generic() {
    let error: GenericError = RoutingError::Configuration("no depots".to_string()).into();

    assert_eq!(error, GenericError::from("E0001, configuration error: 'no depots'"));
}

