#[cfg(test)]
#[path = "../../../tests/unit/extensions/formats/reader_test.rs"]
mod reader_test;

use mdvrp_core::models::common::Point;
use mdvrp_core::models::problem::{Node, NodeKind, Snapshot};
use mdvrp_core::utils::RoutingError;
use serde::Deserialize;
use std::io::{BufReader, Read};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
struct CsvNode {
    id: String,
    #[serde(rename = "TYPE")]
    kind: CsvNodeKind,
    x: f64,
    y: f64,
    stock: Option<f64>,
    demand: f64,
}

#[derive(Debug, Deserialize)]
enum CsvNodeKind {
    #[serde(rename = "depot", alias = "Depot", alias = "DC")]
    Depot,
    #[serde(rename = "shop", alias = "Shop", alias = "SP")]
    Shop,
}

impl From<CsvNode> for Node {
    fn from(node: CsvNode) -> Self {
        let kind = match node.kind {
            CsvNodeKind::Depot => NodeKind::Depot,
            CsvNodeKind::Shop => NodeKind::Shop,
        };

        Node::new(node.id, kind, Point::new(node.x, node.y), node.stock.unwrap_or_default(), node.demand)
    }
}

/// Reads snapshot from csv with `ID,TYPE,X,Y,STOCK,DEMAND` header. Any missing or unparseable
/// field fails the whole snapshot.
pub fn read_csv_snapshot<R: Read>(reader: BufReader<R>) -> Result<Snapshot, RoutingError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let nodes = reader
        .deserialize::<CsvNode>()
        .map(|record| record.map(Node::from).map_err(|err| RoutingError::MalformedSnapshot(err.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    Snapshot::new(nodes)
}
