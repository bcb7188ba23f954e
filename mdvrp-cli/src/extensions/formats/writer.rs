#[cfg(test)]
#[path = "../../../tests/unit/extensions/formats/writer_test.rs"]
mod writer_test;

use super::OutputFormat;
use mdvrp_core::models::common::Float;
use mdvrp_core::models::problem::{CostEntry, Snapshot};
use mdvrp_core::models::solution::{Assignment, Leg};
use mdvrp_core::utils::{GenericError, GenericResult};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct CsvLeg<'a> {
    route_id: usize,
    leg_id: usize,
    origin_id: &'a str,
    dest_id: &'a str,
    quantity: Float,
}

#[derive(Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct CsvTickLeg<'a> {
    tick: usize,
    route_id: usize,
    leg_id: usize,
    origin_id: &'a str,
    dest_id: &'a str,
    quantity: Float,
}

#[derive(Serialize)]
struct JsonLeg<'a> {
    route_id: usize,
    leg_id: usize,
    origin_id: &'a str,
    dest_id: &'a str,
    quantity: Float,
}

#[derive(Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct CsvCost<'a> {
    origin_id: &'a str,
    dest_id: &'a str,
    cost: Float,
    active: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct CsvAssignment<'a> {
    depot_id: &'a str,
    shop_id: &'a str,
    depot_x: Float,
    depot_y: Float,
    shop_x: Float,
    shop_y: Float,
}

#[derive(Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct CsvStock {
    tick: usize,
    stock: Float,
}

impl<'a> From<&'a Leg> for CsvLeg<'a> {
    fn from(leg: &'a Leg) -> Self {
        Self {
            route_id: leg.route_id,
            leg_id: leg.leg_id,
            origin_id: leg.origin_id.as_str(),
            dest_id: leg.dest_id.as_str(),
            quantity: leg.quantity,
        }
    }
}

fn to_generic_error(err: impl std::fmt::Display) -> GenericError {
    GenericError::from(format!("cannot write table: '{err}'"))
}

fn write_csv_records<W: Write, T: Serialize>(writer: W, records: impl Iterator<Item = T>) -> GenericResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    for record in records {
        writer.serialize(record).map_err(to_generic_error)?;
    }

    writer.flush().map_err(to_generic_error)
}

/// Writes leg table ordered by route then leg in the given format.
pub fn write_legs<W: Write>(writer: W, legs: &[Leg], format: OutputFormat) -> GenericResult<()> {
    match format {
        OutputFormat::Csv => write_csv_records(writer, legs.iter().map(CsvLeg::from)),
        OutputFormat::Json => {
            let legs = legs
                .iter()
                .map(|leg| JsonLeg {
                    route_id: leg.route_id,
                    leg_id: leg.leg_id,
                    origin_id: leg.origin_id.as_str(),
                    dest_id: leg.dest_id.as_str(),
                    quantity: leg.quantity,
                })
                .collect::<Vec<_>>();

            serde_json::to_writer_pretty(writer, &legs).map_err(to_generic_error)
        }
    }
}

/// Writes pairwise cost table.
pub fn write_costs<W: Write>(writer: W, costs: &[CostEntry]) -> GenericResult<()> {
    write_csv_records(
        writer,
        costs.iter().map(|entry| CsvCost {
            origin_id: entry.origin_id.as_str(),
            dest_id: entry.dest_id.as_str(),
            cost: entry.cost,
            active: entry.active,
        }),
    )
}

/// Writes `(depot, shop)` pairs with their positions, so clusters can be visualized without
/// running assignment again.
pub fn write_assignment<W: Write>(writer: W, assignment: &Assignment, snapshot: &Snapshot) -> GenericResult<()> {
    let records = assignment
        .pairs()
        .map(|(depot_id, shop_id)| match (snapshot.get(depot_id), snapshot.get(shop_id)) {
            (Some(depot), Some(shop)) => Ok(CsvAssignment {
                depot_id: depot.id.as_str(),
                shop_id: shop.id.as_str(),
                depot_x: depot.location.x,
                depot_y: depot.location.y,
                shop_x: shop.location.x,
                shop_y: shop.location.y,
            }),
            _ => Err(GenericError::from(format!("cannot find assignment pair '{depot_id}', '{shop_id}' in snapshot"))),
        })
        .collect::<GenericResult<Vec<_>>>()?;

    write_csv_records(writer, records.into_iter())
}

/// Writes aggregated stock series indexed by tick.
pub fn write_stock_series<W: Write>(writer: W, series: &[(usize, Float)]) -> GenericResult<()> {
    write_csv_records(writer, series.iter().map(|&(tick, stock)| CsvStock { tick, stock }))
}

/// Writes leg tables of many ticks into one csv stream with a leading `TICK` column.
pub struct TickLegsWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TickLegsWriter<W> {
    /// Creates a new instance of `TickLegsWriter`.
    pub fn new(writer: W) -> Self {
        Self { writer: csv::Writer::from_writer(writer) }
    }

    /// Appends legs of the given tick.
    pub fn write(&mut self, tick: usize, legs: &[Leg]) -> GenericResult<()> {
        legs.iter().try_for_each(|leg| {
            self.writer
                .serialize(CsvTickLeg {
                    tick,
                    route_id: leg.route_id,
                    leg_id: leg.leg_id,
                    origin_id: leg.origin_id.as_str(),
                    dest_id: leg.dest_id.as_str(),
                    quantity: leg.quantity,
                })
                .map_err(to_generic_error)
        })
    }

    /// Flushes underlying writer.
    pub fn flush(&mut self) -> GenericResult<()> {
        self.writer.flush().map_err(to_generic_error)
    }
}
