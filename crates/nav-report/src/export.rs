//! CSV export of report rows.
//!
//! Each `write_*` call emits a header row followed by one row per entry, so
//! a writer is normally used for a single report.  City ids are resolved to
//! names through the network the report was computed on.

use std::io::Write;

use csv::Writer;

use nav_core::CityId;
use nav_network::RoadNetwork;

use crate::{BudgetEntry, FuelEntry, ReachableEntry, ReportResult};

/// Writes report rows as CSV to any `Write` sink.
pub struct CsvReportWriter<W: Write> {
    inner: Writer<W>,
}

impl<W: Write> CsvReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { inner: Writer::from_writer(sink) }
    }

    pub fn write_reachable(&mut self, network: &RoadNetwork, rows: &[ReachableEntry]) -> ReportResult<()> {
        self.inner.write_record(["city", "distance_km"])?;
        for row in rows {
            self.inner.write_record([name(network, row.city), row.distance_km.to_string()])?;
        }
        Ok(())
    }

    pub fn write_budget(&mut self, network: &RoadNetwork, rows: &[BudgetEntry]) -> ReportResult<()> {
        self.inner.write_record(["city", "distance_km", "cost"])?;
        for row in rows {
            self.inner.write_record([
                name(network, row.city),
                row.distance_km.to_string(),
                format!("{:.2}", row.cost),
            ])?;
        }
        Ok(())
    }

    pub fn write_fuel(&mut self, network: &RoadNetwork, rows: &[FuelEntry]) -> ReportResult<()> {
        self.inner.write_record(["city", "distance_km", "fuel_liters"])?;
        for row in rows {
            self.inner.write_record([
                name(network, row.city),
                row.distance_km.to_string(),
                format!("{:.2}", row.fuel_liters),
            ])?;
        }
        Ok(())
    }

    /// Flush buffered rows and return the sink.
    pub fn into_inner(self) -> ReportResult<W> {
        self.inner
            .into_inner()
            .map_err(|e| crate::ReportError::Io(e.into_error()))
    }
}

fn name(network: &RoadNetwork, city: CityId) -> String {
    network
        .city_name(city)
        .map_or_else(|| city.to_string(), str::to_owned)
}
