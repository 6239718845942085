// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Raw record types as they appear in the four source files.

use serde::{Deserialize, Serialize};

/// One entity of the reference-period snapshot (used by the Map scene).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    /// Display name; doubles as the canonical entity identifier.
    pub country: String,
    /// ISO-3166 alpha-3 code, when the source provides one.
    #[serde(default)]
    pub iso_code: Option<String>,
    /// Annual emissions in megatonnes.
    #[serde(default)]
    pub co2: Option<f64>,
}

impl SnapshotRecord {
    /// Emissions usable on the map colour scale.
    ///
    /// The value must be finite and strictly positive, and the record must
    /// carry an ISO code; aggregates such as "World" have none.
    pub fn emissions(&self) -> Option<f64> {
        let has_code = self.iso_code.as_deref().is_some_and(|c| !c.trim().is_empty());
        self.co2.filter(|v| has_code && v.is_finite() && *v > 0.0)
    }
}

/// One `(entity, year, value)` sample of the time series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesRecord {
    /// Entity name; `None` means the aggregate entity.
    #[serde(default)]
    pub entity: Option<String>,
    /// Calendar year.
    pub year: i32,
    /// Emissions in megatonnes.
    pub co2: f64,
}

/// One entity of the scatter dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScatterRecord {
    /// Entity name.
    pub country: String,
    /// GDP per capita in dollars.
    pub gdp: f64,
    /// Emissions per capita in tonnes.
    pub co2_per_capita: f64,
    /// Population headcount.
    pub population: f64,
}

/// A named region of the boundary set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Region name as spelled by the boundary source.
    pub name: String,
    /// Optional region code (ISO-3166 alpha-3 in Natural-Earth derived sets).
    #[serde(default)]
    pub id: Option<String>,
    /// Polygon rings of `[lon, lat]` pairs; several rings form a multipolygon.
    pub rings: Vec<Vec<[f64; 2]>>,
}

/// The geographic boundary topology.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundarySet {
    /// All regions in source order.
    pub regions: Vec<Region>,
}

/// A year/value pair extracted from the time series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesPoint {
    /// Calendar year.
    pub year: i32,
    /// Value for that year.
    pub value: f64,
}
