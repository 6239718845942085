// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Write-once dataset store with read-only lookups.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::records::{BoundarySet, Region, ScatterRecord, SeriesPoint, SeriesRecord, SnapshotRecord};

/// Name of the synthetic aggregate entity when none is configured.
pub const DEFAULT_AGGREGATE: &str = "World";

/// The four parsed datasets.
///
/// Built once after loading completes and never mutated afterwards; callers
/// share it behind an `Arc`.
#[derive(Clone, Debug)]
pub struct Datasets {
    snapshot: Vec<SnapshotRecord>,
    by_name: HashMap<String, usize>,
    by_code: HashMap<String, usize>,
    series: Vec<SeriesRecord>,
    aggregate: String,
    scatter: Vec<ScatterRecord>,
    boundaries: BoundarySet,
}

impl Datasets {
    /// Assemble the store. The time series is ordered by year (stable).
    pub fn new(
        snapshot: Vec<SnapshotRecord>,
        mut series: Vec<SeriesRecord>,
        scatter: Vec<ScatterRecord>,
        boundaries: BoundarySet,
        aggregate: impl Into<String>,
    ) -> Self {
        series.sort_by_key(|r| r.year);
        let mut by_name = HashMap::with_capacity(snapshot.len());
        let mut by_code = HashMap::new();
        for (idx, rec) in snapshot.iter().enumerate() {
            by_name.entry(rec.country.clone()).or_insert(idx);
            if let Some(code) = rec.iso_code.as_ref().filter(|c| !c.is_empty()) {
                by_code.entry(code.clone()).or_insert(idx);
            }
        }
        Self {
            snapshot,
            by_name,
            by_code,
            series,
            aggregate: aggregate.into(),
            scatter,
            boundaries,
        }
    }

    /// All snapshot records in source order.
    pub fn snapshot(&self) -> &[SnapshotRecord] {
        &self.snapshot
    }

    /// Look up a snapshot entity by canonical name.
    pub fn entity(&self, name: &str) -> Option<&SnapshotRecord> {
        self.by_name.get(name).map(|&i| &self.snapshot[i])
    }

    /// Look up a snapshot entity by ISO code.
    pub fn entity_by_code(&self, code: &str) -> Option<&SnapshotRecord> {
        self.by_code.get(code).map(|&i| &self.snapshot[i])
    }

    /// Whether `name` is a known snapshot entity.
    pub fn contains_entity(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Largest colourable emission value in the snapshot.
    pub fn max_emissions(&self) -> Option<f64> {
        self.snapshot
            .iter()
            .filter_map(SnapshotRecord::emissions)
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }

    /// Name of the aggregate entity of the time series.
    pub fn aggregate_name(&self) -> &str {
        &self.aggregate
    }

    /// Raw time-series records, ordered by year.
    pub fn series(&self) -> &[SeriesRecord] {
        &self.series
    }

    /// Points for `entity` whose year falls inside `years`, in year order.
    pub fn series_for(&self, entity: &str, years: RangeInclusive<i32>) -> Vec<SeriesPoint> {
        self.series
            .iter()
            .filter(|r| years.contains(&r.year) && self.belongs_to(r, entity))
            .filter(|r| r.co2.is_finite())
            .map(|r| SeriesPoint {
                year: r.year,
                value: r.co2,
            })
            .collect()
    }

    /// Aggregate trajectory restricted to `years`.
    pub fn aggregate_series(&self, years: RangeInclusive<i32>) -> Vec<SeriesPoint> {
        self.series_for(&self.aggregate, years)
    }

    /// Full year span covered by the time series.
    pub fn series_years(&self) -> Option<RangeInclusive<i32>> {
        let first = self.series.first()?.year;
        let last = self.series.last()?.year;
        Some(first..=last)
    }

    fn belongs_to(&self, rec: &SeriesRecord, entity: &str) -> bool {
        match rec.entity.as_deref() {
            Some(name) => name == entity,
            None => entity == self.aggregate,
        }
    }

    /// Scatter records in source order.
    pub fn scatter(&self) -> &[ScatterRecord] {
        &self.scatter
    }

    /// Scatter record for a named entity.
    pub fn scatter_entity(&self, name: &str) -> Option<&ScatterRecord> {
        self.scatter.iter().find(|r| r.country == name)
    }

    /// Boundary regions in source order.
    pub fn regions(&self) -> &[Region] {
        &self.boundaries.regions
    }
}
