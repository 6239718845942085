// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Dataset store for the story engine.
//!
//! Holds the four immutable datasets (snapshot, time series, scatter,
//! boundaries), the name reconciliation table used to join boundaries to
//! entities, and the loader that gates everything on "all four loaded".

mod load;
mod reconcile;
mod records;
mod store;

pub use load::{load_datasets, DataSources, LoadError, SourceKind};
pub use reconcile::{JoinKey, ReconciliationTable};
pub use records::{
    BoundarySet, Region, ScatterRecord, SeriesPoint, SeriesRecord, SnapshotRecord,
};
pub use store::{Datasets, DEFAULT_AGGREGATE};
