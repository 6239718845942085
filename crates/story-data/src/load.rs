// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! All-or-nothing loading of the four dataset sources.
//!
//! The sources are read concurrently; the first failure aborts the whole load
//! so partial availability is never observable.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{info, instrument};

use crate::records::{BoundarySet, ScatterRecord, SeriesRecord, SnapshotRecord};
use crate::store::Datasets;

/// Which of the four sources an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// Per-entity snapshot.
    Snapshot,
    /// Multi-year time series.
    Series,
    /// Scatter attributes.
    Scatter,
    /// Boundary topology.
    Boundaries,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Snapshot => "snapshot",
            Self::Series => "time series",
            Self::Scatter => "scatter",
            Self::Boundaries => "boundaries",
        };
        f.write_str(name)
    }
}

/// Error type for dataset loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("{kind} source {}: {source}", path.display())]
    Io {
        /// Failing source.
        kind: SourceKind,
        /// Path that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file was read but did not parse.
    #[error("{kind} source {}: {source}", path.display())]
    Parse {
        /// Failing source.
        kind: SourceKind,
        /// Path that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The source that failed.
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Io { kind, .. } | Self::Parse { kind, .. } => *kind,
        }
    }
}

/// Locations of the four source files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataSources {
    /// Snapshot file.
    pub snapshot: PathBuf,
    /// Time-series file.
    pub series: PathBuf,
    /// Scatter file.
    pub scatter: PathBuf,
    /// Boundary file.
    pub boundaries: PathBuf,
}

impl DataSources {
    /// Default file names resolved under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            snapshot: dir.join("co2_2022.json"),
            series: dir.join("co2_global.json"),
            scatter: dir.join("co2_scatter_2022.json"),
            boundaries: dir.join("world.json"),
        }
    }
}

async fn read(kind: SourceKind, path: &Path) -> Result<Vec<u8>, LoadError> {
    tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

fn parse<T: DeserializeOwned>(kind: SourceKind, path: &Path, bytes: &[u8]) -> Result<T, LoadError> {
    serde_json::from_slice(bytes).map_err(|source| LoadError::Parse {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse all four sources; fails if any one of them fails.
#[instrument(skip_all, fields(aggregate = %aggregate))]
pub async fn load_datasets(sources: &DataSources, aggregate: &str) -> Result<Datasets, LoadError> {
    let (snapshot, series, scatter, boundaries) = tokio::try_join!(
        read(SourceKind::Snapshot, &sources.snapshot),
        read(SourceKind::Series, &sources.series),
        read(SourceKind::Scatter, &sources.scatter),
        read(SourceKind::Boundaries, &sources.boundaries),
    )?;

    let snapshot: Vec<SnapshotRecord> = parse(SourceKind::Snapshot, &sources.snapshot, &snapshot)?;
    let series: Vec<SeriesRecord> = parse(SourceKind::Series, &sources.series, &series)?;
    let scatter: Vec<ScatterRecord> = parse(SourceKind::Scatter, &sources.scatter, &scatter)?;
    let boundaries: BoundarySet =
        parse(SourceKind::Boundaries, &sources.boundaries, &boundaries)?;

    info!(
        snapshot = snapshot.len(),
        series = series.len(),
        scatter = scatter.len(),
        regions = boundaries.regions.len(),
        "datasets loaded"
    );
    Ok(Datasets::new(snapshot, series, scatter, boundaries, aggregate))
}
