// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Name reconciliation between boundary regions and snapshot entities.
//!
//! Boundary sources spell region names differently from the emissions data
//! ("United States of America" vs "United States"). Every boundary-to-entity
//! join goes through [`ReconciliationTable::resolve`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::records::{Region, SnapshotRecord};
use crate::store::Datasets;

/// How boundary regions are joined to snapshot entities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinKey {
    /// Region name, corrected through the reconciliation table.
    #[default]
    Name,
    /// Region `id` matched against the entity ISO code.
    Code,
}

/// Boundary-name variants paired with their canonical entity names.
const BUILTIN: &[(&str, &str)] = &[
    ("United States of America", "United States"),
    ("Dem. Rep. Congo", "Democratic Republic of Congo"),
    ("Central African Rep.", "Central African Republic"),
    ("S. Sudan", "South Sudan"),
    ("Bosnia and Herz.", "Bosnia and Herzegovina"),
    ("Dominican Rep.", "Dominican Republic"),
    ("Eq. Guinea", "Equatorial Guinea"),
    ("Solomon Is.", "Solomon Islands"),
    ("Falkland Is.", "Falkland Islands"),
    ("Côte d'Ivoire", "Cote d'Ivoire"),
    ("eSwatini", "Eswatini"),
    ("Timor-Leste", "East Timor"),
    ("Macedonia", "North Macedonia"),
    ("W. Sahara", "Western Sahara"),
    ("Czech Rep.", "Czechia"),
    ("Lao PDR", "Laos"),
    ("Dem. Rep. Korea", "North Korea"),
    ("Korea", "South Korea"),
    ("Republic of Korea", "South Korea"),
    ("Russian Federation", "Russia"),
    ("Syrian Arab Republic", "Syria"),
    ("Viet Nam", "Vietnam"),
    ("Brunei Darussalam", "Brunei"),
    ("Cabo Verde", "Cape Verde"),
    ("N. Cyprus", "Cyprus"),
    ("Somaliland", "Somalia"),
];

/// Static map from boundary-name variant to canonical entity name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconciliationTable {
    entries: BTreeMap<String, String>,
}

impl Default for ReconciliationTable {
    fn default() -> Self {
        Self::with_entries(BUILTIN.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())))
    }
}

impl ReconciliationTable {
    /// A table holding exactly `entries`.
    pub fn with_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Add or override entries; later entries win.
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.entries.extend(entries);
    }

    /// Number of variants in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical spelling of a boundary name (identity when not listed).
    pub fn canonical_name<'a>(&'a self, boundary_name: &'a str) -> &'a str {
        self.entries
            .get(boundary_name)
            .map_or(boundary_name, String::as_str)
    }

    /// Join `region` to its snapshot entity.
    ///
    /// Returns `None` when nothing matches; callers render such regions with
    /// a neutral treatment.
    pub fn resolve<'d>(
        &self,
        region: &Region,
        data: &'d Datasets,
        key: JoinKey,
    ) -> Option<&'d SnapshotRecord> {
        match key {
            JoinKey::Name => data.entity(self.canonical_name(&region.name)),
            JoinKey::Code => region
                .id
                .as_deref()
                .and_then(|code| data.entity_by_code(code)),
        }
    }

    /// Regions that fail to join under `key`, in source order.
    pub fn unresolved<'d>(&self, data: &'d Datasets, key: JoinKey) -> Vec<&'d Region> {
        data.regions()
            .iter()
            .filter(|r| self.resolve(r, data, key).is_none())
            .collect()
    }
}
