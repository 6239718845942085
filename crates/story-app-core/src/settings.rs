// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved settings for the story viewer (narrative bounds, surface, data sources).

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use story_data::{DataSources, JoinKey, ReconciliationTable, DEFAULT_AGGREGATE};

/// All viewer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorySettings {
    /// Scene and year bounds.
    pub narrative: NarrativePrefs,
    /// Drawing surface parameters.
    pub surface: SurfacePrefs,
    /// Dataset file names and join behaviour.
    pub data: DataPrefs,
}

/// Scene sequence and year-range bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativePrefs {
    /// Start the narrative on an introduction scene.
    pub include_intro: bool,
    /// Earliest selectable year.
    pub first_year: i32,
    /// Latest selectable year.
    pub last_year: i32,
    /// Initial range start.
    pub default_start: i32,
    /// Initial range end.
    pub default_end: i32,
}

impl Default for NarrativePrefs {
    fn default() -> Self {
        Self {
            include_intro: true,
            first_year: 1990,
            last_year: 2022,
            default_start: 1990,
            default_end: 2022,
        }
    }
}

/// Drawing surface parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfacePrefs {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Fade duration in milliseconds.
    pub fade_ms: u32,
}

impl Default for SurfacePrefs {
    fn default() -> Self {
        Self {
            width: 960,
            height: 500,
            fade_ms: 200,
        }
    }
}

/// Dataset file names and join behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPrefs {
    /// Snapshot file name.
    pub snapshot: String,
    /// Time-series file name.
    pub series: String,
    /// Scatter file name.
    pub scatter: String,
    /// Boundary file name.
    pub boundaries: String,
    /// Name of the aggregate entity in the time series.
    pub aggregate: String,
    /// Boundary-to-entity join key.
    pub join_key: JoinKey,
    /// Extra reconciliation entries (boundary name → entity name).
    pub extra_names: BTreeMap<String, String>,
}

impl Default for DataPrefs {
    fn default() -> Self {
        Self {
            snapshot: "co2_2022.json".into(),
            series: "co2_global.json".into(),
            scatter: "co2_scatter_2022.json".into(),
            boundaries: "world.json".into(),
            aggregate: DEFAULT_AGGREGATE.into(),
            join_key: JoinKey::Name,
            extra_names: BTreeMap::new(),
        }
    }
}

impl DataPrefs {
    /// Source paths under `dir`.
    pub fn sources(&self, dir: &Path) -> DataSources {
        DataSources {
            snapshot: dir.join(&self.snapshot),
            series: dir.join(&self.series),
            scatter: dir.join(&self.scatter),
            boundaries: dir.join(&self.boundaries),
        }
    }

    /// Built-in reconciliation table plus the configured extras.
    pub fn reconciliation(&self) -> ReconciliationTable {
        let mut table = ReconciliationTable::default();
        table.extend(self.extra_names.clone());
        table
    }
}

/// Widest accepted distance between the first and last selectable year.
pub const MAX_YEAR_SPAN: i64 = 1_000;

impl StorySettings {
    /// Repair out-of-range values, falling back to defaults field by field.
    pub fn sanitized(mut self) -> Self {
        let defaults = NarrativePrefs::default();
        let n = &mut self.narrative;
        let span = i64::from(n.last_year) - i64::from(n.first_year);
        if span <= 0 || span > MAX_YEAR_SPAN {
            n.first_year = defaults.first_year;
            n.last_year = defaults.last_year;
        }
        n.default_start = n.default_start.clamp(n.first_year, n.last_year);
        n.default_end = n.default_end.clamp(n.first_year, n.last_year);

        let s = &mut self.surface;
        s.width = s.width.clamp(160, 8192);
        s.height = s.height.clamp(120, 8192);
        s.fade_ms = s.fade_ms.min(2_000);

        if self.data.aggregate.trim().is_empty() {
            self.data.aggregate = DEFAULT_AGGREGATE.into();
        }
        self
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let s: StorySettings =
            serde_json::from_str(r#"{"narrative":{"include_intro":false}}"#).expect("parse");
        assert!(!s.narrative.include_intro);
        assert_eq!(s.narrative.last_year, 2022);
        assert_eq!(s.surface.width, 960);
        assert_eq!(s.data.join_key, JoinKey::Name);
    }

    #[test]
    fn sanitize_repairs_inverted_bounds_and_clamps_defaults() {
        let mut s = StorySettings::default();
        s.narrative.first_year = 2030;
        s.narrative.last_year = 2000;
        s.narrative.default_start = 1800;
        s.surface.width = 0;
        s.surface.fade_ms = 60_000;
        let s = s.sanitized();
        assert_eq!((s.narrative.first_year, s.narrative.last_year), (1990, 2022));
        assert_eq!(s.narrative.default_start, 1990);
        assert_eq!(s.surface.width, 160);
        assert_eq!(s.surface.fade_ms, 2_000);
    }

    #[test]
    fn sanitize_rejects_year_spans_that_overflow() {
        let mut s = StorySettings::default();
        s.narrative.first_year = i32::MIN;
        s.narrative.last_year = i32::MAX;
        let s = s.sanitized();
        assert_eq!((s.narrative.first_year, s.narrative.last_year), (1990, 2022));

        let mut s = StorySettings::default();
        s.narrative.first_year = 1500;
        s.narrative.last_year = 2500;
        let s = s.sanitized();
        assert_eq!((s.narrative.first_year, s.narrative.last_year), (1500, 2500));
    }

    #[test]
    fn extra_names_extend_reconciliation() {
        let mut data = DataPrefs::default();
        data.extra_names
            .insert("Fr. Polynesia".into(), "French Polynesia".into());
        let table = data.reconciliation();
        assert_eq!(table.canonical_name("Fr. Polynesia"), "French Polynesia");
        assert_eq!(table.canonical_name("United States of America"), "United States");
    }

    #[test]
    fn join_key_serializes_snake_case() {
        let mut data = DataPrefs::default();
        data.join_key = JoinKey::Code;
        let json = serde_json::to_string(&data).expect("serialize");
        assert!(json.contains(r#""join_key":"code""#));
    }
}
