// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared fixtures for story-core integration tests.
#![allow(dead_code)]

use story_core::scenes::MapScene;
use story_core::{EngineConfig, InputEvent, NarrativeEngine};
use story_data::{
    BoundarySet, Datasets, Region, ScatterRecord, SeriesRecord, SnapshotRecord,
};
use story_scene_port::{Point, SurfacePort};

pub const WIDTH: u32 = 960;
pub const HEIGHT: u32 = 500;

fn entity(country: &str, iso: Option<&str>, co2: Option<f64>) -> SnapshotRecord {
    SnapshotRecord {
        country: country.to_owned(),
        iso_code: iso.map(str::to_owned),
        co2,
    }
}

fn square(name: &str, id: Option<&str>, lon: [f64; 2], lat: [f64; 2]) -> Region {
    Region {
        name: name.to_owned(),
        id: id.map(str::to_owned),
        rings: vec![vec![
            [lon[0], lat[0]],
            [lon[1], lat[0]],
            [lon[1], lat[1]],
            [lon[0], lat[1]],
            [lon[0], lat[0]],
        ]],
    }
}

fn scatter(country: &str, gdp: f64, co2_per_capita: f64, population: f64) -> ScatterRecord {
    ScatterRecord {
        country: country.to_owned(),
        gdp,
        co2_per_capita,
        population,
    }
}

/// Four entities, two trajectories, four regions (one unresolvable).
pub fn datasets() -> Datasets {
    let snapshot = vec![
        entity("China", Some("CHN"), Some(11_397.0)),
        entity("United States", Some("USA"), Some(5_057.3)),
        entity("France", Some("FRA"), Some(299.4)),
        entity("Qatar", Some("QAT"), Some(120.0)),
        entity("Chad", Some("TCD"), None),
    ];
    let mut series: Vec<SeriesRecord> = (1990..=2022)
        .map(|year| SeriesRecord {
            entity: None,
            year,
            co2: 22_000.0 + f64::from(year - 1990) * 470.0,
        })
        .collect();
    series.extend((1990..=2022).map(|year| SeriesRecord {
        entity: Some("France".to_owned()),
        year,
        co2: 400.0 - f64::from(year - 1990) * 3.0,
    }));
    let scatter_rows = vec![
        scatter("Qatar", 110_000.0, 37.6, 2.7e6),
        scatter("United States", 65_000.0, 14.9, 3.33e8),
        scatter("France", 47_000.0, 4.6, 6.8e7),
        scatter("Chad", 0.0, 0.1, 1.7e7),
    ];
    let boundaries = BoundarySet {
        regions: vec![
            square("United States of America", Some("USA"), [-120.0, -80.0], [30.0, 45.0]),
            square("China", Some("CHN"), [90.0, 120.0], [25.0, 40.0]),
            square("France", Some("FRA"), [0.0, 5.0], [44.0, 49.0]),
            square("Atlantis", None, [-40.0, -30.0], [0.0, 10.0]),
        ],
    };
    Datasets::new(snapshot, series, scatter_rows, boundaries, "World")
}

/// Surface point of `[lon, lat]` on the map scene.
pub fn map_point(lon_lat: [f64; 2]) -> Point {
    MapScene::projection(f64::from(WIDTH), f64::from(HEIGHT)).point(lon_lat)
}

pub const USA_CENTER: [f64; 2] = [-100.0, 37.5];
pub const ATLANTIS_CENTER: [f64; 2] = [-35.0, 5.0];
pub const OPEN_OCEAN: [f64; 2] = [-150.0, -40.0];

/// Engine already past the load gate.
pub fn ready_engine<S: SurfacePort>(config: EngineConfig, surface: S) -> NarrativeEngine<S> {
    let mut engine = NarrativeEngine::new(config, surface);
    engine
        .datasets_loaded(Ok(datasets()))
        .expect("first render");
    engine
}

/// Dispatch and fail the test on engine errors.
pub fn send<S: SurfacePort>(engine: &mut NarrativeEngine<S>, event: InputEvent) -> Vec<story_core::Outcome> {
    engine.dispatch(event).expect("dispatch")
}
