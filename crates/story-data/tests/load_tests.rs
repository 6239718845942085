// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Loader tests: all four sources or nothing.

use std::fs;
use std::path::Path;

use story_data::{load_datasets, DataSources, LoadError, SourceKind};

fn write_sources(dir: &Path) {
    fs::write(
        dir.join("co2_2022.json"),
        r#"[{"country":"France","iso_code":"FRA","co2":296.0},{"country":"Nauru"}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("co2_global.json"),
        r#"[{"year":1991,"co2":22500.0},{"year":1990,"co2":22000.0},
            {"entity":"France","year":1990,"co2":390.0}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("co2_scatter_2022.json"),
        r#"[{"country":"France","gdp":44000.0,"co2_per_capita":4.6,"population":68000000}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("world.json"),
        r#"{"regions":[{"name":"France","id":"FRA","rings":[[[2.0,46.0],[3.0,46.0],[3.0,47.0]]]}]}"#,
    )
    .unwrap();
}

#[tokio::test]
async fn loads_all_four_sources() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());

    let data = load_datasets(&DataSources::in_dir(dir.path()), "World")
        .await
        .expect("load should succeed");

    assert_eq!(data.snapshot().len(), 2);
    assert_eq!(data.entity("Nauru").and_then(|r| r.co2), None);
    assert_eq!(data.aggregate_series(1990..=2022).len(), 2);
    assert_eq!(data.series()[0].year, 1990);
    assert_eq!(data.scatter().len(), 1);
    assert_eq!(data.regions().len(), 1);
}

#[tokio::test]
async fn missing_source_fails_the_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    fs::remove_file(dir.path().join("world.json")).unwrap();

    let err = load_datasets(&DataSources::in_dir(dir.path()), "World")
        .await
        .unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }));
    assert_eq!(err.kind(), SourceKind::Boundaries);
}

#[tokio::test]
async fn malformed_source_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());
    fs::write(dir.path().join("co2_scatter_2022.json"), "{not json").unwrap();

    let err = load_datasets(&DataSources::in_dir(dir.path()), "World")
        .await
        .unwrap_err();

    assert!(matches!(err, LoadError::Parse { .. }));
    assert_eq!(err.kind(), SourceKind::Scatter);
    assert!(err.to_string().starts_with("scatter source"));
}
