// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end tests for the story-viewer binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn square(lon: [f64; 2], lat: [f64; 2]) -> serde_json::Value {
    json!([[
        [lon[0], lat[0]],
        [lon[1], lat[0]],
        [lon[1], lat[1]],
        [lon[0], lat[1]],
        [lon[0], lat[0]]
    ]])
}

fn write_data(dir: &Path) {
    let snapshot = json!([
        { "country": "China", "iso_code": "CHN", "co2": 11397.0 },
        { "country": "United States", "iso_code": "USA", "co2": 5057.3 },
        { "country": "France", "iso_code": "FRA", "co2": 299.4 },
        { "country": "Qatar", "iso_code": "QAT", "co2": 120.0 }
    ]);
    let series: Vec<_> = (1990..=2022)
        .map(|year| json!({ "year": year, "co2": 22000.0 + f64::from(year - 1990) * 470.0 }))
        .collect();
    let scatter = json!([
        { "country": "Qatar", "gdp": 110000.0, "co2_per_capita": 37.6, "population": 2.7e6 },
        { "country": "France", "gdp": 47000.0, "co2_per_capita": 4.6, "population": 6.8e7 }
    ]);
    let world = json!({
        "regions": [
            { "name": "United States of America", "id": "USA", "rings": square([-120.0, -80.0], [30.0, 45.0]) },
            { "name": "China", "id": "CHN", "rings": square([90.0, 120.0], [25.0, 40.0]) },
            { "name": "Atlantis", "rings": square([-40.0, -30.0], [0.0, 10.0]) }
        ]
    });
    fs::write(dir.join("co2_2022.json"), snapshot.to_string()).unwrap();
    fs::write(dir.join("co2_global.json"), json!(series).to_string()).unwrap();
    fs::write(dir.join("co2_scatter_2022.json"), scatter.to_string()).unwrap();
    fs::write(dir.join("world.json"), world.to_string()).unwrap();
}

struct Fixture {
    config: TempDir,
    data: TempDir,
    out: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let fx = Self {
            config: TempDir::new().unwrap(),
            data: TempDir::new().unwrap(),
            out: TempDir::new().unwrap(),
        };
        write_data(fx.data.path());
        fx
    }

    fn viewer(&self) -> Command {
        let mut cmd = Command::cargo_bin("story-viewer").unwrap();
        cmd.arg("--config").arg(self.config.path());
        cmd
    }

    fn play(&self, script: &str) -> Command {
        let path = self.config.path().join("tour.script");
        fs::write(&path, script).unwrap();
        let mut cmd = self.viewer();
        cmd.arg("play")
            .arg("--data")
            .arg(self.data.path())
            .arg("--out")
            .arg(self.out.path())
            .arg("--script")
            .arg(&path);
        cmd
    }

    fn frame(&self, epoch: u64) -> std::path::PathBuf {
        self.out.path().join(format!("frame-{epoch:04}.svg"))
    }
}

#[test]
fn play_writes_one_frame_per_render_cycle() {
    let fx = Fixture::new();
    fx.play("next\nnext # time series\nstart 2000\nend 1995\nhover 10 10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote 5 frame(s)"));

    for epoch in 1..=5 {
        assert!(fx.frame(epoch).exists(), "frame {epoch} missing");
    }
    assert!(!fx.frame(6).exists());
    let last = fs::read_to_string(fx.frame(5)).unwrap();
    assert!(last.contains("Start year must be earlier than end year."));
    let intro = fs::read_to_string(fx.frame(1)).unwrap();
    assert!(intro.contains("CO2 Emissions: A Narrative"));
}

#[test]
fn clicking_a_country_selects_it() {
    let fx = Fixture::new();
    fx.play("next\nclick 218 227\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2: click 218 227 -> hit 1, rendered #3"));
    assert!(fx.frame(3).exists());
}

#[test]
fn frames_carry_navigation_chrome() {
    let fx = Fixture::new();
    fx.play("jump 2\n").assert().success();
    let frame = fs::read_to_string(fx.frame(2)).unwrap();
    assert!(frame.contains("Step 3 of 4"));
    assert!(frame.contains("Scene 2: Global CO2 Emissions Over Time"));
    assert!(frame.contains(r#"class="marker active" data-scene="2""#));
    let intro = fs::read_to_string(fx.frame(1)).unwrap();
    assert!(intro.contains(r#"class="nav prev" data-label="Previous" disabled="true""#));
}

#[test]
fn hover_refreshes_the_current_frame_with_a_tooltip() {
    let fx = Fixture::new();
    fx.play("next\nhover 218 227\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2: hover 218 227 -> hit 1, tooltip [United States | CO2: 5057 Mt]",
        ))
        .stdout(predicate::str::contains("wrote 2 frame(s)"));
    let frame = fs::read_to_string(fx.frame(2)).unwrap();
    assert!(frame.contains(r#"class="tooltip" transform="translate(228,217)""#));
    assert!(frame.contains("CO2: 5057 Mt"));
    assert!(!fx.frame(3).exists());
}

#[test]
fn missing_source_fails_with_error_frame() {
    let fx = Fixture::new();
    fs::remove_file(fx.data.path().join("world.json")).unwrap();
    fx.play("next\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Data failed to load"));
    let frame = fs::read_to_string(fx.frame(0)).unwrap();
    assert!(frame.contains("Data failed to load"));
    assert!(!fx.frame(1).exists());
}

#[test]
fn unreadable_settings_warning_is_reported_after_play() {
    let fx = Fixture::new();
    fs::write(fx.config.path().join("story.json"), "{oops").unwrap();
    fx.play("next\nprev\nnext\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote 4 frame(s)"))
        .stderr(predicate::str::contains("warning: Saved settings unreadable"));
}

#[test]
fn script_errors_name_the_line() {
    let fx = Fixture::new();
    fx.play("next\nfly 9\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn inspect_lists_unresolved_regions() {
    let fx = Fixture::new();
    fx.viewer()
        .arg("inspect")
        .arg("--data")
        .arg(fx.data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Atlantis"))
        .stdout(predicate::str::contains("United States of America").not());
}

#[test]
fn config_write_defaults_creates_settings_file() {
    let fx = Fixture::new();
    fx.viewer()
        .arg("config")
        .arg("--write-defaults")
        .assert()
        .success()
        .stdout(predicate::str::contains("story.json"));
    let saved = fs::read_to_string(fx.config.path().join("story.json")).unwrap();
    assert!(saved.contains("\"include_intro\": true"));
}

#[test]
fn config_reports_saved_settings() {
    let fx = Fixture::new();
    fs::write(
        fx.config.path().join("story.json"),
        json!({ "surface": { "width": 1280 } }).to_string(),
    )
    .unwrap();
    fx.viewer()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"width\": 1280"))
        .stdout(predicate::str::contains("\"height\": 500"));
}
