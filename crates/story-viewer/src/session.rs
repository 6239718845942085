// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Settings session: config store, effective settings and engine wiring.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use story_app_core::config::{ConfigService, SETTINGS_KEY};
use story_app_core::config_port::SettingsPort;
use story_app_core::notice::{NoticeKind, NoticeService};
use story_app_core::settings::StorySettings;
use story_config_fs::FsConfigStore;
use story_core::{EngineConfig, NarrativeBounds};
use tracing::{info, warn};

/// Effective settings plus the store they came from (if it opened).
pub struct Session {
    pub settings: StorySettings,
    store: Option<ConfigService<FsConfigStore>>,
}

impl Session {
    /// Open the config store and load settings, falling back to defaults.
    pub fn open(dir: Option<&Path>, notices: &mut NoticeService) -> Self {
        let store = match dir {
            Some(dir) => FsConfigStore::at(dir),
            None => FsConfigStore::new(),
        };
        let store = match store {
            Ok(store) => Some(ConfigService::new(store)),
            Err(err) => {
                warn!(%err, "config store unavailable; using default settings");
                notices.post(
                    NoticeKind::Warn,
                    "Config store unavailable",
                    Some(err.to_string()),
                );
                None
            }
        };
        let settings = match store.as_ref().map(SettingsPort::load_settings) {
            Some(Ok(Some(saved))) => {
                info!("loaded saved settings");
                saved
            }
            Some(Ok(None)) | None => StorySettings::default(),
            Some(Err(err)) => {
                warn!(%err, "saved settings unreadable; using defaults");
                notices.post(
                    NoticeKind::Warn,
                    "Saved settings unreadable",
                    Some(err.to_string()),
                );
                StorySettings::default()
            }
        };
        Self {
            settings: settings.sanitized(),
            store,
        }
    }

    /// Engine parameters derived from the settings.
    pub fn engine_config(&self) -> EngineConfig {
        let n = &self.settings.narrative;
        let s = &self.settings.surface;
        EngineConfig {
            bounds: NarrativeBounds {
                include_intro: n.include_intro,
                first_year: n.first_year,
                last_year: n.last_year,
                default_start: n.default_start,
                default_end: n.default_end,
            },
            size: [s.width, s.height],
            fade_ms: s.fade_ms,
            names: self.settings.data.reconciliation(),
            join_key: self.settings.data.join_key,
        }
    }

    /// `config` subcommand: print effective settings, optionally persisting defaults first.
    pub fn show(&self, write_defaults: bool) -> Result<()> {
        let mut out = io::stdout().lock();
        let settings = if write_defaults {
            let store = self
                .store
                .as_ref()
                .context("config store unavailable; cannot write defaults")?;
            let defaults = StorySettings::default();
            store
                .save_settings(&defaults)
                .context("write default settings")?;
            writeln!(
                out,
                "wrote defaults to {}",
                store.store().path_for(SETTINGS_KEY).display()
            )?;
            defaults
        } else {
            self.settings.clone()
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&settings)?)?;
        Ok(())
    }
}

/// Write every notice posted during the run to stderr.
pub fn report_notices(notices: &NoticeService) -> io::Result<()> {
    let mut err = io::stderr().lock();
    for notice in notices.notices() {
        let level = match notice.kind {
            NoticeKind::Warn => "warning",
            NoticeKind::Fatal => "error",
        };
        match &notice.body {
            Some(body) => writeln!(err, "{level}: {}: {body}", notice.title)?,
            None => writeln!(err, "{level}: {}", notice.title)?,
        }
    }
    Ok(())
}
