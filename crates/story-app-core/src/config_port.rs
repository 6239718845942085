// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Settings port shared by the viewer front ends.

use crate::config::ConfigError;
use crate::settings::StorySettings;

/// Config-facing port for loading/saving story settings.
pub trait SettingsPort {
    /// Load settings (`Ok(None)` if never saved).
    fn load_settings(&self) -> Result<Option<StorySettings>, ConfigError>;
    /// Persist settings.
    fn save_settings(&self, settings: &StorySettings) -> Result<(), ConfigError>;
}
