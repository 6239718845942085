// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Surface port trait defining the renderer contract.

use crate::{ApplyError, Chrome, DrawBatch, Tooltip};

/// Cosmetic fade around a content swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadePhase {
    /// Begin hiding the current content.
    Out {
        /// Fade duration in milliseconds.
        millis: u32,
    },
    /// Reveal the freshly drawn content.
    In {
        /// Fade duration in milliseconds.
        millis: u32,
    },
}

/// Drawing surface port.
///
/// Implementors receive batches and display them. No narrative logic and
/// no time ownership: fades are hints, correctness never depends on them.
///
/// # Epoch Semantics
///
/// Batches are idempotent per epoch. If a surface receives a batch with an
/// epoch it has already applied, it skips it.
pub trait SurfacePort {
    /// Apply a draw batch. Idempotent per epoch.
    fn apply_batch(&mut self, batch: &DrawBatch) -> Result<(), ApplyError>;

    /// Replace the navigation chrome.
    fn set_chrome(&mut self, chrome: &Chrome);

    /// Show (`Some`) or hide (`None`) the blocking inline error.
    fn show_error(&mut self, message: Option<&str>);

    /// Show (`Some`) or hide (`None`) the pointer tooltip.
    fn show_tooltip(&mut self, tooltip: Option<&Tooltip>);

    /// Fade hint around a content swap.
    fn transition(&mut self, phase: FadePhase);

    /// Resize the drawing area.
    fn resize(&mut self, width: u32, height: u32);

    /// Dispose all resources.
    fn dispose(&mut self);
}
