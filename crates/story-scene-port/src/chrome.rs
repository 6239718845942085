// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Navigation chrome and transient overlays shown around the drawing.

use crate::types::Point;

/// One jump-to-scene marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressMarker {
    /// Scene ordinal the marker jumps to.
    pub ordinal: usize,
    /// Whether this marker is the current scene.
    pub active: bool,
}

/// Live value of a year-range input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeInput {
    /// Current value echoed next to the input.
    pub value: i32,
    /// Slider minimum.
    pub min: i32,
    /// Slider maximum.
    pub max: i32,
}

/// Everything around the drawing that reflects narrative state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chrome {
    /// Scene heading.
    pub title: String,
    /// "Step i of n" readout.
    pub step_label: String,
    /// Previous button enabled.
    pub prev_enabled: bool,
    /// Next button enabled.
    pub next_enabled: bool,
    /// Progress markers in scene order.
    pub markers: Vec<ProgressMarker>,
    /// "Clear selection" affordance visible.
    pub clear_selection_visible: bool,
    /// Year-range inputs, present only on scenes that filter by year.
    pub year_inputs: Option<(RangeInput, RangeInput)>,
}

/// Tooltip near the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Surface position of the tooltip's top-left corner.
    pub position: Point,
    /// Entity name followed by formatted metrics.
    pub lines: Vec<String>,
}
