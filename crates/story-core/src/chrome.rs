// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Chrome derived from the narrative state.

use story_scene_port::{Chrome, ProgressMarker, RangeInput};

use crate::state::{NarrativeBounds, StateSnapshot};

/// Navigation chrome for `state`.
///
/// Prev is disabled on the first scene and next on the last; the
/// clear-selection affordance shows only when something is selected on a
/// scene that draws entities; year inputs show only on year-filtered scenes.
pub fn chrome_for(state: &StateSnapshot, bounds: &NarrativeBounds) -> Chrome {
    let first = bounds.first_scene();
    let last = bounds.last_scene();
    let kind = state.kind();

    let markers = (first..=last)
        .map(|ordinal| ProgressMarker {
            ordinal,
            active: ordinal == state.scene,
        })
        .collect();

    let year_inputs = kind.filter(|k| k.uses_year_range()).map(|_| {
        let input = |value| RangeInput {
            value,
            min: bounds.first_year,
            max: bounds.last_year,
        };
        (input(state.range_start), input(state.range_end))
    });

    Chrome {
        title: kind.map(|k| k.title().to_owned()).unwrap_or_default(),
        step_label: format!(
            "Step {} of {}",
            state.scene.saturating_sub(first) + 1,
            bounds.scene_count()
        ),
        prev_enabled: state.scene > first,
        next_enabled: state.scene < last,
        markers,
        clear_selection_visible: state.selected_entity.is_some()
            && kind.is_some_and(|k| k.displays_selection()),
        year_inputs,
    }
}
