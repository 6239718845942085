// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Navigation and selection properties of the narrative state.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use story_core::{Direction, NarrativeBounds, NarrativeState};

fn bounds(include_intro: bool) -> NarrativeBounds {
    NarrativeBounds {
        include_intro,
        ..NarrativeBounds::default()
    }
}

fn direction(forward: bool) -> Direction {
    if forward {
        Direction::Forward
    } else {
        Direction::Backward
    }
}

proptest! {
    #[test]
    fn steps_never_leave_the_scene_range(
        include_intro in any::<bool>(),
        steps in prop::collection::vec(any::<bool>(), 0..64),
    ) {
        let b = bounds(include_intro);
        let mut state = NarrativeState::new(b);
        for forward in steps {
            let snap = state.step_scene(direction(forward));
            prop_assert!(b.contains_scene(snap.scene));
        }
    }

    #[test]
    fn set_scene_twice_is_idempotent(include_intro in any::<bool>(), target in 0usize..8) {
        let mut state = NarrativeState::new(bounds(include_intro));
        let once = state.set_scene(target);
        let twice = state.set_scene(target);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn selection_survives_any_navigation(
        steps in prop::collection::vec(any::<bool>(), 0..32),
        entity in "[A-Z][a-z]{2,12}",
    ) {
        let mut state = NarrativeState::new(NarrativeBounds::default());
        state.select_entity(entity.clone());
        for forward in steps {
            state.step_scene(direction(forward));
        }
        prop_assert_eq!(state.snapshot().selected_entity.as_deref(), Some(entity.as_str()));
    }

    #[test]
    fn reset_clears_selection_on_every_scene(scene in 0usize..4, entity in "[A-Z][a-z]{2,12}") {
        let mut state = NarrativeState::new(NarrativeBounds::default());
        state.select_entity(entity);
        state.set_scene(scene);
        prop_assert!(state.reset_selection().selected_entity.is_none());
    }

    #[test]
    fn range_valid_iff_start_precedes_end(start in 1990i32..=2022, end in 1990i32..=2022) {
        let mut state = NarrativeState::new(NarrativeBounds::default());
        state.set_range_start(start);
        let snap = state.set_range_end(end);
        prop_assert_eq!(snap.range_valid, start < end);
    }
}

#[test]
fn stepping_past_either_end_is_a_no_op() {
    let mut state = NarrativeState::new(NarrativeBounds::default());
    let at_start = state.step_scene(Direction::Backward);
    assert_eq!(at_start.scene, 0);
    assert_eq!(state.step_scene(Direction::Backward), at_start);

    for _ in 0..3 {
        state.step_scene(Direction::Forward);
    }
    let at_end = state.snapshot().clone();
    assert_eq!(at_end.scene, 3);
    assert_eq!(state.step_scene(Direction::Forward), at_end);
}

#[test]
fn range_validity_examples() {
    let mut state = NarrativeState::new(NarrativeBounds::default());
    state.set_range_end(1995);
    assert!(!state.set_range_start(2000).range_valid);
    state.set_range_start(1995);
    assert!(state.set_range_end(2000).range_valid);
}

#[test]
fn france_stays_selected_across_a_round_trip() {
    let mut state = NarrativeState::new(NarrativeBounds::default());
    state.select_entity("France");
    state.step_scene(Direction::Forward);
    let snap = state.step_scene(Direction::Backward);
    assert_eq!(snap.selected_entity.as_deref(), Some("France"));
}
