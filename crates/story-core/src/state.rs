// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Narrative state: the single owned source of truth for scene, year range
//! and selection. All mutation goes through the named operations below.

use tracing::{debug, warn};

use crate::scene::SceneKind;

/// Scene range and year bounds the state is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NarrativeBounds {
    /// Start on the introduction scene.
    pub include_intro: bool,
    /// Slider minimum.
    pub first_year: i32,
    /// Slider maximum.
    pub last_year: i32,
    /// Initial range start.
    pub default_start: i32,
    /// Initial range end.
    pub default_end: i32,
}

impl Default for NarrativeBounds {
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

impl NarrativeBounds {
    /// Lowest valid scene ordinal.
    pub const fn first_scene(&self) -> usize {
        if self.include_intro {
            SceneKind::Intro.ordinal()
        } else {
            SceneKind::Map.ordinal()
        }
    }

    /// Highest valid scene ordinal.
    pub const fn last_scene(&self) -> usize {
        SceneKind::Scatter.ordinal()
    }

    /// Number of scenes in the narrative.
    pub const fn scene_count(&self) -> usize {
        self.last_scene() - self.first_scene() + 1
    }

    /// Whether `ordinal` lies in the closed scene range.
    pub const fn contains_scene(&self, ordinal: usize) -> bool {
        ordinal >= self.first_scene() && ordinal <= self.last_scene()
    }

    /// Clamp a raw slider value to the year bounds.
    pub fn clamp_year(&self, year: i32) -> i32 {
        year.clamp(self.first_year, self.last_year)
    }
}

/// Step direction for sequential navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards the last scene.
    Forward,
    /// Towards the first scene.
    Backward,
}

/// Immutable view of the narrative state handed to the controller and renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateSnapshot {
    /// Current scene ordinal.
    pub scene: usize,
    /// Inclusive start of the year filter.
    pub range_start: i32,
    /// Inclusive end of the year filter.
    pub range_end: i32,
    /// Canonical identifier of the selected entity.
    pub selected_entity: Option<String>,
    /// `range_start < range_end`.
    pub range_valid: bool,
}

impl StateSnapshot {
    /// Scene kind of the current ordinal.
    pub fn kind(&self) -> Option<SceneKind> {
        SceneKind::from_ordinal(self.scene)
    }

    /// Whether `entity` is the current selection.
    pub fn is_selected(&self, entity: &str) -> bool {
        self.selected_entity.as_deref() == Some(entity)
    }
}

/// Owned narrative state. Created once, mutated only by named operations.
#[derive(Clone, Debug)]
pub struct NarrativeState {
    bounds: NarrativeBounds,
    current: StateSnapshot,
}

impl NarrativeState {
    /// First scene, default years, no selection.
    pub fn new(bounds: NarrativeBounds) -> Self {
        let range_start = bounds.default_start;
        let range_end = bounds.default_end;
        Self {
            bounds,
            current: StateSnapshot {
                scene: bounds.first_scene(),
                range_start,
                range_end,
                selected_entity: None,
                range_valid: range_start < range_end,
            },
        }
    }

    /// Bounds the state was built from.
    pub fn bounds(&self) -> &NarrativeBounds {
        &self.bounds
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> &StateSnapshot {
        &self.current
    }

    /// Jump to `target`; out-of-range requests leave the state unchanged.
    pub fn set_scene(&mut self, target: usize) -> StateSnapshot {
        if self.bounds.contains_scene(target) {
            self.current.scene = target;
        } else {
            warn!(
                target,
                first = self.bounds.first_scene(),
                last = self.bounds.last_scene(),
                "scene request outside the narrative ignored"
            );
        }
        self.current.clone()
    }

    /// Move one scene, clamped at either end.
    pub fn step_scene(&mut self, direction: Direction) -> StateSnapshot {
        let scene = self.current.scene;
        self.current.scene = match direction {
            Direction::Forward => (scene + 1).min(self.bounds.last_scene()),
            Direction::Backward => scene
                .saturating_sub(1)
                .max(self.bounds.first_scene()),
        };
        self.current.clone()
    }

    /// Update the range start; an inverted range is kept but flagged invalid.
    pub fn set_range_start(&mut self, year: i32) -> StateSnapshot {
        self.current.range_start = year;
        self.revalidate_range();
        self.current.clone()
    }

    /// Update the range end; an inverted range is kept but flagged invalid.
    pub fn set_range_end(&mut self, year: i32) -> StateSnapshot {
        self.current.range_end = year;
        self.revalidate_range();
        self.current.clone()
    }

    /// Select an entity. Existence is not checked here.
    pub fn select_entity(&mut self, entity: impl Into<String>) -> StateSnapshot {
        let entity = entity.into();
        debug!(%entity, "entity selected");
        self.current.selected_entity = Some(entity);
        self.current.clone()
    }

    /// Clear the selection unconditionally.
    pub fn reset_selection(&mut self) -> StateSnapshot {
        self.current.selected_entity = None;
        self.current.clone()
    }

    fn revalidate_range(&mut self) {
        self.current.range_valid = self.current.range_start < self.current.range_end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_scene_with_default_years() {
        let state = NarrativeState::new(NarrativeBounds::default());
        let snap = state.snapshot();
        assert_eq!(snap.scene, 0);
        assert_eq!((snap.range_start, snap.range_end), (1990, 2022));
        assert!(snap.range_valid);
        assert!(snap.selected_entity.is_none());
    }

    #[test]
    fn without_intro_the_range_starts_at_the_map() {
        let bounds = NarrativeBounds {
            include_intro: false,
            ..NarrativeBounds::default()
        };
        let mut state = NarrativeState::new(bounds);
        assert_eq!(state.snapshot().scene, 1);
        assert_eq!(state.step_scene(Direction::Backward).scene, 1);
        assert_eq!(state.set_scene(0).scene, 1);
        assert_eq!(bounds.scene_count(), 3);
    }

    #[test]
    fn set_scene_out_of_range_is_a_no_op() {
        let mut state = NarrativeState::new(NarrativeBounds::default());
        state.set_scene(2);
        let before = state.snapshot().clone();
        assert_eq!(state.set_scene(9), before);
    }

    #[test]
    fn inverted_range_is_retained_but_invalid() {
        let mut state = NarrativeState::new(NarrativeBounds::default());
        state.set_range_end(1995);
        let snap = state.set_range_start(2000);
        assert_eq!((snap.range_start, snap.range_end), (2000, 1995));
        assert!(!snap.range_valid);

        state.set_range_start(1995);
        let snap = state.set_range_end(2000);
        assert!(snap.range_valid);
    }

    #[test]
    fn equal_bounds_are_invalid() {
        let mut state = NarrativeState::new(NarrativeBounds::default());
        state.set_range_start(2005);
        assert!(!state.set_range_end(2005).range_valid);
    }

    #[test]
    fn reset_clears_selection_on_any_scene() {
        let mut state = NarrativeState::new(NarrativeBounds::default());
        state.select_entity("France");
        state.set_scene(0);
        assert!(state.reset_selection().selected_entity.is_none());
    }
}
