// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Input adapters: raw viewer events to mutation requests.

use story_scene_port::Point;

use crate::state::{Direction, NarrativeBounds};

/// Keyboard key relevant to navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// Step backward.
    ArrowLeft,
    /// Step forward.
    ArrowRight,
    /// Any other key (ignored).
    Other(String),
}

impl Key {
    /// Key from its DOM-style name (`"ArrowLeft"`, `"ArrowRight"`, ...).
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Raw event from the viewer.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Previous button.
    PrevClicked,
    /// Next button.
    NextClicked,
    /// Key press.
    Key(Key),
    /// Progress marker for a scene ordinal.
    JumpTo(usize),
    /// Start-year slider moved.
    StartYearInput(i32),
    /// End-year slider moved.
    EndYearInput(i32),
    /// Clear-selection affordance.
    ClearSelectionClicked,
    /// Reset request.
    Reset,
    /// Pointer moved over the drawing.
    PointerMove(Point),
    /// Pointer left the drawing.
    PointerLeave,
    /// Click on the drawing.
    Click(Point),
}

/// Named state mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `step_scene`.
    Step(Direction),
    /// `set_scene`.
    SetScene(usize),
    /// `set_range_start`.
    SetRangeStart(i32),
    /// `set_range_end`.
    SetRangeEnd(i32),
    /// `select_entity`.
    SelectEntity(String),
    /// `reset_selection`.
    ResetSelection,
}

/// Pointer gesture to hit-test against the current hotspots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerIntent {
    /// Hover test.
    Move(Point),
    /// Pointer gone.
    Leave,
    /// Click test.
    Click(Point),
}

/// What an input event asks for.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    /// Mutate the narrative state.
    Mutate(Command),
    /// Hit-test the drawing.
    Pointer(PointerIntent),
    /// Nothing.
    Ignore,
}

/// Translates events, clamping year inputs to the slider bounds.
#[derive(Clone, Copy, Debug)]
pub struct InputAdapter {
    bounds: NarrativeBounds,
}

impl InputAdapter {
    /// Adapter for sliders spanning `bounds`.
    pub const fn new(bounds: NarrativeBounds) -> Self {
        Self { bounds }
    }

    /// Translate one event.
    pub fn translate(&self, event: &InputEvent) -> Intent {
        use Intent::{Ignore, Mutate, Pointer};
        match event {
            InputEvent::PrevClicked | InputEvent::Key(Key::ArrowLeft) => {
                Mutate(Command::Step(Direction::Backward))
            }
            InputEvent::NextClicked | InputEvent::Key(Key::ArrowRight) => {
                Mutate(Command::Step(Direction::Forward))
            }
            InputEvent::Key(Key::Other(_)) => Ignore,
            InputEvent::JumpTo(ordinal) => Mutate(Command::SetScene(*ordinal)),
            InputEvent::StartYearInput(year) => {
                Mutate(Command::SetRangeStart(self.bounds.clamp_year(*year)))
            }
            InputEvent::EndYearInput(year) => {
                Mutate(Command::SetRangeEnd(self.bounds.clamp_year(*year)))
            }
            InputEvent::ClearSelectionClicked | InputEvent::Reset => {
                Mutate(Command::ResetSelection)
            }
            InputEvent::PointerMove(p) => Pointer(PointerIntent::Move(*p)),
            InputEvent::PointerLeave => Pointer(PointerIntent::Leave),
            InputEvent::Click(p) => Pointer(PointerIntent::Click(*p)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> InputAdapter {
        InputAdapter::new(NarrativeBounds::default())
    }

    #[test]
    fn buttons_and_arrows_step() {
        let a = adapter();
        for ev in [InputEvent::PrevClicked, InputEvent::Key(Key::from_name("ArrowLeft"))] {
            assert_eq!(a.translate(&ev), Intent::Mutate(Command::Step(Direction::Backward)));
        }
        for ev in [InputEvent::NextClicked, InputEvent::Key(Key::from_name("ArrowRight"))] {
            assert_eq!(a.translate(&ev), Intent::Mutate(Command::Step(Direction::Forward)));
        }
        assert_eq!(a.translate(&InputEvent::Key(Key::from_name("Enter"))), Intent::Ignore);
    }

    #[test]
    fn year_inputs_clamp_to_slider_bounds() {
        let a = adapter();
        assert_eq!(
            a.translate(&InputEvent::StartYearInput(1850)),
            Intent::Mutate(Command::SetRangeStart(1990))
        );
        assert_eq!(
            a.translate(&InputEvent::EndYearInput(2100)),
            Intent::Mutate(Command::SetRangeEnd(2022))
        );
        assert_eq!(
            a.translate(&InputEvent::EndYearInput(2005)),
            Intent::Mutate(Command::SetRangeEnd(2005))
        );
    }

    #[test]
    fn reset_and_clear_both_reset_selection() {
        let a = adapter();
        assert_eq!(a.translate(&InputEvent::Reset), Intent::Mutate(Command::ResetSelection));
        assert_eq!(
            a.translate(&InputEvent::ClearSelectionClicked),
            Intent::Mutate(Command::ResetSelection)
        );
    }
}
