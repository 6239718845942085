// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Title card opening the narrative.

use story_scene_port::TextAnchor;

use super::color::INK;
use super::{pt, OpsBuilder, SceneOutput, SceneRenderer, SceneView};
use crate::scene::SceneKind;

const SUMMARY: &str =
    "Who emits the most, how the world total has moved since 1990, and how emissions track wealth.";
const HINT: &str = "Press Next or the right arrow key to begin.";

/// Introduction scene renderer. Draws text only; nothing is interactive.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntroScene;

impl SceneRenderer for IntroScene {
    fn draw(&self, view: &SceneView<'_>) -> SceneOutput {
        let (cx, cy) = (view.width() / 2.0, view.height() / 2.0);
        let mut b = OpsBuilder::default();
        b.text(pt(cx, cy - 40.0), SceneKind::Intro.title(), 28.0, TextAnchor::Middle, INK);
        b.text(pt(cx, cy), SUMMARY, 15.0, TextAnchor::Middle, INK);
        b.text(pt(cx, cy + 40.0), HINT, 12.0, TextAnchor::Middle, INK);
        b.finish()
    }
}
