// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! story-core: the scene orchestration and cross-scene state engine.
//!
//! The engine owns the narrative state (current scene, year range,
//! selection), sequences every render cycle through the transition
//! controller and dispatches to exactly one scene renderer per cycle.
//!
//! # Data flow
//!
//! ```text
//! InputEvent ─► InputAdapter ─► Command ─► NarrativeState ─► TransitionController
//!                                               ▲                    │
//!                     InteractionSink ◄── hotspots ◄── SceneRenderer ◄┘
//! ```
//!
//! Nothing here owns a clock or a thread: dataset loading is the only
//! asynchronous step and happens outside, in the caller.

mod chrome;
mod controller;
mod input;
mod narrative;
mod scene;
pub mod scenes;
mod state;

pub use chrome::chrome_for;
pub use controller::{NarrativeError, TransitionController, RANGE_ERROR_MESSAGE};
pub use input::{Command, InputAdapter, InputEvent, Intent, Key, PointerIntent};
pub use narrative::{EngineConfig, EnginePhase, Interaction, NarrativeEngine, Outcome};
pub use scene::SceneKind;
pub use state::{Direction, NarrativeBounds, NarrativeState, StateSnapshot};
