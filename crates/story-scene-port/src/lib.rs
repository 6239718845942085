// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Drawing surface port contract for story scenes.
//!
//! This crate defines the contract between the narrative engine and output
//! surfaces. It contains NO serialization logic; that lives in
//! story-scene-codec.
//!
//! # Design Principles
//!
//! - **Surfaces are dumb**: they receive batches and display them.
//! - **Teardown is structural**: every batch the engine emits starts with
//!   [`SceneOp::Clear`], so nothing survives a render cycle.
//! - **Interactions flow through a capability**: hotspots report into an
//!   [`InteractionSink`], never into state.

use thiserror::Error;

/// Error type for draw batch application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    /// An invariant was violated (e.g., oversized batch, duplicate key).
    #[error("invariant violation: {0}")]
    Invariant(String),
    /// A backend-specific error occurred.
    #[error("backend error: {0}")]
    Backend(String),
}

mod canon;
mod chrome;
mod interaction;
mod port;
mod types;

pub use canon::{canonicalize_f32, canonicalize_point};
pub use chrome::{Chrome, ProgressMarker, RangeInput, Tooltip};
pub use interaction::{HitShape, Hotspot, HotspotSet, Hover, InteractionSink, TOOLTIP_OFFSET};
pub use port::{FadePhase, SurfacePort};
pub use types::{
    ColorRgba8, DrawBatch, ElementDef, ElementKey, Fill, LabelDef, LabelKey, Paint, Point,
    SceneOp, Shape, TextAnchor, MAX_OPS,
};
