// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Transition controller: sequences every render cycle.
//!
//! One cycle is: fade out, hide the tooltip, clear and redraw (or show the
//! range error), update chrome, swap hotspots, fade in. The previous cycle's
//! elements never survive because every batch starts with a clear.

use story_data::{Datasets, JoinKey, ReconciliationTable};
use story_scene_port::{
    ApplyError, DrawBatch, FadePhase, Hover, HotspotSet, InteractionSink, Point, SceneOp,
    SurfacePort, Tooltip, TOOLTIP_OFFSET,
};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::chrome::chrome_for;
use crate::scene::SceneKind;
use crate::scenes::{
    IntroScene, MapScene, ScatterScene, SceneOutput, SceneRenderer, SceneView, TimeSeriesScene,
};
use crate::state::{NarrativeBounds, StateSnapshot};

/// Message shown while the year range is inverted.
pub const RANGE_ERROR_MESSAGE: &str = "Start year must be earlier than end year.";

/// Errors raised by a render cycle.
#[derive(Debug, Error)]
pub enum NarrativeError {
    /// The state holds an ordinal no renderer handles (fatal configuration error).
    #[error("scene ordinal {0} has no renderer")]
    UnknownScene(usize),
    /// The surface rejected a batch.
    #[error("surface rejected draw batch: {0}")]
    Surface(#[from] ApplyError),
}

/// Drives a [`SurfacePort`] through render cycles.
pub struct TransitionController<S> {
    surface: S,
    bounds: NarrativeBounds,
    names: ReconciliationTable,
    join_key: JoinKey,
    size: [f32; 2],
    fade_ms: u32,
    epoch: u64,
    hotspots: HotspotSet,
}

impl<S: SurfacePort> TransitionController<S> {
    /// Controller drawing onto `surface`.
    pub fn new(
        surface: S,
        bounds: NarrativeBounds,
        names: ReconciliationTable,
        join_key: JoinKey,
        size: [u32; 2],
        fade_ms: u32,
    ) -> Self {
        let mut surface = surface;
        surface.resize(size[0], size[1]);
        Self {
            surface,
            bounds,
            names,
            join_key,
            size: [size[0] as f32, size[1] as f32],
            fade_ms,
            epoch: 0,
            hotspots: HotspotSet::default(),
        }
    }

    /// Sole entry point after any state mutation.
    ///
    /// Returns the epoch of the batch just applied.
    #[instrument(skip_all, fields(scene = next.scene, epoch = self.epoch + 1))]
    pub fn render(
        &mut self,
        previous: Option<&StateSnapshot>,
        next: &StateSnapshot,
        data: &Datasets,
    ) -> Result<u64, NarrativeError> {
        let kind = next
            .kind()
            .ok_or(NarrativeError::UnknownScene(next.scene))?;
        if let Some(prev) = previous.filter(|p| p.scene != next.scene) {
            debug!(from = prev.scene, to = next.scene, "scene transition");
        }

        self.surface.transition(FadePhase::Out {
            millis: self.fade_ms,
        });
        self.surface.show_tooltip(None);
        self.hotspots = HotspotSet::default();

        let output = if next.range_valid {
            self.surface.show_error(None);
            let view = SceneView {
                state: next,
                data,
                names: &self.names,
                join_key: self.join_key,
                size: self.size,
            };
            match kind {
                SceneKind::Intro => IntroScene.draw(&view),
                SceneKind::Map => MapScene.draw(&view),
                SceneKind::TimeSeries => TimeSeriesScene.draw(&view),
                SceneKind::Scatter => ScatterScene.draw(&view),
            }
        } else {
            debug!(
                start = next.range_start,
                end = next.range_end,
                "year range invalid, scene drawing suppressed"
            );
            self.surface.show_error(Some(RANGE_ERROR_MESSAGE));
            SceneOutput::default()
        };

        self.epoch += 1;
        let mut ops = Vec::with_capacity(output.ops.len() + 1);
        ops.push(SceneOp::Clear);
        ops.extend(output.ops);
        if let Err(err) = self.surface.apply_batch(&DrawBatch {
            epoch: self.epoch,
            ops,
        }) {
            self.surface.show_error(Some(&format!("Drawing failed: {err}")));
            self.surface.transition(FadePhase::In {
                millis: self.fade_ms,
            });
            return Err(err.into());
        }

        self.surface.set_chrome(&chrome_for(next, &self.bounds));
        self.hotspots = HotspotSet::new(output.hotspots);
        self.surface.transition(FadePhase::In {
            millis: self.fade_ms,
        });
        Ok(self.epoch)
    }

    /// Show a blocking error that replaces the drawing (e.g. data failed to load).
    pub fn show_fatal(&mut self, message: &str) {
        self.hotspots = HotspotSet::default();
        self.surface.show_tooltip(None);
        self.surface.show_error(Some(message));
    }

    /// Route a pointer move through the current hotspots.
    pub fn pointer_moved(&self, p: Point, sink: &mut dyn InteractionSink) {
        self.hotspots.pointer_moved(p, sink);
    }

    /// Route a click through the current hotspots.
    pub fn clicked(&self, p: Point, sink: &mut dyn InteractionSink) {
        self.hotspots.clicked(p, sink);
    }

    /// Show the tooltip for `hover` offset from the pointer. No render cycle.
    pub fn show_tooltip(&mut self, hover: &Hover) {
        let tooltip = Tooltip {
            position: [
                hover.pointer[0] + TOOLTIP_OFFSET[0],
                hover.pointer[1] + TOOLTIP_OFFSET[1],
            ],
            lines: hover.lines.clone(),
        };
        self.surface.show_tooltip(Some(&tooltip));
    }

    /// Hide the tooltip. No render cycle.
    pub fn hide_tooltip(&mut self) {
        self.surface.show_tooltip(None);
    }

    /// Epoch of the last applied batch (0 before the first cycle).
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Hotspots registered by the last cycle.
    pub fn hotspots(&self) -> &HotspotSet {
        &self.hotspots
    }

    /// Underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Underlying surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Dispose the surface and hand it back.
    pub fn into_surface(mut self) -> S {
        self.surface.dispose();
        self.surface
    }
}
