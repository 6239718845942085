// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mock surface for headless testing of the narrative engine.
//!
//! MockSurface tracks the drawing in maps and records every port call in
//! order. Use it to verify teardown, chrome and epoch semantics.

use story_scene_port::{
    ApplyError, Chrome, DrawBatch, ElementDef, FadePhase, LabelDef, SceneOp, SurfacePort, Tooltip,
};

use crate::retained::Retained;

/// One recorded port call.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    /// A batch was applied (epoch, whether it started with a clear).
    Batch {
        /// Batch epoch.
        epoch: u64,
        /// Whether the first op was `Clear`.
        cleared: bool,
    },
    /// A batch was skipped as a replay.
    Skipped {
        /// Batch epoch.
        epoch: u64,
    },
    /// Chrome replaced.
    Chrome,
    /// Error shown or hidden.
    Error(Option<String>),
    /// Tooltip shown or hidden.
    Tooltip(bool),
    /// Fade hint.
    Fade(FadePhase),
}

/// Mock surface for testing.
#[derive(Debug, Default)]
pub struct MockSurface {
    retained: Retained,
    /// Every port call in order.
    pub calls: Vec<SurfaceCall>,
    /// Current chrome.
    pub chrome: Option<Chrome>,
    /// Current inline error.
    pub error: Option<String>,
    /// Current tooltip.
    pub tooltip: Option<Tooltip>,
    /// Number of batches actually applied.
    pub render_count: u32,
    /// Current size.
    pub size: (u32, u32),
    /// Whether dispose has been called.
    pub disposed: bool,
    /// Reject every batch with a backend error.
    pub reject_batches: bool,
}

impl MockSurface {
    /// Create a new mock surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements on the surface.
    pub fn element_count(&self) -> usize {
        self.retained.elements.len()
    }

    /// Number of annotation labels on the surface.
    pub fn label_count(&self) -> usize {
        self.retained.labels.len()
    }

    /// Elements in drawing order.
    pub fn elements(&self) -> impl Iterator<Item = &ElementDef> {
        self.retained.elements.values()
    }

    /// Labels in drawing order.
    pub fn labels(&self) -> impl Iterator<Item = &LabelDef> {
        self.retained.labels.values()
    }

    /// Elements flagged as selected.
    pub fn selected_elements(&self) -> Vec<&ElementDef> {
        self.elements().filter(|e| e.selected).collect()
    }

    /// Label texts in drawing order.
    pub fn label_texts(&self) -> Vec<&str> {
        self.labels().map(|l| l.text.as_str()).collect()
    }

    /// Last applied epoch.
    pub fn last_epoch(&self) -> Option<u64> {
        self.retained.last_epoch()
    }
}

impl SurfacePort for MockSurface {
    fn apply_batch(&mut self, batch: &DrawBatch) -> Result<(), ApplyError> {
        if self.reject_batches {
            return Err(ApplyError::Backend(format!("batch {} rejected", batch.epoch)));
        }
        if self.retained.apply(batch)? {
            self.render_count += 1;
            self.calls.push(SurfaceCall::Batch {
                epoch: batch.epoch,
                cleared: matches!(batch.ops.first(), Some(SceneOp::Clear)),
            });
        } else {
            self.calls.push(SurfaceCall::Skipped { epoch: batch.epoch });
        }
        Ok(())
    }

    fn set_chrome(&mut self, chrome: &Chrome) {
        self.chrome = Some(chrome.clone());
        self.calls.push(SurfaceCall::Chrome);
    }

    fn show_error(&mut self, message: Option<&str>) {
        self.error = message.map(str::to_owned);
        self.calls.push(SurfaceCall::Error(self.error.clone()));
    }

    fn show_tooltip(&mut self, tooltip: Option<&Tooltip>) {
        self.tooltip = tooltip.cloned();
        self.calls.push(SurfaceCall::Tooltip(tooltip.is_some()));
    }

    fn transition(&mut self, phase: FadePhase) {
        self.calls.push(SurfaceCall::Fade(phase));
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn dispose(&mut self) {
        self.disposed = true;
        self.retained.reset();
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use story_scene_port::{ElementKey, Paint, Shape, MAX_OPS};

    fn dot(key: u32) -> SceneOp {
        SceneOp::UpsertElement(ElementDef {
            key: ElementKey(key),
            shape: Shape::Circle {
                center: [0.0, 0.0],
                radius: 1.0,
            },
            paint: Paint::fill([255, 255, 255, 255]),
            entity: None,
            selected: false,
        })
    }

    #[test]
    fn test_clear_discards_previous_elements() {
        let mut surface = MockSurface::new();
        surface
            .apply_batch(&DrawBatch {
                epoch: 1,
                ops: vec![SceneOp::Clear, dot(0), dot(1)],
            })
            .expect("apply failed");
        assert_eq!(surface.element_count(), 2);

        surface
            .apply_batch(&DrawBatch {
                epoch: 2,
                ops: vec![SceneOp::Clear, dot(0)],
            })
            .expect("apply failed");
        assert_eq!(surface.element_count(), 1);
    }

    #[test]
    fn test_epoch_idempotency() {
        let mut surface = MockSurface::new();
        let batch = DrawBatch {
            epoch: 3,
            ops: vec![SceneOp::Clear, dot(0)],
        };
        surface.apply_batch(&batch).expect("apply failed");
        let replay = DrawBatch {
            epoch: 3,
            ops: vec![SceneOp::Clear, dot(0), dot(1)],
        };
        surface.apply_batch(&replay).expect("apply failed");
        assert_eq!(surface.element_count(), 1);
        assert_eq!(surface.render_count, 1);
        assert_eq!(surface.calls.last(), Some(&SurfaceCall::Skipped { epoch: 3 }));
    }

    #[test]
    fn test_oversized_batch_rejected() {
        let mut surface = MockSurface::new();
        let ops = (0..=MAX_OPS as u32).map(dot).collect();
        let err = surface.apply_batch(&DrawBatch { epoch: 1, ops });
        assert!(matches!(err, Err(ApplyError::Invariant(_))));
        assert_eq!(surface.element_count(), 0);
    }

    #[test]
    fn test_dispose() {
        let mut surface = MockSurface::new();
        surface
            .apply_batch(&DrawBatch {
                epoch: 1,
                ops: vec![dot(0)],
            })
            .expect("apply failed");
        surface.dispose();
        assert!(surface.disposed);
        assert_eq!(surface.element_count(), 0);
        assert_eq!(surface.last_epoch(), None);
    }
}
